//! Detail records returned by the dashboard API

mod records;
mod value;

pub use records::{
  CertificateDetails, CertificateInfo, CourseInfo, DetailRecord, FailureCertificate,
  FailureDetails, StudentInfo,
};
pub use value::{display_or_na, is_truthy, pretty_json, FieldValue, NOT_AVAILABLE};
