//! Typed payloads of the two detail endpoints. Every field is optional.

use super::value::{truthy_json, truthy_object, FieldValue};
use crate::error::{DetailError, DetailResult};
use crate::modal::ModalKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `GET /api/failure-details/{taskId}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FailureDetails {
  #[serde(default)]
  pub error: Option<FieldValue>,
  #[serde(default, deserialize_with = "truthy_object")]
  pub certificate: Option<FailureCertificate>,
  #[serde(default, deserialize_with = "truthy_json")]
  pub user_metadata: Option<Value>,
  #[serde(default, deserialize_with = "truthy_json")]
  pub payload: Option<Value>,
}

/// Certificate linked to a failed task
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FailureCertificate {
  #[serde(default)]
  pub id: Option<FieldValue>,
  #[serde(default)]
  pub status: Option<FieldValue>,
  #[serde(default)]
  pub created_at: Option<FieldValue>,
  #[serde(default, deserialize_with = "truthy_json")]
  pub platform_data: Option<Value>,
}

/// `GET /api/certificate-details/{certId}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateDetails {
  #[serde(default)]
  pub error: Option<FieldValue>,
  #[serde(default, deserialize_with = "truthy_object")]
  pub certificate: Option<CertificateInfo>,
  #[serde(default, deserialize_with = "truthy_object")]
  pub student: Option<StudentInfo>,
  #[serde(default, deserialize_with = "truthy_object")]
  pub course: Option<CourseInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateInfo {
  #[serde(default)]
  pub id: Option<FieldValue>,
  #[serde(default)]
  pub template_id: Option<FieldValue>,
  #[serde(default)]
  pub pdf_url: Option<FieldValue>,
  #[serde(default)]
  pub status: Option<FieldValue>,
  #[serde(default)]
  pub completed_on: Option<FieldValue>,
  #[serde(default)]
  pub created_at: Option<FieldValue>,
  #[serde(default)]
  pub updated_at: Option<FieldValue>,
  #[serde(default, deserialize_with = "truthy_json")]
  pub platform_data: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentInfo {
  #[serde(default)]
  pub id: Option<FieldValue>,
  #[serde(default)]
  pub name: Option<FieldValue>,
  #[serde(default)]
  pub email: Option<FieldValue>,
  #[serde(default)]
  pub cpf: Option<FieldValue>,
  #[serde(default)]
  pub phone: Option<FieldValue>,
  #[serde(default)]
  pub position: Option<FieldValue>,
  #[serde(default)]
  pub sector: Option<FieldValue>,
  #[serde(default)]
  pub created_at: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseInfo {
  #[serde(default)]
  pub id: Option<FieldValue>,
  #[serde(default)]
  pub title: Option<FieldValue>,
  #[serde(default)]
  pub slug: Option<FieldValue>,
}

/// A parsed response from either endpoint
#[derive(Clone, Debug, PartialEq)]
pub enum DetailRecord {
  Failure(FailureDetails),
  Certificate(CertificateDetails),
}

impl DetailRecord {
  /// Parse a response body as the record type bound to `kind`. Only a body
  /// that is not JSON, or is `null`, fails; any other non-object body reads
  /// as a record with every key absent.
  pub fn parse(kind: ModalKind, body: &str) -> DetailResult<Self> {
    let value: Value = serde_json::from_str(body)?;
    let value = match value {
      Value::Null => return Err(DetailError::Decode("response body is null".into())),
      Value::Object(_) => value,
      _ => Value::Object(Map::new()),
    };
    Ok(match kind {
      ModalKind::Failures => DetailRecord::Failure(serde_json::from_value(value)?),
      ModalKind::Certificate => DetailRecord::Certificate(serde_json::from_value(value)?),
    })
  }

  pub fn kind(&self) -> ModalKind {
    match self {
      DetailRecord::Failure(_) => ModalKind::Failures,
      DetailRecord::Certificate(_) => ModalKind::Certificate,
    }
  }

  /// Application-level error message, if the server reported one
  pub fn error(&self) -> Option<String> {
    let error = match self {
      DetailRecord::Failure(record) => record.error.as_ref(),
      DetailRecord::Certificate(record) => record.error.as_ref(),
    };
    error.and_then(FieldValue::text)
  }
}
