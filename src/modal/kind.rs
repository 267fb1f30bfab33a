//! The fixed set of detail modals on the dashboard

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
  /// Failed queue task details
  Failures,
  /// Issued certificate details
  Certificate,
}

impl ModalKind {
  pub const ALL: [ModalKind; 2] = [ModalKind::Failures, ModalKind::Certificate];

  /// Name used by `closeModal` style controls
  pub fn name(self) -> &'static str {
    match self {
      ModalKind::Failures => "failures",
      ModalKind::Certificate => "certificate",
    }
  }

  /// DOM id of the backdrop element
  pub fn modal_id(self) -> &'static str {
    match self {
      ModalKind::Failures => "failuresModal",
      ModalKind::Certificate => "certificateModal",
    }
  }

  /// DOM id of the content container
  pub fn content_id(self) -> &'static str {
    match self {
      ModalKind::Failures => "modalContent",
      ModalKind::Certificate => "certificateModalContent",
    }
  }

  /// Data attribute that marks a row as a trigger for this modal
  pub fn trigger_attribute(self) -> &'static str {
    match self {
      ModalKind::Failures => "data-failure-id",
      ModalKind::Certificate => "data-certificate-id",
    }
  }
}

impl fmt::Display for ModalKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
