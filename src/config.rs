use crate::error::ConfigError;
use crate::modal::ModalKind;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the record id in endpoint templates
pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
  #[serde(default)]
  pub api: ApiSection,
  #[serde(default)]
  pub logging: LoggingSection,
}

/// Detail endpoint locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
  /// Prefix for both endpoints; empty means same origin
  #[serde(default)]
  pub base_url: String,

  #[serde(default = "default_failure_details")]
  pub failure_details: String,

  #[serde(default = "default_certificate_details")]
  pub certificate_details: String,
}

fn default_failure_details() -> String {
  "/api/failure-details/{id}".into()
}

fn default_certificate_details() -> String {
  "/api/certificate-details/{id}".into()
}

impl Default for ApiSection {
  fn default() -> Self {
    Self {
      base_url: String::new(),
      failure_details: default_failure_details(),
      certificate_details: default_certificate_details(),
    }
  }
}

impl ApiSection {
  pub fn template(&self, kind: ModalKind) -> &str {
    match kind {
      ModalKind::Failures => &self.failure_details,
      ModalKind::Certificate => &self.certificate_details,
    }
  }

  /// Full request URL. The id is inserted verbatim.
  pub fn details_url(&self, kind: ModalKind, record_id: &str) -> String {
    let path = self.template(kind).replace(ID_PLACEHOLDER, record_id);
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    for kind in ModalKind::ALL {
      let template = self.template(kind);
      if !template.contains(ID_PLACEHOLDER) {
        return Err(ConfigError::InvalidTemplate {
          modal: kind.name(),
          template: template.to_string(),
        });
      }
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}
fn default_level() -> String {
  "info".into()
}
impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

impl DashboardConfig {
  pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
    let config: Self = serde_yaml::from_str(content)?;
    config.api.validate()?;
    Ok(config)
  }

  /// Replace the API prefix, e.g. from a runtime override
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.api.base_url = base_url.into();
    self
  }
}
