use thiserror::Error;

/// Failure to obtain a detail record from an endpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
  /// Request never produced a readable body (network down, CORS, aborted)
  #[error("{0}")]
  Transport(String),

  /// Body was read but is not a JSON object of the expected shape
  #[error("invalid JSON response: {0}")]
  Decode(String),
}

impl From<serde_json::Error> for DetailError {
  fn from(err: serde_json::Error) -> Self {
    DetailError::Decode(err.to_string())
  }
}

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("invalid config: {0}")]
  Parse(#[from] serde_yaml::Error),

  #[error("endpoint template for {modal} must contain {{id}}: {template:?}")]
  InvalidTemplate {
    modal: &'static str,
    template: String,
  },
}

pub type DetailResult<T> = std::result::Result<T, DetailError>;
