use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreloadError {
  #[error("Invalid file pattern [{pattern}]: {source}")]
  InvalidPattern {
    pattern: String,
    source: regex::Error,
  },
  #[error("Unknown rel [{0}], expected `preload` or `prefetch`")]
  UnknownRel(String),
  #[error("Unknown include type [{0}]")]
  UnknownInclude(String),
  #[error("{0}")]
  JsonError(serde_json::Error),
}

impl From<serde_json::Error> for PreloadError {
  fn from(err: serde_json::Error) -> Self {
    Self::JsonError(err)
  }
}

pub type Result<T> = std::result::Result<T, PreloadError>;
