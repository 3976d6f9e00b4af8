#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid base url: {source}")]
  InvalidBaseUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("link ratio threshold must lie in [0, 1), got {0}")]
  InvalidLinkRatioThreshold(f64),
  #[error("no content found")]
  MissingContent,
}
