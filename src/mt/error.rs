/// Error types for the machine translation boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// The service answered but the translation could not be produced
    TranslationError(String),
    /// The request never reached the service or the connection broke
    NetworkError(String),
    /// Provider misconfiguration (missing key, rejected credentials)
    ConfigError(String),
    /// Language code rejected before any request was made
    InvalidLocale(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;
