use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("No input text available")]
    InputUnavailable,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MinifyError {
    /// Host surfaces treat this as "nothing to do" rather than a failure.
    pub fn is_input_unavailable(&self) -> bool {
        matches!(self, Self::InputUnavailable)
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;
