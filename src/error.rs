use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("{0} environment variable not set")]
    MissingCredential(&'static str),
    #[error("document error: {0}")]
    Document(String),
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// Extra guidance printed after the error line, when there is any.
    pub fn remediation(&self) -> Option<String> {
        match self {
            AppError::MissingCredential(var) => Some(format!(
                "To set it:\n  export {var}=your_linear_api_key\n\nOr run as:\n  {var}=your_key linear-tickets create"
            )),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
