use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Payment not ready: {0}")]
    NotReady(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PaymentError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PaymentError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
