use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodechatError {
    /// Rejected client-side input. Raised before any request leaves the client.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network failure or non-2xx backend status.
    #[error("Transfer error: {0}")]
    Transfer(String),

    /// 2xx status with a body that does not match the contract.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("An exchange is already in flight")]
    ExchangeInFlight,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodechatError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transfer(message: impl Into<String>) -> Self {
        Self::Transfer(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// The descriptive part of the error, without the category prefix.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(m) | Self::Transfer(m) | Self::MalformedResponse(m) | Self::Config(m) => {
                m.clone()
            }
            other => other.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, CodechatError>;
