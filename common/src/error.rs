use thiserror::Error;

/// Errors raised by the gateway helpers.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A setting or parameter failed validation.
    #[error("invalid value: {0}")]
    Invalid(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
