use thiserror::Error;

/// Failure raised by a caller-supplied callback (`action`, `on_confirm`,
/// `on_cancel`, `on_open`, `on_close` or a footer action).
///
/// The modal subsystem never catches these; they travel back to whatever
/// triggered the callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type CallbackResult = Result<(), CallbackError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{accessor} must be used within a {provider}")]
    ContextUnavailable {
        accessor: &'static str,
        provider: &'static str,
    },
    #[error("callback failed: {0}")]
    Callback(#[from] CallbackError),
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("session snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logger setup failed: {0}")]
    Logger(String),
}

impl AppError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Callback(_))
    }
}
