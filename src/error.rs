use thiserror::Error;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Failures raised by the growth model itself.
///
/// The raw evaluators never return these; they are produced by parameter
/// derivation, the continuity calculation, and checked evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Anchor values or age boundaries are biologically inconsistent.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// An exponential term left the representable range.
    #[error("numeric overflow: {message}")]
    NumericOverflow { message: String },
}

impl ModelError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub(crate) fn overflow(message: impl Into<String>) -> Self {
        Self::NumericOverflow {
            message: message.into(),
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        let exit_code = match err {
            ModelError::InvalidParameter { .. } => 2,
            ModelError::NumericOverflow { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}
