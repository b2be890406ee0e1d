use thiserror::Error;

/// Errors raised while building or mutating the compact object and its disk.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccretionError {
    #[error("no compact object has been initialized")]
    UninitializedState,

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("disk reconstruction failed: {0}")]
    ReconstructionFailure(String),
}

pub type Result<T> = std::result::Result<T, AccretionError>;

impl AccretionError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects NaN, infinities and values `<= 0`.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AccretionError::invalid(
            name,
            format!("must be positive and finite, got {value}"),
        ))
    }
}
