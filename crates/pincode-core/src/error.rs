// crates/pincode-core/src/error.rs
use crate::validate::FormatError;

/// Errors raised while loading a reference table or by the fatal-style
/// operations (currently only the distance estimate).
///
/// Result-style queries (`validate`, `get_location_details`, `check_cod`, ...)
/// never produce this type; they report problems inside their response value.
#[derive(Debug, thiserror::Error)]
pub enum PincodeError {
    /// The requested dataset file does not exist or cannot be opened.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot (de)serialization failed.
    #[error("snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// The dataset parsed, but one of its entries breaks a table invariant.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A pincode handed to a fatal-style operation failed format validation.
    #[error("invalid pincode '{pincode}': {reason}")]
    InvalidPincode { pincode: String, reason: FormatError },
}

pub type Result<T> = std::result::Result<T, PincodeError>;
