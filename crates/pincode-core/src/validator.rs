// crates/pincode-core/src/validator.rs
use crate::error::Result;
use crate::input::IntoPincode;
use crate::model::PincodeDb;
use crate::resolve::{resolve, LocationDetails};
use crate::validate::{validate_format, Validation};
use std::path::Path;

/// The instantiable query object.
///
/// Owns one reference table and answers every query against it. Queries
/// never mutate the validator, so a single instance can be shared freely
/// (it is `Send + Sync`). The free functions in [`crate::functions`] go
/// through a process-wide default instance built from the packaged table.
///
/// ```
/// use pincode_core::PincodeValidator;
///
/// let v = PincodeValidator::new().unwrap();
/// assert!(v.is_valid_format("560001").valid);
/// assert_eq!(v.get_location_details("560001").city(), "Bangalore");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PincodeValidator {
    db: PincodeDb,
}

impl PincodeValidator {
    /// Validator over the packaged reference table.
    pub fn new() -> Result<Self> {
        Ok(Self::with_db(PincodeDb::load()?))
    }

    pub fn with_db(db: PincodeDb) -> Self {
        PincodeValidator { db }
    }

    /// Validator over a table on disk; see [`PincodeDb::load_from_path`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_db(PincodeDb::load_from_path(path)?))
    }

    pub fn db(&self) -> &PincodeDb {
        &self.db
    }

    pub fn is_valid_format(&self, pincode: impl IntoPincode) -> Validation {
        validate_format(pincode)
    }

    pub fn get_location_details(&self, pincode: impl IntoPincode) -> LocationDetails {
        resolve(&self.db, pincode)
    }
}
