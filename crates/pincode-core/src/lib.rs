// crates/pincode-core/src/lib.rs

//! Indian pincode validation and lookup over a static reference table.
//!
//! ```
//! use pincode_core::PincodeValidator;
//!
//! let v = PincodeValidator::new().unwrap();
//! let details = v.get_location_details("110001");
//! assert_eq!(details.city(), "New Delhi");
//!
//! // Valid format but not in the table: approximated from the first digit.
//! let guess = v.get_location_details("999999");
//! assert!(guess.is_approximate());
//! ```

pub mod api; // JSON views
pub mod common;
pub mod courier;
pub mod error;
pub mod functions;
pub mod geo;
pub mod input;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod resolve;
pub mod search; // validator-level listings and bulk
pub mod tables;
pub mod text;
pub mod traits;
pub mod validate;
pub mod validator;
// Raw dataset rows, only used by the loader
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::DbStats;
pub use crate::courier::{
    CodResponse, CourierAvailability, CourierServicesResponse, DeliveryResponse,
    ServiceAvailability, ServiceLevel,
};
pub use crate::error::{PincodeError, Result};
pub use crate::geo::{haversine_km, DistanceResponse, NearbyPincode};
pub use crate::input::{IntoPincode, Pincode};
pub use crate::model::{
    Coordinates, PincodeDb, PincodeEntry, PincodeRecord, Region, Tier, Zone,
};
pub use crate::resolve::{InvalidLocation, Location, LocationDetails, Match};
pub use crate::search::BulkResult;
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::PincodeSearch;
pub use crate::validate::{validate_format, FormatError, Validation};
pub use crate::validator::PincodeValidator;
