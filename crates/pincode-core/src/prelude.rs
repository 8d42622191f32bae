// crates/pincode-core/src/prelude.rs
//! pincode-rs prelude: common types, traits and the free functions.

pub use crate::error::{PincodeError, Result};
pub use crate::functions::{
    check_cod, check_delivery, find_nearby_pincodes, get_couriers, get_details, get_distance,
    get_metro_cities, get_tier_cities, search_by_city, search_by_state, validate,
    validate_multiple,
};
pub use crate::input::{IntoPincode, Pincode};
pub use crate::model::{Coordinates, PincodeDb, PincodeRecord, Region, Tier, Zone};
pub use crate::resolve::LocationDetails;
pub use crate::traits::PincodeSearch;
pub use crate::validator::PincodeValidator;
