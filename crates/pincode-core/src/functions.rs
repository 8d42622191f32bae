// crates/pincode-core/src/functions.rs

//! Free-function API over a process-wide default validator.
//!
//! Each function mirrors the [`PincodeValidator`] method of the same name and
//! runs against the packaged table.
//!
//! ```
//! use pincode_core::functions as pincode;
//!
//! assert!(pincode::validate("110001").valid);
//! assert_eq!(pincode::get_details(400001).city(), "Mumbai");
//! ```

use crate::courier::{CodResponse, CourierServicesResponse, DeliveryResponse};
use crate::error::Result;
use crate::geo::{DistanceResponse, NearbyPincode, DEFAULT_NEARBY_RADIUS_KM};
use crate::input::IntoPincode;
use crate::model::{PincodeDb, Tier};
use crate::resolve::LocationDetails;
use crate::search::BulkResult;
use crate::validate::Validation;
use crate::validator::PincodeValidator;
use once_cell::sync::Lazy;
use tracing::error;

static DEFAULT_VALIDATOR: Lazy<PincodeValidator> = Lazy::new(|| match PincodeDb::load() {
    Ok(db) => PincodeValidator::with_db(db),
    Err(e) => {
        error!(error = %e, "packaged pincode table failed to load; using an empty table");
        PincodeValidator::default()
    }
});

/// The shared validator behind the free functions.
pub fn validator() -> &'static PincodeValidator {
    &DEFAULT_VALIDATOR
}

pub fn validate(pincode: impl IntoPincode) -> Validation {
    validator().is_valid_format(pincode)
}

pub fn get_details(pincode: impl IntoPincode) -> LocationDetails {
    validator().get_location_details(pincode)
}

pub fn check_cod(pincode: impl IntoPincode) -> CodResponse {
    validator().check_cod(pincode)
}

pub fn get_couriers(pincode: impl IntoPincode) -> CourierServicesResponse {
    validator().get_courier_services(pincode)
}

pub fn check_delivery(pincode: impl IntoPincode, courier: Option<&str>) -> DeliveryResponse {
    validator().check_delivery(pincode, courier)
}

pub fn validate_multiple<I, P>(pincodes: I) -> Vec<BulkResult>
where
    I: IntoIterator<Item = P>,
    P: IntoPincode,
{
    validator().validate_bulk(pincodes)
}

pub fn get_distance(from: impl IntoPincode, to: impl IntoPincode) -> Result<DistanceResponse> {
    validator().get_distance_estimate(from, to)
}

/// Radius defaults to [`DEFAULT_NEARBY_RADIUS_KM`].
pub fn find_nearby_pincodes(pincode: impl IntoPincode, radius_km: Option<f64>) -> Vec<NearbyPincode> {
    validator().find_nearby_pincodes(pincode, radius_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM))
}

pub fn search_by_city(query: &str) -> Vec<LocationDetails> {
    validator().search_by_city(query)
}

pub fn search_by_state(query: &str) -> Vec<LocationDetails> {
    validator().search_by_state(query)
}

pub fn get_metro_cities() -> Vec<LocationDetails> {
    validator().get_metro_cities()
}

pub fn get_tier_cities(tier: Tier) -> Vec<LocationDetails> {
    validator().get_tier_cities(tier)
}
