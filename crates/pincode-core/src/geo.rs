// crates/pincode-core/src/geo.rs

//! Great-circle distance, nearby-pincode search and point-to-point
//! delivery estimates.

use crate::courier::recommend_courier;
use crate::error::{PincodeError, Result};
use crate::input::IntoPincode;
use crate::model::{Coordinates, PincodeRecord, Region, Tier};
use crate::resolve::LocationDetails;
use crate::traits::PincodeSearch;
use crate::validate::FormatError;
use crate::validator::PincodeValidator;
use serde::Serialize;
use tracing::debug;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 50.0;
pub const MAX_NEARBY_RESULTS: usize = 20;

/// Haversine distance in kilometres between two points given in degrees.
///
/// ```
/// use pincode_core::geo::haversine_km;
/// use pincode_core::model::Coordinates;
///
/// let delhi = Coordinates::new(28.6328, 77.2197);
/// let mumbai = Coordinates::new(18.9388, 72.8354);
/// let d = haversine_km(delhi, mumbai);
/// assert!((1160.0..1170.0).contains(&d));
/// ```
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin()
            * (d_lng / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// A table entry found within the search radius.
///
/// Serializes as a flat row (see [`crate::api::NearbyView`]).
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPincode {
    pub pincode: String,
    pub record: PincodeRecord,
    /// Rounded to one decimal place.
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResponse {
    pub from: LocationDetails,
    pub to: LocationDetails,
    /// Whole kilometres; 0 when either side has no coordinates.
    pub distance_km: f64,
    pub estimated_delivery_days: u32,
    pub estimated_shipping_cost: u32,
    pub same_city: bool,
    pub same_state: bool,
    pub same_region: bool,
    pub express_delivery_available: bool,
    pub recommended_courier: String,
}

/// Days and cost for a shipment between two records, by locality level and
/// the tier-3 / Northeast surcharges.
pub fn locality_estimate(from: &PincodeRecord, to: &PincodeRecord) -> (u32, u32) {
    let (mut days, mut cost) = if from.city == to.city {
        (1, 40)
    } else if from.state == to.state {
        (2, 70)
    } else if from.region == to.region {
        (3, 100)
    } else {
        (5, 150)
    };

    if from.tier == Tier::Three || to.tier == Tier::Three {
        days += 1;
        cost += 30;
    }
    if from.region == Region::Northeast || to.region == Region::Northeast {
        days += 2;
        cost += 50;
    }
    (days, cost)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl PincodeValidator {
    /// Table entries within `radius_km` of `pincode`, nearest first, at most
    /// [`MAX_NEARBY_RESULTS`].
    ///
    /// Empty when the origin is invalid or has no coordinates. The origin
    /// itself is never part of the result.
    pub fn find_nearby_pincodes(
        &self,
        pincode: impl IntoPincode,
        radius_km: f64,
    ) -> Vec<NearbyPincode> {
        let details = self.get_location_details(pincode);
        let Some(center) = details.coordinates() else {
            return Vec::new();
        };
        let origin = details.pincode();

        let mut nearby: Vec<NearbyPincode> = self
            .db()
            .located()
            .filter(|(entry, _)| entry.pincode.as_str() != origin)
            .filter_map(|(entry, coords)| {
                let distance = haversine_km(center, coords);
                (distance <= radius_km).then(|| NearbyPincode {
                    pincode: entry.pincode.to_string(),
                    record: entry.record.clone(),
                    distance_km: round_to(distance, 1),
                })
            })
            .collect();

        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        nearby.truncate(MAX_NEARBY_RESULTS);
        nearby
    }

    /// Distance, transit time and cost between two pincodes.
    ///
    /// Unlike the other queries this one fails outright: an invalid pincode
    /// on either side is [`PincodeError::InvalidPincode`].
    pub fn get_distance_estimate(
        &self,
        from: impl IntoPincode,
        to: impl IntoPincode,
    ) -> Result<DistanceResponse> {
        let from = self.get_location_details(from);
        let to = self.get_location_details(to);

        let (from_rec, to_rec) = match (from.record(), to.record()) {
            (Some(f), Some(t)) => (f, t),
            _ => {
                let bad = if from.is_valid() { &to } else { &from };
                debug!(pincode = bad.pincode(), "distance estimate rejected");
                return Err(PincodeError::InvalidPincode {
                    pincode: bad.pincode().to_owned(),
                    reason: bad.error().unwrap_or(FormatError::EmptyInput),
                });
            }
        };

        let distance_km = match (from_rec.coordinates, to_rec.coordinates) {
            (Some(a), Some(b)) => haversine_km(a, b).round(),
            _ => 0.0,
        };
        let (days, cost) = locality_estimate(from_rec, to_rec);

        let mut couriers: Vec<&str> = Vec::new();
        for c in from_rec
            .courier_services
            .iter()
            .chain(&to_rec.courier_services)
        {
            if !couriers.contains(&c.as_str()) {
                couriers.push(c);
            }
        }
        let worst_tier = from_rec.tier.max(to_rec.tier);
        let recommended_courier = recommend_courier(&couriers, worst_tier);
        let same_city = from_rec.city == to_rec.city;
        let same_state = from_rec.state == to_rec.state;
        let same_region = from_rec.region == to_rec.region;

        Ok(DistanceResponse {
            from,
            to,
            distance_km,
            estimated_delivery_days: days,
            estimated_shipping_cost: cost,
            same_city,
            same_state,
            same_region,
            express_delivery_available: days <= 2 && worst_tier <= Tier::Two,
            recommended_courier,
        })
    }
}
