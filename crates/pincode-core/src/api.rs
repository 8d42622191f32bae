// crates/pincode-core/src/api.rs

//! JSON views.
//!
//! The model types double as the snapshot format, so anything that needs
//! optional keys or flattening for JSON consumers is shaped here instead.

use crate::geo::NearbyPincode;
use crate::model::{Coordinates, PincodeRecord};
use crate::resolve::{LocationDetails, Match};
use serde::{Serialize, Serializer};

/// Flat wire shape of a table row: the dataset's own keys, with
/// `latitude`/`longitude` at the top level and absent optionals left out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView<'a> {
    pub city: &'a str,
    pub state: &'a str,
    pub region: &'a str,
    pub zone: &'a str,
    pub tier: u8,
    pub is_metro: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_services: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_available: Option<bool>,
}

impl<'a> RecordView<'a> {
    /// Empty strings, tier 3, no optionals.
    fn blank() -> Self {
        RecordView {
            city: "",
            state: "",
            region: "",
            zone: "",
            tier: 3,
            is_metro: false,
            latitude: None,
            longitude: None,
            courier_services: None,
            delivery_days: None,
            cod_available: None,
        }
    }
}

impl<'a> From<&'a PincodeRecord> for RecordView<'a> {
    fn from(r: &'a PincodeRecord) -> Self {
        RecordView {
            city: &r.city,
            state: &r.state,
            region: r.region.as_str(),
            zone: r.zone.as_str(),
            tier: r.tier.as_u8(),
            is_metro: r.is_metro,
            latitude: r.coordinates.map(|c| c.latitude),
            longitude: r.coordinates.map(|c| c.longitude),
            courier_services: Some(r.courier_services.as_slice()),
            delivery_days: r.delivery_days,
            cod_available: r.cod_available,
        }
    }
}

/// Wire shape of a [`LocationDetails`].
///
/// Invalid input still carries the full base shape: empty city/state/region/
/// zone, tier 3, not a metro, plus `error`. Located records carry both the
/// flat `latitude`/`longitude` keys and a `coordinates` object.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView<'a> {
    pub valid: bool,
    pub pincode: &'a str,
    #[serde(flatten)]
    pub record: RecordView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possible_states: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a LocationDetails> for LocationView<'a> {
    fn from(details: &'a LocationDetails) -> Self {
        match details {
            LocationDetails::Invalid(inv) => LocationView {
                valid: false,
                pincode: &inv.pincode,
                record: RecordView::blank(),
                coordinates: None,
                possible_states: None,
                estimated_delivery_days: None,
                message: None,
                error: Some(inv.error.to_string()),
            },
            LocationDetails::Valid(loc) => {
                let (possible_states, estimated_delivery_days, message) = match &loc.matched {
                    Match::Exact => (None, None, None),
                    Match::Approximate {
                        possible_states,
                        estimated_delivery_days,
                        message,
                    } => (
                        Some(possible_states.as_slice()),
                        Some(*estimated_delivery_days),
                        Some(message.as_str()),
                    ),
                };
                LocationView {
                    valid: true,
                    pincode: loc.pincode.as_str(),
                    record: RecordView::from(&loc.record),
                    coordinates: loc.record.coordinates,
                    possible_states,
                    estimated_delivery_days,
                    message,
                    error: None,
                }
            }
        }
    }
}

impl Serialize for LocationDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        LocationView::from(self).serialize(serializer)
    }
}

/// Wire shape of a [`NearbyPincode`]: the flat row plus `pincode` and
/// `distanceKm`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyView<'a> {
    pub pincode: &'a str,
    #[serde(flatten)]
    pub record: RecordView<'a>,
    pub distance_km: f64,
}

impl Serialize for NearbyPincode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NearbyView {
            pincode: &self.pincode,
            record: RecordView::from(&self.record),
            distance_km: self.distance_km,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::resolve::resolve;
    use crate::PincodeDb;
    use serde_json::json;

    #[test]
    fn invalid_serializes_with_base_shape() {
        let db = PincodeDb::load().unwrap();
        let v = serde_json::to_value(resolve(&db, "123")).unwrap();
        assert_eq!(
            v,
            json!({
                "valid": false, "pincode": "123", "city": "", "state": "",
                "region": "", "zone": "", "tier": 3, "isMetro": false,
                "error": "Pincode must be exactly 6 digits, got 3"
            })
        );
    }

    #[test]
    fn exact_serializes_camel_case_with_coordinates() {
        let db = PincodeDb::load().unwrap();
        let v = serde_json::to_value(resolve(&db, "400001")).unwrap();
        assert_eq!(v["valid"], true);
        assert_eq!(v["city"], "Mumbai");
        assert_eq!(v["isMetro"], true);
        assert_eq!(v["region"], "West");
        assert!(v["coordinates"]["latitude"].is_f64());
        assert!(v.get("possibleStates").is_none());
    }

    #[test]
    fn exact_carries_flat_coordinates_too() {
        let db = PincodeDb::load().unwrap();
        let v = serde_json::to_value(resolve(&db, "110001")).unwrap();
        assert_eq!(v["latitude"], v["coordinates"]["latitude"]);
        assert_eq!(v["longitude"], v["coordinates"]["longitude"]);

        // Motihari has no coordinates: neither form appears.
        let v = serde_json::to_value(resolve(&db, "845401")).unwrap();
        assert!(v.get("latitude").is_none());
        assert!(v.get("coordinates").is_none());
        assert!(v.get("codAvailable").is_none());
    }

    #[test]
    fn nearby_hit_is_a_flat_row() {
        let v = crate::PincodeValidator::new().unwrap();
        let hits = v.find_nearby_pincodes("110001", 50.0);
        let j = serde_json::to_value(&hits[0]).unwrap();

        assert_eq!(j["pincode"], hits[0].pincode.as_str());
        assert_eq!(j["distanceKm"], hits[0].distance_km);
        assert!(j["latitude"].is_f64());
        assert!(j["longitude"].is_f64());
        assert!(j.get("coordinates").is_none());
        assert!(j.get("valid").is_none());
        // Delhi rows carry no codAvailable key, so none is emitted.
        assert!(j.get("codAvailable").is_none());
        assert_eq!(j["isMetro"], true);
        assert!(j["courierServices"].is_array());
    }
}
