//! End-to-end checks of the public API against the packaged table and small
//! hand-built tables.

use pincode_core::functions as pincode;
use pincode_core::{
    DeliveryResponse, PincodeDb, PincodeError, PincodeSearch, PincodeValidator, Region, Tier,
};

/// Two same-region pairs at tier 1, one in the North and one in the Northeast.
const REGION_PAIRS: &str = r#"{
  "110001": {"city": "New Delhi", "state": "Delhi", "region": "North", "zone": "Northern", "tier": 1, "isMetro": true},
  "122001": {"city": "Gurgaon", "state": "Haryana", "region": "North", "zone": "Northern", "tier": 1, "isMetro": false},
  "781001": {"city": "Guwahati", "state": "Assam", "region": "Northeast", "zone": "Northeastern", "tier": 1, "isMetro": false},
  "793001": {"city": "Shillong", "state": "Meghalaya", "region": "Northeast", "zone": "Northeastern", "tier": 1, "isMetro": false}
}"#;

#[test]
fn validate_multiple_keeps_order_and_flags() {
    let out = pincode::validate_multiple(["110001", "400001", "000000"]);
    assert_eq!(out.len(), 3);
    assert!(out[0].details.is_valid());
    assert!(out[1].details.is_valid());
    assert!(!out[2].details.is_valid());
    assert_eq!(
        out[2].details.error().map(|e| e.to_string()).as_deref(),
        Some("Pincode cannot start with 0")
    );
}

#[test]
fn exact_lookup_returns_stored_fields() {
    let v = PincodeValidator::new().unwrap();
    let stored = v.db().get("560001").unwrap().clone();
    let details = v.get_location_details("560001");
    assert!(!details.is_approximate());
    assert_eq!(details.record(), Some(&stored));
    assert_eq!(pincode::get_details(560001), details);
}

#[test]
fn northeast_adds_two_days_and_fifty() {
    let v = PincodeValidator::with_db(PincodeDb::from_json_str(REGION_PAIRS).unwrap());
    let north = v.get_distance_estimate("110001", "122001").unwrap();
    let northeast = v.get_distance_estimate("781001", "793001").unwrap();

    assert!(north.same_region && !north.same_state);
    assert!(northeast.same_region && !northeast.same_state);
    assert_eq!(north.estimated_delivery_days, 3);
    assert_eq!(north.estimated_shipping_cost, 100);
    assert_eq!(northeast.estimated_delivery_days, north.estimated_delivery_days + 2);
    assert_eq!(northeast.estimated_shipping_cost, north.estimated_shipping_cost + 50);
    // No couriers listed in this table.
    assert_eq!(north.recommended_courier, "Not Available");
    assert_eq!(north.distance_km, 0.0);
}

#[test]
fn same_city_ignores_coordinates() {
    let d = pincode::get_distance("110001", "110092").unwrap();
    assert!(d.same_city);
    assert_eq!((d.estimated_delivery_days, d.estimated_shipping_cost), (1, 40));
}

#[test]
fn distance_with_invalid_side_is_an_error() {
    match pincode::get_distance("110001", "11000") {
        Err(PincodeError::InvalidPincode { pincode, reason }) => {
            assert_eq!(pincode, "11000");
            assert_eq!(reason.to_string(), "Pincode must be exactly 6 digits, got 5");
        }
        other => panic!("expected InvalidPincode, got {other:?}"),
    }
}

#[test]
fn delivery_queries_through_free_functions() {
    assert!(pincode::check_delivery("110001", None).is_available());
    match pincode::check_delivery("282001", Some("FedEx")) {
        DeliveryResponse::Courier(c) => {
            assert!(!c.available);
            assert_eq!(c.alternatives, ["Delhivery", "DTDC", "Ecom"]);
        }
        other => panic!("expected a courier answer, got {other:?}"),
    }
    let couriers = pincode::get_couriers("509001");
    assert!(couriers.services.is_empty());
    assert_eq!(couriers.delivery_days, 2);
}

#[test]
fn listings_through_free_functions() {
    assert!(pincode::search_by_city("delhi").iter().all(|d| d.city().contains("Delhi")));
    assert!(!pincode::search_by_state("Karnataka").is_empty());
    assert!(pincode::get_metro_cities()
        .iter()
        .all(|d| d.record().is_some_and(|r| r.is_metro)));
    assert!(pincode::get_tier_cities(Tier::Three)
        .iter()
        .all(|d| d.tier() == Tier::Three));
}

#[test]
fn nearby_default_radius() {
    let hits = pincode::find_nearby_pincodes("400001", None);
    assert!(hits.iter().any(|h| h.pincode == "400070"));
    assert!(hits.iter().all(|h| h.distance_km <= 50.0));
}

#[test]
fn snapshot_round_trip_through_disk() {
    let db = PincodeDb::load().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pincodes.bin");
    db.save_as(&path).unwrap();
    let back = PincodeDb::load_from_path(&path).unwrap();
    assert_eq!(back, db);
    assert_eq!(back.stats(), db.stats());
}

#[test]
fn bad_tier_is_rejected_on_load() {
    let json = r#"{"110001": {"city": "X", "state": "Delhi", "tier": 4}}"#;
    let err = PincodeDb::from_json_str(json).unwrap_err();
    assert!(matches!(err, PincodeError::InvalidData(ref m) if m.contains("110001")));
}

#[test]
fn missing_region_falls_back_to_lead_digit() {
    let json = r#"{"793001": {"city": "Shillong", "state": "Meghalaya", "tier": 3}}"#;
    let db = PincodeDb::from_json_str(json).unwrap();
    let rec = db.get("793001").unwrap();
    assert_eq!(rec.region, Region::Northeast);
    assert_eq!(rec.tier, Tier::Three);
}

#[test]
fn missing_dataset_file_is_not_found() {
    let err = PincodeValidator::from_path("/nonexistent/pincodes.json").unwrap_err();
    assert!(matches!(err, PincodeError::NotFound(_)));
}
