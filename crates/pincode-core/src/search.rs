// crates/pincode-core/src/search.rs

//! City, state, metro and tier listings plus bulk validation.

use crate::input::IntoPincode;
use crate::model::{PincodeEntry, Tier};
use crate::resolve::LocationDetails;
use crate::traits::PincodeSearch;
use crate::validator::PincodeValidator;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One bulk-validation result, stamped with when it was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult {
    #[serde(flatten)]
    pub details: LocationDetails,
    pub processing_time: DateTime<Utc>,
}

fn to_details(entries: Vec<&PincodeEntry>) -> Vec<LocationDetails> {
    entries
        .into_iter()
        .map(|e| LocationDetails::exact(e.pincode.clone(), e.record.clone()))
        .collect()
}

impl PincodeValidator {
    /// Entries whose city contains `query`, ignoring case and accents,
    /// sorted by city.
    pub fn search_by_city(&self, query: &str) -> Vec<LocationDetails> {
        to_details(self.db().find_by_city_substring(query))
    }

    /// Entries whose state contains `query`, sorted by city.
    pub fn search_by_state(&self, query: &str) -> Vec<LocationDetails> {
        to_details(self.db().find_by_state_substring(query))
    }

    /// Metro entries in table order.
    pub fn get_metro_cities(&self) -> Vec<LocationDetails> {
        to_details(self.db().metros())
    }

    pub fn get_tier_cities(&self, tier: Tier) -> Vec<LocationDetails> {
        to_details(self.db().by_tier(tier))
    }

    /// Resolves every input independently; one result per input, in order.
    ///
    /// ```
    /// use pincode_core::PincodeValidator;
    ///
    /// let v = PincodeValidator::new().unwrap();
    /// let out = v.validate_bulk(["110001", "400001", "000000"]);
    /// assert_eq!(out.len(), 3);
    /// assert!(out[0].details.is_valid());
    /// assert!(!out[2].details.is_valid());
    /// ```
    pub fn validate_bulk<I, P>(&self, pincodes: I) -> Vec<BulkResult>
    where
        I: IntoIterator<Item = P>,
        P: IntoPincode,
    {
        pincodes
            .into_iter()
            .map(|p| BulkResult {
                details: self.get_location_details(p),
                processing_time: Utc::now(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v() -> PincodeValidator {
        PincodeValidator::new().unwrap()
    }

    fn cities(list: &[LocationDetails]) -> Vec<&str> {
        list.iter().map(|d| d.city()).collect()
    }

    #[test]
    fn city_search_is_case_insensitive_and_sorted() {
        let v = v();
        let hits = v.search_by_city("MUMBAI");
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|d| d.city().contains("Mumbai") && !d.is_approximate()));
        // Sorted by city, so "Mumbai" precedes "Navi Mumbai".
        assert_eq!(hits[0].city(), "Mumbai");

        let hits = v.search_by_city("ban");
        let names = cities(&hits);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"Bangalore"));
    }

    #[test]
    fn state_search_sorts_by_city() {
        let hits = v().search_by_state("uttar pradesh");
        let names = cities(&hits);
        assert!(names.contains(&"Agra") && names.contains(&"Lucknow"));
        assert!(names.windows(2).all(|w| w[0].to_lowercase() <= w[1].to_lowercase()));
        assert!(hits.iter().all(|d| d.state() == "Uttar Pradesh"));
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(v().search_by_city("atlantis").is_empty());
    }

    #[test]
    fn metros_keep_table_order() {
        let metros = v().get_metro_cities();
        assert!(!metros.is_empty());
        let pins: Vec<&str> = metros.iter().map(|d| d.pincode()).collect();
        assert!(pins.windows(2).all(|w| w[0] < w[1]));
        assert!(metros.iter().all(|d| d.record().is_some_and(|r| r.is_metro)));
    }

    #[test]
    fn tier_listing_filters() {
        let v = v();
        for tier in [Tier::One, Tier::Two, Tier::Three] {
            let list = v.get_tier_cities(tier);
            assert!(!list.is_empty());
            assert!(list.iter().all(|d| d.tier() == tier));
        }
    }

    #[test]
    fn bulk_is_one_result_per_input() {
        let out = v().validate_bulk(["110001", "400001", "000000", "abc"]);
        let flags: Vec<bool> = out.iter().map(|r| r.details.is_valid()).collect();
        assert_eq!(flags, [true, true, false, false]);
        assert!(out.windows(2).all(|w| w[0].processing_time <= w[1].processing_time));
    }

    #[test]
    fn bulk_accepts_integers() {
        let out = v().validate_bulk([110001u32, 560001]);
        assert!(out.iter().all(|r| r.details.is_valid()));
    }

    #[test]
    fn bulk_result_serializes_flat() {
        let out = v().validate_bulk(["110001"]);
        let json = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(json["pincode"], "110001");
        assert_eq!(json["valid"], true);
        assert!(json["processingTime"].is_string());
    }
}
