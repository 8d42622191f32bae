// crates/pincode-core/src/tables.rs

//! Static lookup tables.
//!
//! All of these are compile-time constants or `match` tables; nothing here is
//! ever written after start-up.

use crate::model::{Region, Tier, Zone};

/// States whose pincode ranges start with each leading digit (index 0 = digit 1).
pub const STATES_BY_DIGIT: [&[&str]; 9] = [
    &[
        "Delhi",
        "Haryana",
        "Punjab",
        "Himachal Pradesh",
        "Jammu & Kashmir",
        "Chandigarh",
        "Uttarakhand",
    ],
    &["Uttar Pradesh", "Uttarakhand"],
    &["Rajasthan", "Gujarat"],
    &["Maharashtra", "Madhya Pradesh", "Chhattisgarh", "Goa"],
    &["Andhra Pradesh", "Karnataka", "Telangana"],
    &["Tamil Nadu", "Kerala", "Puducherry"],
    &[
        "West Bengal",
        "Odisha",
        "Assam",
        "Meghalaya",
        "Manipur",
        "Nagaland",
        "Tripura",
        "Mizoram",
        "Arunachal Pradesh",
        "Sikkim",
    ],
    &["Bihar", "Jharkhand"],
    &[
        "Assam",
        "Manipur",
        "Nagaland",
        "Mizoram",
        "Arunachal Pradesh",
        "Meghalaya",
        "Tripura",
        "Sikkim",
    ],
];

/// Couriers counted as international carriers in the service summary.
pub const INTERNATIONAL_COURIERS: [&str; 3] = ["FedEx", "DHL", "BlueDart"];
/// Couriers counted as domestic carriers in the service summary.
pub const DOMESTIC_COURIERS: [&str; 3] = ["DTDC", "Delhivery", "Ecom"];
/// Any of these in a service list means express delivery is on offer.
pub const EXPRESS_COURIERS: [&str; 2] = ["BlueDart", "FedEx"];

pub const APPROXIMATE_MESSAGE: &str =
    "Exact location data not available in database, but pincode format is valid";

pub fn states_for_digit(digit: u8) -> Option<&'static [&'static str]> {
    match digit {
        1..=9 => Some(STATES_BY_DIGIT[usize::from(digit - 1)]),
        _ => None,
    }
}

pub fn region_for_digit(digit: u8) -> Region {
    match digit {
        1 | 2 => Region::North,
        3 | 4 => Region::West,
        5 | 6 => Region::South,
        7 | 8 => Region::East,
        9 => Region::Northeast,
        _ => Region::Unknown,
    }
}

pub fn zone_for_digit(digit: u8) -> Zone {
    match digit {
        1 | 2 => Zone::Northern,
        3 => Zone::Western,
        4 => Zone::Central,
        5 | 6 => Zone::Southern,
        7 | 8 => Zone::Eastern,
        9 => Zone::Northeastern,
        _ => Zone::Unknown,
    }
}

/// Default transit time when a record carries no delivery days of its own.
pub fn delivery_days_for(region: Region) -> u32 {
    match region {
        Region::North | Region::South | Region::West => 2,
        Region::East | Region::Central => 3,
        Region::Northeast => 5,
        Region::Unknown => 3,
    }
}

/// Flat per-shipment cost (INR) before the tier multiplier.
pub fn courier_base_cost(courier: &str) -> u32 {
    match courier {
        "FedEx" => 200,
        "BlueDart" => 150,
        "DHL" => 180,
        "Delhivery" => 80,
        "DTDC" => 70,
        "Ecom" => 60,
        _ => 80,
    }
}

pub fn tier_multiplier(tier: Tier) -> f64 {
    match tier {
        Tier::One => 1.0,
        Tier::Two => 1.2,
        Tier::Three => 1.5,
    }
}

pub fn max_cod_amount(tier: Tier) -> u32 {
    match tier {
        Tier::One => 50_000,
        Tier::Two => 25_000,
        Tier::Three => 10_000,
    }
}

pub fn cod_charges(tier: Tier) -> u32 {
    match tier {
        Tier::One => 25,
        Tier::Two => 35,
        Tier::Three => 50,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_digit_has_states() {
        for d in 1..=9 {
            assert!(!states_for_digit(d).unwrap().is_empty(), "digit {d}");
            assert_ne!(region_for_digit(d), Region::Unknown);
            assert_ne!(zone_for_digit(d), Zone::Unknown);
        }
        assert!(states_for_digit(0).is_none());
        assert_eq!(region_for_digit(0), Region::Unknown);
    }

    #[test]
    fn digit_four_is_west_region_but_central_zone() {
        assert_eq!(region_for_digit(4), Region::West);
        assert_eq!(zone_for_digit(4), Zone::Central);
    }

    #[test]
    fn unknown_courier_costs_default() {
        assert_eq!(courier_base_cost("India Post"), 80);
        assert_eq!(courier_base_cost("Ecom"), 60);
    }
}
