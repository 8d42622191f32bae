// crates/pincode-core/src/courier.rs

//! Derived queries over a resolved location: COD eligibility, courier
//! coverage, delivery availability.

use crate::input::IntoPincode;
use crate::model::{PincodeRecord, Region, Tier};
use crate::tables;
use crate::validator::PincodeValidator;
use serde::Serialize;
use std::fmt;

/// Returned as the recommended courier when nobody serves the pincode.
pub const NOT_AVAILABLE: &str = "Not Available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodResponse {
    pub pincode: String,
    pub cod_available: bool,
    /// Why COD is off; `None` when it is available.
    pub reason: Option<String>,
    /// Zero when COD is unavailable.
    pub max_cod_amount: u32,
    pub cod_charges: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceLevel {
    Premium,
    Standard,
    Basic,
}

impl From<Tier> for ServiceLevel {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::One => ServiceLevel::Premium,
            Tier::Two => ServiceLevel::Standard,
            Tier::Three => ServiceLevel::Basic,
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceLevel::Premium => "Premium",
            ServiceLevel::Standard => "Standard",
            ServiceLevel::Basic => "Basic",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierServicesResponse {
    pub pincode: String,
    pub services: Vec<String>,
    pub total_services: usize,
    pub delivery_days: u32,
    pub express_delivery: bool,
    pub international_couriers: Vec<String>,
    pub domestic_couriers: Vec<String>,
    pub tier: Tier,
    pub service_level: ServiceLevel,
}

/// Answer to "can anyone deliver here?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAvailability {
    pub available: bool,
    pub services: Vec<String>,
    pub delivery_days: u32,
    pub express_available: bool,
    pub recommended_courier: String,
}

/// Answer to "can this particular courier deliver here?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierAvailability {
    pub available: bool,
    pub courier: String,
    pub delivery_days: Option<u32>,
    pub estimated_cost: Option<u32>,
    pub reason: Option<String>,
    /// Up to three other couriers, only when `available` is false.
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DeliveryResponse {
    Any(ServiceAvailability),
    Courier(CourierAvailability),
}

impl DeliveryResponse {
    pub fn is_available(&self) -> bool {
        match self {
            DeliveryResponse::Any(a) => a.available,
            DeliveryResponse::Courier(c) => c.available,
        }
    }
}

/// Pick the single best courier from `services`.
///
/// FedEx (only for tier 1 and 2), then BlueDart, Delhivery, DTDC, then
/// whatever is listed first.
pub fn recommend_courier<S: AsRef<str>>(services: &[S], tier: Tier) -> String {
    let has = |name: &str| services.iter().any(|s| s.as_ref() == name);
    if has("FedEx") && tier <= Tier::Two {
        return "FedEx".to_owned();
    }
    for preferred in ["BlueDart", "Delhivery", "DTDC"] {
        if has(preferred) {
            return preferred.to_owned();
        }
    }
    services
        .first()
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |s| s.as_ref().to_owned())
}

/// Base courier cost scaled by the tier multiplier, rounded to whole rupees.
pub fn shipping_cost(courier: &str, tier: Tier) -> u32 {
    let cost = f64::from(tables::courier_base_cost(courier)) * tables::tier_multiplier(tier);
    cost.round() as u32
}

/// Why COD is off for a record that has it disabled.
pub fn cod_unavailable_reason(record: &PincodeRecord) -> &'static str {
    if record.region == Region::Northeast {
        "COD service limited in Northeast region due to connectivity issues"
    } else if record.state == "Jammu & Kashmir" {
        "COD service limited in J&K due to security restrictions"
    } else if record.state == "Andaman & Nicobar Islands" {
        "COD not available for island territories"
    } else {
        "COD not serviceable in this specific area"
    }
}

/// Record delivery days, falling back to the region default (also for a
/// stored zero).
fn delivery_days(record: &PincodeRecord) -> u32 {
    record
        .delivery_days
        .filter(|d| *d > 0)
        .unwrap_or_else(|| tables::delivery_days_for(record.region))
}

fn keep_members(services: &[String], set: &[&str]) -> Vec<String> {
    services
        .iter()
        .filter(|s| set.contains(&s.as_str()))
        .cloned()
        .collect()
}

impl PincodeValidator {
    /// COD eligibility, maximum order value and COD fee.
    pub fn check_cod(&self, pincode: impl IntoPincode) -> CodResponse {
        let details = self.get_location_details(pincode);
        let pincode = details.pincode().to_owned();

        let Some(record) = details.record() else {
            return CodResponse {
                pincode,
                cod_available: false,
                reason: details.error().map(|e| e.to_string()),
                max_cod_amount: 0,
                cod_charges: None,
            };
        };

        if record.cod_available.unwrap_or(true) {
            CodResponse {
                pincode,
                cod_available: true,
                reason: None,
                max_cod_amount: tables::max_cod_amount(record.tier),
                cod_charges: Some(tables::cod_charges(record.tier)),
            }
        } else {
            CodResponse {
                pincode,
                cod_available: false,
                reason: Some(cod_unavailable_reason(record).to_owned()),
                max_cod_amount: 0,
                cod_charges: None,
            }
        }
    }

    /// Courier coverage summary.
    pub fn get_courier_services(&self, pincode: impl IntoPincode) -> CourierServicesResponse {
        let details = self.get_location_details(pincode);
        let pincode = details.pincode().to_owned();

        let Some(record) = details.record() else {
            return CourierServicesResponse {
                pincode,
                services: Vec::new(),
                total_services: 0,
                delivery_days: 0,
                express_delivery: false,
                international_couriers: Vec::new(),
                domestic_couriers: Vec::new(),
                tier: Tier::Three,
                service_level: ServiceLevel::Basic,
            };
        };

        let services = record.courier_services.clone();
        CourierServicesResponse {
            pincode,
            total_services: services.len(),
            delivery_days: delivery_days(record),
            express_delivery: tables::EXPRESS_COURIERS
                .iter()
                .any(|c| record.has_courier(c)),
            international_couriers: keep_members(&services, &tables::INTERNATIONAL_COURIERS),
            domestic_couriers: keep_members(&services, &tables::DOMESTIC_COURIERS),
            tier: record.tier,
            service_level: record.tier.into(),
            services,
        }
    }

    /// Delivery availability, either in general (`courier = None`) or for one
    /// named courier.
    pub fn check_delivery(
        &self,
        pincode: impl IntoPincode,
        courier: Option<&str>,
    ) -> DeliveryResponse {
        let summary = self.get_courier_services(pincode);

        let Some(courier) = courier.filter(|c| !c.is_empty()) else {
            return DeliveryResponse::Any(ServiceAvailability {
                available: !summary.services.is_empty(),
                delivery_days: summary.delivery_days,
                express_available: summary.express_delivery,
                recommended_courier: recommend_courier(&summary.services, summary.tier),
                services: summary.services,
            });
        };

        if summary.services.iter().any(|s| s == courier) {
            DeliveryResponse::Courier(CourierAvailability {
                available: true,
                courier: courier.to_owned(),
                delivery_days: Some(summary.delivery_days),
                estimated_cost: Some(shipping_cost(courier, summary.tier)),
                reason: None,
                alternatives: Vec::new(),
            })
        } else {
            DeliveryResponse::Courier(CourierAvailability {
                available: false,
                courier: courier.to_owned(),
                delivery_days: None,
                estimated_cost: None,
                reason: Some(format!("{courier} does not service this pincode")),
                alternatives: summary.services.into_iter().take(3).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v() -> PincodeValidator {
        PincodeValidator::new().unwrap()
    }

    #[test]
    fn recommendation_order() {
        let all = ["DTDC", "Delhivery", "BlueDart", "FedEx"];
        assert_eq!(recommend_courier(&all, Tier::One), "FedEx");
        assert_eq!(recommend_courier(&all, Tier::Two), "FedEx");
        // FedEx is skipped for tier 3.
        assert_eq!(recommend_courier(&all, Tier::Three), "BlueDart");
        assert_eq!(recommend_courier(&["DTDC", "Delhivery"], Tier::One), "Delhivery");
        assert_eq!(recommend_courier(&["Ecom", "DTDC"], Tier::One), "DTDC");
        assert_eq!(recommend_courier(&["FedEx", "Ecom"], Tier::Three), "FedEx");
        assert_eq!(recommend_courier(&["Ecom"], Tier::Three), "Ecom");
        assert_eq!(recommend_courier::<&str>(&[], Tier::One), NOT_AVAILABLE);
    }

    #[test]
    fn shipping_cost_rounds() {
        assert_eq!(shipping_cost("FedEx", Tier::One), 200);
        assert_eq!(shipping_cost("Delhivery", Tier::Two), 96);
        assert_eq!(shipping_cost("DTDC", Tier::Three), 105);
        assert_eq!(shipping_cost("Unknown Co", Tier::Two), 96);
    }

    #[test]
    fn cod_for_tiers() {
        let v = v();
        let metro = v.check_cod("110001");
        assert!(metro.cod_available);
        assert_eq!(metro.max_cod_amount, 50_000);
        assert_eq!(metro.cod_charges, Some(25));
        assert_eq!(metro.reason, None);

        let tier2 = v.check_cod(122001);
        assert_eq!((tier2.max_cod_amount, tier2.cod_charges), (25_000, Some(35)));
    }

    #[test]
    fn cod_reasons_by_priority() {
        let v = v();
        let ne = v.check_cod("793001");
        assert!(!ne.cod_available);
        assert!(ne.reason.unwrap().contains("Northeast"));
        assert_eq!(ne.max_cod_amount, 0);
        assert_eq!(ne.cod_charges, None);

        assert!(v.check_cod("190001").reason.unwrap().contains("J&K"));
        assert!(v.check_cod("744101").reason.unwrap().contains("island"));
        // Synthesized Northeast record.
        assert!(!v.check_cod("999999").cod_available);
    }

    #[test]
    fn cod_invalid_uses_validator_error() {
        let cod = v().check_cod("123");
        assert!(!cod.cod_available);
        assert_eq!(cod.reason.as_deref(), Some("Pincode must be exactly 6 digits, got 3"));
        assert_eq!(cod.max_cod_amount, 0);
        assert_eq!(cod.cod_charges, None);
    }

    #[test]
    fn courier_summary_partitions_in_order() {
        let s = v().get_courier_services("110001");
        assert_eq!(s.services, ["BlueDart", "FedEx", "DHL", "Delhivery", "DTDC", "Ecom"]);
        assert_eq!(s.total_services, 6);
        assert_eq!(s.international_couriers, ["BlueDart", "FedEx", "DHL"]);
        assert_eq!(s.domestic_couriers, ["Delhivery", "DTDC", "Ecom"]);
        assert!(s.express_delivery);
        assert_eq!(s.service_level, ServiceLevel::Premium);
        assert_eq!(s.delivery_days, 1);
    }

    #[test]
    fn courier_summary_defaults() {
        let v = v();
        // No couriers and no delivery days in the table.
        let s = v.get_courier_services("509001");
        assert!(s.services.is_empty());
        assert_eq!(s.delivery_days, 2);
        assert!(!s.express_delivery);
        assert_eq!(s.service_level, ServiceLevel::Basic);

        let bad = v.get_courier_services("abc");
        assert_eq!(bad.total_services, 0);
        assert_eq!(bad.tier, Tier::Three);
        assert_eq!(bad.service_level, ServiceLevel::Basic);
    }

    #[test]
    fn delivery_without_courier() {
        let v = v();
        let DeliveryResponse::Any(a) = v.check_delivery("400001", None) else {
            panic!("expected general availability");
        };
        assert!(a.available);
        assert_eq!(a.recommended_courier, "FedEx");

        let DeliveryResponse::Any(none) = v.check_delivery("509001", None) else {
            panic!("expected general availability");
        };
        assert!(!none.available);
        assert_eq!(none.recommended_courier, NOT_AVAILABLE);
    }

    #[test]
    fn delivery_with_named_courier() {
        let v = v();
        let DeliveryResponse::Courier(ok) = v.check_delivery("226001", Some("DTDC")) else {
            panic!("expected courier availability");
        };
        assert!(ok.available);
        assert_eq!(ok.delivery_days, Some(2));
        assert_eq!(ok.estimated_cost, Some(84));

        let DeliveryResponse::Courier(miss) = v.check_delivery("282001", Some("FedEx")) else {
            panic!("expected courier availability");
        };
        assert!(!miss.available);
        assert_eq!(miss.reason.as_deref(), Some("FedEx does not service this pincode"));
        assert_eq!(miss.alternatives, ["Delhivery", "DTDC", "Ecom"]);
        assert_eq!(miss.estimated_cost, None);
    }

    #[test]
    fn delivery_invalid_pincode_is_unavailable() {
        let r = v().check_delivery("12", Some("DTDC"));
        assert!(!r.is_available());
        let r = v().check_delivery("12", None);
        assert!(!r.is_available());
    }
}
