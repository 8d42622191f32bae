// crates/pincode-core/src/resolve.rs

//! Location resolution: exact table hit, or an approximate record synthesized
//! from the first digit.

use crate::input::{IntoPincode, Pincode};
use crate::model::{Coordinates, PincodeDb, PincodeRecord, Region, Tier, Zone};
use crate::tables;
use crate::validate::FormatError;
use tracing::trace;

/// Result of resolving one pincode.
///
/// `Valid` always carries a full record (exact or synthesized); `Invalid`
/// carries only the rejected input and the reason. The variant is the
/// authoritative validity flag.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationDetails {
    Valid(Location),
    Invalid(InvalidLocation),
}

/// A resolved location.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub pincode: Pincode,
    pub record: PincodeRecord,
    pub matched: Match,
}

/// How a [`Location`] was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum Match {
    /// Verbatim from the reference table.
    Exact,
    /// Built from the first digit only; `city`/`state` are empty.
    Approximate {
        possible_states: Vec<String>,
        estimated_delivery_days: u32,
        message: String,
    },
}

/// Input that failed format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLocation {
    /// The trimmed input, as given.
    pub pincode: String,
    pub error: FormatError,
}

/// Look `pincode` up in `db`, synthesizing an approximate record on a miss.
pub fn resolve(db: &PincodeDb, pincode: impl IntoPincode) -> LocationDetails {
    let text = pincode.to_pincode_string();
    let pincode = match Pincode::parse(text.as_str()) {
        Ok(p) => p,
        Err(error) => {
            return LocationDetails::Invalid(InvalidLocation {
                pincode: text,
                error,
            })
        }
    };

    match db.get(pincode.as_str()) {
        Some(record) => LocationDetails::Valid(Location {
            pincode,
            record: record.clone(),
            matched: Match::Exact,
        }),
        None => {
            trace!(%pincode, "pincode not in table, synthesizing from first digit");
            LocationDetails::Valid(synthesize(pincode))
        }
    }
}

/// Approximate location for a well-formed pincode with no table entry.
pub fn synthesize(pincode: Pincode) -> Location {
    let digit = pincode.first_digit();
    let region = Region::from_first_digit(digit);
    let northeast = region == Region::Northeast;

    let courier_services = if northeast {
        vec!["DTDC".to_owned()]
    } else {
        vec!["DTDC".to_owned(), "Delhivery".to_owned()]
    };
    let possible_states = tables::states_for_digit(digit)
        .unwrap_or_default()
        .iter()
        .map(|s| (*s).to_owned())
        .collect();

    Location {
        pincode,
        record: PincodeRecord {
            city: String::new(),
            state: String::new(),
            region,
            zone: Zone::from_first_digit(digit),
            tier: Tier::Three,
            is_metro: false,
            coordinates: None,
            courier_services,
            delivery_days: None,
            cod_available: Some(!northeast),
        },
        matched: Match::Approximate {
            possible_states,
            estimated_delivery_days: tables::delivery_days_for(region),
            message: tables::APPROXIMATE_MESSAGE.to_owned(),
        },
    }
}

impl LocationDetails {
    /// Wrap a table row as an exact match.
    pub fn exact(pincode: Pincode, record: PincodeRecord) -> Self {
        LocationDetails::Valid(Location {
            pincode,
            record,
            matched: Match::Exact,
        })
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, LocationDetails::Valid(_))
    }

    pub fn is_approximate(&self) -> bool {
        matches!(
            self,
            LocationDetails::Valid(Location {
                matched: Match::Approximate { .. },
                ..
            })
        )
    }

    /// The trimmed input (valid or not).
    pub fn pincode(&self) -> &str {
        match self {
            LocationDetails::Valid(l) => l.pincode.as_str(),
            LocationDetails::Invalid(i) => &i.pincode,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            LocationDetails::Valid(l) => Some(l),
            LocationDetails::Invalid(_) => None,
        }
    }

    pub fn record(&self) -> Option<&PincodeRecord> {
        self.location().map(|l| &l.record)
    }

    pub fn error(&self) -> Option<FormatError> {
        match self {
            LocationDetails::Valid(_) => None,
            LocationDetails::Invalid(i) => Some(i.error),
        }
    }

    /// Empty for invalid input and for synthesized records.
    pub fn city(&self) -> &str {
        self.record().map_or("", |r| r.city.as_str())
    }

    pub fn state(&self) -> &str {
        self.record().map_or("", |r| r.state.as_str())
    }

    pub fn region(&self) -> Option<Region> {
        self.record().map(|r| r.region)
    }

    /// Tier 3 when invalid.
    pub fn tier(&self) -> Tier {
        self.record().map_or(Tier::Three, |r| r.tier)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.record().and_then(|r| r.coordinates)
    }

    pub fn courier_services(&self) -> &[String] {
        self.record()
            .map(|r| r.courier_services.as_slice())
            .unwrap_or_default()
    }

    pub fn possible_states(&self) -> Option<&[String]> {
        match self.location()?.matched {
            Match::Approximate {
                ref possible_states,
                ..
            } => Some(possible_states.as_slice()),
            Match::Exact => None,
        }
    }

    pub fn estimated_delivery_days(&self) -> Option<u32> {
        match self.location()?.matched {
            Match::Approximate {
                estimated_delivery_days,
                ..
            } => Some(estimated_delivery_days),
            Match::Exact => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self.location()?.matched {
            Match::Approximate { ref message, .. } => Some(message.as_str()),
            Match::Exact => None,
        }
    }

    pub fn into_result(self) -> Result<Location, InvalidLocation> {
        match self {
            LocationDetails::Valid(l) => Ok(l),
            LocationDetails::Invalid(i) => Err(i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> PincodeDb {
        PincodeDb::load().unwrap()
    }

    #[test]
    fn exact_hit_is_verbatim() {
        let db = db();
        let d = resolve(&db, "110001");
        assert!(d.is_valid());
        assert!(!d.is_approximate());
        assert_eq!(d.record(), db.get("110001"));
        assert!(d.possible_states().is_none());
    }

    #[test]
    fn miss_is_synthesized_from_first_digit() {
        let d = resolve(&db(), "999999");
        assert!(d.is_approximate());
        assert_eq!(d.city(), "");
        assert_eq!(d.state(), "");
        assert_eq!(d.tier(), Tier::Three);
        assert_eq!(d.region(), Some(Region::Northeast));
        assert_eq!(d.courier_services(), ["DTDC"]);
        assert_eq!(d.record().unwrap().cod_available, Some(false));
        assert_eq!(d.estimated_delivery_days(), Some(5));
        assert!(d.possible_states().unwrap().iter().any(|s| s == "Assam"));
        assert_eq!(d.message(), Some(tables::APPROXIMATE_MESSAGE));
    }

    #[test]
    fn central_zone_digit_synthesizes_west_region() {
        let d = resolve(&db(), 499999);
        let r = d.record().unwrap();
        assert_eq!(r.region, Region::West);
        assert_eq!(r.zone, Zone::Central);
        assert_eq!(r.courier_services, ["DTDC", "Delhivery"]);
        assert_eq!(r.cod_available, Some(true));
        assert_eq!(d.estimated_delivery_days(), Some(2));
    }

    #[test]
    fn invalid_input_keeps_trimmed_text() {
        let d = resolve(&db(), "  12a ");
        assert!(!d.is_valid());
        assert_eq!(d.pincode(), "12a");
        assert_eq!(d.error(), Some(FormatError::NonNumeric));
        assert_eq!(d.tier(), Tier::Three);
        assert_eq!(d.city(), "");
        assert!(d.courier_services().is_empty());
    }
}
