// crates/pincode-core/src/model/table.rs
use super::PincodeRecord;
use crate::input::Pincode;
use serde::{Deserialize, Serialize, Serializer};

/// A reference-table row together with its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PincodeEntry {
    pub pincode: Pincode,
    pub record: PincodeRecord,
}

/// The reference table.
///
/// A flat vector kept sorted by pincode, so "table order" is ascending
/// pincode order and exact lookups are a binary search. Immutable once built.
///
/// Serialized as the bare entry list; decoding goes back through
/// [`PincodeDb::from_entries`], so a foreign snapshot is re-sorted too.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<PincodeEntry>")]
pub struct PincodeDb {
    entries: Vec<PincodeEntry>,
}

impl PincodeDb {
    /// Build a table from arbitrary rows. Rows are sorted by pincode; when a
    /// pincode appears twice the first row wins.
    pub fn from_entries(mut entries: Vec<PincodeEntry>) -> Self {
        entries.sort_by(|a, b| a.pincode.cmp(&b.pincode));
        entries.dedup_by(|later, earlier| later.pincode == earlier.pincode);
        PincodeDb { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup by normalised pincode string.
    pub fn get(&self, pincode: &str) -> Option<&PincodeRecord> {
        self.entry(pincode).map(|e| &e.record)
    }

    pub fn entry(&self, pincode: &str) -> Option<&PincodeEntry> {
        self.entries
            .binary_search_by(|e| e.pincode.as_str().cmp(pincode))
            .ok()
            .map(|i| &self.entries[i])
    }

    pub(crate) fn entries_slice(&self) -> &[PincodeEntry] {
        &self.entries
    }
}

impl From<Vec<PincodeEntry>> for PincodeDb {
    fn from(entries: Vec<PincodeEntry>) -> Self {
        PincodeDb::from_entries(entries)
    }
}

impl Serialize for PincodeDb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Region, Tier, Zone};

    fn row(pin: &str, city: &str) -> PincodeEntry {
        PincodeEntry {
            pincode: pin.parse().unwrap(),
            record: PincodeRecord {
                city: city.into(),
                state: "Test".into(),
                region: Region::North,
                zone: Zone::Northern,
                tier: Tier::Two,
                is_metro: false,
                coordinates: None,
                courier_services: Vec::new(),
                delivery_days: None,
                cod_available: None,
            },
        }
    }

    #[test]
    fn sorts_and_keeps_first_duplicate() {
        let db = PincodeDb::from_entries(vec![
            row("400001", "B"),
            row("110001", "A"),
            row("400001", "C"),
        ]);
        assert_eq!(db.len(), 2);
        assert_eq!(db.entries_slice()[0].pincode.as_str(), "110001");
        assert_eq!(db.get("400001").unwrap().city, "B");
        assert!(db.get("999999").is_none());
    }

    #[test]
    fn decoding_restores_order() {
        let rows = vec![row("560001", "C"), row("110001", "A"), row("560001", "D")];
        let json = serde_json::to_string(&rows).unwrap();
        let db: PincodeDb = serde_json::from_str(&json).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.get("110001").unwrap().city, "A");
        assert_eq!(db.get("560001").unwrap().city, "C");
    }
}
