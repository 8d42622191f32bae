// crates/pincode-core/src/model/search.rs
use super::{PincodeDb, PincodeEntry, Tier};
use crate::common::DbStats;
use crate::text::fold_key;
use crate::traits::{LocatedIter, PincodeSearch};

impl PincodeSearch for PincodeDb {
    fn stats(&self) -> DbStats {
        let mut stats = DbStats {
            pincodes: self.len(),
            ..DbStats::default()
        };
        for e in self.entries_slice() {
            let r = &e.record;
            if r.is_metro {
                stats.metros += 1;
            }
            if r.coordinates.is_some() {
                stats.with_coordinates += 1;
            }
            match r.tier {
                Tier::One => stats.tier1 += 1,
                Tier::Two => stats.tier2 += 1,
                Tier::Three => stats.tier3 += 1,
            }
        }
        stats
    }

    fn entries(&self) -> &[PincodeEntry] {
        self.entries_slice()
    }

    fn located<'a>(&'a self) -> LocatedIter<'a> {
        Box::new(
            self.entries_slice()
                .iter()
                .filter_map(|e| e.record.coordinates.map(|c| (e, c))),
        )
    }

    fn find_by_city_substring(&self, substr: &str) -> Vec<&PincodeEntry> {
        let q = fold_key(substr.trim());
        let mut out: Vec<_> = self
            .entries_slice()
            .iter()
            .filter(|e| fold_key(&e.record.city).contains(&q))
            .collect();
        sort_by_city(&mut out);
        out
    }

    fn find_by_state_substring(&self, substr: &str) -> Vec<&PincodeEntry> {
        let q = fold_key(substr.trim());
        let mut out: Vec<_> = self
            .entries_slice()
            .iter()
            .filter(|e| fold_key(&e.record.state).contains(&q))
            .collect();
        sort_by_city(&mut out);
        out
    }

    fn metros(&self) -> Vec<&PincodeEntry> {
        self.entries_slice()
            .iter()
            .filter(|e| e.record.is_metro)
            .collect()
    }

    fn by_tier(&self, tier: Tier) -> Vec<&PincodeEntry> {
        let mut out: Vec<_> = self
            .entries_slice()
            .iter()
            .filter(|e| e.record.tier == tier)
            .collect();
        sort_by_city(&mut out);
        out
    }
}

/// Alphabetical by folded city name. Stable, so ties stay in table order.
fn sort_by_city(entries: &mut [&PincodeEntry]) {
    entries.sort_by_cached_key(|e| fold_key(&e.record.city));
}
