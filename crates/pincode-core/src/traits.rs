// crates/pincode-core/src/traits.rs
use crate::common::DbStats;
use crate::model::{Coordinates, PincodeEntry, Tier};

/// Entries that carry both coordinates, paired with them.
///
/// Boxed so implementors can back it with whatever iterator they like.
pub type LocatedIter<'a> = Box<dyn Iterator<Item = (&'a PincodeEntry, Coordinates)> + 'a>;

/// Table-level queries over a reference table.
///
/// Everything here borrows from the table; the response-shaped API on
/// [`PincodeValidator`](crate::PincodeValidator) is built on top of it.
pub trait PincodeSearch {
    fn stats(&self) -> DbStats;

    /// All entries, in table order (ascending pincode).
    ///
    /// # Example
    ///
    /// ```
    /// use pincode_core::{PincodeDb, PincodeSearch};
    ///
    /// let db = PincodeDb::load().unwrap();
    /// for entry in db.entries().iter().take(3) {
    ///     println!("{} {}", entry.pincode, entry.record.city);
    /// }
    /// ```
    fn entries(&self) -> &[PincodeEntry];

    /// Entries that have both latitude and longitude.
    fn located<'a>(&'a self) -> LocatedIter<'a>;

    /// Case- and accent-insensitive substring match on the city name,
    /// sorted by city. An empty query matches everything.
    fn find_by_city_substring(&self, substr: &str) -> Vec<&PincodeEntry>;

    /// Same as [`PincodeSearch::find_by_city_substring`] but matched against
    /// the state name. Still sorted by city.
    fn find_by_state_substring(&self, substr: &str) -> Vec<&PincodeEntry>;

    /// Metro entries in table order.
    fn metros(&self) -> Vec<&PincodeEntry>;

    /// Entries of one tier, sorted by city.
    fn by_tier(&self, tier: Tier) -> Vec<&PincodeEntry>;
}
