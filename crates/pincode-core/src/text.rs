// crates/pincode-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// Transliterates Unicode to ASCII (`deunicode`) and lowercases, so
/// `"Puducherry"`, `"PUDUCHERRY"` and `"Pudučherry"` all fold to the same key.
///
/// ```rust
/// use pincode_core::text::fold_key;
///
/// assert_eq!(fold_key("  Mumbai "), "  mumbai ");
/// assert_eq!(fold_key("Bengalūru"), "bengaluru");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Equality after folding both sides with [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(fold_key("Tamil Nadu"), "tamil nadu");
        assert!(equals_folded("Bengalūru", "BENGALURU"));
        assert!(!equals_folded("Pune", "Patna"));
    }
}
