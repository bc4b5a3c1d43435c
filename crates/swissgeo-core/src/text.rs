// crates/swissgeo-core/src/text.rs

/// Convert a string into a folded key suitable for label comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Zürich` -> `Zurich`)
/// 2\) Normalize to lowercase
/// 3\) Collapse surrounding whitespace
///
/// # Examples
///
/// ```rust
/// use swissgeo_core::text::fold_key;
///
/// assert_eq!(fold_key("Graubünden"), "graubunden");
/// assert_eq!(fold_key("  Neuchâtel "), "neuchatel");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// ```rust
/// use swissgeo_core::text::equals_folded;
///
/// assert!(equals_folded("Zürich", "zurich"));
/// assert!(!equals_folded("Bern", "Basel"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Trims an optional code and drops it when blank.
///
/// Stored job records frequently carry `""` where no value was chosen.
pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_swiss_labels() {
        assert_eq!(fold_key("Genève"), "geneve");
        assert_eq!(fold_key("St. Gallen"), "st. gallen");
        assert!(equals_folded("ZÜRCHER OBERLAND", "zurcher oberland"));
    }

    #[test]
    fn blank_codes_are_absent() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some(" ZH ")), Some("ZH"));
        assert_eq!(non_blank(None), None);
    }
}
