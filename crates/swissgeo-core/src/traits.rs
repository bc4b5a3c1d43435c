// crates/swissgeo-core/src/traits.rs
use crate::text::{equals_folded, fold_key};

/// Shared behaviour of the three closed hierarchy domains
/// ([`Region`](crate::Region), [`Canton`](crate::Canton),
/// [`SubRegion`](crate::SubRegion)).
///
/// Implementors expose their full value set plus a canonical code and a
/// display label; code and label lookups come for free.
///
/// # Examples
/// ```rust
/// use swissgeo_core::{Canton, GeoNode, Region};
///
/// assert_eq!(Canton::from_code("zh"), Some(Canton::Zurich));
/// assert_eq!(Region::find_by_label("genferseeregion"), Some(Region::RegionLemanique));
/// assert!(Canton::Graubuenden.is_named("graubunden"));
/// ```
pub trait GeoNode: Copy + Eq + Ord + std::fmt::Debug + 'static {
    /// Every value of the domain, in declaration order.
    const ALL: &'static [Self];

    /// Canonical wire code (`"ZH"`, `"zurich"`, `"zurich_city"`).
    fn code(self) -> &'static str;

    /// Human-readable (German) label.
    fn label(self) -> &'static str;

    /// Case-insensitive code lookup; surrounding whitespace is ignored.
    fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|node| node.code().eq_ignore_ascii_case(code))
    }

    /// Accent-insensitive + case-insensitive label lookup.
    fn find_by_label(query: &str) -> Option<Self> {
        let q = fold_key(query);
        if q.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|node| fold_key(node.label()) == q)
    }

    /// Returns `true` if `query` equals the label after folding.
    #[inline]
    fn is_named(self, query: &str) -> bool {
        equals_folded(self.label(), query)
    }
}
