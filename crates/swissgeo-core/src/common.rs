use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the classification tables.
///
/// Returned by [`crate::hierarchy::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyStats {
    pub regions: usize,
    pub cantons: usize,
    pub sub_regions: usize,
    pub postal_codes: usize,
}
