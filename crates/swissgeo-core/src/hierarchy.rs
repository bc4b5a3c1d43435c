// crates/swissgeo-core/src/hierarchy.rs

//! # Hierarchy lookups
//!
//! Read-only membership queries over the region → canton → sub-region
//! tables. The forward tables are `match` expressions on the enums; the
//! reverse indices below are built once on first use and never mutated, so
//! they can be shared across threads without synchronisation.

use crate::common::HierarchyStats;
use crate::error::ClassificationError;
use crate::model::{Canton, Region, SubRegion};
use crate::traits::GeoNode;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap, HashSet};

static EMPTY: BTreeSet<SubRegion> = BTreeSet::new();

struct HierarchyIndex {
    by_canton: HashMap<Canton, BTreeSet<SubRegion>>,
    by_region: HashMap<Region, BTreeSet<SubRegion>>,
}

// Single in-process index; the tables are compiled in, so building it cannot fail.
static INDEX: Lazy<HierarchyIndex> = Lazy::new(build_index);

fn build_index() -> HierarchyIndex {
    if let Err(err) = validate() {
        tracing::warn!(error = %err, "hierarchy tables failed validation");
    }

    let mut by_canton: HashMap<Canton, BTreeSet<SubRegion>> = HashMap::new();
    for &sub in SubRegion::ALL {
        for &canton in sub.cantons() {
            by_canton.entry(canton).or_default().insert(sub);
        }
    }

    let by_region = Region::ALL
        .iter()
        .map(|&region| {
            let subs = region
                .cantons()
                .iter()
                .filter_map(|c| by_canton.get(c))
                .flatten()
                .copied()
                .collect::<BTreeSet<_>>();
            (region, subs)
        })
        .collect();

    tracing::debug!(
        cantons_with_sub_regions = by_canton.len(),
        "hierarchy index built"
    );

    HierarchyIndex {
        by_canton,
        by_region,
    }
}

/// Member cantons of `region`; never empty.
pub fn cantons_of_region(region: Region) -> &'static [Canton] {
    region.cantons()
}

/// Owning region of `canton`; total.
pub fn region_of_canton(canton: Canton) -> Region {
    canton.region()
}

/// Sub-regions that list `canton` among their owners.
///
/// Empty for cantons that have no sub-regions defined yet; that is a known
/// gap in coverage, not an error.
pub fn sub_regions_of_canton(canton: Canton) -> &'static BTreeSet<SubRegion> {
    INDEX.by_canton.get(&canton).unwrap_or(&EMPTY)
}

/// Union of [`sub_regions_of_canton`] over the region's cantons.
pub fn sub_regions_of_region(region: Region) -> &'static BTreeSet<SubRegion> {
    INDEX.by_region.get(&region).unwrap_or(&EMPTY)
}

/// Finds the first sub-region whose postal-code table contains `code`.
///
/// Exact string comparison: no trimming, no zero-padding. `None` is the
/// expected answer outside the densely mapped Zürich region.
///
/// ```rust
/// use swissgeo_core::{detect_sub_region_from_postal_code, SubRegion};
///
/// assert_eq!(detect_sub_region_from_postal_code("8400"), Some(SubRegion::Winterthur));
/// assert_eq!(detect_sub_region_from_postal_code(" 8400"), None);
/// ```
pub fn detect_sub_region_from_postal_code(code: &str) -> Option<SubRegion> {
    // Linear scan is fine for ~200 entries
    SubRegion::ALL
        .iter()
        .copied()
        .find(|sub| sub.postal_codes().contains(&code))
}

/// Postal codes mapped to `sub_region`.
pub fn postal_codes_of(sub_region: SubRegion) -> &'static [&'static str] {
    sub_region.postal_codes()
}

/// Display label of any hierarchy node.
pub fn label_of<N: GeoNode>(node: N) -> &'static str {
    node.label()
}

pub fn stats() -> HierarchyStats {
    HierarchyStats {
        regions: Region::ALL.len(),
        cantons: Canton::ALL.len(),
        sub_regions: SubRegion::ALL.len(),
        postal_codes: SubRegion::ALL.iter().map(|s| s.postal_codes().len()).sum(),
    }
}

/// Checks the static tables against each other.
///
/// - every canton appears in exactly one region's canton list, and that
///   region is the canton's own [`Canton::region`];
/// - every sub-region's region equals the region of each of its cantons;
/// - no postal code is listed twice.
///
/// Liechtenstein needs no exception here because its region pointer is set
/// to Ostschweiz, the region of the sub-region it is attached to.
pub fn validate() -> Result<(), ClassificationError> {
    for &canton in Canton::ALL {
        let owners: Vec<Region> = Region::ALL
            .iter()
            .copied()
            .filter(|r| r.contains(canton))
            .collect();
        if owners != [canton.region()] {
            return Err(ClassificationError::InconsistentHierarchy(format!(
                "canton {canton} points to {} but is listed by {owners:?}",
                canton.region()
            )));
        }
    }

    for &sub in SubRegion::ALL {
        if let Some(canton) = sub.cantons().iter().find(|c| c.region() != sub.region()) {
            return Err(ClassificationError::InconsistentHierarchy(format!(
                "sub-region {sub} belongs to {} but canton {canton} belongs to {}",
                sub.region(),
                canton.region()
            )));
        }
    }

    let mut seen = HashSet::new();
    for &sub in SubRegion::ALL {
        for &code in sub.postal_codes() {
            if !seen.insert(code) {
                return Err(ClassificationError::InconsistentHierarchy(format!(
                    "postal code {code} is listed more than once (again by {sub})"
                )));
            }
        }
    }

    Ok(())
}
