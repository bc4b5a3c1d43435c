// crates/swissgeo-core/src/selection.rs

//! # Selection state
//!
//! Three parallel selection sets (regions, cantons, sub-regions) kept
//! consistent as a user toggles nodes at any level of the hierarchy.
//!
//! - Region toggles overwrite the whole subtree: every canton and every
//!   sub-region of the region follow the region.
//! - Canton toggles cascade down to the canton's sub-regions, then
//!   recompute the parent region. The region set only ever holds regions
//!   whose cantons are all selected.
//! - Sub-region toggles are local.
//!
//! A `SelectionState` belongs to one filter session. It is a plain value:
//! clone it, serialize it, and pass it to [`crate::LocationMatcher`].

use crate::error::ClassificationError;
use crate::model::{Canton, Region, SubRegion};
use crate::traits::GeoNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Derived selection status of a region or canton node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    Unselected,
    Partial,
    Selected,
}

/// The user's current location filter: selected regions, cantons and sub-regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default)]
    regions: BTreeSet<Region>,
    #[serde(default)]
    cantons: BTreeSet<Canton>,
    #[serde(default)]
    sub_regions: BTreeSet<SubRegion>,
}

fn set_membership<T: Ord>(set: &mut BTreeSet<T>, value: T, member: bool) {
    if member {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}

impl SelectionState {
    /// An empty selection: no filter active.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> &BTreeSet<Region> {
        &self.regions
    }

    pub fn cantons(&self) -> &BTreeSet<Canton> {
        &self.cantons
    }

    pub fn sub_regions(&self) -> &BTreeSet<SubRegion> {
        &self.sub_regions
    }

    /// `true` when all three sets are empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.cantons.is_empty() && self.sub_regions.is_empty()
    }

    /// Drops every selection (filter reset).
    pub fn clear(&mut self) {
        self.regions.clear();
        self.cantons.clear();
        self.sub_regions.clear();
    }

    /// `Selected` if every canton of the region is selected, `Unselected` if
    /// none is, `Partial` otherwise.
    pub fn region_state(&self, region: Region) -> TriState {
        let cantons = region.cantons();
        let selected = cantons.iter().filter(|&c| self.cantons.contains(c)).count();
        if selected == cantons.len() {
            TriState::Selected
        } else if selected == 0 {
            TriState::Unselected
        } else {
            TriState::Partial
        }
    }

    /// `Selected` if the canton itself is selected, `Partial` if only some of
    /// its sub-regions are, `Unselected` otherwise.
    pub fn canton_state(&self, canton: Canton) -> TriState {
        if self.cantons.contains(&canton) {
            TriState::Selected
        } else if canton
            .sub_regions()
            .iter()
            .any(|s| self.sub_regions.contains(s))
        {
            TriState::Partial
        } else {
            TriState::Unselected
        }
    }

    /// Selects the whole region unless it is already fully selected, in
    /// which case the whole region is cleared.
    pub fn toggle_region(&mut self, region: Region) {
        let should_select = self.region_state(region) != TriState::Selected;

        set_membership(&mut self.regions, region, should_select);
        for &canton in region.cantons() {
            set_membership(&mut self.cantons, canton, should_select);
        }
        for &sub in region.sub_regions() {
            set_membership(&mut self.sub_regions, sub, should_select);
        }

        tracing::debug!(
            region = region.code(),
            selected = should_select,
            cantons = self.cantons.len(),
            sub_regions = self.sub_regions.len(),
            "region toggled"
        );
    }

    /// Flips one canton, cascades to its sub-regions and recomputes its
    /// region.
    pub fn toggle_canton(&mut self, canton: Canton) {
        let region = canton.region();
        let was_full = self.region_state(region) == TriState::Selected;
        let should_select = !self.cantons.contains(&canton);

        set_membership(&mut self.cantons, canton, should_select);
        for &sub in canton.sub_regions() {
            set_membership(&mut self.sub_regions, sub, should_select);
        }

        let region_state = self.region_state(region);
        if region_state == TriState::Selected {
            self.regions.insert(region);
        } else if was_full {
            self.regions.remove(&region);
        }

        tracing::debug!(
            canton = canton.code(),
            selected = should_select,
            region = region.code(),
            region_state = ?region_state,
            "canton toggled"
        );
    }

    /// Flips one sub-region. No cascade in either direction.
    pub fn toggle_sub_region(&mut self, sub_region: SubRegion) {
        let should_select = !self.sub_regions.contains(&sub_region);
        set_membership(&mut self.sub_regions, sub_region, should_select);

        tracing::debug!(
            sub_region = sub_region.code(),
            selected = should_select,
            "sub-region toggled"
        );
    }

    /// Applies one toggle of any level.
    pub fn apply(&mut self, toggle: Toggle) {
        match toggle {
            Toggle::Region(r) => self.toggle_region(r),
            Toggle::Canton(c) => self.toggle_canton(c),
            Toggle::SubRegion(s) => self.toggle_sub_region(s),
        }
    }

    /// Value-style [`toggle_region`](Self::toggle_region).
    #[must_use]
    pub fn toggled_region(mut self, region: Region) -> Self {
        self.toggle_region(region);
        self
    }

    /// Value-style [`toggle_canton`](Self::toggle_canton).
    #[must_use]
    pub fn toggled_canton(mut self, canton: Canton) -> Self {
        self.toggle_canton(canton);
        self
    }

    /// Value-style [`toggle_sub_region`](Self::toggle_sub_region).
    #[must_use]
    pub fn toggled_sub_region(mut self, sub_region: SubRegion) -> Self {
        self.toggle_sub_region(sub_region);
        self
    }

    /// Rendering snapshot: every region with its cantons and their
    /// sub-regions, each annotated with its current state.
    pub fn tree(&self) -> Vec<RegionNode> {
        Region::ALL
            .iter()
            .map(|&region| RegionNode {
                region,
                label: region.label(),
                state: self.region_state(region),
                cantons: region
                    .cantons()
                    .iter()
                    .map(|&canton| CantonNode {
                        canton,
                        label: canton.label(),
                        state: self.canton_state(canton),
                        sub_regions: canton
                            .sub_regions()
                            .iter()
                            .map(|&sub_region| SubRegionNode {
                                sub_region,
                                label: sub_region.label(),
                                selected: self.sub_regions.contains(&sub_region),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionNode {
    pub region: Region,
    pub label: &'static str,
    pub state: TriState,
    pub cantons: Vec<CantonNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CantonNode {
    pub canton: Canton,
    pub label: &'static str,
    pub state: TriState,
    pub sub_regions: Vec<SubRegionNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubRegionNode {
    pub sub_region: SubRegion,
    pub label: &'static str,
    pub selected: bool,
}

/// A single user toggle, parsed from `"region:<code>"`, `"canton:<code>"`
/// or `"sub-region:<code>"`.
///
/// ```rust
/// use swissgeo_core::{Canton, Toggle};
///
/// let t: Toggle = "canton:zh".parse().unwrap();
/// assert_eq!(t, Toggle::Canton(Canton::Zurich));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Region(Region),
    Canton(Canton),
    SubRegion(SubRegion),
}

impl FromStr for Toggle {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, code) = s
            .split_once(':')
            .ok_or_else(|| ClassificationError::UnknownSelectionKind(s.to_string()))?;
        match kind.trim().to_ascii_lowercase().as_str() {
            "region" => code.parse().map(Toggle::Region),
            "canton" => code.parse().map(Toggle::Canton),
            "sub-region" | "sub_region" | "subregion" => code.parse().map(Toggle::SubRegion),
            other => Err(ClassificationError::UnknownSelectionKind(other.to_string())),
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::Region(r) => write!(f, "region:{r}"),
            Toggle::Canton(c) => write!(f, "canton:{c}"),
            Toggle::SubRegion(s) => write!(f, "sub-region:{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_toggle_selects_whole_subtree() {
        let mut s = SelectionState::new();
        s.toggle_region(Region::Nordwestschweiz);

        assert!(s.regions().contains(&Region::Nordwestschweiz));
        for c in Region::Nordwestschweiz.cantons() {
            assert!(s.cantons().contains(c));
        }
        assert!(s.sub_regions().contains(&SubRegion::Basel));
        assert!(s.sub_regions().contains(&SubRegion::AargauSolothurn));
        assert_eq!(s.region_state(Region::Nordwestschweiz), TriState::Selected);
    }

    #[test]
    fn region_toggle_over_partial_forces_full_selection() {
        let mut s = SelectionState::new();
        s.toggle_canton(Canton::Bern);
        assert_eq!(s.region_state(Region::EspaceMittelland), TriState::Partial);

        s.toggle_region(Region::EspaceMittelland);
        assert_eq!(s.region_state(Region::EspaceMittelland), TriState::Selected);

        s.toggle_region(Region::EspaceMittelland);
        assert!(s.is_empty());
    }

    #[test]
    fn region_toggle_covers_only_defined_sub_regions() {
        // Zentralschweiz has sub-regions only for LU and ZG
        let s = SelectionState::new().toggled_region(Region::Central);
        assert_eq!(s.sub_regions().len(), 2);
        assert_eq!(s.cantons().len(), 6);
    }

    #[test]
    fn canton_without_sub_regions_leaves_sub_regions_alone() {
        let mut s = SelectionState::new().toggled_sub_region(SubRegion::Zug);
        s.toggle_canton(Canton::Glarus);
        assert!(s.cantons().contains(&Canton::Glarus));
        assert_eq!(s.sub_regions().iter().copied().collect::<Vec<_>>(), vec![SubRegion::Zug]);

        s.toggle_canton(Canton::Glarus);
        assert!(s.cantons().is_empty());
        assert_eq!(s.sub_regions().iter().copied().collect::<Vec<_>>(), vec![SubRegion::Zug]);
    }

    #[test]
    fn canton_toggle_cascades_down() {
        let mut s = SelectionState::new();
        s.toggle_canton(Canton::StGallen);
        assert!(s.sub_regions().contains(&SubRegion::StGallenAppenzell));
        assert!(s.sub_regions().contains(&SubRegion::RheintalLiechtenstein));

        s.toggle_canton(Canton::StGallen);
        assert!(s.sub_regions().is_empty());
        assert!(s.cantons().is_empty());
    }

    #[test]
    fn deselecting_one_canton_drops_full_region() {
        let mut s = SelectionState::new().toggled_region(Region::RegionLemanique);
        s.toggle_canton(Canton::Valais);

        assert!(!s.regions().contains(&Region::RegionLemanique));
        assert_eq!(s.region_state(Region::RegionLemanique), TriState::Partial);
        assert!(s.cantons().contains(&Canton::Vaud));
    }

    #[test]
    fn single_canton_region_follows_its_canton() {
        let mut s = SelectionState::new();
        s.toggle_canton(Canton::Ticino);
        assert!(s.regions().contains(&Region::Ticino));
        assert!(s.sub_regions().contains(&SubRegion::Ticino));

        s.toggle_canton(Canton::Ticino);
        assert!(s.is_empty());
    }

    #[test]
    fn sub_region_toggle_is_local() {
        let mut s = SelectionState::new();
        s.toggle_sub_region(SubRegion::Winterthur);

        assert!(s.cantons().is_empty());
        assert!(s.regions().is_empty());
        assert_eq!(s.region_state(Region::Zurich), TriState::Unselected);
        assert_eq!(s.canton_state(Canton::Zurich), TriState::Partial);

        s.toggle_sub_region(SubRegion::Winterthur);
        assert!(s.is_empty());
    }

    #[test]
    fn tree_reflects_states() {
        let s = SelectionState::new()
            .toggled_canton(Canton::Vaud)
            .toggled_sub_region(SubRegion::ZurichCity);
        let tree = s.tree();
        assert_eq!(tree.len(), Region::ALL.len());

        let lemanique = tree
            .iter()
            .find(|n| n.region == Region::RegionLemanique)
            .unwrap();
        assert_eq!(lemanique.state, TriState::Partial);

        let zurich = tree.iter().find(|n| n.region == Region::Zurich).unwrap();
        assert_eq!(zurich.state, TriState::Unselected);
        assert_eq!(zurich.cantons[0].state, TriState::Partial);
        assert!(zurich.cantons[0]
            .sub_regions
            .iter()
            .any(|n| n.sub_region == SubRegion::ZurichCity && n.selected));
    }

    #[test]
    fn toggles_parse_and_apply() {
        let mut s = SelectionState::new();
        for raw in ["region:ticino", "canton:GE", "sub-region:zug"] {
            s.apply(raw.parse().unwrap());
        }
        assert!(s.regions().contains(&Region::Ticino));
        assert!(s.cantons().contains(&Canton::Geneva));
        assert!(s.sub_regions().contains(&SubRegion::Zug));

        assert!(matches!(
            "district:zh".parse::<Toggle>(),
            Err(ClassificationError::UnknownSelectionKind(_))
        ));
        assert!(matches!(
            "canton:XX".parse::<Toggle>(),
            Err(ClassificationError::UnknownCanton(_))
        ));
    }

    #[test]
    fn state_serializes_with_codes() {
        let s = SelectionState::new().toggled_canton(Canton::Zug);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"regions":[],"cantons":["ZG"],"sub_regions":["zug"]}"#);

        let back: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        let empty: SelectionState = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
