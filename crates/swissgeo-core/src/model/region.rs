// crates/swissgeo-core/src/model/region.rs
use super::{Canton, SubRegion};
use crate::error::ClassificationError;
use crate::traits::GeoNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A Swiss macro-region grouping cantons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Zurich,
    Ostschweiz,
    Central,
    Nordwestschweiz,
    EspaceMittelland,
    RegionLemanique,
    Ticino,
}

impl Region {
    /// Member cantons, in table order. Never empty.
    ///
    /// Must agree with [`Canton::region`]; `hierarchy::validate` checks
    /// both directions.
    pub const fn cantons(self) -> &'static [Canton] {
        use Canton::*;
        match self {
            Region::Zurich => &[Zurich],
            Region::Ostschweiz => &[
                Glarus,
                Schaffhausen,
                AppenzellAusserrhoden,
                AppenzellInnerrhoden,
                StGallen,
                Graubuenden,
                Thurgau,
                Liechtenstein,
            ],
            Region::Central => &[Luzern, Uri, Schwyz, Obwalden, Nidwalden, Zug],
            Region::Nordwestschweiz => &[BaselStadt, BaselLandschaft, Aargau, Solothurn],
            Region::EspaceMittelland => &[Bern, Fribourg, Neuchatel, Jura],
            Region::RegionLemanique => &[Vaud, Valais, Geneva],
            Region::Ticino => &[Ticino],
        }
    }

    /// Union of the member cantons' sub-regions, deduplicated.
    pub fn sub_regions(self) -> &'static BTreeSet<SubRegion> {
        crate::hierarchy::sub_regions_of_region(self)
    }

    pub fn contains(self, canton: Canton) -> bool {
        self.cantons().contains(&canton)
    }
}

impl GeoNode for Region {
    const ALL: &'static [Region] = &[
        Region::Zurich,
        Region::Ostschweiz,
        Region::Central,
        Region::Nordwestschweiz,
        Region::EspaceMittelland,
        Region::RegionLemanique,
        Region::Ticino,
    ];

    fn code(self) -> &'static str {
        match self {
            Region::Zurich => "zurich",
            Region::Ostschweiz => "ostschweiz",
            Region::Central => "central",
            Region::Nordwestschweiz => "nordwestschweiz",
            Region::EspaceMittelland => "espace_mittelland",
            Region::RegionLemanique => "region_lemanique",
            Region::Ticino => "ticino",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Region::Zurich => "Zürich",
            Region::Ostschweiz => "Ostschweiz",
            Region::Central => "Zentralschweiz",
            Region::Nordwestschweiz => "Nordwestschweiz",
            Region::EspaceMittelland => "Espace Mittelland",
            Region::RegionLemanique => "Genferseeregion",
            Region::Ticino => "Tessin",
        }
    }
}

impl FromStr for Region {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::from_code(s).ok_or_else(|| ClassificationError::UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
