// crates/swissgeo-core/src/model/canton.rs
use super::{Region, SubRegion};
use crate::error::ClassificationError;
use crate::traits::GeoNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One of the 26 Swiss cantons, plus Liechtenstein as an external
/// pseudo-canton for the cross-border labour market.
///
/// Serialized as the two-letter uppercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Canton {
    #[serde(rename = "ZH")]
    Zurich,
    #[serde(rename = "BE")]
    Bern,
    #[serde(rename = "LU")]
    Luzern,
    #[serde(rename = "UR")]
    Uri,
    #[serde(rename = "SZ")]
    Schwyz,
    #[serde(rename = "OW")]
    Obwalden,
    #[serde(rename = "NW")]
    Nidwalden,
    #[serde(rename = "GL")]
    Glarus,
    #[serde(rename = "ZG")]
    Zug,
    #[serde(rename = "FR")]
    Fribourg,
    #[serde(rename = "SO")]
    Solothurn,
    #[serde(rename = "BS")]
    BaselStadt,
    #[serde(rename = "BL")]
    BaselLandschaft,
    #[serde(rename = "SH")]
    Schaffhausen,
    #[serde(rename = "AR")]
    AppenzellAusserrhoden,
    #[serde(rename = "AI")]
    AppenzellInnerrhoden,
    #[serde(rename = "SG")]
    StGallen,
    #[serde(rename = "GR")]
    Graubuenden,
    #[serde(rename = "AG")]
    Aargau,
    #[serde(rename = "TG")]
    Thurgau,
    #[serde(rename = "TI")]
    Ticino,
    #[serde(rename = "VD")]
    Vaud,
    #[serde(rename = "VS")]
    Valais,
    #[serde(rename = "NE")]
    Neuchatel,
    #[serde(rename = "GE")]
    Geneva,
    #[serde(rename = "JU")]
    Jura,
    #[serde(rename = "FL")]
    Liechtenstein,
}

impl Canton {
    /// Owning region. Total: every canton has exactly one.
    pub const fn region(self) -> Region {
        use Canton::*;
        match self {
            Zurich => Region::Zurich,
            Glarus | Schaffhausen | AppenzellAusserrhoden | AppenzellInnerrhoden | StGallen
            | Graubuenden | Thurgau => Region::Ostschweiz,
            // Not a canton; grouped with Ostschweiz by policy.
            Liechtenstein => Region::Ostschweiz,
            Luzern | Uri | Schwyz | Obwalden | Nidwalden | Zug => Region::Central,
            BaselStadt | BaselLandschaft | Aargau | Solothurn => Region::Nordwestschweiz,
            Bern | Fribourg | Neuchatel | Jura => Region::EspaceMittelland,
            Vaud | Valais | Geneva => Region::RegionLemanique,
            Ticino => Region::Ticino,
        }
    }

    /// `true` for Liechtenstein, the only entry outside Switzerland.
    pub const fn is_external(self) -> bool {
        matches!(self, Canton::Liechtenstein)
    }

    /// Sub-regions listing this canton. Empty for cantons that have no
    /// sub-regions defined yet.
    pub fn sub_regions(self) -> &'static BTreeSet<SubRegion> {
        crate::hierarchy::sub_regions_of_canton(self)
    }
}

impl GeoNode for Canton {
    const ALL: &'static [Canton] = &[
        Canton::Zurich,
        Canton::Bern,
        Canton::Luzern,
        Canton::Uri,
        Canton::Schwyz,
        Canton::Obwalden,
        Canton::Nidwalden,
        Canton::Glarus,
        Canton::Zug,
        Canton::Fribourg,
        Canton::Solothurn,
        Canton::BaselStadt,
        Canton::BaselLandschaft,
        Canton::Schaffhausen,
        Canton::AppenzellAusserrhoden,
        Canton::AppenzellInnerrhoden,
        Canton::StGallen,
        Canton::Graubuenden,
        Canton::Aargau,
        Canton::Thurgau,
        Canton::Ticino,
        Canton::Vaud,
        Canton::Valais,
        Canton::Neuchatel,
        Canton::Geneva,
        Canton::Jura,
        Canton::Liechtenstein,
    ];

    fn code(self) -> &'static str {
        match self {
            Canton::Zurich => "ZH",
            Canton::Bern => "BE",
            Canton::Luzern => "LU",
            Canton::Uri => "UR",
            Canton::Schwyz => "SZ",
            Canton::Obwalden => "OW",
            Canton::Nidwalden => "NW",
            Canton::Glarus => "GL",
            Canton::Zug => "ZG",
            Canton::Fribourg => "FR",
            Canton::Solothurn => "SO",
            Canton::BaselStadt => "BS",
            Canton::BaselLandschaft => "BL",
            Canton::Schaffhausen => "SH",
            Canton::AppenzellAusserrhoden => "AR",
            Canton::AppenzellInnerrhoden => "AI",
            Canton::StGallen => "SG",
            Canton::Graubuenden => "GR",
            Canton::Aargau => "AG",
            Canton::Thurgau => "TG",
            Canton::Ticino => "TI",
            Canton::Vaud => "VD",
            Canton::Valais => "VS",
            Canton::Neuchatel => "NE",
            Canton::Geneva => "GE",
            Canton::Jura => "JU",
            Canton::Liechtenstein => "FL",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Canton::Zurich => "Zürich",
            Canton::Bern => "Bern",
            Canton::Luzern => "Luzern",
            Canton::Uri => "Uri",
            Canton::Schwyz => "Schwyz",
            Canton::Obwalden => "Obwalden",
            Canton::Nidwalden => "Nidwalden",
            Canton::Glarus => "Glarus",
            Canton::Zug => "Zug",
            Canton::Fribourg => "Freiburg",
            Canton::Solothurn => "Solothurn",
            Canton::BaselStadt => "Basel-Stadt",
            Canton::BaselLandschaft => "Basel-Landschaft",
            Canton::Schaffhausen => "Schaffhausen",
            Canton::AppenzellAusserrhoden => "Appenzell Ausserrhoden",
            Canton::AppenzellInnerrhoden => "Appenzell Innerrhoden",
            Canton::StGallen => "St. Gallen",
            Canton::Graubuenden => "Graubünden",
            Canton::Aargau => "Aargau",
            Canton::Thurgau => "Thurgau",
            Canton::Ticino => "Tessin",
            Canton::Vaud => "Waadt",
            Canton::Valais => "Wallis",
            Canton::Neuchatel => "Neuenburg",
            Canton::Geneva => "Genf",
            Canton::Jura => "Jura",
            Canton::Liechtenstein => "Liechtenstein",
        }
    }
}

impl FromStr for Canton {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Canton::from_code(s).ok_or_else(|| ClassificationError::UnknownCanton(s.to_string()))
    }
}

impl fmt::Display for Canton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
