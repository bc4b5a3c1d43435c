// crates/swissgeo-core/src/model/sub_region.rs
use super::{Canton, Region};
use crate::error::ClassificationError;
use crate::traits::GeoNode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A labour-market subdivision below the canton level.
///
/// Coverage is dense for the Zürich region (nine sub-regions with postal
/// code tables) and sparse elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubRegion {
    // Zürich
    ZurichCity,
    Winterthur,
    ZurichOberland,
    ZurichUnterland,
    Limmattal,
    Zimmerberg,
    Pfannenstiel,
    Knonaueramt,
    Weinland,
    // Ostschweiz
    StGallenAppenzell,
    RheintalLiechtenstein,
    Thurgau,
    Graubuenden,
    // Zentralschweiz
    Luzern,
    Zug,
    // Nordwestschweiz
    Basel,
    AargauSolothurn,
    // Espace Mittelland
    Bern,
    // Genferseeregion
    GenevaLausanne,
    // Tessin
    Ticino,
}

impl SubRegion {
    pub const fn region(self) -> Region {
        use SubRegion::*;
        match self {
            ZurichCity | Winterthur | ZurichOberland | ZurichUnterland | Limmattal | Zimmerberg
            | Pfannenstiel | Knonaueramt | Weinland => Region::Zurich,
            StGallenAppenzell | RheintalLiechtenstein | Thurgau | Graubuenden => Region::Ostschweiz,
            Luzern | Zug => Region::Central,
            Basel | AargauSolothurn => Region::Nordwestschweiz,
            Bern => Region::EspaceMittelland,
            GenevaLausanne => Region::RegionLemanique,
            Ticino => Region::Ticino,
        }
    }

    /// Owning cantons; one or more.
    pub const fn cantons(self) -> &'static [Canton] {
        match self {
            SubRegion::ZurichCity
            | SubRegion::Winterthur
            | SubRegion::ZurichOberland
            | SubRegion::ZurichUnterland
            | SubRegion::Limmattal
            | SubRegion::Zimmerberg
            | SubRegion::Pfannenstiel
            | SubRegion::Knonaueramt
            | SubRegion::Weinland => &[Canton::Zurich],
            SubRegion::StGallenAppenzell => &[
                Canton::StGallen,
                Canton::AppenzellAusserrhoden,
                Canton::AppenzellInnerrhoden,
            ],
            SubRegion::RheintalLiechtenstein => &[Canton::StGallen, Canton::Liechtenstein],
            SubRegion::Thurgau => &[Canton::Thurgau],
            SubRegion::Graubuenden => &[Canton::Graubuenden],
            SubRegion::Luzern => &[Canton::Luzern],
            SubRegion::Zug => &[Canton::Zug],
            SubRegion::Basel => &[Canton::BaselStadt, Canton::BaselLandschaft],
            SubRegion::AargauSolothurn => &[Canton::Aargau, Canton::Solothurn],
            SubRegion::Bern => &[Canton::Bern],
            SubRegion::GenevaLausanne => &[Canton::Geneva, Canton::Vaud],
            SubRegion::Ticino => &[Canton::Ticino],
        }
    }

    /// Representative postal codes used for detection.
    pub const fn postal_codes(self) -> &'static [&'static str] {
        match self {
            SubRegion::ZurichCity => &[
                "8001", "8002", "8003", "8004", "8005", "8006", "8008", "8032", "8037", "8038",
                "8041", "8044", "8045", "8046", "8047", "8048", "8049", "8050", "8051", "8052",
                "8053", "8055", "8057", "8064",
            ],
            SubRegion::Winterthur => &[
                "8400", "8402", "8404", "8405", "8406", "8408", "8409", "8411", "8472", "8474",
            ],
            SubRegion::ZurichOberland => &[
                "8330", "8335", "8340", "8344", "8345", "8610", "8614", "8616", "8617", "8620",
                "8623", "8630", "8633", "8635", "8636", "8637",
            ],
            SubRegion::ZurichUnterland => &[
                "8152", "8153", "8154", "8155", "8157", "8180", "8181", "8184", "8185", "8192",
                "8193", "8302", "8303", "8305", "8309",
            ],
            SubRegion::Limmattal => &["8102", "8103", "8104", "8951", "8952", "8953", "8954", "8955"],
            SubRegion::Zimmerberg => &[
                "8134", "8135", "8800", "8802", "8803", "8804", "8805", "8810", "8815", "8816",
                "8820", "8824", "8825",
            ],
            SubRegion::Pfannenstiel => &[
                "8125", "8126", "8127", "8700", "8702", "8703", "8704", "8706", "8707", "8708",
                "8712", "8713", "8714",
            ],
            SubRegion::Knonaueramt => &[
                "8906", "8907", "8908", "8909", "8910", "8911", "8912", "8913", "8914", "8915",
                "8925", "8926", "8932", "8933", "8934",
            ],
            SubRegion::Weinland => &[
                "8245", "8246", "8247", "8248", "8450", "8451", "8452", "8453", "8457", "8458",
                "8459", "8460", "8461", "8462", "8463", "8465",
            ],
            SubRegion::StGallenAppenzell => &["9000", "9008", "9010", "9014", "9100", "9050"],
            SubRegion::RheintalLiechtenstein => &["9490", "9494", "9496", "9450", "9435"],
            SubRegion::Thurgau => &["8500", "8280", "8570"],
            SubRegion::Graubuenden => &["7000", "7270", "7500"],
            SubRegion::Luzern => &["6000", "6003", "6004", "6005"],
            SubRegion::Zug => &["6300", "6330", "6340"],
            SubRegion::Basel => &["4001", "4051", "4052", "4410"],
            SubRegion::AargauSolothurn => &["5000", "5400", "4500", "4600"],
            SubRegion::Bern => &["3000", "3011", "3012", "3600"],
            SubRegion::GenevaLausanne => &["1201", "1204", "1003", "1004"],
            SubRegion::Ticino => &["6900", "6500", "6600"],
        }
    }

    /// `true` when the sub-region lists more than one canton.
    pub fn spans_cantons(self) -> bool {
        self.cantons().len() > 1
    }
}

impl GeoNode for SubRegion {
    const ALL: &'static [SubRegion] = &[
        SubRegion::ZurichCity,
        SubRegion::Winterthur,
        SubRegion::ZurichOberland,
        SubRegion::ZurichUnterland,
        SubRegion::Limmattal,
        SubRegion::Zimmerberg,
        SubRegion::Pfannenstiel,
        SubRegion::Knonaueramt,
        SubRegion::Weinland,
        SubRegion::StGallenAppenzell,
        SubRegion::RheintalLiechtenstein,
        SubRegion::Thurgau,
        SubRegion::Graubuenden,
        SubRegion::Luzern,
        SubRegion::Zug,
        SubRegion::Basel,
        SubRegion::AargauSolothurn,
        SubRegion::Bern,
        SubRegion::GenevaLausanne,
        SubRegion::Ticino,
    ];

    fn code(self) -> &'static str {
        match self {
            SubRegion::ZurichCity => "zurich_city",
            SubRegion::Winterthur => "winterthur",
            SubRegion::ZurichOberland => "zurich_oberland",
            SubRegion::ZurichUnterland => "zurich_unterland",
            SubRegion::Limmattal => "limmattal",
            SubRegion::Zimmerberg => "zimmerberg",
            SubRegion::Pfannenstiel => "pfannenstiel",
            SubRegion::Knonaueramt => "knonaueramt",
            SubRegion::Weinland => "weinland",
            SubRegion::StGallenAppenzell => "st_gallen_appenzell",
            SubRegion::RheintalLiechtenstein => "rheintal_liechtenstein",
            SubRegion::Thurgau => "thurgau",
            SubRegion::Graubuenden => "graubuenden",
            SubRegion::Luzern => "luzern",
            SubRegion::Zug => "zug",
            SubRegion::Basel => "basel",
            SubRegion::AargauSolothurn => "aargau_solothurn",
            SubRegion::Bern => "bern",
            SubRegion::GenevaLausanne => "geneva_lausanne",
            SubRegion::Ticino => "ticino",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SubRegion::ZurichCity => "Stadt Zürich",
            SubRegion::Winterthur => "Winterthur",
            SubRegion::ZurichOberland => "Zürcher Oberland",
            SubRegion::ZurichUnterland => "Zürcher Unterland",
            SubRegion::Limmattal => "Limmattal",
            SubRegion::Zimmerberg => "Zimmerberg",
            SubRegion::Pfannenstiel => "Pfannenstiel",
            SubRegion::Knonaueramt => "Knonaueramt",
            SubRegion::Weinland => "Zürcher Weinland",
            SubRegion::StGallenAppenzell => "St. Gallen / Appenzell",
            SubRegion::RheintalLiechtenstein => "Rheintal / Liechtenstein",
            SubRegion::Thurgau => "Thurgau",
            SubRegion::Graubuenden => "Graubünden",
            SubRegion::Luzern => "Luzern",
            SubRegion::Zug => "Zug",
            SubRegion::Basel => "Basel",
            SubRegion::AargauSolothurn => "Aargau / Solothurn",
            SubRegion::Bern => "Bern",
            SubRegion::GenevaLausanne => "Genf / Lausanne",
            SubRegion::Ticino => "Tessin",
        }
    }
}

impl FromStr for SubRegion {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubRegion::from_code(s).ok_or_else(|| ClassificationError::UnknownSubRegion(s.to_string()))
    }
}

impl fmt::Display for SubRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
