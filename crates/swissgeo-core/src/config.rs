// crates/swissgeo-core/src/config.rs
use serde::{Deserialize, Serialize};

/// How the matcher combines the three selection levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Only the most granular non-empty level is consulted.
    #[default]
    StrictPrecedence,
    /// A listing matches if any non-empty level matches it.
    ///
    /// Opt-in. With this mode a region selection stays effective after a
    /// sub-region elsewhere is added.
    Union,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    #[serde(default)]
    pub mode: MatchMode,
}

/// Options applied when raw job records are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Fill an additional location's missing sub-region from its postal code.
    #[serde(default = "default_true")]
    pub detect_sub_region_from_postcode: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            detect_sub_region_from_postcode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_strict_precedence() {
        assert_eq!(MatcherConfig::default().mode, MatchMode::StrictPrecedence);
        let cfg: MatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.mode, MatchMode::StrictPrecedence);
    }

    #[test]
    fn ingest_detection_defaults_on() {
        let opts: IngestOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.detect_sub_region_from_postcode);
        assert_eq!(opts, IngestOptions::default());
    }

    #[test]
    fn union_mode_parses() {
        let cfg: MatcherConfig = serde_json::from_str(r#"{"mode":"union"}"#).unwrap();
        assert_eq!(cfg.mode, MatchMode::Union);
    }
}
