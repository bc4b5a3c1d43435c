// crates/swissgeo-core/src/job.rs
use crate::config::IngestOptions;
use crate::error::ClassificationError;
use crate::hierarchy::detect_sub_region_from_postal_code;
use crate::model::{Canton, SubRegion};
use crate::text::non_blank;
use serde::{Deserialize, Serialize};

/// Raw job-location record as stored by the job-listing side.
///
/// Codes are plain strings here; [`JobLocationAttributes::from_raw`]
/// validates them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobLocationRaw {
    #[serde(default)]
    pub primary_canton_code: Option<String>,
    #[serde(default)]
    pub primary_sub_region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub allows_remote: bool,
    #[serde(default)]
    pub has_multiple_locations: bool,
    #[serde(default)]
    pub additional_locations: Vec<AdditionalLocationRaw>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalLocationRaw {
    pub canton_code: String,
    #[serde(default)]
    pub sub_region: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

/// Validated, read-only view of a job listing's location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLocationAttributes {
    pub primary_canton: Option<Canton>,
    pub primary_sub_region: Option<SubRegion>,
    pub city: Option<String>,
    pub allows_remote: bool,
    pub has_multiple_locations: bool,
    pub additional_locations: Vec<AdditionalLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalLocation {
    pub canton: Canton,
    pub sub_region: Option<SubRegion>,
    pub postcode: Option<String>,
}

impl AdditionalLocation {
    pub fn new(canton: Canton) -> Self {
        Self {
            canton,
            sub_region: None,
            postcode: None,
        }
    }

    #[must_use]
    pub fn with_sub_region(mut self, sub_region: SubRegion) -> Self {
        self.sub_region = Some(sub_region);
        self
    }

    #[must_use]
    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    fn from_raw(
        raw: AdditionalLocationRaw,
        opts: &IngestOptions,
    ) -> Result<Self, ClassificationError> {
        let canton: Canton = raw.canton_code.parse()?;
        let mut sub_region = non_blank(raw.sub_region.as_deref())
            .map(str::parse::<SubRegion>)
            .transpose()?;
        let postcode = non_blank(raw.postcode.as_deref()).map(str::to_string);

        if sub_region.is_none() && opts.detect_sub_region_from_postcode {
            if let Some(code) = postcode.as_deref() {
                sub_region = detect_sub_region_from_postal_code(code);
                if let Some(sub) = sub_region {
                    tracing::debug!(postcode = code, sub_region = %sub, "sub-region detected");
                }
            }
        }

        Ok(Self {
            canton,
            sub_region,
            postcode,
        })
    }
}

impl JobLocationAttributes {
    /// A listing with only a primary canton.
    pub fn in_canton(canton: Canton) -> Self {
        Self {
            primary_canton: Some(canton),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sub_region(mut self, sub_region: SubRegion) -> Self {
        self.primary_sub_region = Some(sub_region);
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn remote(mut self, allows_remote: bool) -> Self {
        self.allows_remote = allows_remote;
        self
    }

    /// Adds a location and marks the listing as multi-location.
    #[must_use]
    pub fn with_location(mut self, location: AdditionalLocation) -> Self {
        self.additional_locations.push(location);
        self.has_multiple_locations = true;
        self
    }

    /// Validates a raw record. Unknown canton or sub-region codes fail here,
    /// at the boundary, so the rest of the crate can trust the types.
    /// Blank strings count as absent.
    pub fn from_raw(raw: JobLocationRaw, opts: &IngestOptions) -> Result<Self, ClassificationError> {
        let primary_canton = non_blank(raw.primary_canton_code.as_deref())
            .map(str::parse::<Canton>)
            .transpose()?;
        let primary_sub_region = non_blank(raw.primary_sub_region.as_deref())
            .map(str::parse::<SubRegion>)
            .transpose()?;
        let additional_locations = raw
            .additional_locations
            .into_iter()
            .map(|loc| AdditionalLocation::from_raw(loc, opts))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            primary_canton,
            primary_sub_region,
            city: non_blank(raw.city.as_deref()).map(str::to_string),
            allows_remote: raw.allows_remote,
            has_multiple_locations: raw.has_multiple_locations,
            additional_locations,
        })
    }

    /// Primary canton followed by each additional location's canton.
    pub fn cantons(&self) -> impl Iterator<Item = Canton> + '_ {
        self.primary_canton
            .into_iter()
            .chain(self.additional_locations.iter().map(|l| l.canton))
    }

    /// Primary sub-region followed by each additional location's sub-region.
    pub fn sub_regions(&self) -> impl Iterator<Item = SubRegion> + '_ {
        self.primary_sub_region
            .into_iter()
            .chain(self.additional_locations.iter().filter_map(|l| l.sub_region))
    }
}

impl TryFrom<JobLocationRaw> for JobLocationAttributes {
    type Error = ClassificationError;

    fn try_from(raw: JobLocationRaw) -> Result<Self, Self::Error> {
        Self::from_raw(raw, &IngestOptions::default())
    }
}
