// crates/swissgeo-core/src/loader.rs

//! # Record Loader
//!
//! Reads job records (an id plus the raw location fields) from JSON and
//! classifies them. Used by the CLI and the demos; the core itself never
//! touches the filesystem.

use crate::config::IngestOptions;
use crate::error::{GeoError, Result};
use crate::job::{JobLocationAttributes, JobLocationRaw};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// One job listing as exported by the job-board side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub location: JobLocationRaw,
}

/// A record whose location passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedJob {
    pub id: String,
    pub title: Option<String>,
    pub location: JobLocationAttributes,
}

impl JobRecord {
    pub fn classify(self, opts: &IngestOptions) -> Result<ClassifiedJob> {
        let id = self.id;
        let location = JobLocationAttributes::from_raw(self.location, opts).map_err(|err| {
            tracing::warn!(job = %id, error = %err, "rejecting job record");
            GeoError::Classification(err)
        })?;
        Ok(ClassifiedJob {
            id,
            title: self.title,
            location,
        })
    }
}

/// Parses a JSON array of [`JobRecord`]s and classifies each one.
///
/// Fails on the first record with an unknown code.
pub fn read_jobs<R: Read>(reader: R, opts: &IngestOptions) -> Result<Vec<ClassifiedJob>> {
    let records: Vec<JobRecord> = serde_json::from_reader(reader)?;
    tracing::debug!(records = records.len(), "job records parsed");
    records.into_iter().map(|r| r.classify(opts)).collect()
}

pub fn load_jobs_from_path(path: impl AsRef<Path>, opts: &IngestOptions) -> Result<Vec<ClassifiedJob>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(GeoError::NotFound(format!(
                "Job records not found at {}: {}",
                path.display(),
                e
            )));
        }
        Err(e) => return Err(e.into()),
    };
    read_jobs(BufReader::new(file), opts)
}
