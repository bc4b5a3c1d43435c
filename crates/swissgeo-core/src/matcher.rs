// crates/swissgeo-core/src/matcher.rs

//! # Location matching
//!
//! Decides whether a job listing satisfies a [`SelectionState`].
//!
//! With the default [`MatchMode::StrictPrecedence`] the checks run in this
//! order and the first applicable one decides:
//!
//! 1. nothing selected → every listing matches;
//! 2. any sub-region selected → match on sub-regions only;
//! 3. any canton selected → match on cantons only;
//! 4. otherwise → match on the regions of the listing's cantons.
//!
//! Coarser selections stay in the state but are not consulted once a finer
//! level is non-empty, so a region filter stops applying as soon as any
//! sub-region is toggled. [`MatchMode::Union`] is the opt-in alternative.

use crate::config::{MatchMode, MatcherConfig};
use crate::job::JobLocationAttributes;
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationMatcher {
    config: MatcherConfig,
}

impl LocationMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn with_mode(mode: MatchMode) -> Self {
        Self::new(MatcherConfig { mode })
    }

    pub fn mode(&self) -> MatchMode {
        self.config.mode
    }

    pub fn matches(&self, selection: &SelectionState, job: &JobLocationAttributes) -> bool {
        let matched = match self.config.mode {
            MatchMode::StrictPrecedence => strict_precedence(selection, job),
            MatchMode::Union => union(selection, job),
        };
        tracing::trace!(
            mode = ?self.config.mode,
            primary_canton = ?job.primary_canton,
            matched,
            "location match"
        );
        matched
    }

    /// Lazily keeps the listings that match `selection`.
    pub fn filter<'a, I>(
        &'a self,
        selection: &'a SelectionState,
        jobs: I,
    ) -> impl Iterator<Item = &'a JobLocationAttributes> + 'a
    where
        I: IntoIterator<Item = &'a JobLocationAttributes>,
        I::IntoIter: 'a,
    {
        jobs.into_iter().filter(move |job| self.matches(selection, job))
    }
}

fn by_sub_region(selection: &SelectionState, job: &JobLocationAttributes) -> bool {
    job.sub_regions().any(|s| selection.sub_regions().contains(&s))
}

fn by_canton(selection: &SelectionState, job: &JobLocationAttributes) -> bool {
    job.cantons().any(|c| selection.cantons().contains(&c))
}

fn by_region(selection: &SelectionState, job: &JobLocationAttributes) -> bool {
    job.cantons().any(|c| selection.regions().contains(&c.region()))
}

fn strict_precedence(selection: &SelectionState, job: &JobLocationAttributes) -> bool {
    if selection.is_empty() {
        true
    } else if !selection.sub_regions().is_empty() {
        by_sub_region(selection, job)
    } else if !selection.cantons().is_empty() {
        by_canton(selection, job)
    } else {
        by_region(selection, job)
    }
}

fn union(selection: &SelectionState, job: &JobLocationAttributes) -> bool {
    selection.is_empty()
        || (!selection.sub_regions().is_empty() && by_sub_region(selection, job))
        || (!selection.cantons().is_empty() && by_canton(selection, job))
        || (!selection.regions().is_empty() && by_region(selection, job))
}

/// Independent predicate on the "allows remote" flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteFilter {
    #[default]
    Any,
    RemoteOnly,
    OnSiteOnly,
}

impl RemoteFilter {
    pub fn matches(self, job: &JobLocationAttributes) -> bool {
        match self {
            RemoteFilter::Any => true,
            RemoteFilter::RemoteOnly => job.allows_remote,
            RemoteFilter::OnSiteOnly => !job.allows_remote,
        }
    }
}

/// Location matcher and remote predicate applied together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub location: LocationMatcher,
    pub remote: RemoteFilter,
}

impl JobFilter {
    pub fn matches(&self, selection: &SelectionState, job: &JobLocationAttributes) -> bool {
        self.remote.matches(job) && self.location.matches(selection, job)
    }
}
