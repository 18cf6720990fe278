use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Which flavour of the mock scrape endpoint produced a job result.
///
/// The variants differ only in the `jobId` prefix and the message attached to
/// the envelope; generation itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobVariant {
    #[default]
    Mock,
    Standalone,
}

impl JobVariant {
    #[must_use]
    pub fn job_id_prefix(self) -> &'static str {
        match self {
            JobVariant::Mock => "mock",
            JobVariant::Standalone => "standalone",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            JobVariant::Mock => "Mock scraping completed - database integration pending",
            JobVariant::Standalone => "Standalone function working - no bundling issues",
        }
    }
}

impl std::fmt::Display for JobVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.job_id_prefix())
    }
}

impl FromStr for JobVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(JobVariant::Mock),
            "standalone" => Ok(JobVariant::Standalone),
            other => Err(CoreError::UnknownJobVariant(other.to_string())),
        }
    }
}
