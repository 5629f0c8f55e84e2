//! Wire types for the analysis backend contract
//!
//! These mirror the backend's JSON shapes verbatim (camelCase on the wire).
//! Documented invariants (hour coverage, commit-count sums, ordering) are the
//! service's contract and are not re-validated on this side.

use serde::{Deserialize, Serialize};

/// Identifies one analysis job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Repository URL to analyze (required, non-empty)
    pub git_url: String,

    /// Branch to analyze (backend default: main/master)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Maximum commits to analyze (backend treats 0 as "all")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_commits: Option<u32>,

    /// Author email filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
}

impl AnalysisRequest {
    /// Create a request for the given repository URL
    pub fn new(git_url: impl Into<String>) -> Self {
        Self {
            git_url: git_url.into(),
            branch: None,
            max_commits: None,
            author_email: None,
        }
    }

    /// Set the branch to analyze
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Cap the number of commits analyzed
    pub fn with_max_commits(mut self, max_commits: u32) -> Self {
        self.max_commits = Some(max_commits);
        self
    }

    /// Restrict the analysis to a single author
    pub fn with_author_email(mut self, author_email: impl Into<String>) -> Self {
        self.author_email = Some(author_email.into());
        self
    }
}

/// Commit span covered by an analysis.
///
/// `start <= end` by service contract; both are date strings as produced by
/// the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start: String,
    pub end: String,
    pub duration_days: u64,
}

/// Commit count for one hour of the day (0..=23).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    pub hour: u8,
    pub count: u64,
    pub percentage: f64,
}

/// Commit count for one day of the week (0..=6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekBucket {
    pub day: u8,
    pub day_name: String,
    pub count: u64,
    pub percentage: f64,
}

/// Backend-computed cadence statistics.
///
/// `working_type` is an opaque backend-assigned label ("995", "996", "007",
/// "Open Source", ...). `overtime_ratio` is carried through literally; its
/// scale (0..1 vs 0..100) is the backend's convention and is not normalized
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub index996: f64,
    pub working_type: String,
    pub overtime_ratio: f64,
    pub workday_commits: u64,
    pub weekend_commits: u64,
    pub work_hour_commits: u64,
    pub after_hour_commits: u64,
}

/// One contributor row, ordered by commit count descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub name: String,
    pub email: String,
    pub commits: u64,
    pub percentage: f64,
}

/// Full analysis payload received from the backend.
///
/// Owned by the request that produced it; a superseding request replaces it
/// wholesale, there is no merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub repository_name: String,
    pub total_commits: u64,
    pub time_range: TimeRange,
    pub hour_distribution: Vec<HourBucket>,
    pub week_distribution: Vec<WeekBucket>,
    pub statistics: Statistics,
    pub top_contributors: Vec<Contributor>,
}

/// Transport envelope used by every backend endpoint.
///
/// `code == 200` is the only success sentinel; any other code is an
/// application-level failure even when the HTTP call itself succeeded.
/// Error envelopes may omit `data` entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    /// Whether the envelope signals application-level success
    pub fn is_success(&self) -> bool {
        self.code == 200
    }
}
