//! Pipeline orchestration
//!
//! This module provides the public API of the fitness tracker.
//! It runs sensor packages through dispatch, metric computation and formatting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dispatcher::read_package;
use crate::error::WorkoutError;
use crate::package::SensorPackage;
use crate::summary::format_summary;
use crate::types::Summary;
use crate::{PRODUCER_NAME, TRACKER_VERSION};

/// Compute the summary for one sensor package.
///
/// # Arguments
/// * `code` - Workout code ("RUN", "WLK", "SWM")
/// * `data` - Readings in positional order
pub fn process_package(code: &str, data: &[f64]) -> Result<Summary, WorkoutError> {
    let workout = read_package(code, data)?;
    let summary = workout.summary();
    tracing::debug!(
        kind = %summary.kind,
        distance = summary.distance,
        speed = summary.speed,
        calories = summary.calories,
        "computed workout summary"
    );
    Ok(summary)
}

/// Compute and format the report line for one sensor package.
///
/// # Example
/// ```
/// use fitness_tracker::describe_package;
///
/// let line = describe_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
/// assert!(line.starts_with("Тип тренировки: Swimming;"));
/// ```
pub fn describe_package(code: &str, data: &[f64]) -> Result<String, WorkoutError> {
    process_package(code, data).map(|summary| format_summary(&summary))
}

/// What to do when a package in a batch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing package, keeping the summaries before it
    #[default]
    Abort,
    /// Record the failure and continue with the next package
    SkipInvalid,
}

/// Producer information attached to batch reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    pub name: String,
    pub version: String,
}

/// Summary of one successfully processed package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    /// Position of the package in the batch
    pub index: usize,
    #[serde(flatten)]
    pub summary: Summary,
}

/// A package that failed to process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFailure {
    /// Position of the package in the batch
    pub index: usize,
    pub workout_type: String,
    /// Machine-readable error kind
    pub error_code: String,
    pub message: String,
}

impl RecordFailure {
    fn new(index: usize, workout_type: &str, error: &WorkoutError) -> Self {
        Self {
            index,
            workout_type: workout_type.to_string(),
            error_code: error.kind_code().to_string(),
            message: error.to_string(),
        }
    }
}

/// Result of processing a batch of packages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub producer: Producer,
    pub computed_at_utc: DateTime<Utc>,
    pub summaries: Vec<RecordSummary>,
    /// Packages skipped under [`BatchPolicy::SkipInvalid`]
    pub failures: Vec<RecordFailure>,
    /// Package that stopped the batch under [`BatchPolicy::Abort`]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub aborted: Option<RecordFailure>,
}

impl BatchReport {
    /// Report lines for every successful package, in batch order
    pub fn lines(&self) -> Vec<String> {
        self.summaries
            .iter()
            .map(|record| format_summary(&record.summary))
            .collect()
    }

    /// True when every package in the batch was processed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.aborted.is_none()
    }
}

/// Batch processor for a sequence of sensor packages.
///
/// Packages are processed in order and independently of one another.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    policy: BatchPolicy,
}

impl BatchProcessor {
    /// Create a processor that aborts on the first failure
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    /// Process the packages in order.
    ///
    /// Under [`BatchPolicy::Abort`] processing stops at the first failing
    /// package; summaries computed before it are kept in the report.
    pub fn process(&self, packages: &[SensorPackage]) -> BatchReport {
        let mut summaries = Vec::with_capacity(packages.len());
        let mut failures = Vec::new();
        let mut aborted = None;

        for (index, package) in packages.iter().enumerate() {
            let e = match process_package(&package.workout_type, &package.data) {
                Ok(summary) => {
                    summaries.push(RecordSummary { index, summary });
                    continue;
                }
                Err(e) => e,
            };

            let failure = RecordFailure::new(index, &package.workout_type, &e);
            match self.policy {
                BatchPolicy::Abort => {
                    tracing::error!(
                        index,
                        workout_type = %package.workout_type,
                        error = %e,
                        "stopping batch at invalid sensor package"
                    );
                    aborted = Some(failure);
                    break;
                }
                BatchPolicy::SkipInvalid => {
                    tracing::warn!(
                        index,
                        workout_type = %package.workout_type,
                        error = %e,
                        "skipping invalid sensor package"
                    );
                    failures.push(failure);
                }
            }
        }

        BatchReport {
            producer: Producer {
                name: PRODUCER_NAME.to_string(),
                version: TRACKER_VERSION.to_string(),
            },
            computed_at_utc: Utc::now(),
            summaries,
            failures,
            aborted,
        }
    }
}
