//! Presentation view model for analysis results
//!
//! Pure conversion from the backend's `AnalysisResult` into the shape the
//! result page renders. Total over any well-formed input: no suspension, no
//! side effects, no failure mode.

use gitcadence_core::types::{AnalysisResult, Contributor};
use serde::Serialize;

/// A single labeled value ready for charting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

/// Presentation-ready analysis summary.
///
/// Derived and ephemeral: recomputed for every result, never persisted, no
/// lifecycle beyond the render that consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontendViewModel {
    pub repository_name: String,
    pub total_count: u64,
    /// "start ~ end" of the analyzed commit span
    pub time_str: String,
    pub index996: f64,
    /// Backend-assigned label, verbatim
    pub working_type: String,
    /// Human-readable description of `working_type`
    pub working_type_str: String,
    /// Backend's literal overtime ratio; its scale is the backend's
    /// convention and is not normalized here
    pub overtime_ratio: f64,
    /// Whether the sample is large enough to be meaningful
    pub is_standard: bool,
    pub hour_distribution: Vec<ChartPoint>,
    pub week_distribution: Vec<ChartPoint>,
    pub contributors: Vec<Contributor>,
}

/// Commit-count threshold below which the sample is flagged as too small
const STANDARD_SAMPLE_THRESHOLD: u64 = 50;

/// Convert a backend analysis result into the presentation view model.
///
/// Deterministic given its input; the input is never mutated. Empty
/// distributions produce empty views.
pub fn convert(result: &AnalysisResult) -> FrontendViewModel {
    FrontendViewModel {
        repository_name: result.repository_name.clone(),
        total_count: result.total_commits,
        time_str: format!("{} ~ {}", result.time_range.start, result.time_range.end),
        index996: result.statistics.index996,
        working_type: result.statistics.working_type.clone(),
        working_type_str: working_type_description(&result.statistics.working_type),
        overtime_ratio: result.statistics.overtime_ratio,
        is_standard: result.total_commits > STANDARD_SAMPLE_THRESHOLD,
        hour_distribution: result
            .hour_distribution
            .iter()
            .map(|h| ChartPoint {
                label: format!("{}:00", h.hour),
                value: h.count,
            })
            .collect(),
        week_distribution: result
            .week_distribution
            .iter()
            .map(|w| ChartPoint {
                label: short_day_name(&w.day_name),
                value: w.count,
            })
            .collect(),
        contributors: result.top_contributors.clone(),
    }
}

/// Describe a working-type label.
///
/// The table is closed over the four documented labels; anything else passes
/// through unchanged and acts as its own description.
pub fn working_type_description(working_type: &str) -> String {
    match working_type {
        "995" => "Normal working hours",
        "996" => "Work overtime occasionally",
        "007" => "Heavy overtime",
        "Open Source" => "Open source or flexible schedule",
        other => other,
    }
    .to_string()
}

// First three characters of the day name; shorter names pass through
// unpadded.
fn short_day_name(day_name: &str) -> String {
    day_name.chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitcadence_core::types::{HourBucket, Statistics, TimeRange, WeekBucket};

    fn sample_result(total_commits: u64, working_type: &str) -> AnalysisResult {
        AnalysisResult {
            repository_name: "r".to_string(),
            total_commits,
            time_range: TimeRange {
                start: "2023-01-01".to_string(),
                end: "2024-01-01".to_string(),
                duration_days: 365,
            },
            hour_distribution: vec![
                HourBucket {
                    hour: 0,
                    count: 1,
                    percentage: 5.0,
                },
                HourBucket {
                    hour: 9,
                    count: 12,
                    percentage: 60.0,
                },
            ],
            week_distribution: vec![
                WeekBucket {
                    day: 1,
                    day_name: "Monday".to_string(),
                    count: 30,
                    percentage: 50.0,
                },
                WeekBucket {
                    day: 6,
                    day_name: "Saturday".to_string(),
                    count: 5,
                    percentage: 8.3,
                },
            ],
            statistics: Statistics {
                index996: 0.42,
                working_type: working_type.to_string(),
                overtime_ratio: 0.3,
                workday_commits: 55,
                weekend_commits: 5,
                work_hour_commits: 40,
                after_hour_commits: 20,
            },
            top_contributors: vec![Contributor {
                name: "dev".to_string(),
                email: "dev@example.com".to_string(),
                commits: 42,
                percentage: 70.0,
            }],
        }
    }

    #[test]
    fn test_pass_through_fields() {
        let view = convert(&sample_result(60, "996"));

        assert_eq!(view.repository_name, "r");
        assert_eq!(view.total_count, 60);
        assert_eq!(view.index996, 0.42);
        assert_eq!(view.working_type, "996");
        assert_eq!(view.overtime_ratio, 0.3);
        assert_eq!(view.contributors.len(), 1);
        assert_eq!(view.contributors[0].name, "dev");
    }

    #[test]
    fn test_time_str_concatenation() {
        let view = convert(&sample_result(60, "996"));
        assert_eq!(view.time_str, "2023-01-01 ~ 2024-01-01");
    }

    #[test]
    fn test_working_type_table_is_exhaustive() {
        assert_eq!(working_type_description("995"), "Normal working hours");
        assert_eq!(working_type_description("996"), "Work overtime occasionally");
        assert_eq!(working_type_description("007"), "Heavy overtime");
        assert_eq!(
            working_type_description("Open Source"),
            "Open source or flexible schedule"
        );
    }

    #[test]
    fn test_unknown_working_type_passes_through() {
        assert_eq!(working_type_description("XYZ"), "XYZ");

        let view = convert(&sample_result(60, "XYZ"));
        assert_eq!(view.working_type_str, "XYZ");
    }

    #[test]
    fn test_is_standard_boundary() {
        assert!(!convert(&sample_result(50, "996")).is_standard);
        assert!(convert(&sample_result(51, "996")).is_standard);
        assert!(!convert(&sample_result(0, "996")).is_standard);
    }

    #[test]
    fn test_hour_labels_and_order() {
        let view = convert(&sample_result(60, "996"));

        assert_eq!(view.hour_distribution.len(), 2);
        assert_eq!(view.hour_distribution[0].label, "0:00");
        assert_eq!(view.hour_distribution[0].value, 1);
        assert_eq!(view.hour_distribution[1].label, "9:00");
        assert_eq!(view.hour_distribution[1].value, 12);
    }

    #[test]
    fn test_week_labels_truncate_to_three_chars() {
        let view = convert(&sample_result(60, "996"));

        assert_eq!(view.week_distribution[0].label, "Mon");
        assert_eq!(view.week_distribution[1].label, "Sat");
    }

    #[test]
    fn test_short_day_name_passes_through_unpadded() {
        assert_eq!(short_day_name("Mo"), "Mo");
        assert_eq!(short_day_name(""), "");
        assert_eq!(short_day_name("Wednesday"), "Wed");
    }

    #[test]
    fn test_empty_distributions_produce_empty_views() {
        let mut result = sample_result(10, "995");
        result.hour_distribution.clear();
        result.week_distribution.clear();
        result.top_contributors.clear();

        let view = convert(&result);

        assert!(view.hour_distribution.is_empty());
        assert!(view.week_distribution.is_empty());
        assert!(view.contributors.is_empty());
    }

    #[test]
    fn test_convert_is_deterministic_and_does_not_mutate() {
        let result = sample_result(60, "996");
        let before = result.clone();

        let first = convert(&result);
        let second = convert(&result);

        assert_eq!(first, second);
        assert_eq!(result, before);
    }
}
