//! Plain-text rendering of the analysis view model

use gitcadence_view::{ChartPoint, FrontendViewModel};
use std::fmt::Write;

/// Render the view model as a terminal report
pub fn render(view: &FrontendViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Repository:     {}", view.repository_name);
    let _ = writeln!(out, "Time span:      {}", view.time_str);
    let _ = writeln!(out, "Total commits:  {}", view.total_count);
    let _ = writeln!(out, "996 index:      {}", view.index996);
    let _ = writeln!(
        out,
        "Working type:   {} ({})",
        view.working_type, view.working_type_str
    );
    let _ = writeln!(out, "Overtime ratio: {}", view.overtime_ratio);
    if !view.is_standard {
        let _ = writeln!(out, "Note: small sample, cadence may not be representative");
    }

    if !view.hour_distribution.is_empty() {
        let _ = writeln!(out, "\nCommits by hour:");
        render_points(&mut out, &view.hour_distribution);
    }

    if !view.week_distribution.is_empty() {
        let _ = writeln!(out, "\nCommits by weekday:");
        render_points(&mut out, &view.week_distribution);
    }

    if !view.contributors.is_empty() {
        let _ = writeln!(out, "\nTop contributors:");
        for contributor in &view.contributors {
            let _ = writeln!(
                out,
                "  {:<24} {:>6} commits  {:>5.1}%",
                contributor.name, contributor.commits, contributor.percentage
            );
        }
    }

    out
}

fn render_points(out: &mut String, points: &[ChartPoint]) {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
    for point in points {
        let bar_len = if max == 0 {
            0
        } else {
            (point.value * 30 / max) as usize
        };
        let _ = writeln!(
            out,
            "  {:>6}  {:>6}  {}",
            point.label,
            point.value,
            "#".repeat(bar_len)
        );
    }
}
