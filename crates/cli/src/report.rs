//! Human-readable rendering of the analytics views.

use std::fmt::{self, Write};

use analytics::{
    region_totals, top_by_bio_ratio, top_by_demo_ratio, AnalyticsViews, MetricSource,
    RegionFilter,
};

/// Number of regions listed in each ratio leaderboard.
const LEADERBOARD_SIZE: usize = 5;

/// Format a count with Indian unit scaling: crore, lakh, thousand.
pub fn format_count(value: f64) -> String {
    if value >= 10_000_000.0 {
        format!("{:.2}Cr", value / 10_000_000.0)
    } else if value >= 100_000.0 {
        format!("{:.2}L", value / 100_000.0)
    } else if value >= 1_000.0 {
        format!("{:.2}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Write the dashboard report for the selected region into `out`.
pub fn render<W: Write>(out: &mut W, views: &AnalyticsViews, filter: &RegionFilter) -> fmt::Result {
    let totals = region_totals(&views.summaries, filter);
    let label = match filter {
        RegionFilter::All => "All Regions",
        RegionFilter::Region(name) => name.as_str(),
    };

    writeln!(out, "=== Trends: {} ===", label)?;
    writeln!(
        out,
        "  Enrolments: {}  Demo updates: {}  Bio updates: {}",
        format_count(totals.total_enrolments as f64),
        format_count(totals.total_demographic_updates as f64),
        format_count(totals.total_biometric_updates as f64),
    )?;

    for (metric, ranking) in &views.ranked {
        writeln!(out, "\nTop {} by {}", ranking.len(), metric)?;
        for (rank, summary) in ranking.iter().enumerate() {
            let value = summary.metric_value(*metric);
            let shown = if metric.is_total() {
                format_count(value)
            } else {
                format!("{:.2}", value)
            };
            writeln!(out, "  {:>2}. {:<40} {:>10}", rank + 1, summary.region, shown)?;
        }
    }

    let flagged: Vec<&str> = views
        .anomalies
        .iter()
        .filter(|p| p.is_anomaly)
        .map(|p| p.region())
        .collect();
    writeln!(out, "\n=== Anomalies ({} flagged) ===", flagged.len())?;
    for region in &flagged {
        writeln!(out, "  ! {}", region)?;
    }

    if !views.anomalies.is_empty() {
        writeln!(out, "\nTop {} - Demo updates ratio", LEADERBOARD_SIZE)?;
        for point in top_by_demo_ratio(&views.anomalies, LEADERBOARD_SIZE) {
            writeln!(out, "  {:<40} {:>8.2}", point.region(), point.summary.demo_per_enrol)?;
        }
        writeln!(out, "\nTop {} - Bio updates ratio", LEADERBOARD_SIZE)?;
        for point in top_by_bio_ratio(&views.anomalies, LEADERBOARD_SIZE) {
            writeln!(out, "  {:<40} {:>8.2}", point.region(), point.summary.bio_per_enrol)?;
        }
    }

    writeln!(out, "\n=== Forecast ===")?;
    if views.forecast.is_empty() {
        writeln!(out, "  Not enough monthly history to forecast")?;
    }
    for point in &views.forecast {
        writeln!(
            out,
            "  {:<12} linear: {:>10}  moving avg: {:>10}",
            point.period_label,
            format_count(point.linear_regression),
            format_count(point.moving_average),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::{build_views, Record};

    #[test]
    fn test_format_count_units() {
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1_500.0), "1.50K");
        assert_eq!(format_count(250_000.0), "2.50L");
        assert_eq!(format_count(31_000_000.0), "3.10Cr");
    }

    #[test]
    fn test_render_includes_every_section() {
        let records = vec![
            Record::new("GOA", "2025-01", 10, 600, 10),
            Record::new("PUNJAB", "2025-01", 2_000, 300, 10),
            Record::new("GOA", "2025-02", 10, 0, 0),
            Record::new("PUNJAB", "2025-03", 2_000, 0, 0),
        ];
        let views = build_views(&records).unwrap();
        let mut text = String::new();
        render(&mut text, &views, &RegionFilter::All).unwrap();

        assert!(text.contains("=== Trends: All Regions ==="));
        assert!(text.contains("Enrolments: 4.02K"));
        assert!(text.contains("Top 2 by total_enrolments"));
        assert!(text.contains("=== Anomalies (1 flagged) ==="));
        assert!(text.contains("! GOA"));
        assert!(text.contains("Forecast +3"));
    }

    #[test]
    fn test_render_single_region_without_forecast() {
        let records = vec![Record::new("GOA", "2025-01", 10, 30, 40)];
        let views = build_views(&records).unwrap();
        let mut text = String::new();
        render(&mut text, &views, &RegionFilter::parse("GOA")).unwrap();

        assert!(text.contains("=== Trends: GOA ==="));
        assert!(text.contains("Enrolments: 10"));
        assert!(text.contains("Not enough monthly history"));
    }
}
