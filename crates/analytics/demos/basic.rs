//! Basic example building every analytics view from a small dataset
//!
//! Run with: cargo run --example basic -p analytics

use analytics::prelude::*;

fn main() -> Result<()> {
    println!("=== analytics Basic Example ===\n");

    let records = vec![
        Record::new("KERALA", "2025-01", 1_200, 9_000, 14_000),
        Record::new("BIHAR", "2025-01", 8_500, 40_000, 52_000),
        Record::new("MEGHALAYA", "2025-01", 90, 2_400, 1_100),
        Record::new("KERALA", "2025-02", 1_400, 9_500, 15_000),
        Record::new("BIHAR", "2025-02", 9_100, 41_000, 50_500),
        Record::new("MEGHALAYA", "2025-02", 60, 2_100, 3_400),
        Record::new("KERALA", "2025-03", 1_300, 8_800, 14_200),
        Record::new("BIHAR", "2025-03", 9_700, 39_500, 51_000),
        Record::new("MEGHALAYA", "2025-03", 75, 1_900, 2_000),
    ];

    let views = build_views(&records)?;

    println!("1. Region summaries");
    for summary in views.summaries.values() {
        println!(
            "   {:<10} enrol={:>6} demo/enrol={:>6.2} bio/enrol={:>6.2}",
            summary.region, summary.total_enrolments, summary.demo_per_enrol, summary.bio_per_enrol
        );
    }

    println!("\n2. Anomalies");
    for point in views.anomalies.iter().filter(|p| p.is_anomaly) {
        println!("   {}", point.region());
    }

    println!("\n3. Top regions by enrolment");
    if let Some(top) = views.ranking(Metric::TotalEnrolments) {
        for (rank, summary) in top.iter().enumerate() {
            println!("   #{} {}", rank + 1, summary.region);
        }
    }

    println!("\n4. Forecast");
    for point in &views.forecast {
        println!(
            "   {}: linear={:.0} moving_avg={:.0}",
            point.period_label, point.linear_regression, point.moving_average
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
