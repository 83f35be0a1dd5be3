use inaho::{Inaho, Observation, Selection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Forward estimator diagnostics (dropped cells, skipped keys) to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let inaho = Inaho::builder().build()?;

    // 1. Observed worker counts for a handful of prefectures.
    let mut rows = Vec::new();
    for (key, base) in [
        ("北海道", 1060.0),
        ("青森", 520.0),
        ("秋田", 480.0),
        ("東京", 90.0),
        ("千葉", 310.0),
    ] {
        for i in 0..6i32 {
            rows.push(Observation::new(
                key,
                1995 + i * 5,
                base - f64::from(i) * (base / 12.0),
            ));
        }
    }

    // 2. Extend with the per-prefecture linear forecast.
    let outcome = inaho.forecast(&rows)?;

    // 3. The nationwide view stacks one series per region category.
    let chart = inaho.chart(&outcome.series, &Selection::all())?;
    println!("## Nationwide, grouped by region:");
    for group in &chart.groups {
        println!(
            "  {}: {} observed / {} forecast bars",
            group.label,
            group.observed.len(),
            group.forecast.len()
        );
    }
    for (year, total) in &chart.totals {
        println!("  total {year}: {total:.0}");
    }

    // 4. Zooming into one category stacks one series per prefecture.
    let chart = inaho.chart(
        &outcome.series,
        &Selection::category("北海道-東北").with_keys(["青森", "秋田"]),
    )?;
    println!("## 北海道-東北, 青森 and 秋田 only:");
    for group in &chart.groups {
        println!("  {}: first bar {:?}", group.label, group.observed.first());
    }

    Ok(())
}
