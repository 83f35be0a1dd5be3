use inaho::{Inaho, RawRow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the facade with the default windows (1995-2020 observed,
    // 2025-2050 projected every five years).
    let inaho = Inaho::builder().build()?;

    // 2. A small slice of the worker-count table, cells as the spreadsheet
    // export delivers them: thousands separators and a suppressed value.
    let mut rows = Vec::new();
    for (year, value) in [
        (1995, "2,560"),
        (2000, "2,400"),
        (2005, "2,240"),
        (2010, "…"),
        (2015, "1,920"),
        (2020, "1,760"),
    ] {
        rows.push(RawRow {
            key: "秋田".to_string(),
            year,
            value: value.to_string(),
        });
    }

    // 3. Coerce and forecast in one call.
    let outcome = inaho.forecast_raw(rows)?;

    println!(
        "## Merged series ({} rows, {} dropped cell(s)):",
        outcome.series.len(),
        outcome.report.dropped_rows
    );
    for row in &outcome.series.rows {
        let tag = if row.projected { "forecast" } else { "observed" };
        println!("  {} {} {:>8.1} [{}]", row.key, row.year, row.value, tag);
    }

    Ok(())
}
