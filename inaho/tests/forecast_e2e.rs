use inaho::{Inaho, InahoError, Observation, RawRow, Selection, ShortSeriesPolicy};

fn raw(key: &str, year: i32, value: &str) -> RawRow {
    RawRow {
        key: key.to_string(),
        year,
        value: value.to_string(),
    }
}

fn prefecture_rows(key: &str, start_value: f64) -> Vec<Observation> {
    (0..6)
        .map(|i| Observation::new(key, 1995 + i * 5, start_value - f64::from(i) * 10.0))
        .collect()
}

#[test]
fn raw_table_flows_through_to_a_chart() {
    let inaho = Inaho::builder().build().expect("default config is valid");

    let mut rows = Vec::new();
    for (key, base) in [("東京", "1,200"), ("神奈川", "900")] {
        let base: f64 = base.replace(',', "").parse().unwrap();
        for i in 0..6 {
            rows.push(raw(
                key,
                1995 + i * 5,
                &format!("{}", base - f64::from(i) * 50.0),
            ));
        }
    }
    // One suppressed cell and one garbage cell on a third key.
    rows.push(raw("千葉", 1995, "800"));
    rows.push(raw("千葉", 2000, "…"));
    rows.push(raw("千葉", 2005, "約700"));
    rows.push(raw("千葉", 2010, "650"));

    let outcome = inaho.forecast_raw(rows).expect("forecast succeeds");

    // 2 dropped cells for 千葉, one of them garbage.
    assert_eq!(outcome.report.dropped_rows, 2);
    assert_eq!(outcome.report.warnings.len(), 1);
    assert!(matches!(
        outcome.report.warnings[0],
        InahoError::NonNumeric { .. }
    ));
    assert_eq!(outcome.report.fitted_keys, 3);

    // Forecast rows exist for every key and every projection year.
    assert_eq!(outcome.series.forecast().count(), 3 * 6);
    assert!(outcome.series.forecast().all(|r| r.year >= 2025));
    assert!(outcome.series.forecast().all(|r| r.value >= 0.0));

    // All three keys are 関東 prefectures, so the nationwide chart collapses
    // them into a single category series.
    let chart = inaho
        .chart(&outcome.series, &Selection::all())
        .expect("chart succeeds");
    assert_eq!(chart.groups.len(), 1);
    assert_eq!(chart.groups[0].label, "関東");
}

#[test]
fn skip_policy_report_travels_through_the_facade() {
    let inaho = Inaho::builder()
        .short_series(ShortSeriesPolicy::Skip)
        .build()
        .expect("valid config");

    let mut rows = prefecture_rows("広島", 500.0);
    rows.push(Observation::new("山口", 2020, 40.0));

    let outcome = inaho.forecast(&rows).expect("partial forecast succeeds");
    assert_eq!(outcome.report.skipped_keys, vec!["山口".to_string()]);
    assert_eq!(outcome.report.fitted_keys, 1);
    assert_eq!(outcome.series.rows_for("山口").count(), 1);
}

#[test]
fn outcomes_serialize_for_downstream_renderers() {
    let inaho = Inaho::builder().build().expect("valid config");
    let outcome = inaho
        .forecast(&prefecture_rows("福岡", 300.0))
        .expect("forecast succeeds");

    let json = serde_json::to_string(&outcome.series).expect("serialize series");
    let de: inaho::MergedSeries = serde_json::from_str(&json).expect("deserialize series");
    assert_eq!(de, outcome.series);

    let chart = inaho
        .chart(&outcome.series, &Selection::category("九州-沖縄"))
        .expect("chart succeeds");
    let json = serde_json::to_string(&chart).expect("serialize chart");
    assert!(json.contains("福岡"));
}
