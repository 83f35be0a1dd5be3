use inaho::{HistoricalWindow, Inaho, InahoError, ProjectionWindow};

#[test]
fn default_builder_builds() {
    let inaho = Inaho::builder().build().expect("defaults are valid");
    assert_eq!(inaho.config().historical.start, 1995);
    assert_eq!(inaho.regions().len(), 47);
}

#[test]
fn overlapping_windows_fail_to_build() {
    let res = Inaho::builder()
        .historical(HistoricalWindow {
            start: 1995,
            end: 2030,
        })
        .projection(ProjectionWindow {
            start: 2025,
            end: 2050,
            step: 5,
        })
        .build();
    assert!(matches!(res, Err(InahoError::InvalidArg(_))));
}

#[test]
fn zero_step_fails_to_build() {
    let res = Inaho::builder()
        .projection(ProjectionWindow {
            start: 2025,
            end: 2050,
            step: 0,
        })
        .build();
    assert!(matches!(res, Err(InahoError::InvalidArg(_))));
}

#[test]
fn custom_windows_shape_the_forecast() {
    let inaho = Inaho::builder()
        .historical(HistoricalWindow {
            start: 1985,
            end: 2020,
        })
        .projection(ProjectionWindow {
            start: 2030,
            end: 2040,
            step: 10,
        })
        .build()
        .expect("valid config");

    let rows = vec![
        inaho::Observation::new("静岡", 1985, 100.0),
        inaho::Observation::new("静岡", 2020, 30.0),
    ];
    let outcome = inaho.forecast(&rows).expect("forecast succeeds");
    let years: Vec<i32> = outcome.series.forecast().map(|r| r.year).collect();
    assert_eq!(years, vec![2030, 2040]);
}
