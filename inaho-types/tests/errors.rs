use inaho_types::InahoError;

#[test]
fn flatten_unwraps_nested_aggregates() {
    let e = InahoError::AllKeysFailed(vec![
        InahoError::insufficient_data("鳥取", 1),
        InahoError::AllKeysFailed(vec![
            InahoError::insufficient_data("島根", 0),
            InahoError::data("duplicate row"),
        ]),
    ]);
    let flat = e.flatten();
    assert_eq!(flat.len(), 3);
    assert!(matches!(flat[0], InahoError::InsufficientData { .. }));
    assert!(matches!(flat[2], InahoError::Data(_)));
}

#[test]
fn recoverability_classification() {
    assert!(InahoError::insufficient_data("青森", 1).is_recoverable());
    assert!(InahoError::non_numeric("青森", 2000, "…").is_recoverable());
    assert!(!InahoError::invalid_arg("bad window").is_recoverable());
    assert!(!InahoError::data("duplicate").is_recoverable());

    // An aggregate is recoverable only if all members are.
    let mixed = InahoError::AllKeysFailed(vec![
        InahoError::insufficient_data("青森", 1),
        InahoError::data("duplicate"),
    ]);
    assert!(!mixed.is_recoverable());
}

#[test]
fn errors_roundtrip_through_serde() {
    let e = InahoError::non_numeric("秋田", 2005, "x");
    let json = serde_json::to_string(&e).expect("serialize error");
    let de: InahoError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, e);
}
