use inaho_core::merge_rows;
use inaho_types::SeriesRow;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_rows(projected: bool, max: usize) -> impl Strategy<Value = Vec<SeriesRow>> {
    let keys = prop_oneof![
        Just("北海道".to_string()),
        Just("青森".to_string()),
        Just("秋田".to_string()),
        Just("沖縄".to_string()),
    ];
    let year = if projected {
        2025i32..2055
    } else {
        1995i32..2021
    };
    proptest::collection::vec(
        (keys, year, 0.0f64..100_000.0).prop_map(move |(key, year, value)| SeriesRow {
            key,
            year,
            value,
            projected,
        }),
        0..max,
    )
    .prop_map(|rows| {
        // Drop duplicate (key, year) pairs so the input satisfies the merge
        // contract; the duplicate case is tested separately.
        let mut seen = BTreeSet::new();
        rows.into_iter()
            .filter(|r| seen.insert((r.key.clone(), r.year)))
            .collect()
    })
}

proptest! {
    #[test]
    fn merged_output_is_sorted_and_unique(
        hist in arb_rows(false, 40),
        fore in arb_rows(true, 40),
    ) {
        let expected_len = hist.len() + fore.len();
        let merged = merge_rows(hist, fore).unwrap();

        prop_assert_eq!(merged.len(), expected_len);
        let mut seen = BTreeSet::new();
        let mut prev: Option<(String, i32)> = None;
        for r in &merged.rows {
            prop_assert!(seen.insert((r.key.clone(), r.year)));
            if let Some(p) = &prev {
                prop_assert!(*p <= (r.key.clone(), r.year));
            }
            prev = Some((r.key.clone(), r.year));
            // Window disjointness carries the flag through the merge intact.
            prop_assert_eq!(r.projected, r.year >= 2025);
        }
    }

    #[test]
    fn merge_of_history_alone_is_identity_up_to_order(hist in arb_rows(false, 40)) {
        let mut expected = hist.clone();
        expected.sort_by(|a, b| (&a.key, a.year).cmp(&(&b.key, b.year)));
        let merged = merge_rows(hist, vec![]).unwrap();
        prop_assert_eq!(merged.rows, expected);
    }

    #[test]
    fn colliding_rows_are_rejected(hist in arb_rows(false, 20)) {
        prop_assume!(!hist.is_empty());
        let dup = hist[0].clone();
        let res = merge_rows(hist, vec![dup]);
        prop_assert!(matches!(res, Err(inaho_types::InahoError::Data(_))));
    }
}
