use inaho_core::RegionMap;

#[test]
fn japan_map_covers_all_prefectures() {
    let map = RegionMap::japan();
    assert_eq!(map.len(), 47);
    assert_eq!(map.categories().len(), 7);

    assert_eq!(map.category_of("北海道"), Some("北海道-東北"));
    assert_eq!(map.category_of("東京"), Some("関東"));
    assert_eq!(map.category_of("沖縄"), Some("九州-沖縄"));
    // The nationwide pseudo-key is deliberately unmapped.
    assert_eq!(map.category_of("全国"), None);
}

#[test]
fn category_order_matches_the_dashboard() {
    let map = RegionMap::japan();
    assert_eq!(
        map.categories(),
        &[
            "北海道-東北",
            "関東",
            "中部",
            "近畿",
            "中国",
            "四国",
            "九州-沖縄",
        ]
    );
    assert_eq!(map.keys_in("四国"), &["徳島", "香川", "愛媛", "高知"]);
    assert!(map.keys_in("存在しない").is_empty());
    assert!(map.has_category("中部"));
    assert!(!map.has_category("全国"));
}

#[test]
fn custom_maps_keep_entry_order_and_roundtrip() {
    let map = RegionMap::new(&[("east", &["a", "b"]), ("west", &["c"])]);
    assert_eq!(map.categories(), &["east", "west"]);
    assert_eq!(map.keys_in("east"), &["a", "b"]);

    let json = serde_json::to_string(&map).expect("serialize region map");
    let de: RegionMap = serde_json::from_str(&json).expect("deserialize region map");
    assert_eq!(de, map);
}
