//! Prefecture-to-region grouping used by the Japanese agricultural datasets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping from grouping keys to a coarser display category, plus the order
/// in which categories are presented.
///
/// A key listed under two categories keeps the last one. Keys absent from the
/// map have no category and are excluded when a chart groups by category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionMap {
    categories: Vec<String>,
    members: HashMap<String, Vec<String>>,
    lookup: HashMap<String, String>,
}

impl RegionMap {
    /// Build a map from `(category, keys)` entries in display order.
    #[must_use]
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let mut categories = Vec::with_capacity(entries.len());
        let mut members: HashMap<String, Vec<String>> = HashMap::new();
        let mut lookup = HashMap::new();
        for (category, keys) in entries {
            categories.push((*category).to_string());
            let list = members.entry((*category).to_string()).or_default();
            for key in *keys {
                list.push((*key).to_string());
                lookup.insert((*key).to_string(), (*category).to_string());
            }
        }
        Self {
            categories,
            members,
            lookup,
        }
    }

    /// The 47-prefecture to 8-region grouping from the worker-demographics
    /// dashboard.
    #[must_use]
    pub fn japan() -> Self {
        Self::new(&[
            (
                "北海道-東北",
                &["北海道", "青森", "岩手", "宮城", "秋田", "山形", "福島"],
            ),
            (
                "関東",
                &["茨城", "栃木", "群馬", "埼玉", "千葉", "東京", "神奈川"],
            ),
            (
                "中部",
                &[
                    "新潟", "富山", "石川", "福井", "山梨", "長野", "岐阜", "静岡", "愛知",
                ],
            ),
            (
                "近畿",
                &["三重", "滋賀", "京都", "大阪", "兵庫", "奈良", "和歌山"],
            ),
            ("中国", &["鳥取", "島根", "岡山", "広島", "山口"]),
            ("四国", &["徳島", "香川", "愛媛", "高知"]),
            (
                "九州-沖縄",
                &[
                    "福岡", "佐賀", "長崎", "熊本", "大分", "宮崎", "鹿児島", "沖縄",
                ],
            ),
        ])
    }

    /// The display category for `key`, if it has one.
    #[must_use]
    pub fn category_of(&self, key: &str) -> Option<&str> {
        self.lookup.get(key).map(String::as_str)
    }

    /// Whether `category` exists in this map.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.members.contains_key(category)
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Keys belonging to `category`, in entry order. Empty for an unknown
    /// category.
    #[must_use]
    pub fn keys_in(&self, category: &str) -> &[String] {
        self.members.get(category).map_or(&[], Vec::as_slice)
    }

    /// Total number of mapped keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether the map has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
