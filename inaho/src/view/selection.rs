use serde::{Deserialize, Serialize};

/// Row selection mirroring the dashboard sidebar.
///
/// The original UI first picks a region category (or the nationwide view),
/// then optionally narrows to a subset of prefectures within it. The chosen
/// scope also decides the grouping dimension: the nationwide view stacks one
/// series per region category, a category view stacks one series per key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Restrict to one region category. `None` selects the nationwide view.
    pub category: Option<String>,
    /// Restrict to these keys. `None` keeps every key in scope.
    pub keys: Option<Vec<String>>,
}

impl Selection {
    /// The nationwide view: every key, grouped by region category.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// One region category, grouped by key.
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            keys: None,
        }
    }

    /// Narrow the selection to an explicit set of keys.
    #[must_use]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the chart should group rows by region category rather than by
    /// individual key.
    #[must_use]
    pub const fn groups_by_category(&self) -> bool {
        self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nationwide_groups_by_category() {
        assert!(Selection::all().groups_by_category());
        assert!(!Selection::category("関東").groups_by_category());
        // Narrowing keys does not change the grouping dimension.
        assert!(Selection::all().with_keys(["東京"]).groups_by_category());
    }
}
