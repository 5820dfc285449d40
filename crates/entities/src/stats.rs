//! Derived registry statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Category, Item};

/// Counters for a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Number of items in the category.
    pub total: u32,
    /// Number of acquired items.
    pub acquired: u32,
    /// Completion percentage in `[0, 100]`; zero when the category is empty.
    pub completion_pct: f64,
}

/// Read-only projection over an item collection.
///
/// Computed on demand, never persisted. `per_category` always contains an
/// entry for every fixed category, even those with zero items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Total number of items.
    pub total: u32,
    /// Number of acquired items.
    pub acquired: u32,
    /// Number of pending items (`total - acquired`).
    pub pending: u32,
    /// Completion percentage in `[0, 100]`; zero when there are no items.
    pub completion_pct: f64,
    /// Per-category counters keyed by the category wire name.
    pub per_category: BTreeMap<String, CategoryStats>,
}

impl RegistryStats {
    /// Computes statistics over an item collection.
    pub fn compute(items: &[Item]) -> Self {
        let total = items.len() as u32;
        let acquired = items.iter().filter(|i| i.acquired).count() as u32;

        let mut per_category = BTreeMap::new();
        for category in Category::ALL {
            let mut stats = CategoryStats::default();
            for item in items.iter().filter(|i| i.category == category) {
                stats.total += 1;
                if item.acquired {
                    stats.acquired += 1;
                }
            }
            stats.completion_pct = percentage(stats.acquired, stats.total);
            per_category.insert(category.as_str().to_string(), stats);
        }

        Self {
            total,
            acquired,
            pending: total - acquired,
            completion_pct: percentage(acquired, total),
            per_category,
        }
    }
}

fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acquired_item(name: &str, category: Category) -> Item {
        let mut item = Item::new(name, category);
        item.acquired = true;
        item.acquired_at = Some(chrono::Utc::now());
        item
    }

    #[test]
    fn test_empty_collection_has_zero_percentage() {
        let stats = RegistryStats::compute(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.completion_pct, 0.0);
        // Every fixed category is present even with no items.
        assert_eq!(stats.per_category.len(), Category::ALL.len());
        for category in Category::ALL {
            let cat = &stats.per_category[category.as_str()];
            assert_eq!(cat.total, 0);
            assert_eq!(cat.completion_pct, 0.0);
        }
    }

    #[test]
    fn test_percentage_is_bounded() {
        let items = vec![
            acquired_item("Fogão", Category::Cozinha),
            acquired_item("Geladeira", Category::Cozinha),
            Item::new("Sofá", Category::SalaCopa),
            Item::new("Cama", Category::Quarto),
        ];

        let stats = RegistryStats::compute(&items);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.acquired, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.completion_pct, 50.0);
        assert!(stats.completion_pct >= 0.0 && stats.completion_pct <= 100.0);

        let cozinha = &stats.per_category["cozinha"];
        assert_eq!(cozinha.total, 2);
        assert_eq!(cozinha.acquired, 2);
        assert_eq!(cozinha.completion_pct, 100.0);

        let banheiro = &stats.per_category["banheiro-quintal"];
        assert_eq!(banheiro.total, 0);
        assert_eq!(banheiro.completion_pct, 0.0);
    }
}
