//! Category filtering and facet derivation over static catalogs.

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, hash::Hash};

/// Key that selects every item regardless of category
pub const ALL_CATEGORIES: &str = "all";

/// An entry in a static catalog, tagged with exactly one category
pub trait CatalogItem {
    fn id(&self) -> u32;
    fn category(&self) -> &str;
}

/// The currently selected category key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryFilter(String);

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn all() -> Self {
        Self(ALL_CATEGORIES.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORIES
    }

    /// Applies this filter to a catalog
    pub fn apply<'a, T: CatalogItem>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_by_category(items, &self.0)
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl From<&str> for CategoryFilter {
    fn from(category: &str) -> Self {
        Self::new(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the items in `category`, preserving catalog order
///
/// `"all"` selects the whole catalog. A category nothing belongs to yields an
/// empty result.
///
/// # Examples
/// ```
/// use folio_core::domain::catalog::filter_by_category;
/// use folio_core::domain::project::PROJECTS;
///
/// let react = filter_by_category(PROJECTS, "react");
/// assert!(react.iter().all(|p| p.category == "react"));
/// assert_eq!(filter_by_category(PROJECTS, "all").len(), PROJECTS.len());
/// ```
pub fn filter_by_category<'a, T: CatalogItem>(items: &'a [T], category: &str) -> Vec<&'a T> {
    if category == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category() == category)
        .collect()
}

/// Lists `"all"` followed by each distinct category in order of first occurrence
pub fn list_categories<T: CatalogItem>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for item in items {
        if seen.insert(item.category()) {
            categories.push(item.category().to_string());
        }
    }

    categories
}

/// Collects the distinct values of a list-valued field across the catalog
pub fn list_facet_values<'a, T, V, F, I>(items: &'a [T], extract: F) -> HashSet<V>
where
    V: Eq + Hash,
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = V>,
{
    items.iter().flat_map(extract).collect()
}

/// Looks an item up by its identifier
pub fn get_by_id<T: CatalogItem>(items: &[T], id: u32) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Number of items per category, led by the `"all"` total
pub fn category_counts<T: CatalogItem>(items: &[T]) -> Vec<(String, usize)> {
    list_categories(items)
        .into_iter()
        .map(|category| {
            let count = filter_by_category(items, &category).len();
            (category, count)
        })
        .collect()
}

/// Display label for a category key
pub fn category_label(category: &str, all_label: &str) -> String {
    match category {
        ALL_CATEGORIES => all_label.to_string(),
        "fullstack" => "Full Stack".to_string(),
        _ => {
            let mut chars = category.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        category: &'static str,
        tags: Vec<&'static str>,
    }

    impl CatalogItem for Item {
        fn id(&self) -> u32 {
            self.id
        }

        fn category(&self) -> &str {
            self.category
        }
    }

    fn item(id: u32, category: &'static str, tags: &[&'static str]) -> Item {
        Item {
            id,
            category,
            tags: tags.to_vec(),
        }
    }

    fn scenario_catalog() -> Vec<Item> {
        vec![
            item(1, "react", &["React", "Redux"]),
            item(2, "fullstack", &["React", "Node.js"]),
            item(3, "react", &["TypeScript"]),
        ]
    }

    fn ids(items: &[&Item]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_filter_scenario() {
        let catalog = scenario_catalog();
        assert_eq!(ids(&filter_by_category(&catalog, "react")), vec![1, 3]);
        assert_eq!(
            list_categories(&catalog),
            vec!["all".to_string(), "react".to_string(), "fullstack".to_string()]
        );
    }

    #[test]
    fn test_filter_all_returns_catalog_in_order() {
        let catalog = scenario_catalog();
        assert_eq!(ids(&filter_by_category(&catalog, "all")), vec![1, 2, 3]);

        let empty: Vec<Item> = Vec::new();
        assert!(filter_by_category(&empty, "all").is_empty());
    }

    #[test]
    fn test_filter_matches_exact_category_counts() {
        let catalog = scenario_catalog();
        for category in list_categories(&catalog).iter().skip(1) {
            let filtered = filter_by_category(&catalog, category);
            assert!(filtered.iter().all(|item| item.category == category.as_str()));
            let expected = catalog
                .iter()
                .filter(|item| item.category == category.as_str())
                .count();
            assert_eq!(filtered.len(), expected);
        }
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let catalog = scenario_catalog();
        assert!(filter_by_category(&catalog, "nonexistent").is_empty());
        // Keys are case-sensitive
        assert!(filter_by_category(&catalog, "React").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = scenario_catalog();
        for category in ["all", "react", "fullstack", "nonexistent"] {
            let once: Vec<Item> = filter_by_category(&catalog, category)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Item> = filter_by_category(&once, category)
                .into_iter()
                .cloned()
                .collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_list_categories_unique_after_all() {
        let catalog = vec![
            item(1, "a", &[]),
            item(2, "b", &[]),
            item(3, "a", &[]),
            item(4, "c", &[]),
            item(5, "b", &[]),
        ];
        let categories = list_categories(&catalog);
        assert_eq!(categories[0], "all");
        assert_eq!(&categories[1..], &["a", "b", "c"]);

        let empty: Vec<Item> = Vec::new();
        assert_eq!(list_categories(&empty), vec!["all".to_string()]);
    }

    #[test]
    fn test_list_facet_values_dedupes() {
        let catalog = scenario_catalog();
        let tags = list_facet_values(&catalog, |item| item.tags.iter().copied());
        assert_eq!(tags.len(), 4);
        assert!(tags.contains("React"));
        assert!(tags.contains("Node.js"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = scenario_catalog();
        assert_eq!(get_by_id(&catalog, 2).map(|item| item.category), Some("fullstack"));
        assert!(get_by_id(&catalog, 99).is_none());
    }

    #[test]
    fn test_category_counts() {
        let catalog = scenario_catalog();
        assert_eq!(
            category_counts(&catalog),
            vec![
                ("all".to_string(), 3),
                ("react".to_string(), 2),
                ("fullstack".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("all", "All Projects"), "All Projects");
        assert_eq!(category_label("fullstack", "All"), "Full Stack");
        assert_eq!(category_label("javascript", "All"), "Javascript");
        assert_eq!(category_label("", "All"), "");
    }

    #[test]
    fn test_category_filter_defaults_to_all() {
        let filter = CategoryFilter::default();
        assert!(filter.is_all());
        assert_eq!(filter.apply(&scenario_catalog()).len(), 3);

        let react = CategoryFilter::from("react");
        assert!(!react.is_all());
        assert_eq!(ids(&react.apply(&scenario_catalog())), vec![1, 3]);
    }
}
