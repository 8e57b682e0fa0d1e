/// Directory filters and view state
///
/// The visible record set is always a pure derivation of the static
/// catalog plus the three filter inputs below. Nothing here caches or
/// mutates records; the UI recomputes the selection on every view pass,
/// which is cheap at catalog scale.

use std::fmt;

use super::data::{Category, PestRecord, ThreatLevel};

/// Category dropdown value: a concrete category or the `All` wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Dropdown options, wildcard first
    pub const ALL: [CategoryFilter; 7] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Insect),
        CategoryFilter::Only(Category::Larvae),
        CategoryFilter::Only(Category::Mite),
        CategoryFilter::Only(Category::Beetle),
        CategoryFilter::Only(Category::Nematode),
        CategoryFilter::Only(Category::Disease),
    ];

    fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Threat dropdown value: a concrete level or the `All` wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreatFilter {
    #[default]
    All,
    Only(ThreatLevel),
}

impl ThreatFilter {
    /// Dropdown options, wildcard first
    pub const ALL: [ThreatFilter; 4] = [
        ThreatFilter::All,
        ThreatFilter::Only(ThreatLevel::Low),
        ThreatFilter::Only(ThreatLevel::Medium),
        ThreatFilter::Only(ThreatLevel::High),
    ];

    fn admits(&self, threat: ThreatLevel) -> bool {
        match self {
            ThreatFilter::All => true,
            ThreatFilter::Only(only) => *only == threat,
        }
    }
}

impl fmt::Display for ThreatFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreatFilter::All => write!(f, "All"),
            ThreatFilter::Only(threat) => write!(f, "{}", threat),
        }
    }
}

/// Card arrangement toggle. Presentation only: must never influence which
/// records are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Grid,
    List,
}

/// Ephemeral view state for the directory section
#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
    /// Free-text name query, matched case-insensitively
    pub query: String,
    pub category: CategoryFilter,
    pub threat: ThreatFilter,
    pub layout: LayoutMode,
    /// Custom-search dialog visibility
    pub search_open: bool,
    /// Draft text inside the custom-search dialog
    pub search_draft: String,
}

impl DirectoryView {
    /// Records currently visible under the active filters
    pub fn visible<'a>(&self, records: &'a [PestRecord]) -> Vec<&'a PestRecord> {
        filter_records(records, &self.query, self.category, self.threat)
    }
}

/// Apply the three directory filters to a record list.
///
/// A record is included when its category and threat pass their dropdowns
/// (or the dropdown is `All`) and its name contains the query,
/// case-insensitively. An empty query matches everything. Input order is
/// preserved; no sort is applied.
pub fn filter_records<'a>(
    records: &'a [PestRecord],
    query: &str,
    category: CategoryFilter,
    threat: ThreatFilter,
) -> Vec<&'a PestRecord> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| category.admits(record.category))
        .filter(|record| threat.admits(record.threat))
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    fn names(records: &[&PestRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn default_filters_return_full_catalog_in_order() {
        let catalog = catalog();
        let view = DirectoryView::default();

        let visible = view.visible(catalog.records());

        assert_eq!(visible.len(), catalog.len());
        for (shown, seeded) in visible.iter().zip(catalog.records()) {
            assert_eq!(**shown, *seeded);
        }
    }

    #[test]
    fn every_visible_record_satisfies_all_three_predicates() {
        let catalog = catalog();
        let visible = filter_records(
            catalog.records(),
            "er",
            CategoryFilter::Only(Category::Larvae),
            ThreatFilter::All,
        );

        assert!(!visible.is_empty());
        for record in &visible {
            assert_eq!(record.category, Category::Larvae);
            assert!(record.name.to_lowercase().contains("er"));
        }

        // And no satisfying record is excluded
        let expected = catalog
            .records()
            .iter()
            .filter(|r| r.category == Category::Larvae && r.name.to_lowercase().contains("er"))
            .count();
        assert_eq!(visible.len(), expected);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = catalog();
        let first = filter_records(
            catalog.records(),
            "worm",
            CategoryFilter::All,
            ThreatFilter::Only(ThreatLevel::High),
        );
        let second = filter_records(
            catalog.records(),
            "worm",
            CategoryFilter::All,
            ThreatFilter::Only(ThreatLevel::High),
        );
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn name_query_matches_case_insensitively() {
        let catalog = catalog();

        let lower = filter_records(
            catalog.records(),
            "aphid",
            CategoryFilter::All,
            ThreatFilter::All,
        );
        assert_eq!(names(&lower), vec!["Aphid"]);

        let shouty = filter_records(
            catalog.records(),
            "SPIDER",
            CategoryFilter::All,
            ThreatFilter::All,
        );
        assert_eq!(names(&shouty), vec!["Spider Mite"]);
    }

    #[test]
    fn high_threat_larvae_are_listed_in_catalog_order() {
        let catalog = catalog();
        let visible = filter_records(
            catalog.records(),
            "",
            CategoryFilter::Only(Category::Larvae),
            ThreatFilter::Only(ThreatLevel::High),
        );
        assert_eq!(names(&visible), vec!["Cutworm", "Armyworm", "Corn Borer"]);
    }

    #[test]
    fn empty_result_set_is_valid() {
        let catalog = catalog();
        let visible = filter_records(
            catalog.records(),
            "locust",
            CategoryFilter::All,
            ThreatFilter::All,
        );
        assert!(visible.is_empty());
    }

    #[test]
    fn layout_toggle_does_not_change_visibility() {
        let catalog = catalog();
        let mut view = DirectoryView {
            query: "mite".to_string(),
            ..DirectoryView::default()
        };

        let in_grid = names(&view.visible(catalog.records()));
        view.layout = LayoutMode::List;
        let in_list = names(&view.visible(catalog.records()));

        assert_eq!(in_grid, in_list);
    }
}
