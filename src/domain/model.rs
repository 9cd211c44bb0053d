use serde::{Deserialize, Serialize};

/// A single restaurant as delivered by the search service. The list model
/// only ever reads `name` and `distance`; the remaining fields are carried
/// through for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    /// Distance from the search origin, in miles.
    pub distance: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Ordered snapshot of one search response.
///
/// Constructed fresh per successful search; the only mutations are the two
/// in-place sorts. `count` is fixed at construction and never changes, since
/// re-sorting never adds or removes elements.
#[derive(Debug, Clone)]
pub struct RestaurantList {
    items: Vec<Restaurant>,
    count: usize,
}

impl RestaurantList {
    /// Builds a list from a search response and applies the default order,
    /// ascending by distance. Never fails; an empty input yields a valid
    /// empty list.
    pub fn new(items: Vec<Restaurant>) -> Self {
        let count = items.len();
        let mut list = Self { items, count };
        list.sort_by_distance();
        list
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the restaurant at `index` in the current order, or `None`
    /// when the index is out of range.
    pub fn restaurant_at(&self, index: usize) -> Option<&Restaurant> {
        self.items.get(index)
    }

    /// Read-only view of the current order.
    pub fn items(&self) -> &[Restaurant] {
        &self.items
    }

    /// Re-sorts in place, ascending by distance. Stable on ties, so
    /// repeating the call leaves the order untouched. `total_cmp` keeps the
    /// comparison a total order even for pathological payloads (NaN sorts
    /// after every finite distance).
    pub fn sort_by_distance(&mut self) {
        self.items.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    /// Re-sorts in place, ascending by name. Case-sensitive Unicode
    /// codepoint ordering; no locale tables or case folding. Stable on ties.
    pub fn sort_alphabetically(&mut self) {
        self.items.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

/// The two orders the list supports, shared by the CLI flag, the file
/// config, and the interactive toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Distance,
    Name,
}

impl SortOrder {
    pub fn apply(self, list: &mut RestaurantList) {
        match self {
            SortOrder::Distance => list.sort_by_distance(),
            SortOrder::Name => list.sort_alphabetically(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Distance => "distance",
            SortOrder::Name => "name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, distance: f64) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            distance,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            phone: None,
        }
    }

    fn names(list: &RestaurantList) -> Vec<&str> {
        list.items().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn construction_sorts_by_distance_and_fixes_count() {
        let list = RestaurantList::new(vec![
            restaurant("Bravo", 5.0),
            restaurant("Alpha", 2.0),
            restaurant("Charlie", 2.0),
        ]);

        assert_eq!(list.count(), 3);
        // Ties (Alpha/Charlie at 2.0) keep their input order.
        assert_eq!(names(&list), vec!["Alpha", "Charlie", "Bravo"]);
    }

    #[test]
    fn scenario_sort_toggle_round_trip() {
        let mut list = RestaurantList::new(vec![
            restaurant("Bravo", 5.0),
            restaurant("Alpha", 2.0),
            restaurant("Charlie", 2.0),
        ]);

        list.sort_alphabetically();
        assert_eq!(names(&list), vec!["Alpha", "Bravo", "Charlie"]);

        list.sort_by_distance();
        assert_eq!(names(&list), vec!["Alpha", "Charlie", "Bravo"]);
    }

    #[test]
    fn count_never_changes_across_sorts() {
        let mut list = RestaurantList::new(vec![
            restaurant("A", 1.0),
            restaurant("B", 0.5),
            restaurant("C", 3.0),
            restaurant("D", 2.0),
        ]);
        assert_eq!(list.count(), 4);

        list.sort_alphabetically();
        assert_eq!(list.count(), 4);
        list.sort_by_distance();
        assert_eq!(list.count(), 4);
        list.sort_by_distance();
        assert_eq!(list.count(), 4);
    }

    #[test]
    fn sorts_are_idempotent() {
        let mut list = RestaurantList::new(vec![
            restaurant("Zesty", 0.3),
            restaurant("Anchovy", 0.3),
            restaurant("Margherita", 1.7),
        ]);

        list.sort_by_distance();
        let once: Vec<String> = names(&list).into_iter().map(String::from).collect();
        list.sort_by_distance();
        assert_eq!(names(&list), once);

        list.sort_alphabetically();
        let once: Vec<String> = names(&list).into_iter().map(String::from).collect();
        list.sort_alphabetically();
        assert_eq!(names(&list), once);
    }

    #[test]
    fn distance_order_holds_for_adjacent_pairs() {
        let mut list = RestaurantList::new(vec![
            restaurant("A", 4.2),
            restaurant("B", 0.1),
            restaurant("C", 9.9),
            restaurant("D", 0.1),
            restaurant("E", 2.5),
        ]);
        list.sort_by_distance();
        for pair in list.items().windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn alphabetical_order_holds_for_adjacent_pairs() {
        let mut list = RestaurantList::new(vec![
            restaurant("Nina's", 1.0),
            restaurant("Big Slice", 2.0),
            restaurant("Antonio's", 3.0),
            restaurant("big slice", 0.5),
        ]);
        list.sort_alphabetically();
        for pair in list.items().windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
        // Codepoint ordering is case-sensitive: uppercase sorts first.
        assert_eq!(names(&list)[0], "Antonio's");
        assert_eq!(names(&list)[3], "big slice");
    }

    #[test]
    fn equal_keys_keep_prior_relative_order() {
        let mut list = RestaurantList::new(vec![
            restaurant("First", 1.0),
            restaurant("Second", 1.0),
            restaurant("Third", 1.0),
        ]);
        list.sort_by_distance();
        assert_eq!(names(&list), vec!["First", "Second", "Third"]);

        // Same guarantee for the name sort: construction ordered these by
        // distance, and the tied name sort must keep that order.
        let mut list = RestaurantList::new(vec![
            restaurant("Same", 2.0),
            restaurant("Same", 1.0),
        ]);
        let before: Vec<f64> = list.items().iter().map(|r| r.distance).collect();
        list.sort_alphabetically();
        let after: Vec<f64> = list.items().iter().map(|r| r.distance).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn out_of_range_lookup_returns_none() {
        let list = RestaurantList::new(vec![restaurant("Solo", 1.0)]);
        assert!(list.restaurant_at(0).is_some());
        assert!(list.restaurant_at(1).is_none());
        assert!(list.restaurant_at(usize::MAX).is_none());
    }

    #[test]
    fn empty_input_yields_valid_empty_list() {
        let list = RestaurantList::new(Vec::new());
        assert_eq!(list.count(), 0);
        assert!(list.is_empty());
        assert!(list.restaurant_at(0).is_none());
    }

    #[test]
    fn nan_distance_sorts_last_without_panicking() {
        let mut list = RestaurantList::new(vec![
            restaurant("Weird", f64::NAN),
            restaurant("Near", 0.2),
            restaurant("Far", 8.0),
        ]);
        list.sort_by_distance();
        assert_eq!(names(&list), vec!["Near", "Far", "Weird"]);
    }
}
