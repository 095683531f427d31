/// Universal helpers for list pages (search, sort, sort indicators)
use std::cmp::Ordering;

/// Types that can be matched against a free-text search query
pub trait Searchable {
    /// `filter` is already lowercased and trimmed
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be sorted by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts a list in place by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keeps items matching the query; a blank query keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&query))
        .collect()
}

/// Case-insensitive substring test used by `Searchable` impls
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive ordering of two strings
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Ordering of two floats treating NaN as equal
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "price" => cmp_f64(self.price, other.price),
                _ => cmp_ci(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Mug", price: 8.0 },
            Row { name: "apron", price: 20.0 },
            Row { name: "Teapot", price: 35.5 },
        ]
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "apron");

        sort_list(&mut items, "price", false);
        assert_eq!(items[0].name, "Teapot");
        assert_eq!(items[2].name, "Mug");
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(rows(), "  ").len(), 3);
        let hits = filter_list(rows(), "TEA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Teapot");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("price", "name", true), " ⇅");
    }
}
