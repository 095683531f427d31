use serde::{Deserialize, Serialize};

/// One page of a server-side paginated listing.
///
/// `page` is 1-based, as the backend counts pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_envelope() {
        let json = r#"{"items":["a","b"],"total":12,"page":1,"page_size":2}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.total, 12);
        assert_eq!(page.page, 1);
    }
}
