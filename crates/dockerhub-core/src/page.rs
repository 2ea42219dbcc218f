//! Pagination envelope for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination metadata carried by every Hub list response.
///
/// `next` and `previous` are absolute URLs into the same collection, or
/// `None` at either end of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// A page of results as returned on the wire.
///
/// List endpoints respond with the pagination fields inlined next to a
/// `results` array:
///
/// ```json
/// { "count": 2, "next": null, "previous": null, "results": [...] }
/// ```
///
/// Callers unwrap `results` and thread `page` into the response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_fields_default_when_absent() {
        let page: Page = serde_json::from_str("{}").unwrap();
        assert_eq!(page.count, 0);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[test]
    fn paged_flattens_pagination_fields() {
        let json = r#"{"count":2,"next":"https://hub.docker.com/x?page=2","previous":null,"results":[1,2]}"#;
        let paged: Paged<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(paged.page.count, 2);
        assert!(paged.page.next.is_some());
        assert_eq!(paged.results, vec![1, 2]);
    }

    #[test]
    fn paged_tolerates_missing_results() {
        let paged: Paged<i64> = serde_json::from_str(r#"{"count":0}"#).unwrap();
        assert!(paged.results.is_empty());
    }
}
