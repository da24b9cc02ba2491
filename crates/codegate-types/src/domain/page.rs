use serde::{Deserialize, Serialize};

/// Generic paginated envelope returned by list endpoints.
///
/// Invariants (backend-provided, relied on but not re-derived):
/// `items.len() <= page_size` and `total_pages == ceil(total / page_size)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_page_deserializes_envelope() {
        let json = r#"{
            "items": ["a", "b"],
            "total": 12,
            "page": 2,
            "pageSize": 10,
            "totalPages": 2
        }"#;

        let page: ListPage<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.is_last_page());
    }

    #[test]
    fn test_is_last_page_on_middle_page() {
        let page = ListPage {
            items: vec![1, 2, 3],
            total: 30,
            page: 1,
            page_size: 10,
            total_pages: 3,
        };
        assert!(!page.is_last_page());
    }
}
