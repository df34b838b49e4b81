//! Paginated response envelope

use serde::Deserialize;

use crate::models::PagedData;

/// Spring-style page of results
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,

    #[serde(default)]
    pub pageable: PageableDto,

    #[serde(default)]
    pub total_elements: u64,

    #[serde(default)]
    pub total_pages: u32,

    #[serde(default)]
    pub last: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageableDto {
    #[serde(default)]
    pub page_number: u32,

    #[serde(default)]
    pub page_size: u32,
}

impl<T> PageDto<T> {
    /// Map every item and carry the pagination metadata across.
    pub fn into_domain<R>(self, map: impl FnMut(T) -> R) -> PagedData<R> {
        PagedData {
            items: self.content.into_iter().map(map).collect(),
            current_page: self.pageable.page_number,
            page_size: self.pageable.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            is_last_page: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_into_domain() {
        let json = r#"{
            "content": [1, 2, 3],
            "pageable": { "pageNumber": 2, "pageSize": 3 },
            "totalElements": 9,
            "totalPages": 3,
            "last": true
        }"#;
        let page: PageDto<u32> = serde_json::from_str(json).unwrap();
        let data = page.into_domain(|n| n * 10);

        assert_eq!(data.items, vec![10, 20, 30]);
        assert_eq!(data.current_page, 2);
        assert_eq!(data.page_size, 3);
        assert_eq!(data.total_elements, 9);
        assert!(data.is_last_page);
    }

    #[test]
    fn test_page_tolerates_missing_metadata() {
        let page: PageDto<u32> = serde_json::from_str(r#"{"content": []}"#).unwrap();
        let data = page.into_domain(|n| n);
        assert!(data.items.is_empty());
        assert_eq!(data.total_pages, 0);
    }
}
