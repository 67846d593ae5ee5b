//! Paged collections of entities.

use serde::Serialize;

use crate::domain::raw::PageMeta;

/// One page of a listing, items in API order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self {
            items,
            number: meta.number,
            size: meta.size,
            total_elements: meta.total_elements,
            total_pages: meta.total_pages,
        }
    }

    /// Returns true if later pages exist.
    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next() {
        let meta = PageMeta {
            size: 2,
            total_elements: 5,
            total_pages: 3,
            number: 1,
        };
        assert!(Page::new(vec![1, 2], meta).has_next());

        let last = PageMeta { number: 2, ..meta };
        assert!(!Page::new(vec![5], last).has_next());
    }

    #[test]
    fn test_has_next_on_largest_page_number() {
        let meta = PageMeta {
            size: 20,
            total_elements: 0,
            total_pages: u64::MAX,
            number: u64::MAX,
        };
        assert!(!Page::<i64>::new(Vec::new(), meta).has_next());
    }
}
