use crate::catalog::domain::Page;

/// Default number of products per page
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Paginator service - slices an ordered result set into pages
pub struct Paginator;

impl Paginator {
    /// Returns the 1-based `page` of `items`
    ///
    /// Page 0 is treated as page 1 and a page size of 0 as 1. Pages past the
    /// end are empty but still report the total.
    pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total = items.len();

        let start = (page - 1).saturating_mul(page_size);
        let data = items
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        Page {
            data,
            total,
            page,
            page_size,
            has_next: page.saturating_mul(page_size) < total,
            has_previous: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (1..=10).collect();
        let page = Paginator::paginate(&items, 1, 4);
        assert_eq!(page.data, vec![1, 2, 3, 4]);
        assert_eq!(page.total, 10);
        assert!(page.has_next);
        assert!(!page.has_previous);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (1..=10).collect();
        let page = Paginator::paginate(&items, 3, 4);
        assert_eq!(page.data, vec![9, 10]);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items = vec!["a", "b"];
        let page = Paginator::paginate(&items, 5, 2);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 2);
        assert!(!page.has_next);
    }

    #[test]
    fn test_zero_page_and_size_are_clamped() {
        let items = vec!["a", "b", "c"];
        let page = Paginator::paginate(&items, 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.data, vec!["a"]);
    }

    #[test]
    fn test_empty_input() {
        let page = Paginator::paginate::<u8>(&[], 1, DEFAULT_PAGE_SIZE);
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next && !page.has_previous);
    }
}
