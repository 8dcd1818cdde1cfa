//! Server pagination metadata and client-side paging of fetched collections.

use serde::{Deserialize, Serialize};

/// Pagination block attached to paged backend responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub limit: u32,
    /// Items across all pages.
    #[serde(default)]
    pub total: u64,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: u32,
}

impl Pagination {
    /// Whether a page precedes this one.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// One page cut out of an in-memory collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page actually returned after clamping.
    pub page: usize,
    /// Requested page size.
    pub per_page: usize,
    /// Length of the whole collection.
    pub total_items: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
}

impl<T> PageSlice<T> {
    /// Whether a page precedes this one.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first item on this page, 0 when empty.
    #[must_use]
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// 1-based index of the last item on this page, 0 when empty.
    #[must_use]
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }
}

/// Slices `items` into the requested 1-based page.
///
/// `page` is clamped into `1..=total_pages` and a zero `per_page` is treated
/// as one, so the result is always a valid window. An empty collection has a
/// single empty page.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> PageSlice<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);

    PageSlice {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_middle_page() {
        let items: Vec<u32> = (1..=25).collect();
        let slice = paginate(&items, 2, 10);

        assert_eq!(slice.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(slice.total_pages, 3);
        assert!(slice.has_prev());
        assert!(slice.has_next());
        assert_eq!(slice.first_index(), 11);
        assert_eq!(slice.last_index(), 20);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (1..=25).collect();
        let slice = paginate(&items, 3, 10);

        assert_eq!(slice.items, vec![21, 22, 23, 24, 25]);
        assert!(!slice.has_next());
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items: Vec<u32> = (1..=5).collect();

        assert_eq!(paginate(&items, 0, 2).page, 1);
        assert_eq!(paginate(&items, 99, 2).page, 3);
        assert_eq!(paginate(&items, 99, 2).items, vec![5]);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let slice = paginate::<u32>(&[], 4, 10);

        assert!(slice.items.is_empty());
        assert_eq!(slice.page, 1);
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.first_index(), 0);
        assert_eq!(slice.last_index(), 0);
        assert!(!slice.has_prev());
        assert!(!slice.has_next());
    }

    #[test]
    fn zero_per_page_is_one() {
        let slice = paginate(&[1, 2, 3], 2, 0);
        assert_eq!(slice.items, vec![2]);
        assert_eq!(slice.per_page, 1);
    }

    #[test]
    fn server_pagination_flags() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"page":2,"limit":10,"total":35,"totalPages":4}"#).unwrap();

        assert!(pagination.has_prev());
        assert!(pagination.has_next());

        let last = Pagination {
            page: 4,
            ..pagination
        };
        assert!(!last.has_next());
    }
}
