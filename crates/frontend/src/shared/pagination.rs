//! Client-side pagination math shared by list pages.
//!
//! Pages are 0-indexed here; server-side endpoints count from 1 and the
//! conversion happens in the API modules.

/// Number of pages for `total` items; never less than 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

/// Clamps a page index into the valid range for `total` items.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(total_pages(total, page_size) - 1)
}

/// Returns the slice of `items` visible on `page`, after clamping it.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let page = clamp_page(page, items.len(), page_size);
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Pagination fields every list state carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size,
            total_count: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    /// Updates the total and pulls `page` back into range.
    pub fn set_total(&mut self, total: usize) {
        self.total_count = total;
        self.page = clamp_page(self.page, total, self.page_size);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    /// 1-based page number as sent to the backend.
    pub fn server_page(&self) -> usize {
        self.page + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (0..45).collect();
        assert_eq!(page_slice(&items, 0, 20).len(), 20);
        assert_eq!(page_slice(&items, 2, 20), &items[40..45]);
        // out of range page clamps to the last one
        assert_eq!(page_slice(&items, 9, 20), &items[40..45]);
        assert!(page_slice::<u32>(&[], 0, 20).is_empty());
    }

    #[test]
    fn test_page_state_clamps_on_shrinking_total() {
        let mut state = PageState::new(10);
        state.set_total(95);
        state.page = 9;
        state.set_total(31);
        assert_eq!(state.page, 3);
        assert_eq!(state.total_pages(), 4);
        assert_eq!(state.server_page(), 4);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = PageState::new(10);
        state.set_total(100);
        state.page = 5;
        state.set_page_size(50);
        assert_eq!(state.page, 0);
        assert_eq!(state.total_pages(), 2);
    }
}
