use serde::Serialize;

/// Pagination state for the primary, backend-fed list.
///
/// `total` and `total_pages` always come from the last confirmed envelope;
/// they are never derived locally.
#[derive(Debug, Clone, Serialize)]
pub struct ListPagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl ListPagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total: 0,
            total_pages: 0,
        }
    }

    /// Fold in the totals of a confirmed page envelope.
    pub fn apply(&mut self, page: u32, total: u64, total_pages: u32) {
        self.page = page;
        self.total = total;
        self.total_pages = total_pages;
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive item range shown on the current page
    /// ("showing X to Y of Z"). None when the list is empty.
    pub fn item_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let start = u64::from(self.page - 1) * u64::from(self.page_size) + 1;
        let end = (u64::from(self.page) * u64::from(self.page_size)).min(self.total);
        Some((start, end))
    }
}

/// Pagination over an already-fetched account array, sliced client-side.
///
/// The nested instance never has a server-provided total; `total_pages` is
/// derived from whatever array it is pointed at. The array is immutable for
/// the lifetime of a detail view, so a page left beyond a shrunken array
/// cannot occur and is not clamped here.
#[derive(Debug, Clone, Serialize)]
pub struct AccountWindow {
    pub page: u32,
    pub page_size: u32,
}

impl AccountWindow {
    pub fn new(page_size: u32) -> Self {
        Self { page: 1, page_size }
    }

    /// Selecting a different code for detail viewing starts over at page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn total_pages(&self, len: usize) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        (len as u32).div_ceil(self.page_size)
    }

    /// Controls disappear entirely when everything fits on one page.
    pub fn controls_hidden(&self, len: usize) -> bool {
        len <= self.page_size as usize
    }

    /// End-exclusive slice of the current page, clamped to array bounds.
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) as usize * self.page_size as usize).min(items.len());
        let end = (start + self.page_size as usize).min(items.len());
        &items[start..end]
    }

    pub fn next(&mut self, len: usize) {
        if self.page < self.total_pages(len) {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_range() {
        let mut pagination = ListPagination::new(10);
        assert_eq!(pagination.item_range(), None);

        pagination.apply(2, 35, 4);
        assert_eq!(pagination.item_range(), Some((11, 20)));
        assert!(pagination.can_prev());
        assert!(pagination.can_next());

        pagination.apply(4, 35, 4);
        assert_eq!(pagination.item_range(), Some((31, 35)));
        assert!(!pagination.can_next());
    }

    #[test]
    fn test_twelve_accounts_page_three_shows_the_remainder() {
        let accounts: Vec<u32> = (0..12).collect();
        let mut window = AccountWindow::new(5);

        assert_eq!(window.total_pages(accounts.len()), 3);

        window.next(accounts.len());
        window.next(accounts.len());
        assert_eq!(window.page, 3);
        assert_eq!(window.visible_slice(&accounts), &[10, 11]);

        // Page is pinned at the last page.
        window.next(accounts.len());
        assert_eq!(window.page, 3);
    }

    #[test]
    fn test_controls_hidden_when_everything_fits() {
        let window = AccountWindow::new(5);
        assert!(window.controls_hidden(4));
        assert!(window.controls_hidden(5));
        assert!(!window.controls_hidden(6));
    }

    #[test]
    fn test_visible_slice_clamps_past_the_end() {
        let accounts: Vec<u32> = (0..3).collect();
        let window = AccountWindow {
            page: 4,
            page_size: 5,
        };
        assert!(window.visible_slice(&accounts).is_empty());
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut window = AccountWindow::new(5);
        window.next(12);
        window.next(12);
        assert_eq!(window.page, 3);

        window.reset();
        assert_eq!(window.page, 1);
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut window = AccountWindow::new(5);
        window.prev();
        assert_eq!(window.page, 1);
    }
}
