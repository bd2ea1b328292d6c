//! Page bookkeeping for transaction lists.
//!
//! The backend counts pages from 1; pagination controls count from 0.

pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 25];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: u32,
    page_size: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// First page with the closest allowed page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: closest_page_size(page_size),
        }
    }

    /// 1-indexed page, as sent to the API.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 0-indexed position for the pagination control.
    pub fn control_index(&self) -> u32 {
        self.page - 1
    }

    pub fn set_control_index(&mut self, index: u32) {
        self.page = index.saturating_add(1);
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = closest_page_size(page_size);
        self.page = 1;
    }

    /// Moves to the next allowed page size (wrapping), back on page 1.
    pub fn cycle_page_size(&mut self, forward: bool) {
        let position = PAGE_SIZE_OPTIONS
            .iter()
            .position(|size| *size == self.page_size)
            .unwrap_or(0);
        let len = PAGE_SIZE_OPTIONS.len();
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };
        self.set_page_size(PAGE_SIZE_OPTIONS[next]);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// `total_pages` is the count reported by the backend.
    pub fn has_next(&self, total_pages: u32) -> bool {
        self.page < total_pages
    }

    /// True when the current page lies past the last non-empty one.
    pub fn is_past_end(&self, total_pages: u32) -> bool {
        total_pages > 0 && self.page > total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// 1-based range of the items shown, e.g. `11..=20` of 42.
    pub fn item_range(&self, total_items: u64) -> Option<(u64, u64)> {
        if total_items == 0 {
            return None;
        }
        let size = u64::from(self.page_size);
        let first = u64::from(self.control_index()) * size + 1;
        if first > total_items {
            return None;
        }
        Some((first, (first + size - 1).min(total_items)))
    }
}

fn closest_page_size(requested: u32) -> u32 {
    PAGE_SIZE_OPTIONS
        .into_iter()
        .min_by_key(|size| size.abs_diff(requested))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_index_is_page_minus_one() {
        let mut state = PageState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.control_index(), 0);

        state.set_control_index(1);
        assert_eq!(state.page(), 2);
        assert_eq!(state.control_index(), 1);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut state = PageState::default();
        state.set_page(4);
        state.set_page_size(25);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 25);
    }

    #[test]
    fn page_size_snaps_to_allowed_options() {
        assert_eq!(PageState::new(7).page_size(), 5);
        assert_eq!(PageState::new(100).page_size(), 25);
        assert_eq!(PageState::new(10).page_size(), 10);
    }

    #[test]
    fn cycles_page_sizes() {
        let mut state = PageState::new(25);
        state.cycle_page_size(true);
        assert_eq!(state.page_size(), 5);
        state.cycle_page_size(false);
        assert_eq!(state.page_size(), 25);
    }

    #[test]
    fn navigation_bounds() {
        let mut state = PageState::new(10);
        assert!(state.has_next(3));
        assert!(!state.has_next(0));
        assert!(!state.has_prev());

        state.set_page(3);
        assert!(!state.has_next(3));
        assert_eq!(state.item_range(21), Some((21, 21)));
        assert_eq!(state.item_range(0), None);
    }

    #[test]
    fn past_end_only_when_pages_exist() {
        let mut state = PageState::new(5);
        state.set_page(3);
        assert!(state.is_past_end(2));
        assert!(!state.is_past_end(3));
        assert!(!state.is_past_end(0));
    }
}
