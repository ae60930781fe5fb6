use crate::api::{Listing, ListingQuery};

/// Most numbered page buttons shown at once.
pub const PAGE_BUTTONS: u32 = 5;

pub enum ListingView {
    Idle,
    Loading,
    Failed(String),
    Page(PageView),
}

pub struct PageView {
    pub listing: Listing,
    /// `None` for a random pick, which has no pages to navigate.
    pub query: Option<ListingQuery>,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.listing.data.is_empty()
    }

    pub fn shows_pagination(&self) -> bool {
        self.query.is_some() && !self.is_empty()
    }
}

/// Numbered buttons around `current`, clamped to `1..=pages` and shifted
/// left near the end so a full window is kept whenever possible.
pub fn page_window(current: u32, pages: u32) -> Vec<u32> {
    if pages == 0 {
        return Vec::new();
    }

    let span = PAGE_BUTTONS - 1;
    let mut start = current.saturating_sub(2).max(1);
    let end = (start + span).min(pages);

    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centers_on_current() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_shifts_left_near_end() {
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_with_few_pages() {
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
        assert!(page_window(1, 0).is_empty());
    }
}
