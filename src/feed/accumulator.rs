//! Accumulator
//!
//! Items loaded so far for the current filter configuration.

use super::filter::CursorId;

/// Anything the feed can page through
pub trait FeedItem: Clone + Send + Sync + 'static {
    /// Stable identifier, sent back as the next page cursor
    fn cursor_id(&self) -> CursorId;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator<T> {
    items: Vec<T>,
    has_more: bool,
}

impl<T: FeedItem> Default for Accumulator<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            has_more: true,
        }
    }
}

impl<T: FeedItem> Accumulator<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Cursor for the next page, `None` while nothing is loaded
    pub fn last_cursor(&self) -> Option<CursorId> {
        self.items.last().map(FeedItem::cursor_id)
    }

    pub fn reset(&mut self) {
        self.items.clear();
        self.has_more = true;
    }

    /// Append a page in response order.
    ///
    /// A page shorter than `page_size` ends pagination. A final page of
    /// exactly `page_size` items is not detected and costs one empty fetch.
    /// Returns true when this page exhausted the feed.
    pub fn append_page(&mut self, page: Vec<T>, page_size: u32) -> bool {
        let short = page.len() < page_size as usize;
        self.items.extend(page);
        if short {
            self.has_more = false;
        }
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u64);

    impl FeedItem for Row {
        fn cursor_id(&self) -> CursorId {
            self.0
        }
    }

    fn rows(range: std::ops::RangeInclusive<u64>) -> Vec<Row> {
        range.map(Row).collect()
    }

    #[test]
    fn test_starts_empty_with_more() {
        let acc = Accumulator::<Row>::default();
        assert!(acc.is_empty());
        assert!(acc.has_more());
        assert_eq!(acc.last_cursor(), None);
    }

    #[test]
    fn test_full_page_keeps_has_more() {
        let mut acc = Accumulator::default();
        assert!(!acc.append_page(rows(1..=15), 15));
        assert!(acc.has_more());
        assert_eq!(acc.last_cursor(), Some(15));
    }

    #[test]
    fn test_short_page_exhausts() {
        let mut acc = Accumulator::default();
        acc.append_page(rows(1..=15), 15);
        assert!(acc.append_page(rows(16..=20), 15));
        assert!(!acc.has_more());
        assert_eq!(acc.len(), 20);
        let ids: Vec<u64> = acc.items().iter().map(|r| r.0).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_page_exhausts() {
        let mut acc = Accumulator::<Row>::default();
        assert!(acc.append_page(Vec::new(), 15));
        assert!(!acc.has_more());
    }

    #[test]
    fn test_reset() {
        let mut acc = Accumulator::default();
        acc.append_page(rows(1..=3), 15);
        acc.reset();
        assert!(acc.is_empty());
        assert!(acc.has_more());
    }
}
