//! Filter State
//!
//! Query parameters of the postings feed. Every filter mutator clears the
//! cursor so pagination restarts from the beginning.

use std::collections::BTreeSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in a query value (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Identifier of the last accumulated item
pub type CursorId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    blog_id: u64,
    page_size: u32,
    category_id: Option<u64>,
    // Ordered so serialization is reproducible
    tag_ids: BTreeSet<u64>,
    search: Option<String>,
    cursor: Option<CursorId>,
}

impl FilterState {
    pub fn new(blog_id: u64, page_size: u32) -> Self {
        Self {
            blog_id,
            page_size,
            category_id: None,
            tag_ids: BTreeSet::new(),
            search: None,
            cursor: None,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn category_id(&self) -> Option<u64> {
        self.category_id
    }

    pub fn tag_ids(&self) -> &BTreeSet<u64> {
        &self.tag_ids
    }

    pub fn has_tag(&self, tag_id: u64) -> bool {
        self.tag_ids.contains(&tag_id)
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn cursor(&self) -> Option<CursorId> {
        self.cursor
    }

    pub fn set_category(&mut self, category_id: Option<u64>) {
        self.category_id = category_id;
        self.cursor = None;
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle_tag(&mut self, tag_id: u64) {
        if !self.tag_ids.remove(&tag_id) {
            self.tag_ids.insert(tag_id);
        }
        self.cursor = None;
    }

    /// Blank input means "no search constraint", not "match empty string"
    pub fn set_search(&mut self, term: &str) {
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self.cursor = None;
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    pub(crate) fn set_cursor(&mut self, cursor: CursorId) {
        self.cursor = Some(cursor);
    }

    /// Snapshot of the current state as a request
    pub fn to_query(&self) -> PostingQuery {
        PostingQuery {
            blog_id: self.blog_id,
            page_size: self.page_size,
            category_id: self.category_id,
            tag_ids: self.tag_ids.iter().copied().collect(),
            search: self.search.clone(),
            last_cursor_id: self.cursor,
        }
    }
}

/// One page request against `/blogs/{blogID}/postings`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingQuery {
    pub blog_id: u64,
    pub page_size: u32,
    pub category_id: Option<u64>,
    pub tag_ids: Vec<u64>,
    pub search: Option<String>,
    pub last_cursor_id: Option<CursorId>,
}

impl PostingQuery {
    pub fn path(&self) -> String {
        format!("/blogs/{}/postings", self.blog_id)
    }

    /// Serialize parameters; `tagIDs` is repeated once per tag
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![("pageSize", self.page_size.to_string())];
        if let Some(category_id) = self.category_id {
            pairs.push(("categoryID", category_id.to_string()));
        }
        for tag_id in &self.tag_ids {
            pairs.push(("tagIDs", tag_id.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", utf8_percent_encode(search, QUERY_VALUE).to_string()));
        }
        if let Some(cursor) = self.last_cursor_id {
            pairs.push(("lastCursorID", cursor.to_string()));
        }
        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path plus query string, relative to the API base
    pub fn to_relative_url(&self) -> String {
        format!("{}?{}", self.path(), self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let filter = FilterState::new(5, 15);
        assert_eq!(filter.to_query().to_relative_url(), "/blogs/5/postings?pageSize=15");
    }

    #[test]
    fn test_tag_ids_repeat_in_ascending_order() {
        let mut filter = FilterState::new(5, 15);
        filter.toggle_tag(9);
        filter.toggle_tag(2);
        filter.toggle_tag(4);
        assert_eq!(filter.to_query().to_query_string(), "pageSize=15&tagIDs=2&tagIDs=4&tagIDs=9");
    }

    #[test]
    fn test_full_query_string() {
        let mut filter = FilterState::new(5, 15);
        filter.set_category(Some(7));
        filter.toggle_tag(3);
        filter.set_search("rust & wasm");
        filter.set_cursor(120);
        assert_eq!(
            filter.to_query().to_query_string(),
            "pageSize=15&categoryID=7&tagIDs=3&search=rust%20%26%20wasm&lastCursorID=120"
        );
    }

    #[test]
    fn test_mutators_clear_cursor() {
        let mut filter = FilterState::new(1, 15);

        filter.set_cursor(10);
        filter.set_category(Some(2));
        assert_eq!(filter.cursor(), None);

        filter.set_cursor(10);
        filter.toggle_tag(3);
        assert_eq!(filter.cursor(), None);

        filter.set_cursor(10);
        filter.set_search("golang");
        assert_eq!(filter.cursor(), None);
    }

    #[test]
    fn test_blank_search_clears_filter() {
        let mut filter = FilterState::new(1, 15);
        filter.set_search("golang");
        assert_eq!(filter.search(), Some("golang"));
        filter.set_search("   ");
        assert_eq!(filter.search(), None);
        assert!(!filter.to_query().to_query_string().contains("search"));
    }

    #[test]
    fn test_toggle_twice_restores_tags() {
        let mut filter = FilterState::new(1, 15);
        filter.toggle_tag(1);
        let before = filter.tag_ids().clone();
        filter.toggle_tag(3);
        filter.toggle_tag(3);
        assert_eq!(filter.tag_ids(), &before);
    }
}
