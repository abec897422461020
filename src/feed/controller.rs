//! Feed Controller
//!
//! Drives cursor pagination for one rendered feed. UI events mutate the
//! filter, the sentinel reports visibility, and the fetch loop asks
//! `next_request` what to load and hands responses back to `complete`.
//!
//! Every reset bumps `version`. Requests carry the version they were issued
//! under and responses for an older version are dropped, so a slow page from
//! a previous filter never lands in the new list.

use crate::error::ApiError;

use super::accumulator::{Accumulator, FeedItem};
use super::filter::{FilterState, PostingQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    /// More pages exist and a fetch is in flight or about to be issued
    LoadingMore,
    /// More pages exist, waiting for the sentinel
    IdleMoreAvailable,
    /// Short page seen; terminal until the filter changes
    Exhausted,
}

/// A page request tagged with the filter version it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub version: u64,
    pub query: PostingQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Appended { count: usize, exhausted: bool },
    Failed,
    /// Response for a superseded filter version, discarded
    Stale,
}

#[derive(Debug, Clone)]
pub struct FeedController<T> {
    filter: FilterState,
    accumulator: Accumulator<T>,
    version: u64,
    in_flight: Option<u64>,
    // First page of the current version still has to be requested
    needs_first_page: bool,
    visible: bool,
    error: Option<ApiError>,
}

impl<T: FeedItem> FeedController<T> {
    pub fn new(blog_id: u64, page_size: u32) -> Self {
        let mut controller = Self {
            filter: FilterState::new(blog_id, page_size),
            accumulator: Accumulator::default(),
            version: 0,
            in_flight: None,
            needs_first_page: false,
            visible: false,
            error: None,
        };
        // Mounting counts as the first reset
        controller.reset();
        controller
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn items(&self) -> &[T] {
        self.accumulator.items()
    }

    pub fn has_more(&self) -> bool {
        self.accumulator.has_more()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight == Some(self.version)
    }

    pub fn phase(&self) -> FeedPhase {
        if !self.has_more() {
            FeedPhase::Exhausted
        } else if self.is_loading() || (self.needs_first_page && self.error.is_none()) {
            FeedPhase::LoadingMore
        } else {
            FeedPhase::IdleMoreAvailable
        }
    }

    pub fn set_category(&mut self, category_id: Option<u64>) {
        self.filter.set_category(category_id);
        self.reset();
    }

    pub fn toggle_tag(&mut self, tag_id: u64) {
        self.filter.toggle_tag(tag_id);
        self.reset();
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.set_search(term);
        self.reset();
    }

    /// Reload from the first page keeping the current filters
    pub fn refresh(&mut self) {
        self.reset();
    }

    /// Input from the sentinel observer.
    ///
    /// The sentinel coming into view also clears a surfaced error so the
    /// failed page is retried.
    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.error = None;
        }
        self.visible = visible;
    }

    /// Clear the surfaced error so the failed page is requested again
    pub fn retry(&mut self) {
        self.error = None;
    }

    /// Whether `next_request` would issue a request right now.
    ///
    /// With nothing loaded only the first page (no cursor) is wanted;
    /// visibility is ignored since there is no cursor to derive. Otherwise a
    /// page is wanted while the sentinel is visible. At most one request per
    /// version is in flight.
    pub fn wants_page(&self) -> bool {
        if !self.has_more() || self.error.is_some() || self.is_loading() {
            return false;
        }
        if self.accumulator.is_empty() {
            self.needs_first_page
        } else {
            self.visible
        }
    }

    /// Issue the next page request, if one is wanted.
    ///
    /// Paging requests use the last loaded item as cursor.
    pub fn next_request(&mut self) -> Option<PageRequest> {
        if !self.wants_page() {
            return None;
        }

        match self.accumulator.last_cursor() {
            None => self.needs_first_page = false,
            Some(cursor) => self.filter.set_cursor(cursor),
        }

        self.in_flight = Some(self.version);
        let request = PageRequest {
            version: self.version,
            query: self.filter.to_query(),
        };
        log::debug!(
            "[FEED] v{} requesting {}",
            request.version,
            request.query.to_relative_url()
        );
        Some(request)
    }

    /// Merge the response of a request issued by `next_request`
    pub fn complete(&mut self, version: u64, result: Result<Vec<T>, ApiError>) -> FetchOutcome {
        if self.in_flight == Some(version) {
            self.in_flight = None;
        }
        if version != self.version {
            log::debug!("[FEED] dropping stale page for v{} (current v{})", version, self.version);
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                let count = page.len();
                let exhausted = self.accumulator.append_page(page, self.filter.page_size());
                log::debug!(
                    "[FEED] v{} appended {} items (total {}, exhausted={})",
                    version,
                    count,
                    self.accumulator.len(),
                    exhausted
                );
                FetchOutcome::Appended { count, exhausted }
            }
            Err(e) => {
                log::warn!("[FEED] v{} page request failed: {}", version, e);
                if self.accumulator.is_empty() {
                    self.needs_first_page = true;
                }
                self.error = Some(e);
                FetchOutcome::Failed
            }
        }
    }

    fn reset(&mut self) {
        self.version += 1;
        self.filter.clear_cursor();
        self.accumulator.reset();
        self.needs_first_page = true;
        self.error = None;
    }
}
