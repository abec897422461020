//! Incremental Paginated Feed
//!
//! Filter state, accumulated pages and the controller tying them to the
//! sentinel signal and the postings endpoint.

mod accumulator;
mod controller;
mod filter;


pub use accumulator::{Accumulator, FeedItem};
pub use controller::{FeedController, FeedPhase, FetchOutcome, PageRequest};
pub use filter::{CursorId, FilterState, PostingQuery};
