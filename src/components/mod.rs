//! UI Components
//!
//! Leptos components of the blog view.

mod posting_tab;
mod posting_card;
mod posting_view;
mod search_box;
mod category_list;
mod tag_list;
mod comment_thread;
mod delete_confirm_button;

pub use posting_tab::{PostingTab, FeedSignal};
pub use posting_card::PostingCard;
pub use posting_view::PostingView;
pub use search_box::SearchBox;
pub use category_list::CategoryList;
pub use tag_list::TagList;
pub use comment_thread::CommentThread;
pub use delete_confirm_button::DeleteConfirmButton;
