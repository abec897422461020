//! Blog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity of the blog
//! header and its sidebar lists.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::models::{Blog, BlogTag, Category};

/// Data shown around the postings feed
#[derive(Clone, Debug, Default, Store)]
pub struct BlogState {
    /// Blog being browsed, once loaded
    pub blog: Option<Blog>,
    /// Categories for the sidebar
    pub categories: Vec<Category>,
    /// Tags for the sidebar
    pub tags: Vec<BlogTag>,
}

/// Type alias for the store
pub type BlogStore = Store<BlogState>;

/// Get the blog store from context
pub fn use_blog_store() -> BlogStore {
    expect_context::<BlogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Blog owner user id, if the blog is loaded and has one
pub fn store_owner_id(store: &BlogStore) -> Option<u64> {
    store.blog().with(|blog| {
        blog.as_ref()
            .and_then(|blog| blog.blog_user.as_ref())
            .map(|user| user.user_id)
    })
}

pub fn store_set_blog(store: &BlogStore, blog: Blog) {
    *store.blog().write() = Some(blog);
}

/// Fetch categories and tags, keeping the previous lists on failure
pub async fn store_load_sidebar(store: BlogStore, client: ApiClient, blog_id: u64) {
    match client.list_categories(blog_id).await {
        Ok(categories) => *store.categories().write() = categories,
        Err(e) => log::warn!("[STORE] Failed to load categories: {}", e),
    }
    match client.list_tags(blog_id).await {
        Ok(tags) => *store.tags().write() = tags,
        Err(e) => log::warn!("[STORE] Failed to load tags: {}", e),
    }
}
