//! Plog Frontend App
//!
//! Blog page: postings feed with sidebar filters, and the posting view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{PostingTab, PostingView};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::models::Posting;
use crate::session::Session;
use crate::store::{store_owner_id, store_set_blog, BlogState, BlogStateStoreFields};

/// Blog id from a `/blogs/{id}/...` location path
pub fn blog_id_from_path(path: &str) -> Option<u64> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some("blogs"), Some(id)) => id.parse().ok(),
        _ => None,
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn App(config: ClientConfig, session: Session) -> impl IntoView {
    let blog_id = blog_id_from_path(&current_path()).unwrap_or(config.default_blog_id);
    log::info!("[APP] Showing blog {}", blog_id);

    // Provide context to all children
    let ctx = AppContext::new(config, session);
    provide_context(ctx);
    let store = Store::new(BlogState::default());
    provide_context(store);

    let (selected, set_selected) = signal::<Option<Posting>>(None);

    // Load blog header on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match client.get_blog(blog_id).await {
                Ok(blog) => store_set_blog(&store, blog),
                Err(e) => log::warn!("[APP] Failed to load blog {}: {}", blog_id, e),
            }
        });
    });

    let is_owner = Signal::derive(move || ctx.is_owner(store_owner_id(&store)));
    let on_open = Callback::new(move |posting: Posting| set_selected.set(Some(posting)));
    let on_back = Callback::new(move |_: ()| set_selected.set(None));
    let blog_name = move || {
        store.blog().with(|blog| blog.as_ref().map(|b| b.blog_name.clone()).unwrap_or_default())
    };

    view! {
        <div class="app-layout">
            <header class="blog-header">
                <h1>{blog_name}</h1>
            </header>

            <main class="main-content">
                // Hidden rather than unmounted so the feed keeps its pages
                <div style:display=move || if selected.with(Option::is_some) { "none" } else { "block" }>
                    <PostingTab blog_id=blog_id is_owner=is_owner on_open=on_open />
                </div>

                {move || selected.get().map(|posting| view! {
                    <PostingView blog_id=blog_id posting=posting on_back=on_back />
                })}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_id_from_path() {
        assert_eq!(blog_id_from_path("/blogs/12"), Some(12));
        assert_eq!(blog_id_from_path("/blogs/12/postings/3"), Some(12));
        assert_eq!(blog_id_from_path("blogs/7/"), Some(7));
        assert_eq!(blog_id_from_path("/blogs/abc"), None);
        assert_eq!(blog_id_from_path("/"), None);
        assert_eq!(blog_id_from_path("/users/12"), None);
    }
}
