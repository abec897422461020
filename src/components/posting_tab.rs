//! Posting Tab Component
//!
//! Infinite-scroll list of a blog's postings with category, tag and search
//! filters. The feed controller lives in a signal; two effects wire it to
//! the sentinel and to the postings endpoint.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_infinite_scroll::{use_sentinel_visibility, DEFAULT_THRESHOLD};

use crate::components::{CategoryList, PostingCard, SearchBox, TagList};
use crate::context::use_app_context;
use crate::feed::{FeedController, FetchOutcome};
use crate::models::Posting;
use crate::store::{store_load_sidebar, use_blog_store};

/// Feed controller shared with the filter components
pub type FeedSignal = RwSignal<FeedController<Posting>>;

#[component]
pub fn PostingTab(
    blog_id: u64,
    is_owner: Signal<bool>,
    on_open: Callback<Posting>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_blog_store();
    let feed: FeedSignal = RwSignal::new(FeedController::new(blog_id, ctx.page_size()));

    let sentinel = NodeRef::<Div>::new();
    let visible = use_sentinel_visibility(sentinel, DEFAULT_THRESHOLD);

    // Forward sentinel visibility into the controller
    Effect::new(move |_| {
        let is_visible = visible.get();
        feed.update(|f| f.set_visible(is_visible));
    });

    // Issue a page whenever the controller wants one. Checking first keeps
    // the effect from writing the signal it tracks when there is nothing to do.
    Effect::new(move |_| {
        if !feed.with(|f| f.wants_page()) {
            return;
        }
        let Some(request) = feed.try_update(|f| f.next_request()).flatten() else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let result = client.list_blog_postings(&request.query).await;
            let outcome = feed.try_update(|f| f.complete(request.version, result));
            if let Some(FetchOutcome::Appended { exhausted: true, .. }) = outcome {
                log::info!("[FEED] Blog {} fully loaded (v{})", blog_id, request.version);
            }
        });
    });

    // Sidebar lists, reloaded on demand
    Effect::new(move |_| {
        let _ = ctx.sidebar_reload.get();
        spawn_local(store_load_sidebar(store, ctx.client(), blog_id));
    });

    let refresh = move |_: web_sys::MouseEvent| {
        ctx.reload_sidebar();
        feed.update(|f| f.refresh());
    };

    let postings = move || {
        feed.with(|f| f.items().iter().cloned().enumerate().collect::<Vec<_>>())
    };
    let has_more = move || feed.with(|f| f.has_more());
    let is_empty = move || feed.with(|f| !f.has_more() && f.items().is_empty());
    let error = move || feed.with(|f| f.error().map(|e| e.to_string()));

    view! {
        <div class="posting-tab">
            <div class="posting-tab-toolbar">
                <Show when=move || is_owner.get()>
                    <a class="posting-write-btn" href=format!("/blogs/{}/write-posting", blog_id)>
                        "Write posting"
                    </a>
                </Show>
                <SearchBox feed=feed />
            </div>

            <div class="posting-tab-body">
                <div class="posting-list">
                    // Keyed by position too: pages are not de-duplicated client-side
                    <For
                        each=postings
                        key=|(idx, posting)| (*idx, posting.id)
                        children=move |(_, posting)| {
                            view! { <PostingCard posting=posting feed=feed on_open=on_open /> }
                        }
                    />

                    {move || error().map(|msg| view! {
                        <div class="feed-error">
                            <span>{format!("Could not load postings: {}", msg)}</span>
                            <button on:click=move |_| feed.update(|f| f.retry())>"Retry"</button>
                        </div>
                    })}

                    <Show when=has_more>
                        <div class="loading" node_ref=sentinel>
                            {move || if feed.with(|f| f.is_loading()) { "Loading..." } else { "" }}
                        </div>
                    </Show>

                    <Show when=is_empty>
                        <div class="feed-empty">"No postings"</div>
                    </Show>
                </div>

                <aside class="posting-sidebar">
                    <div class="sidebar-header">
                        <h3>"Categories"</h3>
                        <Show when=move || is_owner.get()>
                            <button class="sidebar-refresh-btn" title="Reload" on:click=refresh>"↻"</button>
                        </Show>
                    </div>
                    <CategoryList feed=feed />
                    <h3>"Tags"</h3>
                    <TagList feed=feed />
                </aside>
            </div>
        </div>
    }
}
