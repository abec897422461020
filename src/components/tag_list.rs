//! Tag List Component
//!
//! Sidebar tag chips; each click toggles the tag in the filter.

use leptos::prelude::*;

use crate::components::FeedSignal;
use crate::store::{use_blog_store, BlogStateStoreFields};

#[component]
pub fn TagList(feed: FeedSignal) -> impl IntoView {
    let store = use_blog_store();

    view! {
        <div class="tag-list">
            <For
                each=move || store.tags().get()
                key=|tag| tag.tag_id
                children=move |tag| {
                    let id = tag.tag_id;
                    let is_selected = move || feed.with(|f| f.filter().has_tag(id));
                    view! {
                        <button
                            class=move || if is_selected() { "tag-chip selected" } else { "tag-chip" }
                            on:click=move |_| feed.update(|f| f.toggle_tag(id))
                        >
                            {tag.tag_name}
                        </button>
                    }
                }
            />
            {move || store.tags().with(|tags| tags.is_empty()).then(|| view! {
                <div class="no-tags-message">"No tags yet"</div>
            })}
        </div>
    }
}
