//! Category List Component
//!
//! Sidebar list selecting a single category filter.

use leptos::prelude::*;

use crate::components::FeedSignal;
use crate::store::{use_blog_store, BlogStateStoreFields};

#[component]
pub fn CategoryList(feed: FeedSignal) -> impl IntoView {
    let store = use_blog_store();
    let selected = move || feed.with(|f| f.filter().category_id());

    view! {
        <ul class="category-list">
            <li
                class=move || if selected().is_none() { "category-row selected" } else { "category-row" }
                on:click=move |_| feed.update(|f| f.set_category(None))
            >
                "All"
            </li>
            <For
                each=move || store.categories().get()
                key=|category| category.category_id
                children=move |category| {
                    let id = category.category_id;
                    view! {
                        <li
                            class=move || if selected() == Some(id) { "category-row selected" } else { "category-row" }
                            on:click=move |_| feed.update(|f| f.set_category(Some(id)))
                        >
                            {category.category_name}
                        </li>
                    }
                }
            />
        </ul>
    }
}
