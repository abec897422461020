//! Search Box Component

use leptos::prelude::*;

use crate::components::FeedSignal;

/// Free-text filter, applied on Enter or the search button
#[component]
pub fn SearchBox(feed: FeedSignal) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = term.get_untracked();
        feed.update(|f| f.set_search(&value));
    };

    view! {
        <form class="search-box" on:submit=on_submit>
            <input
                type="search"
                placeholder="Search"
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
