//! Posting Card Component
//!
//! One posting in the feed: thumbnail, title, age, tag chips and excerpt.

use leptos::prelude::*;

use crate::components::FeedSignal;
use crate::models::Posting;
use crate::text::{html_excerpt, time_ago, EXCERPT_CHARS};

#[component]
pub fn PostingCard(
    posting: Posting,
    feed: FeedSignal,
    on_open: Callback<Posting>,
) -> impl IntoView {
    let excerpt = html_excerpt(&posting.html_content, EXCERPT_CHARS);
    let age = time_ago(&posting.create_dt, chrono::Local::now().naive_local());
    let title = posting.title.clone();
    let thumbnail = posting.thumbnail_image_url.clone().map(|src| {
        let alt = title.clone();
        view! { <img class="posting-thumbnail" src=src alt=alt /> }
    });
    let tags = posting.posting_tags.clone();

    view! {
        <article class="posting-card" on:click=move |_| on_open.run(posting.clone())>
            {thumbnail}
            <h2 class="posting-title">{title}</h2>
            <div class="posting-age">{age}</div>
            <div class="posting-tags">
                {tags.into_iter().map(|tag| {
                    let tag_id = tag.tag_id;
                    let is_selected = move || feed.with(|f| f.filter().has_tag(tag_id));
                    view! {
                        <button
                            class=move || if is_selected() { "tag-chip selected" } else { "tag-chip" }
                            on:click=move |ev| {
                                // Filtering by tag must not open the posting
                                ev.stop_propagation();
                                feed.update(|f| f.toggle_tag(tag_id));
                            }
                        >
                            {tag.tag_name}
                        </button>
                    }
                }).collect_view()}
            </div>
            <p class="posting-excerpt">{excerpt}</p>
        </article>
    }
}
