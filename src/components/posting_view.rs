//! Posting View Component
//!
//! Full posting opened from the feed, with its comment thread.

use leptos::prelude::*;

use crate::components::CommentThread;
use crate::models::Posting;
use crate::text::format_comment_date;

#[component]
pub fn PostingView(blog_id: u64, posting: Posting, on_back: Callback<()>) -> impl IntoView {
    view! {
        <article class="posting-view">
            <button class="back-btn" on:click=move |_| on_back.run(())>"← Postings"</button>
            <h1 class="posting-title">{posting.title}</h1>
            <div class="posting-age">{format_comment_date(&posting.create_dt)}</div>
            <div class="posting-content" inner_html=posting.html_content></div>
            <CommentThread
                blog_id=blog_id
                posting_id=posting.id
                is_comment_allowed=posting.is_comment_allowed
            />
        </article>
    }
}
