//! Comment Thread Component
//!
//! Comments of one posting with one level of replies. Replies can start
//! with a mention of another participant. After a write or delete the
//! thread re-fetches its comments in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::NewComment;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::mention::{compose_reply, mention_candidates, parse_mention};
use crate::models::{Comment, CommentUser};
use crate::text::format_comment_date;

#[component]
pub fn CommentThread(blog_id: u64, posting_id: u64, is_comment_allowed: bool) -> impl IntoView {
    let ctx = use_app_context();

    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (draft, set_draft) = signal(String::new());
    let (notice, set_notice) = signal::<Option<String>>(None);
    // Only one reply box is open at a time
    let open_replies = RwSignal::new(None::<u64>);
    let reply_draft = RwSignal::new(String::new());

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let client = ctx.client();
        spawn_local(async move {
            match client.list_comments(blog_id, posting_id).await {
                Ok(loaded) => set_comments.set(loaded),
                Err(e) => log::warn!("[COMMENT] Failed to load comments for posting {}: {}", posting_id, e),
            }
        });
    });

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    let write = move |parent_comment_id: Option<u64>, content: String, clear: WriteSignal<String>| {
        if content.trim().is_empty() {
            return;
        }
        let client = ctx.client();
        spawn_local(async move {
            let comment = NewComment {
                comment_content: content,
                is_secret: false,
                parent_comment_id,
            };
            match client.write_comment(blog_id, posting_id, &comment).await {
                Ok(()) => {
                    clear.set(String::new());
                    set_notice.set(None);
                    reload();
                }
                Err(e) => {
                    log::warn!("[COMMENT] Write failed: {}", e);
                    set_notice.set(Some(e.to_string()));
                }
            }
        });
    };

    let on_reply = Callback::new(move |parent_id: u64| {
        write(Some(parent_id), reply_draft.get_untracked(), reply_draft.write_only());
    });

    let on_delete = Callback::new(move |comment_id: u64| {
        let client = ctx.client();
        spawn_local(async move {
            match client.delete_comment(blog_id, posting_id, comment_id).await {
                Ok(()) => reload(),
                Err(e) => {
                    log::warn!("[COMMENT] Delete of {} failed: {}", comment_id, e);
                    set_notice.set(Some(e.to_string()));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        write(None, draft.get_untracked(), set_draft);
    };

    let disabled = !is_comment_allowed;
    let placeholder = if is_comment_allowed { "Write a comment" } else { "Comments are turned off" };

    view! {
        <section class="posting-comment-area">
            <h3>{move || format!("{} comments", comments.with(Vec::len))}</h3>
            <form class="input-area" on:submit=on_submit>
                <textarea
                    class="comment-input"
                    placeholder=placeholder
                    disabled=disabled
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button class="comment-btn" type="submit" disabled=disabled>"Comment"</button>
            </form>

            {move || notice.get().map(|msg| view! { <p class="comment-notice">{msg}</p> })}

            <Show when=move || is_comment_allowed>
                <div class="comment-area">
                    <For
                        each=move || comments.get()
                        key=|comment| comment.id
                        children=move |comment| {
                            view! {
                                <CommentItem
                                    comment=comment
                                    open_replies=open_replies
                                    reply_draft=reply_draft
                                    on_reply=on_reply
                                    on_delete=on_delete
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

/// Author, date and (for own comments) the delete control
#[component]
fn CommentHeader(user: CommentUser, date: String, on_delete: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let is_mine = ctx.current_user_id() == Some(user.user_id);

    view! {
        <div class="profile-wrapper">
            <div class="user-info">
                <div class="username">{user.nickname}</div>
                <div class="date">{format_comment_date(&date)}</div>
            </div>
            {is_mine.then(|| view! {
                <div class="edit-btns">
                    <DeleteConfirmButton button_class="del" on_confirm=on_delete />
                </div>
            })}
        </div>
    }
}

#[component]
fn CommentItem(
    comment: Comment,
    open_replies: RwSignal<Option<u64>>,
    reply_draft: RwSignal<String>,
    on_reply: Callback<u64>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let id = comment.id;
    let replies = comment.children.clone().unwrap_or_default();
    let label = if replies.is_empty() {
        "Reply".to_string()
    } else {
        format!("{} replies", replies.len())
    };
    let candidates = mention_candidates(&replies);

    let toggle_replies = move |_: web_sys::MouseEvent| {
        open_replies.update(|open| *open = if *open == Some(id) { None } else { Some(id) });
        reply_draft.set(String::new());
    };

    view! {
        <div class="comment-container">
            <CommentHeader
                user=comment.user
                date=comment.create_dt
                on_delete=Callback::new(move |_| on_delete.run(id))
            />
            <div class="comment-contents">
                <p>{comment.comment_content}</p>
            </div>
            <p class="add-comment" on:click=toggle_replies>{label}</p>

            <Show when=move || open_replies.get() == Some(id)>
                {replies.iter().cloned().map(|reply| view! {
                    <ReplyItem reply=reply on_delete=on_delete />
                }).collect_view()}
                <MentionPicker candidates=candidates.clone() reply_draft=reply_draft />
                <form
                    class="input-area"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_reply.run(id);
                    }
                >
                    <input
                        class="comment-input"
                        placeholder="Write a reply (pick a name to mention)"
                        prop:value=move || reply_draft.get()
                        on:input=move |ev| reply_draft.set(event_target_value(&ev))
                    />
                    <button class="comment-btn" type="submit">"Reply"</button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn ReplyItem(reply: Comment, on_delete: Callback<u64>) -> impl IntoView {
    let id = reply.id;
    let parsed = parse_mention(&reply.comment_content);
    let mention = parsed.mention.map(|name| format!("@{}", name));
    let body = parsed.body.to_string();

    view! {
        <div class="child-comment-container">
            <CommentHeader
                user=reply.user
                date=reply.create_dt
                on_delete=Callback::new(move |_| on_delete.run(id))
            />
            <p>
                {mention.map(|name| view! { <span class="mention">{name}</span> })}
                " "
                <span>{body}</span>
            </p>
        </div>
    }
}

/// Names from the thread; clicking one puts its mention at the start of the reply
#[component]
fn MentionPicker(candidates: Vec<String>, reply_draft: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="mention-picker">
            {candidates.into_iter().map(|name| {
                let label = format!("@{}", name);
                view! {
                    <button
                        type="button"
                        class="mention-option"
                        on:click=move |_| reply_draft.update(|draft| {
                            let body = parse_mention(draft).body.to_string();
                            *draft = compose_reply(&name, &body);
                        })
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
