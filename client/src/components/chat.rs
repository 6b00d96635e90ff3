//! Question/answer panel with markdown answers and collapsible sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends the trimmed draft to `POST /ask` and appends the reply. Submission
//! rules live in [`ChatState`]; this component wires them to input events
//! and the network call.

use leptos::prelude::*;
use wire::{ApiConfig, Role};

use crate::state::chat::{ChatState, Message, SourcesView};
use crate::util::markdown::render_markdown_html;

/// Chat panel showing the transcript and an input for new questions.
#[component]
pub fn Chat() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let chat = RwSignal::new(ChatState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.is_loading()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(question) = chat.try_update(ChatState::begin_send).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::ask(&config.get_value(), &question).await;
            if let Err(e) = &outcome {
                log::warn!("ask failed: {e}");
            }
            chat.update(|c| c.finish_send(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (config, question);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let loading = move || chat.with(ChatState::is_loading);

    view! {
        <section class="chat">
            <h2 class="chat__title">"Chat"</h2>

            <div class="chat__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.with(|c| c.messages.clone());
                    if messages.is_empty() {
                        return view! {
                            <div class="chat__empty">"Ask something about the uploaded document…"</div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat__input-row">
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Ask something..."
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=move |ev| chat.update(|c| c.update_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat__send" on:click=on_click disabled=loading>
                    {move || if loading() { "Thinking..." } else { "Send" }}
                </button>
            </div>
        </section>
    }
}

/// One transcript entry. Assistant content is rendered as markdown.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let sources = message.sources_view();
    let Message { role, content, .. } = message;
    let is_user = role == Role::User;
    let is_assistant = role == Role::Assistant;
    let is_system = role == Role::System;

    let body = if is_assistant {
        let rendered = render_markdown_html(&content);
        view! { <div class="chat__markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <span>{content}</span> }.into_any()
    };

    view! {
        <div
            class="chat__message"
            class:chat__message--user=is_user
            class:chat__message--assistant=is_assistant
            class:chat__message--system=is_system
        >
            <div class="chat__bubble">
                {body}
                {sources.map(|sources| view! { <SourceList sources=sources/> })}
            </div>
        </div>
    }
}

/// Collapsed list of cited chunks, each trimmed to a short preview.
#[component]
fn SourceList(sources: SourcesView) -> impl IntoView {
    let SourcesView { label, entries } = sources;

    view! {
        <details class="chat__sources">
            <summary class="chat__sources-label">{label}</summary>
            <div class="chat__sources-list">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class="chat__source">
                                <strong class="chat__source-name">{entry.source}</strong>
                                <span class="chat__source-chunk">{entry.caption}</span>
                                <div class="chat__source-text">{entry.preview}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </details>
    }
}
