//! Document upload panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends the chosen file to `POST /upload` as multipart field `file` and
//! reports the outcome as a status line. The browser `File` handle is kept
//! beside the signal because it cannot live in `Send` state.

use leptos::prelude::*;
use wire::ApiConfig;

use crate::state::upload::UploadState;

/// Upload panel with a file picker, submit button and status line.
#[component]
pub fn UploadNotes() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let upload = RwSignal::new(UploadState::default());

    #[cfg(feature = "hydrate")]
    let file_handle = StoredValue::new_local(None::<web_sys::File>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let file = input.files().and_then(|files| files.get(0));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let selected = file.as_ref().map(|f| crate::state::upload::SelectedFile {
                name: f.name(),
                size: f.size() as u64,
            });
            file_handle.set_value(file);
            upload.update(|u| u.select_file(selected));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_upload = move |_| {
        let Some(selected) = upload.try_update(UploadState::begin_upload).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_handle.get_value() else {
                upload.update(|u| {
                    u.finish_upload(Err(wire::ApiError::Validation("selected file is no longer available".to_owned())));
                });
                return;
            };
            leptos::task::spawn_local(async move {
                log::info!("uploading {} ({} bytes)", selected.name, selected.size);
                let outcome = crate::net::api::upload(&config.get_value(), file).await;
                if let Err(e) = &outcome {
                    log::warn!("upload of {} failed: {e}", selected.name);
                }
                upload.update(|u| u.finish_upload(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (config, selected);
    };

    let uploading = move || upload.with(UploadState::is_uploading);

    view! {
        <section class="upload-notes">
            <h2 class="upload-notes__title">"Upload document"</h2>

            <div class="upload-notes__row">
                <input
                    class="upload-notes__file"
                    type="file"
                    accept=".pdf,.txt,.md"
                    on:change=on_change
                />
                <button
                    class="btn btn--primary upload-notes__submit"
                    on:click=on_upload
                    disabled=move || !upload.with(UploadState::can_submit)
                >
                    <Show when=uploading>
                        <span class="spinner" aria-hidden="true"></span>
                    </Show>
                    {move || if uploading() { "Uploading…" } else { "Upload" }}
                </button>
            </div>

            <p class="upload-notes__hint">"Supported: PDF, TXT, MD"</p>

            <Show when=move || upload.with(|u| !u.status.is_empty())>
                <p class="upload-notes__status">{move || upload.with(|u| u.status.clone())}</p>
            </Show>
        </section>
    }
}
