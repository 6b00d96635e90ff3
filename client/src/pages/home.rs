//! Single-page layout: header, upload panel and chat side by side.

use leptos::prelude::*;

use crate::components::chat::Chat;
use crate::components::document_badge::DocumentBadge;
use crate::components::upload_notes::UploadNotes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home__header">
                <h1 class="home__title">"RAG Mini"</h1>
                <DocumentBadge/>
            </header>
            <main class="home__panels">
                <UploadNotes/>
                <Chat/>
            </main>
        </div>
    }
}
