//! Header badge showing how many documents the backend has indexed.

use leptos::prelude::*;
use wire::ApiConfig;

use crate::state::documents::DocumentsBadge;

/// Fetches `GET /documents/status` once after hydration.
#[component]
pub fn DocumentBadge() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let badge = RwSignal::new(DocumentsBadge::default());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::documents_status(&config.get_value()).await;
            if let Err(e) = &outcome {
                log::warn!("documents status unavailable: {e}");
            }
            badge.set(DocumentsBadge::from_outcome(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = config;
    });

    view! {
        <span
            class="doc-badge"
            class:doc-badge--ready=move || badge.with(DocumentsBadge::has_documents)
            class:doc-badge--down=move || badge.get() == DocumentsBadge::Unavailable
        >
            {move || badge.with(DocumentsBadge::label)}
        </span>
    }
}
