//! Backend client context shared by every widget.

use api::HttpBackend;
use dioxus::prelude::*;

use crate::browser;
use crate::config::ClientConfig;

/// What a widget needs to talk to the backend and to navigate afterwards.
#[derive(Clone, Debug)]
pub struct ClientContext {
    pub backend: HttpBackend,
    pub config: ClientConfig,
}

impl ClientContext {
    pub fn new(config: ClientConfig) -> Self {
        let origin = browser::origin();
        let backend = HttpBackend::for_page(config.base_url_or(&origin), &origin);
        if backend.includes_credentials() {
            tracing::info!("Backend is cross-origin; sending credentials with every request");
        }
        Self { backend, config }
    }
}

/// Get the client context provided by [`ClientProvider`].
pub fn use_client() -> ClientContext {
    use_context::<ClientContext>()
}

/// Provider component that builds the backend client once for the page.
/// Wrap your app with this component before rendering any widget.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(move || ClientContext::new(config));

    rsx! {
        {children}
    }
}
