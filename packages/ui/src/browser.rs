//! Page-level browser effects: navigation, reload and blocking alerts.
//!
//! Off wasm there is no page to act on, so these only log.

/// Full navigation. Discards the current page and everything in flight.
pub fn navigate(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!("Failed to navigate to {}: {:?}", path, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("navigate to {}", path);
    }
}

/// Reload the whole page.
pub fn reload() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Failed to reload: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("reload");
    }
}

pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                tracing::error!("Failed to show alert: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("alert: {}", message);
    }
}

/// The page origin, e.g. `https://wellbot.example`. Empty off wasm.
pub fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Scroll an element to its end, e.g. the chat transcript after a new message.
pub fn scroll_to_bottom(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(element_id));
        if let Some(element) = element {
            element.set_scroll_top(element.scroll_height());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
    }
}
