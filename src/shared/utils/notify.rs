/// Blocking user alert.
///
/// In the browser this is `window.alert`; elsewhere the message is logged.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                web_sys::console::error_1(&e);
            }
            return;
        }
    }

    tracing::warn!(alert = message, "User alert");
}
