//! Browser Dialogs

/// Blocking `window.confirm`. Treated as declined when no window is available.
pub fn confirm(message: &str) -> bool {
    let Some(window) = web_sys::window() else {
        log::warn!("[APP] No window to confirm with, treating as declined");
        return false;
    };
    window.confirm_with_message(message).unwrap_or_else(|err| {
        log::warn!("[APP] confirm() failed: {:?}", err);
        false
    })
}
