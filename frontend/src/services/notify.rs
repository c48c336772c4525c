//! User-visible notifications.

/// Shows a blocking message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("Could not display alert: {}", message);
        }
    }
}
