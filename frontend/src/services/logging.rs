use gloo::console;

/// Console logging facade used across the widget.
pub struct Logger;

impl Logger {
    pub fn info_with_component(component: &str, message: &str) {
        console::log!(format!("[{}] {}", component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(format!("[{}] {}", component, message));
    }
}
