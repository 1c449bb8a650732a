//! Application Configuration
//!
//! Runtime settings, passed to the `App` component as a prop.

/// Default `localStorage` key, shared with earlier versions of the widget
pub const DEFAULT_STORAGE_KEY: &str = "myTodoAppItems";

/// Fade-out duration before a deleted row is dropped
pub const DEFAULT_FADE_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub fade_delay_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fade_delay_ms: DEFAULT_FADE_DELAY_MS,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}
