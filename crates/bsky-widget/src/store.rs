//! Read access to the host's persisted global options.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::StoreResult;

/// Option keys consumed by the widget, each read with a documented default.
pub mod keys {
    /// Account handle whose feed the widget displays.
    pub const USERNAME: &str = "username";
    /// Number of posts requested from the feed.
    pub const POST_COUNT: &str = "post_count";
    /// Whether pinned posts are included.
    pub const INCLUDE_PINS: &str = "include_pins";
    /// Whether a profile link is appended below the feed.
    pub const INCLUDE_LINK: &str = "include_link";
    /// Colour theme name.
    pub const THEME: &str = "theme";
    /// Whether the container scrolls instead of growing.
    pub const SCROLLABLE_WIDGET: &str = "scrollable_widget";
    /// Fixed container height in pixels when scrolling is enabled.
    pub const SCROLLABLE_HEIGHT: &str = "scrollable_height";
}

/// Key-value configuration persisted by the host framework.
///
/// Reads are synchronous and assumed already cached by the host. A failed
/// read is never fatal to rendering: callers log it and fall back to the
/// documented default for the key.
pub trait SettingsStore {
    /// Fetch the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) when the backend
    /// cannot serve the read.
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;
}

/// Plain maps act as stores directly, for hosts that hand the widget an
/// already-materialised option snapshot.
impl SettingsStore for HashMap<String, Value> {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(HashMap::get(self, key).cloned())
    }
}
