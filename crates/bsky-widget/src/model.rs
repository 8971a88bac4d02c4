//! Settings records for the widget and the coercion rules that keep them
//! fully populated.
//!
//! # Design
//! - [`InstanceSettings`] is the per-instance record the host persists.
//! - [`DisplaySettings`] is derived fresh on every render from the global
//!   option store; it is never persisted by this component.
//! - Reads never fail: a missing or unreadable key yields its documented
//!   default, a present-but-malformed value coerces.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::UnknownTheme;
use crate::escape;
use crate::store::{SettingsStore, keys};

/// Default number of posts requested from the feed.
pub const DEFAULT_POST_COUNT: u64 = 5;

/// Default fixed container height in pixels.
pub const DEFAULT_SCROLLABLE_HEIGHT: u64 = 400;

/// Per-instance persisted settings. The title is the only editable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceSettings {
    /// Optional heading shown above the feed container.
    pub title: String,
}

impl InstanceSettings {
    /// Build a record with the given title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Boolean toggle that serializes as `0`/`1`, the shape the client-side
/// hydration script expects in the `data-settings` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggle(pub bool);

impl Toggle {
    /// Whether the toggle is enabled.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.0
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle.0
    }
}

impl Serialize for Toggle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(self.0))
    }
}

impl<'de> Deserialize<'de> for Toggle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bool(value) => Self(value),
            Raw::Int(value) => Self(value != 0),
        })
    }
}

/// Colour theme applied by the client-side renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl Theme {
    /// Render the theme as its lowercase string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Account-wide presentation settings shared by every widget instance.
///
/// Field order matters: it is the serialization order of the
/// `data-settings` payload, which is a compatibility surface for the
/// client-side script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Account handle, attribute-escaped at load.
    pub username: String,
    /// Number of posts to display.
    pub post_count: u64,
    /// Whether pinned posts are included.
    pub include_pins: Toggle,
    /// Whether a profile link is appended below the feed.
    pub include_link: Toggle,
    /// Colour theme.
    pub theme: Theme,
    /// Whether the container scrolls instead of growing.
    pub scrollable_widget: Toggle,
    /// Fixed container height in pixels when scrolling is enabled.
    pub scrollable_height: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            username: String::new(),
            post_count: DEFAULT_POST_COUNT,
            include_pins: Toggle(true),
            include_link: Toggle(true),
            theme: Theme::Light,
            scrollable_widget: Toggle(false),
            scrollable_height: DEFAULT_SCROLLABLE_HEIGHT,
        }
    }
}

impl DisplaySettings {
    /// Read the account-wide settings from the store, substituting the
    /// documented default for any key that is missing or unreadable.
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        Self {
            username: escape::html(
                &read(store, keys::USERNAME)
                    .as_ref()
                    .map(coerce_string)
                    .unwrap_or_default(),
            ),
            post_count: read(store, keys::POST_COUNT)
                .as_ref()
                .map_or(DEFAULT_POST_COUNT, coerce_uint),
            include_pins: read(store, keys::INCLUDE_PINS)
                .as_ref()
                .map_or(Toggle(true), coerce_toggle),
            include_link: read(store, keys::INCLUDE_LINK)
                .as_ref()
                .map_or(Toggle(true), coerce_toggle),
            theme: read(store, keys::THEME)
                .as_ref()
                .and_then(Value::as_str)
                .and_then(|name| name.parse().ok())
                .unwrap_or_default(),
            scrollable_widget: read(store, keys::SCROLLABLE_WIDGET)
                .as_ref()
                .map_or(Toggle(false), coerce_toggle),
            scrollable_height: read(store, keys::SCROLLABLE_HEIGHT)
                .as_ref()
                .map_or(DEFAULT_SCROLLABLE_HEIGHT, coerce_uint),
        }
    }
}

fn read<S: SettingsStore + ?Sized>(store: &S, key: &str) -> Option<Value> {
    match store.get(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(key, error = %error, "settings read failed; using default");
            None
        }
    }
}

/// Unsigned coercion: numbers clamp at zero, numeric strings parse,
/// anything else is zero.
fn coerce_uint(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number.as_u64().unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        Value::Bool(flag) => (*flag).into(),
        _ => 0,
    }
}

fn coerce_toggle(value: &Value) -> Toggle {
    match value {
        Value::Bool(flag) => Toggle(*flag),
        other => Toggle(coerce_uint(other) != 0),
    }
}

fn coerce_string(value: &Value) -> String {
    value.as_str().map(str::to_owned).unwrap_or_default()
}
