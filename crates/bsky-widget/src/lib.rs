#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Sidebar widget that displays recent posts from a Bluesky account.
//!
//! The widget itself does no fetching: it reads account-wide presentation
//! settings from the host's option storage, serializes them into a
//! `data-settings` attribute on an empty container element, and leaves
//! hydration to a client-side script. The host framework (registration,
//! option storage, request lifecycle) sits behind the [`SettingsStore`] and
//! [`WidgetHost`] traits.
//!
//! Layout: `model.rs` (settings records and coercion), `store.rs` /
//! `host.rs` (collaborator contracts), `widget.rs` (the three-operation
//! renderer), `escape.rs` / `sanitize.rs` (text hygiene primitives).

pub mod error;
pub mod escape;
pub mod host;
pub mod model;
pub mod sanitize;
pub mod store;
pub mod widget;

pub use error::{StoreError, StoreResult, UnknownTheme};
pub use host::{WIDGET_ID, WidgetChrome, WidgetDescriptor, WidgetHost};
pub use model::{
    DEFAULT_POST_COUNT, DEFAULT_SCROLLABLE_HEIGHT, DisplaySettings, InstanceSettings, Theme, Toggle,
};
pub use store::SettingsStore;
pub use widget::{BlueskyWidget, SidebarWidget};
