//! Host framework contract: wrapper chrome, extension hooks, and
//! registration metadata.

/// Widget type id registered with the host.
pub const WIDGET_ID: &str = "bluesky_widget";

/// Registration metadata handed to the host when the widget type is
/// installed. Registration itself belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// Stable widget type id.
    pub id: &'static str,
    /// Display name shown in the admin widget picker.
    pub name: &'static str,
    /// One-line description shown alongside the name.
    pub description: &'static str,
}

impl WidgetDescriptor {
    /// Metadata for the Bluesky feed widget type.
    #[must_use]
    pub const fn bluesky() -> Self {
        Self {
            id: WIDGET_ID,
            name: "Bluesky Feed Widget",
            description: "Display your recent Bluesky posts.",
        }
    }
}

/// Wrapper fragments framing every widget's output uniformly, supplied by
/// the host per render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetChrome {
    /// Markup emitted before the widget body.
    pub before_widget: String,
    /// Markup emitted after the widget body.
    pub after_widget: String,
    /// Markup emitted before the title text.
    pub before_title: String,
    /// Markup emitted after the title text.
    pub after_title: String,
}

/// Services the host framework provides to a running widget.
pub trait WidgetHost {
    /// Run the title filter chain over the resolved title.
    ///
    /// Invoked on every render, even when no listener is registered and
    /// even when `title` is empty; emptiness is judged on the result.
    fn filter_title(&self, title: &str, widget_id: &str) -> String;

    /// Instance-scoped DOM id for an admin form field, unique across the
    /// widget instances on one page.
    fn field_id(&self, field: &str) -> String;

    /// Instance-scoped submission name for an admin form field.
    fn field_name(&self, field: &str) -> String;
}
