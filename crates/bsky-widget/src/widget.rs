//! The three-operation widget renderer.

use serde_json::Value;

use crate::escape;
use crate::host::{WIDGET_ID, WidgetChrome, WidgetHost};
use crate::model::{DisplaySettings, InstanceSettings};
use crate::sanitize;
use crate::store::SettingsStore;

/// Capability contract the host invokes on every widget type.
///
/// Each operation is synchronous, stateless, and idempotent: the host
/// dispatches `render` on every front-end page view and alternates
/// `form`/`update` while an administrator edits the instance.
pub trait SidebarWidget {
    /// Produce the front-end markup for one widget instance.
    fn render(&self, chrome: &WidgetChrome, instance: &InstanceSettings) -> String;

    /// Produce the admin settings form for one widget instance.
    fn form(&self, instance: &InstanceSettings) -> String;

    /// Fold a submitted form payload into a fresh instance record.
    ///
    /// Only the `title` key of `new` is consulted; `old` is never merged,
    /// because the title is the only instance-level field.
    fn update(&self, new: &Value, old: &InstanceSettings) -> InstanceSettings;
}

/// Bluesky feed widget: emits an empty, hydration-ready container carrying
/// the display settings as a `data-settings` payload.
///
/// Holds no state of its own; collaborators are borrowed for the duration
/// of one host dispatch.
pub struct BlueskyWidget<'a, S, H> {
    store: &'a S,
    host: &'a H,
}

impl<'a, S: SettingsStore, H: WidgetHost> BlueskyWidget<'a, S, H> {
    /// Borrow the settings store and host for one dispatch.
    #[must_use]
    pub const fn new(store: &'a S, host: &'a H) -> Self {
        Self { store, host }
    }
}

impl<S: SettingsStore, H: WidgetHost> SidebarWidget for BlueskyWidget<'_, S, H> {
    fn render(&self, chrome: &WidgetChrome, instance: &InstanceSettings) -> String {
        let title = self.host.filter_title(&instance.title, WIDGET_ID);
        let settings = DisplaySettings::load(self.store);

        let scrollable_class = if settings.scrollable_widget.is_enabled() {
            " scrollable"
        } else {
            ""
        };
        let scrollable_style = if settings.scrollable_widget.is_enabled() {
            format!(
                " style=\"height: {}px; overflow-y: auto;\"",
                settings.scrollable_height
            )
        } else {
            String::new()
        };

        // Serializing a plain struct of scalars cannot fail; degrade to an
        // empty payload rather than break the render if it ever does.
        let payload = serde_json::to_string(&settings).unwrap_or_default();

        let mut markup = String::new();
        markup.push_str(&chrome.before_widget);
        // Whitespace-only titles count as absent.
        if !title.trim().is_empty() {
            markup.push_str(&chrome.before_title);
            markup.push_str(&escape::html(&title));
            markup.push_str(&chrome.after_title);
        }
        markup.push_str(&format!(
            "<div class=\"bluesky-feed-widget{scrollable_class}\"{scrollable_style} data-settings=\"{}\"></div>",
            escape::html(&payload)
        ));
        markup.push_str(&chrome.after_widget);
        markup
    }

    fn form(&self, instance: &InstanceSettings) -> String {
        let id = escape::html(&self.host.field_id("title"));
        let name = escape::html(&self.host.field_name("title"));
        let value = escape::html(&instance.title);
        format!(
            "<p><label for=\"{id}\">Title:</label>\
             <input class=\"widefat\" id=\"{id}\" name=\"{name}\" type=\"text\" value=\"{value}\"></p>\
             <p>Other settings can be configured in the plugin options page.</p>"
        )
    }

    fn update(&self, new: &Value, _old: &InstanceSettings) -> InstanceSettings {
        let title = new
            .get("title")
            .and_then(Value::as_str)
            .map(sanitize::text_field)
            .unwrap_or_default();
        InstanceSettings { title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct TestHost {
        instance_number: u32,
        title_suffix: Option<&'static str>,
        filter_calls: RefCell<Vec<String>>,
    }

    impl TestHost {
        fn new(instance_number: u32) -> Self {
            Self {
                instance_number,
                ..Self::default()
            }
        }

        fn with_title_suffix(mut self, suffix: &'static str) -> Self {
            self.title_suffix = Some(suffix);
            self
        }

        fn filter_calls(&self) -> Vec<String> {
            self.filter_calls.borrow().clone()
        }
    }

    impl WidgetHost for TestHost {
        fn filter_title(&self, title: &str, _widget_id: &str) -> String {
            self.filter_calls.borrow_mut().push(title.to_owned());
            match self.title_suffix {
                Some(suffix) => format!("{title}{suffix}"),
                None => title.to_owned(),
            }
        }

        fn field_id(&self, field: &str) -> String {
            format!("widget-bluesky_widget-{}-{field}", self.instance_number)
        }

        fn field_name(&self, field: &str) -> String {
            format!("widget-bluesky_widget[{}][{field}]", self.instance_number)
        }
    }

    fn empty_store() -> HashMap<String, serde_json::Value> {
        HashMap::new()
    }

    fn chrome() -> WidgetChrome {
        WidgetChrome {
            before_widget: "<li class=\"widget\">".to_owned(),
            after_widget: "</li>".to_owned(),
            before_title: "<h2>".to_owned(),
            after_title: "</h2>".to_owned(),
        }
    }

    #[test]
    fn render_wraps_container_in_chrome() {
        let store = empty_store();
        let host = TestHost::new(2);
        let widget = BlueskyWidget::new(&store, &host);

        let markup = widget.render(&chrome(), &InstanceSettings::titled("Latest Posts"));
        assert!(markup.starts_with("<li class=\"widget\"><h2>Latest Posts</h2>"));
        assert!(markup.ends_with("</div></li>"));
    }

    #[test]
    fn render_omits_title_block_when_title_is_empty() {
        let store = empty_store();
        let host = TestHost::new(2);
        let widget = BlueskyWidget::new(&store, &host);

        let markup = widget.render(&chrome(), &InstanceSettings::default());
        assert!(!markup.contains("<h2>"));
        assert!(markup.contains("bluesky-feed-widget"));
    }

    #[test]
    fn render_invokes_the_title_filter_even_for_empty_titles() {
        let store = empty_store();
        let host = TestHost::new(1);
        let widget = BlueskyWidget::new(&store, &host);

        let _ = widget.render(&chrome(), &InstanceSettings::default());
        assert_eq!(host.filter_calls(), vec![String::new()]);
    }

    #[test]
    fn render_title_can_be_supplied_by_the_filter() {
        let store = empty_store();
        let host = TestHost::new(1).with_title_suffix(" | Bluesky");
        let widget = BlueskyWidget::new(&store, &host);

        let markup = widget.render(&chrome(), &InstanceSettings::titled("Feed"));
        assert!(markup.contains("<h2>Feed | Bluesky</h2>"));
    }

    #[test]
    fn render_escapes_the_displayed_title() {
        let store = empty_store();
        let host = TestHost::new(1);
        let widget = BlueskyWidget::new(&store, &host);

        let markup = widget.render(&chrome(), &InstanceSettings::titled("Tom & Jerry"));
        assert!(markup.contains("<h2>Tom &amp; Jerry</h2>"));
    }

    #[test]
    fn scrollable_settings_add_class_and_style() {
        let store = HashMap::from([
            ("scrollable_widget".to_owned(), json!(1)),
            ("scrollable_height".to_owned(), json!(250)),
        ]);
        let host = TestHost::new(1);
        let widget = BlueskyWidget::new(&store, &host);

        let markup = widget.render(&chrome(), &InstanceSettings::default());
        assert!(markup.contains("class=\"bluesky-feed-widget scrollable\""));
        assert!(markup.contains(" style=\"height: 250px; overflow-y: auto;\""));
    }

    #[test]
    fn non_scrollable_render_has_no_style_attribute() {
        let store = empty_store();
        let host = TestHost::new(1);
        let widget = BlueskyWidget::new(&store, &host);

        let markup = widget.render(&chrome(), &InstanceSettings::default());
        assert!(markup.contains("class=\"bluesky-feed-widget\""));
        assert!(!markup.contains("bluesky-feed-widget scrollable"));
        assert!(!markup.contains(" style="));
    }

    #[test]
    fn form_uses_host_scoped_identifiers() {
        let store = empty_store();
        let host = TestHost::new(3);
        let widget = BlueskyWidget::new(&store, &host);

        let markup = widget.form(&InstanceSettings::titled("My Feed"));
        assert!(markup.contains("for=\"widget-bluesky_widget-3-title\""));
        assert!(markup.contains("name=\"widget-bluesky_widget[3][title]\""));
        assert!(markup.contains("value=\"My Feed\""));
        assert!(markup.contains("Other settings can be configured"));
    }

    #[test]
    fn form_escapes_the_prefilled_title() {
        let store = empty_store();
        let host = TestHost::new(1);
        let widget = BlueskyWidget::new(&store, &host);

        let markup = widget.form(&InstanceSettings::titled("Tom & Jerry"));
        assert!(markup.contains("value=\"Tom &amp; Jerry\""));
    }

    #[test]
    fn update_sanitizes_the_submitted_title() {
        let store = empty_store();
        let host = TestHost::new(1);
        let widget = BlueskyWidget::new(&store, &host);

        let old = InstanceSettings::titled("Old");
        let updated = widget.update(&json!({ "title": "  <b>Hi</b>  " }), &old);
        assert_eq!(updated.title, "Hi");
    }

    #[test]
    fn update_never_inherits_the_old_title() {
        let store = empty_store();
        let host = TestHost::new(1);
        let widget = BlueskyWidget::new(&store, &host);

        let old = InstanceSettings::titled("Old");
        assert_eq!(widget.update(&json!({}), &old), InstanceSettings::default());
        assert_eq!(widget.update(&json!(null), &old), InstanceSettings::default());
    }

    #[test]
    fn update_ignores_unknown_keys() {
        let store = empty_store();
        let host = TestHost::new(1);
        let widget = BlueskyWidget::new(&store, &host);

        let payload = json!({ "title": "Feed", "post_count": 99, "theme": "dark" });
        let updated = widget.update(&payload, &InstanceSettings::default());
        assert_eq!(updated, InstanceSettings::titled("Feed"));
    }
}
