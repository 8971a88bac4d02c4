//! In-memory collaborator doubles for widget tests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use bsky_widget::error::{StoreError, StoreResult};
use bsky_widget::host::WidgetHost;
use bsky_widget::store::SettingsStore;

/// In-memory settings store backed by a plain map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store; every read yields `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a stored option, builder-style.
    #[must_use]
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_owned(), value);
        self
    }

    /// Insert or replace a stored option in place.
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_owned(), value);
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }
}

/// Store whose every read fails, for degradation tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

impl SettingsStore for FailingStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Err(StoreError::Unavailable {
            key: key.to_owned(),
            reason: "store offline".to_owned(),
        })
    }
}

/// Host fixture with deterministic field naming and a recording title
/// filter.
///
/// Field ids and names follow the host convention of scoping by instance
/// number so collision tests can compare two fixtures side by side.
#[derive(Debug, Default)]
pub struct FixtureHost {
    instance_number: u32,
    title_suffix: Option<String>,
    filter_calls: RefCell<Vec<String>>,
}

impl FixtureHost {
    /// Create a fixture scoped to the given instance number.
    #[must_use]
    pub fn new(instance_number: u32) -> Self {
        Self {
            instance_number,
            title_suffix: None,
            filter_calls: RefCell::new(Vec::new()),
        }
    }

    /// Register a suffix the title filter appends, standing in for a
    /// listener on the filter hook.
    #[must_use]
    pub fn with_title_suffix(mut self, suffix: &str) -> Self {
        self.title_suffix = Some(suffix.to_owned());
        self
    }

    /// Titles the filter has been invoked with, in call order.
    #[must_use]
    pub fn filter_calls(&self) -> Vec<String> {
        self.filter_calls.borrow().clone()
    }
}

impl WidgetHost for FixtureHost {
    fn filter_title(&self, title: &str, _widget_id: &str) -> String {
        self.filter_calls.borrow_mut().push(title.to_owned());
        match &self.title_suffix {
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
