//! Observable application settings.
//!
//! [`Settings`] holds a fixed set of named values, each with a documented
//! default. The set of keys never grows: writing an unknown key fails and
//! leaves the store untouched. Every successful write, and every reset, is
//! broadcast to the registered listeners so presentation code can re-apply
//! whatever it derives from the settings.
//!
//! ## Defaults
//!
//! | Key                   | Default     |
//! |-----------------------|-------------|
//! | `theme`               | `"light"`   |
//! | `language`            | `"en"`      |
//! | `showCompleted`       | `true`      |
//! | `autoSave`            | `true`      |
//! | `notificationTimeout` | `3000` (ms) |
//! | `maxNotifications`    | `5`         |
//! | `defaultTaskColor`    | `"#3498db"` |
//! | `defaultCategory`     | `"generic"` |
//! | `sidebarCollapsed`    | `false`     |
//!
//! ## Usage
//!
//! ```rust
//! use tasktree::libs::settings::{SettingChange, SettingValue, Settings};
//!
//! let mut settings = Settings::default();
//! settings.subscribe(|change: &SettingChange| println!("changed: {}", change));
//!
//! settings.set("theme", SettingValue::from("dark"))?;
//! assert_eq!(settings.text("theme"), Some("dark"));
//!
//! settings.reset_to_defaults();
//! assert_eq!(settings.text("theme"), Some("light"));
//! # Ok::<(), tasktree::libs::settings::SettingsError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub const THEME: &str = "theme";
pub const LANGUAGE: &str = "language";
pub const SHOW_COMPLETED: &str = "showCompleted";
pub const AUTO_SAVE: &str = "autoSave";
pub const NOTIFICATION_TIMEOUT: &str = "notificationTimeout";
pub const MAX_NOTIFICATIONS: &str = "maxNotifications";
pub const DEFAULT_TASK_COLOR: &str = "defaultTaskColor";
pub const DEFAULT_CATEGORY: &str = "defaultCategory";
pub const SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unknown setting '{0}'")]
    UnknownKey(String),
    #[error("setting '{key}' expects a {expected} value, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("setting '{key}' expects a {expected} value, '{raw}' is not one")]
    InvalidValue {
        key: String,
        expected: &'static str,
        raw: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Flag(bool),
    Number(u64),
    Text(String),
}

impl SettingValue {
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Flag(_) => "flag",
            SettingValue::Number(_) => "number",
            SettingValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Flag(value) => write!(f, "{}", value),
            SettingValue::Number(value) => write!(f, "{}", value),
            SettingValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Flag(value)
    }
}

impl From<u64> for SettingValue {
    fn from(value: u64) -> Self {
        SettingValue::Number(value)
    }
}

/// Notification sent to listeners.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SettingChange {
    Updated { key: String, value: SettingValue },
    /// Wildcard event: every setting may have changed.
    Reset,
}

impl fmt::Display for SettingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingChange::Updated { key, value } => write!(f, "{} = {}", key, value),
            SettingChange::Reset => write!(f, "* = defaults"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&SettingChange)>;

/// Documented default for every known key.
pub fn defaults() -> BTreeMap<&'static str, SettingValue> {
    BTreeMap::from([
        (THEME, SettingValue::from("light")),
        (LANGUAGE, SettingValue::from("en")),
        (SHOW_COMPLETED, SettingValue::from(true)),
        (AUTO_SAVE, SettingValue::from(true)),
        (NOTIFICATION_TIMEOUT, SettingValue::from(3000u64)),
        (MAX_NOTIFICATIONS, SettingValue::from(5u64)),
        (DEFAULT_TASK_COLOR, SettingValue::from("#3498db")),
        (DEFAULT_CATEGORY, SettingValue::from("generic")),
        (SIDEBAR_COLLAPSED, SettingValue::from(false)),
    ])
}

pub struct Settings {
    values: BTreeMap<&'static str, SettingValue>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: defaults(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("values", &self.values)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Settings {
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(SettingValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(SettingValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<u64> {
        match self.get(key) {
            Some(SettingValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Current values in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }

    /// Reads user input as a value of the kind `key` currently holds. Text
    /// settings take the input verbatim, so `42` or `true` stay text there.
    /// A JSON string literal is unquoted first.
    pub fn parse_for(&self, key: &str, raw: &str) -> Result<SettingValue, SettingsError> {
        let current = self.get(key).ok_or_else(|| SettingsError::UnknownKey(key.to_string()))?;
        let trimmed = raw.trim();
        let invalid = || SettingsError::InvalidValue {
            key: key.to_string(),
            expected: current.kind(),
            raw: raw.to_string(),
        };

        match current {
            SettingValue::Flag(_) => trimmed.parse().map(SettingValue::Flag).map_err(|_| invalid()),
            SettingValue::Number(_) => trimmed.parse().map(SettingValue::Number).map_err(|_| invalid()),
            SettingValue::Text(_) => Ok(SettingValue::Text(
                serde_json::from_str::<String>(trimmed).unwrap_or_else(|_| raw.to_string()),
            )),
        }
    }

    pub fn set(&mut self, key: &str, value: SettingValue) -> Result<(), SettingsError> {
        let current = self
            .values
            .get_mut(key)
            .ok_or_else(|| SettingsError::UnknownKey(key.to_string()))?;

        if current.kind() != value.kind() {
            return Err(SettingsError::TypeMismatch {
                key: key.to_string(),
                expected: current.kind(),
                actual: value.kind(),
            });
        }

        *current = value.clone();
        debug!(key, %value, "setting updated");
        self.notify(&SettingChange::Updated {
            key: key.to_string(),
            value,
        });
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        self.values = defaults();
        debug!("settings reset to defaults");
        self.notify(&SettingChange::Reset);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&SettingChange) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the listener was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: &SettingChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
    }
}
