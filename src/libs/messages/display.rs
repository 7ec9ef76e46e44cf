//! Display implementation for tasktree messages.
//!
//! Every user-facing line of text is produced here, from the structured
//! [`Message`] enum. Keeping the wording in one place means commands never
//! format text by hand and the same event always reads the same way.
//!
//! ## Message Categories
//!
//! - **Application Messages**: Banner and session lifecycle
//! - **Task Messages**: Creation, removal, status changes of tasks and groups
//! - **Strategy Messages**: Sort and filter selection and listings
//! - **Settings Messages**: Reads, writes and resets of settings
//! - **Notification Messages**: The board's activity history
//! - **Prompts**: Labels for interactive dialogs
//!
//! ## Usage Integration
//!
//! ```rust
//! use tasktree::libs::messages::Message;
//!
//! let message = Message::TaskCreated("Write report".to_string());
//! assert_eq!(message.to_string(), "Task 'Write report' created");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === APPLICATION MESSAGES ===
            Message::AppBanner(name, version) => format!("{} v{}", name, version),
            Message::InteractiveGoodbye => "Bye! The board lives in memory only, nothing was saved.".to_string(),
            Message::ActionFailed(error) => format!("Action failed: {}", error),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::GroupCreated(name) => format!("Group '{}' created", name),
            Message::ComponentRemoved(id) => format!("Removed item #{}", id),
            Message::ComponentNotFound(id) => format!("Item #{} not found", id),
            Message::NotAGroup(id) => format!("Item #{} is a task, not a group", id),
            Message::StatusApplied(count, status) => format!("Status '{}' applied to {} task(s)", status, count),
            Message::GroupToggled(name, expanded) => {
                format!("Group '{}' {}", name, if *expanded { "expanded" } else { "collapsed" })
            }
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksNotFound => "No tasks match the current filter".to_string(),
            Message::TreeHeader => "Task tree:".to_string(),
            Message::GroupSummary(count, progress) => format!("{} task(s), {}% done", count, progress),

            // === STRATEGY MESSAGES ===
            Message::StrategiesHeader => "Available strategies:".to_string(),
            Message::SortKeysHeader => "Sort keys".to_string(),
            Message::FilterKeysHeader => "Filter keys".to_string(),
            Message::CompoundFilterHint => "Also accepted: type:<category>, search:<text>".to_string(),
            Message::SortApplied(key) => format!("Sorting by '{}'", key),
            Message::FilterApplied(key) => format!("Filtering by '{}'", key),
            Message::CurrentStrategies(sort, filter) => format!("Sort: {} | Filter: {}", sort, filter),

            // === SETTINGS MESSAGES ===
            Message::SettingsHeader => "Settings:".to_string(),
            Message::SettingValue(key, value) => format!("{} = {}", key, value),
            Message::SettingUpdated(key, value) => format!("Setting '{}' set to {}", key, value),
            Message::SettingsReset => "All settings restored to defaults".to_string(),
            Message::SettingNotFound(key) => format!("Unknown setting '{}'", key),

            // === NOTIFICATION MESSAGES ===
            Message::NotificationsHeader => "Recent activity:".to_string(),
            Message::NoNotifications => "No recent activity".to_string(),

            // === PROMPTS ===
            Message::PromptSelectAction => "What next?".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptSelectCategory => "Category".to_string(),
            Message::PromptSelectParent => "Place it in".to_string(),
            Message::PromptGroupName => "Group name".to_string(),
            Message::PromptSelectComponent => "Select item".to_string(),
            Message::PromptSelectStatus => "New status".to_string(),
            Message::PromptSelectSort => "Sort by".to_string(),
            Message::PromptSelectFilter => "Show".to_string(),
            Message::PromptSearchText => "Search for".to_string(),
            Message::SearchFilterOption => "search:<text>...".to_string(),
            Message::PromptSettingKey => "Setting".to_string(),
            Message::PromptSettingValue => "Value".to_string(),
            Message::RootGroupLabel => "(top level)".to_string(),
        };

        write!(f, "{}", text)
    }
}
