//! Application root: one task tree, its strategies and its settings.
//!
//! The [`Board`] owns everything a session works with. It hands out ids,
//! fills in defaults from the [`Settings`] when tasks and groups are created,
//! and produces the flat, filtered and sorted list the views render.
//!
//! ## Data Flow
//!
//! ```text
//! root group ──flatten──▶ Vec<Task> ──showCompleted──▶ StrategyContext::process ──▶ view
//! ```
//!
//! ## Activity History
//!
//! Mutations are recorded as [`Notification`]s. The history keeps at most
//! `maxNotifications` entries, oldest first out.

use super::component::{TaskComponent, TaskGroup, TreeError};
use super::messages::Message;
use super::settings::{self, SettingValue, Settings, SettingsError};
use super::strategy::StrategyContext;
use super::task::{Category, Status, Task};
use chrono::{Duration, Local, NaiveDateTime};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::debug;

/// Id of the invisible root group.
pub const ROOT_ID: u32 = 0;

const ROOT_NAME: &str = "All tasks";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub at: NaiveDateTime,
}

#[derive(Debug)]
pub struct Board {
    root: TaskGroup,
    strategies: StrategyContext,
    settings: Settings,
    notifications: VecDeque<Notification>,
    next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Board {
    pub fn new(settings: Settings) -> Self {
        let color = settings.text(settings::DEFAULT_TASK_COLOR).unwrap_or_default().to_string();
        Self {
            root: TaskGroup::new(ROOT_ID, ROOT_NAME, &color),
            strategies: StrategyContext::default(),
            settings,
            notifications: VecDeque::new(),
            next_id: ROOT_ID + 1,
        }
    }

    pub fn root(&self) -> &TaskGroup {
        &self.root
    }

    pub fn strategies(&self) -> &StrategyContext {
        &self.strategies
    }

    pub fn strategies_mut(&mut self) -> &mut StrategyContext {
        &mut self.strategies
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access for subscribing listeners. Writes should go through
    /// [`Board::update_setting`] so they show up in the history.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Category used when none is given. Falls back to generic when the
    /// setting holds a name that is not a category.
    pub fn default_category(&self) -> Category {
        self.settings
            .text(settings::DEFAULT_CATEGORY)
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    /// Builds a task with a fresh id without placing it in the tree.
    pub fn new_task(&mut self, title: &str, description: &str, category: Option<Category>) -> Task {
        let category = category.unwrap_or_else(|| self.default_category());
        let id = self.allocate_id();
        Task::with_category(id, title, description, category)
    }

    /// Builds an empty group with a fresh id without placing it in the tree.
    pub fn new_group(&mut self, name: &str, color: Option<&str>) -> TaskGroup {
        let color = match color {
            Some(color) => color.to_string(),
            None => self.settings.text(settings::DEFAULT_TASK_COLOR).unwrap_or_default().to_string(),
        };
        let id = self.allocate_id();
        TaskGroup::new(id, name, &color)
    }

    /// Places a component under `parent`, or at the top level for `None`.
    /// Callers pass components built by `new_task`/`new_group` only, so ids
    /// stay unique.
    fn add_to(&mut self, parent: Option<u32>, component: TaskComponent) -> Result<u32, TreeError> {
        let id = component.id();
        match parent {
            None | Some(ROOT_ID) => self.root.add(component),
            Some(parent_id) => self
                .root
                .get_child_mut(parent_id)
                .ok_or(TreeError::NotFound(parent_id))?
                .add(component)?,
        }
        Ok(id)
    }

    pub fn create_task(
        &mut self,
        parent: Option<u32>,
        title: &str,
        description: &str,
        category: Option<Category>,
    ) -> Result<u32, TreeError> {
        let task = self.new_task(title, description, category);
        let id = self.add_to(parent, task.into())?;
        self.notify(Message::TaskCreated(title.to_string()));
        Ok(id)
    }

    pub fn create_group(&mut self, parent: Option<u32>, name: &str, color: Option<&str>) -> Result<u32, TreeError> {
        let group = self.new_group(name, color);
        let id = self.add_to(parent, group.into())?;
        self.notify(Message::GroupCreated(name.to_string()));
        Ok(id)
    }

    pub fn find(&self, id: u32) -> Option<&TaskComponent> {
        self.root.get_child(id)
    }

    pub fn remove(&mut self, id: u32) -> Result<TaskComponent, TreeError> {
        let removed = self.root.remove(id)?;
        self.notify(Message::ComponentRemoved(id));
        Ok(removed)
    }

    /// Sets the status of a task, or of every task below a group.
    /// [`ROOT_ID`] covers the whole tree.
    pub fn set_status(&mut self, id: u32, status: Status) -> Result<usize, TreeError> {
        let touched = match id {
            ROOT_ID => self.root.set_group_status(status),
            _ => self.root.get_child_mut(id).ok_or(TreeError::NotFound(id))?.set_status(status),
        };
        self.notify(Message::StatusApplied(touched, status.to_string()));
        Ok(touched)
    }

    pub fn toggle_group(&mut self, id: u32) -> Result<bool, TreeError> {
        match self.root.get_child_mut(id) {
            Some(TaskComponent::Group(group)) => Ok(group.toggle_expanded()),
            Some(TaskComponent::Leaf(_)) => Err(TreeError::NotAGroup),
            None => Err(TreeError::NotFound(id)),
        }
    }

    /// Collapses or expands a group. Repeating the call changes nothing.
    pub fn set_expanded(&mut self, id: u32, expanded: bool) -> Result<(), TreeError> {
        match self.root.get_child_mut(id) {
            Some(TaskComponent::Group(group)) => {
                group.expanded = expanded;
                Ok(())
            }
            Some(TaskComponent::Leaf(_)) => Err(TreeError::NotAGroup),
            None => Err(TreeError::NotFound(id)),
        }
    }

    /// Flattened tasks after the `showCompleted` setting and the current
    /// filter and sort strategies.
    pub fn visible_tasks(&self) -> Vec<Task> {
        let show_completed = self.settings.flag(settings::SHOW_COMPLETED).unwrap_or(true);
        let tasks: Vec<Task> = self
            .root
            .tasks()
            .into_iter()
            .filter(|task| show_completed || !task.is_completed())
            .collect();
        self.strategies.process(&tasks)
    }

    pub fn update_setting(&mut self, key: &str, value: SettingValue) -> Result<(), SettingsError> {
        self.settings.set(key, value.clone())?;
        self.notify(Message::SettingUpdated(key.to_string(), value.to_string()));
        Ok(())
    }

    pub fn reset_settings(&mut self) {
        self.settings.reset_to_defaults();
        self.notify(Message::SettingsReset);
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    fn notify(&mut self, message: Message) {
        let limit = self.settings.number(settings::MAX_NOTIFICATIONS).unwrap_or(0) as usize;
        debug!(%message, "board activity");
        self.notifications.push_back(Notification {
            message: message.to_string(),
            at: Local::now().naive_local(),
        });
        while self.notifications.len() > limit {
            self.notifications.pop_front();
        }
    }

    /// Demo board with a few groups and tasks of every category.
    pub fn seeded(settings: Settings) -> Result<Self, TreeError> {
        let mut board = Board::new(settings);
        let start = Local::now().naive_local() - Duration::days(3);
        let mut hours = 0;
        let mut stamp = move || {
            hours += 5;
            start + Duration::hours(hours)
        };

        let work = board.create_group(None, "Work", Some("#e67e22"))?;
        let sprint = board.create_group(Some(work), "Sprint 14", None)?;
        let personal = board.create_group(None, "Personal", Some("#9b59b6"))?;

        let seeds: [(u32, &str, &str, Category, Status); 7] = [
            (work, "Quarterly report", "Collect numbers from finance", Category::Work, Status::InProgress),
            (work, "Team sync", "Prepare agenda", Category::Work, Status::Completed),
            (sprint, "Fix login bug", "Session expires too early", Category::Work, Status::Pending),
            (sprint, "Review pull requests", "", Category::Work, Status::Pending),
            (personal, "Buy groceries", "Milk, bread, apples", Category::Personal, Status::Pending),
            (ROOT_ID, "Read chapter 5", "Distributed systems book", Category::Study, Status::InProgress),
            (ROOT_ID, "Food bank shift", "Saturday morning", Category::Volunteer, Status::Pending),
        ];

        for (parent, title, description, category, status) in seeds {
            let task = board.new_task(title, description, Some(category)).with_created_at(stamp());
            let id = board.add_to(Some(parent), task.into())?;
            if let Some(component) = board.root.get_child_mut(id) {
                component.set_status(status);
            }
        }

        board.notifications.clear();
        Ok(board)
    }
}
