//! Composite tree of tasks.
//!
//! A [`TaskComponent`] is either a [`TaskLeaf`] wrapping exactly one task or a
//! [`TaskGroup`] owning an ordered list of child components. Callers can treat
//! "a task" and "a tree of tasks" the same way: counting, searching, removal
//! and bulk status changes are available on both variants.
//!
//! ## Structure
//!
//! ```text
//! Group "Work" (3)
//! ├── Leaf A
//! ├── Leaf B
//! └── Group "Sub" (1)
//!     └── Leaf C
//! ```
//!
//! Children are owned by value. A component therefore has exactly one parent
//! and a group can never become its own descendant.
//!
//! ## Search Order
//!
//! `get_child` and `remove` look at the direct children of a group first and
//! only then descend into child groups, in sequence order. The first match
//! wins.

use super::task::{Status, Task};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("a single task cannot hold children")]
    NotAGroup,
    #[error("no component with id {0} in this tree")]
    NotFound(u32),
}

/// Leaf node: exactly one task, no children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskLeaf {
    pub task: Task,
}

impl TaskLeaf {
    pub fn new(task: Task) -> Self {
        Self { task }
    }
}

/// Group node: an ordered list of children plus display attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskGroup {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub expanded: bool,
    created_at: NaiveDateTime,
    children: Vec<TaskComponent>,
}

impl TaskGroup {
    pub fn new(id: u32, name: &str, color: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            color: color.to_string(),
            expanded: true,
            created_at: Local::now().naive_local(),
            children: Vec::new(),
        }
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn children(&self) -> &[TaskComponent] {
        &self.children
    }

    /// Appends a component at the end of the children list.
    pub fn add(&mut self, component: TaskComponent) {
        debug!(group = self.id, child = component.id(), "adding component");
        self.children.push(component);
    }

    /// Removes the first component with the given id and returns it.
    pub fn remove(&mut self, id: u32) -> Result<TaskComponent, TreeError> {
        if let Some(index) = self.children.iter().position(|child| child.id() == id) {
            debug!(group = self.id, child = id, "removing component");
            return Ok(self.children.remove(index));
        }

        for child in self.children.iter_mut() {
            if let TaskComponent::Group(group) = child {
                if let Ok(removed) = group.remove(id) {
                    return Ok(removed);
                }
            }
        }

        Err(TreeError::NotFound(id))
    }

    pub fn get_child(&self, id: u32) -> Option<&TaskComponent> {
        if let Some(child) = self.children.iter().find(|child| child.id() == id) {
            return Some(child);
        }

        self.children.iter().find_map(|child| match child {
            TaskComponent::Group(group) => group.get_child(id),
            TaskComponent::Leaf(_) => None,
        })
    }

    pub fn get_child_mut(&mut self, id: u32) -> Option<&mut TaskComponent> {
        if let Some(index) = self.children.iter().position(|child| child.id() == id) {
            return self.children.get_mut(index);
        }

        self.children.iter_mut().find_map(|child| match child {
            TaskComponent::Group(group) => group.get_child_mut(id),
            TaskComponent::Leaf(_) => None,
        })
    }

    /// Looks up a task anywhere below this group.
    pub fn find_task_mut(&mut self, id: u32) -> Option<&mut Task> {
        match self.get_child_mut(id) {
            Some(TaskComponent::Leaf(leaf)) => Some(&mut leaf.task),
            _ => None,
        }
    }

    pub fn count_tasks(&self) -> usize {
        self.children.iter().map(TaskComponent::count_tasks).sum()
    }

    pub fn count_by_status(&self, status: Status) -> usize {
        self.flatten_leaves().iter().filter(|leaf| leaf.task.status == status).count()
    }

    /// Share of completed tasks in percent, 0 for an empty group.
    pub fn progress(&self) -> u8 {
        let total = self.count_tasks();
        if total == 0 {
            return 0;
        }
        ((self.count_by_status(Status::Completed) * 100) / total) as u8
    }

    /// All leaves of the subtree, depth-first, in sequence order.
    pub fn flatten_leaves(&self) -> Vec<&TaskLeaf> {
        let mut leaves = Vec::with_capacity(self.children.len());
        for child in &self.children {
            child.collect_leaves(&mut leaves);
        }
        leaves
    }

    /// Tasks of the subtree in the same order as [`TaskGroup::flatten_leaves`].
    pub fn tasks(&self) -> Vec<Task> {
        self.flatten_leaves().into_iter().map(|leaf| leaf.task.clone()).collect()
    }

    /// Applies a status to every reachable leaf and returns how many were touched.
    pub fn set_group_status(&mut self, status: Status) -> usize {
        let touched = self
            .children
            .iter_mut()
            .map(|child| match child {
                TaskComponent::Leaf(leaf) => {
                    leaf.task.set_status(status);
                    1
                }
                TaskComponent::Group(group) => group.set_group_status(status),
            })
            .sum();
        debug!(group = self.id, %status, touched, "group status applied");
        touched
    }

    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

/// A node of the task tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaskComponent {
    Leaf(TaskLeaf),
    Group(TaskGroup),
}

impl From<Task> for TaskComponent {
    fn from(task: Task) -> Self {
        TaskComponent::Leaf(TaskLeaf::new(task))
    }
}

impl From<TaskGroup> for TaskComponent {
    fn from(group: TaskGroup) -> Self {
        TaskComponent::Group(group)
    }
}

impl TaskComponent {
    pub fn id(&self) -> u32 {
        match self {
            TaskComponent::Leaf(leaf) => leaf.task.id,
            TaskComponent::Group(group) => group.id,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, TaskComponent::Group(_))
    }

    pub fn add(&mut self, component: TaskComponent) -> Result<(), TreeError> {
        match self {
            TaskComponent::Leaf(_) => Err(TreeError::NotAGroup),
            TaskComponent::Group(group) => {
                group.add(component);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, id: u32) -> Result<TaskComponent, TreeError> {
        match self {
            TaskComponent::Leaf(_) => Err(TreeError::NotAGroup),
            TaskComponent::Group(group) => group.remove(id),
        }
    }

    pub fn get_child(&self, id: u32) -> Option<&TaskComponent> {
        match self {
            TaskComponent::Leaf(_) => None,
            TaskComponent::Group(group) => group.get_child(id),
        }
    }

    pub fn children(&self) -> &[TaskComponent] {
        match self {
            TaskComponent::Leaf(_) => &[],
            TaskComponent::Group(group) => group.children(),
        }
    }

    pub fn count_tasks(&self) -> usize {
        match self {
            TaskComponent::Leaf(_) => 1,
            TaskComponent::Group(group) => group.count_tasks(),
        }
    }

    pub fn flatten_leaves(&self) -> Vec<&TaskLeaf> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    pub fn set_status(&mut self, status: Status) -> usize {
        match self {
            TaskComponent::Leaf(leaf) => {
                leaf.task.set_status(status);
                1
            }
            TaskComponent::Group(group) => group.set_group_status(status),
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a TaskLeaf>) {
        match self {
            TaskComponent::Leaf(leaf) => out.push(leaf),
            TaskComponent::Group(group) => {
                for child in &group.children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}
