//! Task entity, its status lifecycle and category lookup table.
//!
//! A single [`Task`] type covers every kind of task. The kind is carried by
//! the [`Category`] field, and everything that differs between kinds (the
//! human readable label and the presentation tag) is resolved through
//! lookups on that enumeration.
//!
//! ## Usage
//!
//! ```rust
//! use tasktree::libs::task::{Category, Status, Task};
//!
//! let mut task = Task::with_category(1, "Quarterly review", "Prepare slides", Category::Work);
//! assert_eq!(task.status, Status::Pending);
//! assert_eq!(task.type_label(), "Work Task");
//!
//! task.set_status(Status::Completed);
//! assert!(task.is_completed());
//! ```

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing user supplied status or category names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown status '{0}' (expected pending, in-progress or completed)")]
    UnknownStatus(String),
    #[error("unknown category '{0}' (expected generic, personal, work, study or volunteer)")]
    UnknownCategory(String),
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    /// Stable key used in strategy registries and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In progress",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }
}

/// Presentation attributes attached to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTag {
    pub icon: &'static str,
    pub color: &'static str,
}

/// Kind of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Generic,
    Personal,
    Work,
    Study,
    Volunteer,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Generic,
        Category::Personal,
        Category::Work,
        Category::Study,
        Category::Volunteer,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Generic => "generic",
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Study => "study",
            Category::Volunteer => "volunteer",
        }
    }

    /// Label reported by [`Task::type_label`].
    pub fn label(&self) -> &'static str {
        match self {
            Category::Generic => "Task",
            Category::Personal => "Personal Task",
            Category::Work => "Work Task",
            Category::Study => "Study Task",
            Category::Volunteer => "Volunteer Task",
        }
    }

    pub fn tag(&self) -> CategoryTag {
        match self {
            Category::Generic => CategoryTag { icon: "📝", color: "#3498db" },
            Category::Personal => CategoryTag { icon: "🏠", color: "#9b59b6" },
            Category::Work => CategoryTag { icon: "💼", color: "#e67e22" },
            Category::Study => CategoryTag { icon: "📚", color: "#27ae60" },
            Category::Volunteer => CategoryTag { icon: "🤝", color: "#e74c3c" },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub category: Category,
    created_at: NaiveDateTime,
}

impl Task {
    pub fn new(id: u32, title: &str, description: &str) -> Self {
        Self::with_category(id, title, description, Category::Generic)
    }

    pub fn with_category(id: u32, title: &str, description: &str, category: Category) -> Self {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status: Status::Pending,
            category,
            created_at: Local::now().naive_local(),
        }
    }

    /// Replaces the creation timestamp. Only meant for building tasks from
    /// known data, the timestamp has no setter afterwards.
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn type_label(&self) -> &'static str {
        self.category.label()
    }

    /// Overwrites the current status. Every transition is allowed.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_accepts_aliases() {
        assert_eq!("Pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!(" completed ".parse::<Status>().unwrap(), Status::Completed);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!("Work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!("VOLUNTEER".parse::<Category>().unwrap(), Category::Volunteer);
        assert_eq!(
            "hobby".parse::<Category>(),
            Err(ParseError::UnknownCategory("hobby".to_string()))
        );
    }

    #[test]
    fn test_every_category_has_a_distinct_tag() {
        let colors: std::collections::HashSet<_> = Category::ALL.iter().map(|c| c.tag().color).collect();
        assert_eq!(colors.len(), Category::ALL.len());
    }
}
