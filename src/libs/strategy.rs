//! Swappable sort and filter strategies over a flat task list.
//!
//! The [`StrategyContext`] keeps two registries keyed by string: sort
//! comparators and [`Filter`] descriptors. One entry of each is current at a
//! time and [`StrategyContext::process`] applies them, filter first, then sort.
//!
//! ## Built-in Keys
//!
//! | Sort key           | Order                                      |
//! |--------------------|--------------------------------------------|
//! | `newest`           | creation time, latest first                |
//! | `oldest`           | creation time, earliest first              |
//! | `alpha-az`         | title, A to Z                              |
//! | `alpha-za`         | title, Z to A                              |
//! | `status-pending`   | pending, in progress, completed            |
//! | `status-completed` | completed, in progress, pending            |
//!
//! Filter keys: `all`, `pending`, `in-progress`, `completed`. Two compound
//! keys build a filter on the fly without being registered:
//! `type:<category>` and `search:<text>`.
//!
//! ## Usage
//!
//! ```rust
//! use tasktree::libs::strategy::StrategyContext;
//! use tasktree::libs::task::{Category, Task};
//!
//! let mut context = StrategyContext::default();
//! context.set_sort("alpha-az")?;
//! context.set_filter("type:work")?;
//!
//! let tasks = vec![
//!     Task::with_category(1, "Shop", "", Category::Personal),
//!     Task::with_category(2, "Deploy", "", Category::Work),
//! ];
//! let visible = context.process(&tasks);
//! assert_eq!(visible.len(), 1);
//! # Ok::<(), tasktree::libs::strategy::StrategyError>(())
//! ```

use super::task::{Category, Status, Task};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

pub const DEFAULT_SORT: &str = "newest";
pub const DEFAULT_FILTER: &str = "all";

const TYPE_PREFIX: &str = "type:";
const SEARCH_PREFIX: &str = "search:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("unknown sort strategy '{0}'")]
    UnknownSort(String),
    #[error("unknown filter strategy '{0}'")]
    UnknownFilter(String),
}

/// Comparator used by a sort strategy.
pub type Comparator = Box<dyn Fn(&Task, &Task) -> Ordering>;

/// Which tasks survive a filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Filter {
    All,
    ByStatus(Status),
    ByCategory(Category),
    BySearchText(String),
}

impl Filter {
    /// Builds a filter from a compound `type:` or `search:` key.
    pub fn from_compound_key(key: &str) -> Option<Filter> {
        if let Some(category) = key.strip_prefix(TYPE_PREFIX) {
            return category.parse().ok().map(Filter::ByCategory);
        }
        key.strip_prefix(SEARCH_PREFIX)
            .map(|text| Filter::BySearchText(text.trim().to_lowercase()))
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::ByStatus(status) => task.status == *status,
            Filter::ByCategory(category) => task.category == *category,
            Filter::BySearchText(text) => {
                text.is_empty()
                    || task.title.to_lowercase().contains(text.as_str())
                    || task.description.to_lowercase().contains(text.as_str())
            }
        }
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|task| self.matches(task)).cloned().collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::ByStatus(status) => write!(f, "{}", status.key()),
            Filter::ByCategory(category) => write!(f, "{}{}", TYPE_PREFIX, category.key()),
            Filter::BySearchText(text) => write!(f, "{}{}", SEARCH_PREFIX, text),
        }
    }
}

fn status_rank(status: Status, order: &[Status; 3]) -> usize {
    order.iter().position(|s| *s == status).unwrap_or(order.len())
}

/// Collation key: canonical decomposition without combining marks, lowercased.
/// "Éclair" and "eclair" share a key.
fn title_key(title: &str) -> String {
    title.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

/// Accent and case insensitive title comparison, raw titles break ties.
fn compare_titles(a: &Task, b: &Task) -> Ordering {
    title_key(&a.title)
        .cmp(&title_key(&b.title))
        .then_with(|| a.title.cmp(&b.title))
}

/// Registries plus the currently selected sort and filter.
pub struct StrategyContext {
    sorts: BTreeMap<String, Comparator>,
    filters: BTreeMap<String, Filter>,
    current_sort: String,
    current_filter: Filter,
}

impl Default for StrategyContext {
    fn default() -> Self {
        let mut context = Self::empty();

        context.register_sort("newest", |a, b| b.created_at().cmp(&a.created_at()));
        context.register_sort("oldest", |a, b| a.created_at().cmp(&b.created_at()));
        context.register_sort("alpha-az", compare_titles);
        context.register_sort("alpha-za", |a, b| compare_titles(b, a));
        context.register_sort("status-pending", |a, b| {
            let order = [Status::Pending, Status::InProgress, Status::Completed];
            status_rank(a.status, &order).cmp(&status_rank(b.status, &order))
        });
        context.register_sort("status-completed", |a, b| {
            let order = [Status::Completed, Status::InProgress, Status::Pending];
            status_rank(a.status, &order).cmp(&status_rank(b.status, &order))
        });

        context.register_filter("all", Filter::All);
        for status in Status::ALL {
            context.register_filter(status.key(), Filter::ByStatus(status));
        }

        context.current_sort = DEFAULT_SORT.to_string();
        context
    }
}

impl fmt::Debug for StrategyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyContext")
            .field("sorts", &self.sorts.keys().collect::<Vec<_>>())
            .field("filters", &self.filters)
            .field("current_sort", &self.current_sort)
            .field("current_filter", &self.current_filter)
            .finish()
    }
}

impl StrategyContext {
    /// A context with empty registries. `process` then only copies its input.
    pub fn empty() -> Self {
        Self {
            sorts: BTreeMap::new(),
            filters: BTreeMap::new(),
            current_sort: String::new(),
            current_filter: Filter::All,
        }
    }

    pub fn register_sort<F>(&mut self, key: &str, comparator: F)
    where
        F: Fn(&Task, &Task) -> Ordering + 'static,
    {
        self.sorts.insert(key.to_string(), Box::new(comparator));
    }

    pub fn register_filter(&mut self, key: &str, filter: Filter) {
        self.filters.insert(key.to_string(), filter);
    }

    pub fn set_sort(&mut self, key: &str) -> Result<(), StrategyError> {
        if !self.sorts.contains_key(key) {
            return Err(StrategyError::UnknownSort(key.to_string()));
        }
        debug!(sort = key, "sort strategy selected");
        self.current_sort = key.to_string();
        Ok(())
    }

    pub fn set_filter(&mut self, key: &str) -> Result<(), StrategyError> {
        let filter = self
            .filters
            .get(key)
            .cloned()
            .or_else(|| Filter::from_compound_key(key))
            .ok_or_else(|| StrategyError::UnknownFilter(key.to_string()))?;
        debug!(filter = %filter, "filter strategy selected");
        self.current_filter = filter;
        Ok(())
    }

    /// Selects a filter descriptor directly, registered or not.
    pub fn use_filter(&mut self, filter: Filter) {
        self.current_filter = filter;
    }

    pub fn current_sort(&self) -> &str {
        &self.current_sort
    }

    pub fn current_filter(&self) -> &Filter {
        &self.current_filter
    }

    /// Registered sort keys in key order.
    pub fn sort_keys(&self) -> Vec<&str> {
        self.sorts.keys().map(String::as_str).collect()
    }

    /// Registered filter keys in key order. Compound keys are not listed.
    pub fn filter_keys(&self) -> Vec<&str> {
        self.filters.keys().map(String::as_str).collect()
    }

    /// Every filter that can be selected: registered ones plus one per category.
    pub fn available_filters(&self) -> Vec<Filter> {
        let mut filters: Vec<Filter> = self.filters.values().cloned().collect();
        filters.extend(Category::ALL.into_iter().map(Filter::ByCategory));
        filters
    }

    /// Filters, then sorts, a copy of `tasks`. The sort is stable.
    pub fn process(&self, tasks: &[Task]) -> Vec<Task> {
        let mut result = self.current_filter.apply(tasks);
        if let Some(comparator) = self.sorts.get(&self.current_sort) {
            result.sort_by(|a, b| comparator(a, b));
        }
        result
    }
}
