//! Core library modules for the tasktree application.
//!
//! ## Features
//!
//! - **Tasks**: A single task type with category and status enumerations
//! - **Task Tree**: Composite groups of tasks with recursive operations
//! - **Strategies**: Registries of sort comparators and filters
//! - **Settings**: Observable key/value settings with defaults
//! - **Board**: The application root tying the pieces together
//! - **User Interface**: Console rendering and messages
//!
//! ## Usage
//!
//! ```rust
//! use tasktree::libs::board::Board;
//! use tasktree::libs::task::{Category, Status};
//!
//! let mut board = Board::default();
//! let work = board.create_group(None, "Work", None)?;
//! let task = board.create_task(Some(work), "Deploy", "Ship 1.2", Some(Category::Work))?;
//! board.set_status(task, Status::Completed)?;
//! assert_eq!(board.root().count_tasks(), 1);
//! # Ok::<(), tasktree::libs::component::TreeError>(())
//! ```

pub mod board;
pub mod component;
pub mod messages;
pub mod metadata;
pub mod settings;
pub mod strategy;
pub mod task;
pub mod view;
