//! # tasktree - Hierarchical task organizer
//!
//! A library and command-line tool for organizing tasks into nested groups
//! and viewing them through swappable sort and filter strategies.
//!
//! ## Features
//!
//! - **Task Categories**: Generic, personal, work, study and volunteer tasks
//! - **Task Tree**: Groups nest without limit; counts and status changes recurse
//! - **Sort Strategies**: Newest, oldest, alphabetical and status ordering
//! - **Filter Strategies**: By status, by category or by free text
//! - **Settings**: Observable settings with documented defaults
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktree::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
