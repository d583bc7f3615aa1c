//! Database layer for the planit application.
//!
//! Provides the data persistence layer built on SQLite: type-safe CRUD
//! operations for semesters and tasks, plus the migration system that
//! creates and evolves the schema.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection management and migrations
//! - **Semester Management**: Academic term records with cascade deletion
//! - **Task Management**: Tasks with due dates and scheduled work blocks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use planit::libs::context::AppContext;
//! use planit::libs::task::{NewTask, TaskFilter};
//!
//! # fn main() -> planit::libs::error::Result<()> {
//! let app = AppContext::init()?;
//! let semesters = app.semesters().fetch()?;
//! let tasks = app.tasks().fetch(semesters[0].id, TaskFilter::All)?;
//! # Ok(())
//! # }
//! ```
//!
//! Accessors take the open handles by reference; the application context
//! owns them for the life of the process. All dates and times cross the
//! SQLite boundary as ISO-8601 text.

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens SQLite connections, enables
/// foreign-key enforcement and applies migrations.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes and tracks migration history.
pub mod migrations;

/// Semester CRUD operations.
///
/// Creation, lookup and deletion of academic terms, including the
/// selected-semester preference side effect on creation.
pub mod semesters;

/// Task CRUD operations.
///
/// Creation, updates, filtering, scheduling and completion tracking for
/// tasks within a semester.
pub mod tasks;
