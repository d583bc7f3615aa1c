//! # Planit - Personal Study Planning Core
//!
//! The local data layer for a personal study-planning application:
//! academic terms ("semesters"), tasks bound to a term, optional due
//! dates and scheduled work blocks, all persisted in SQLite.
//!
//! ## Features
//!
//! - **Semester Management**: Create, list and delete academic terms
//! - **Task Management**: Tasks with due dates, due times and completion state
//! - **Scheduling**: Optional start/end work blocks for calendar placement
//! - **Selected Semester**: Durable preference tracking the active term
//! - **Schema Migrations**: Idempotent, versioned schema initialization
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use planit::libs::context::AppContext;
//! use planit::libs::task::TaskFilter;
//!
//! # fn main() -> planit::libs::error::Result<()> {
//! let app = AppContext::init()?;
//! let semester = app.semesters().create(
//!     "Fall 2025",
//!     NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
//! )?;
//! let tasks = app.tasks().fetch(semester.id, TaskFilter::All)?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod libs;
