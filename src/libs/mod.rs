//! Core library modules for the planit application.
//!
//! Serves as the main entry point for all planit library components:
//! entity types, the preference store, error taxonomy, messaging, and the
//! application context that wires the stores together.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use planit::libs::context::AppContext;
//! use planit::libs::task::{NewTask, TaskFilter};
//!
//! # fn main() -> planit::libs::error::Result<()> {
//! let app = AppContext::init()?;
//! let task = app.tasks().create(&NewTask::new(1, "Study for Midterm", ""))?;
//! let open = app.tasks().fetch(task.semester_id, TaskFilter::UnscheduledOnly)?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod preferences;
pub mod semester;
pub mod task;
