//! Display implementation for planit application messages.
//!
//! Central text catalog for the [`Message`](super::Message) enum. Keeping all
//! wording in one place means accessors, migrations and errors stay free of
//! string literals and every surface reports the same phrasing for the same
//! event.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SEMESTER MESSAGES ===
            Message::SemesterCreated(title) => format!("Semester '{}' created and selected", title),
            Message::SemesterDeleted(id) => format!("Semester {} deleted", id),
            Message::SemesterNotFound(id) => format!("Semester with ID {} not found", id),
            Message::SemesterTitleEmpty => "Semester title cannot be empty".to_string(),
            Message::SemesterDatesInverted(start, end) => {
                format!("Semester start date {} is after end date {}", start, end)
            }

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskTitleEmpty => "Task title cannot be empty".to_string(),
            Message::TaskScheduled(id) => format!("Task {} placed on the calendar", id),
            Message::TaskUnscheduled(id) => format!("Task {} removed from the calendar", id),

            // === DUE DATE / SCHEDULE VALIDATION ===
            Message::DueTimeWithoutDate => "A due time requires a due date".to_string(),
            Message::ScheduleIncomplete => "A scheduled block needs both start and end times".to_string(),
            Message::ScheduleNotPositive => "A scheduled block must end after it starts".to_string(),

            // === PREFERENCE MESSAGES ===
            Message::SelectedSemesterSaved(title) => format!("Selected semester set to '{}'", title),
            Message::SelectedSemesterCleared => "Selected semester preference cleared".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),

            // === STARTUP MESSAGES ===
            Message::DbInitFailed(error) => format!("Failed to initialize the database: {}", error),
            Message::PreferencesInitFailed(error) => format!("Failed to initialize preference storage: {}", error),

            // === RESET MESSAGES ===
            Message::StoreReset => "All semesters, tasks and preferences removed".to_string(),
        };
        write!(f, "{}", text)
    }
}
