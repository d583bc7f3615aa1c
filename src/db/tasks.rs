//! Task CRUD operations, filtering and scheduling updates.
//!
//! Tasks always belong to a semester and are fetched per semester. The
//! due-date/due-time pair and the start/end block are stored as separate
//! nullable columns; every read and write goes through the merge/split
//! logic in [`crate::libs::task`] so the combined values collaborators see
//! stay consistent.

use crate::db::db::Db;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::task::{Due, NewTask, ScheduleBlock, Task, TaskFilter};
use crate::msg_debug;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (semester_id, title, description, due_date, due_time, start, end)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASKS: &str = "SELECT id, semester_id, title, description, due_date, due_time, start, end, completed
    FROM tasks WHERE semester_id = ?1";
const AND_SCHEDULED: &str = "AND start IS NOT NULL AND end IS NOT NULL";
const AND_UNSCHEDULED: &str = "AND start IS NULL AND end IS NULL";
const SELECT_TASK_BY_ID: &str = "SELECT id, semester_id, title, description, due_date, due_time, start, end, completed
    FROM tasks WHERE id = ?1";
const SELECT_TITLES: &str = "SELECT title FROM tasks WHERE semester_id = ?1 AND title LIKE ?2";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, due_time = ?5,
    start = ?6, end = ?7, completed = ?8 WHERE id = ?1";
const UPDATE_SCHEDULE: &str = "UPDATE tasks SET start = ?2, end = ?3 WHERE id = ?1";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Base name for auto-generated task titles.
const PLACEHOLDER_TITLE: &str = "New Task";

pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Tasks belonging to the given semester, optionally narrowed to those
    /// with or without a scheduled block.
    pub fn fetch(&self, semester_id: i64, filter: TaskFilter) -> Result<Vec<Task>> {
        let mut stmt = match filter {
            TaskFilter::All => self.conn.prepare(SELECT_TASKS)?,
            TaskFilter::ScheduledOnly => self.conn.prepare(&format!("{} {}", SELECT_TASKS, AND_SCHEDULED))?,
            TaskFilter::UnscheduledOnly => self.conn.prepare(&format!("{} {}", SELECT_TASKS, AND_UNSCHEDULED))?,
        };

        let task_iter = stmt.query_map(params![semester_id], Self::map_row)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Point lookup; `None` is a valid "not found" result, not an error.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Validates and inserts a new task, returning the stored row.
    ///
    /// An empty or whitespace title gets a generated placeholder name
    /// unique within the semester. Tasks are created incomplete.
    pub fn create(&self, new_task: &NewTask) -> Result<Task> {
        let due = Due::from_parts(new_task.due_date, new_task.due_time)?;
        let schedule = ScheduleBlock::from_parts(new_task.start, new_task.end)?;

        let title = match new_task.title.trim() {
            "" => self.next_available_title(new_task.semester_id)?,
            trimmed => trimmed.to_string(),
        };
        let description = normalize_description(&new_task.description);

        self.conn.execute(
            INSERT_TASK,
            params![
                new_task.semester_id,
                title,
                description,
                due.as_ref().map(Due::date),
                due.as_ref().and_then(|d| d.time()),
                schedule.as_ref().map(|b| b.start),
                schedule.as_ref().map(|b| b.end),
            ],
        )?;

        msg_debug!(Message::TaskCreated(title.clone()));

        Ok(Task {
            id: self.conn.last_insert_rowid(),
            semester_id: new_task.semester_id,
            title,
            description,
            due,
            schedule,
            completed: false,
        })
    }

    /// Full-row update with the same validation as [`Tasks::create`],
    /// except that an empty title is rejected rather than regenerated.
    ///
    /// Changing the due date drops any previously stored due time: the
    /// incoming time is only honored while the date stands still. The
    /// owning semester is never changed by an update.
    pub fn update(&self, id: i64, changes: &NewTask, completed: bool) -> Result<Task> {
        let current = self
            .get_by_id(id)?
            .ok_or_else(|| Error::not_found(Message::TaskNotFoundWithId(id)))?;

        let title = changes.title.trim();
        if title.is_empty() {
            return Err(Error::validation(Message::TaskTitleEmpty));
        }

        let mut due = Due::from_parts(changes.due_date, changes.due_time)?;
        if changes.due_date != current.due.as_ref().map(Due::date) {
            due = changes.due_date.map(Due::Date);
        }
        let schedule = ScheduleBlock::from_parts(changes.start, changes.end)?;
        let description = normalize_description(&changes.description);

        self.conn.execute(
            UPDATE_TASK,
            params![
                id,
                title,
                description,
                due.as_ref().map(Due::date),
                due.as_ref().and_then(|d| d.time()),
                schedule.as_ref().map(|b| b.start),
                schedule.as_ref().map(|b| b.end),
                completed,
            ],
        )?;

        msg_debug!(Message::TaskUpdated(title.to_string()));

        Ok(Task {
            id,
            semester_id: current.semester_id,
            title: title.to_string(),
            description,
            due,
            schedule,
            completed,
        })
    }

    /// Narrow update of the scheduling block, used when a task is dragged
    /// onto or off the calendar. Passing both as `None` unschedules the
    /// task; the due date, due time and all other fields stay untouched.
    pub fn set_schedule(&self, id: i64, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Result<()> {
        let schedule = ScheduleBlock::from_parts(start, end)?;

        let affected = self.conn.execute(
            UPDATE_SCHEDULE,
            params![id, schedule.as_ref().map(|b| b.start), schedule.as_ref().map(|b| b.end)],
        )?;
        if affected == 0 {
            return Err(Error::not_found(Message::TaskNotFoundWithId(id)));
        }

        match schedule {
            Some(_) => msg_debug!(Message::TaskScheduled(id)),
            None => msg_debug!(Message::TaskUnscheduled(id)),
        }
        Ok(())
    }

    /// Narrow completion toggle.
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<()> {
        let affected = self.conn.execute(UPDATE_COMPLETED, params![id, completed])?;
        if affected == 0 {
            return Err(Error::not_found(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    /// Unconditional delete; tasks have no dependents.
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(Error::not_found(Message::TaskNotFoundWithId(id)));
        }
        msg_debug!(Message::TaskDeleted(id));
        Ok(())
    }

    /// Lowest unused placeholder title within the semester: "New Task",
    /// then "New Task 1", "New Task 2", and so on.
    fn next_available_title(&self, semester_id: i64) -> Result<String> {
        let mut stmt = self.conn.prepare(SELECT_TITLES)?;
        let title_iter = stmt.query_map(params![semester_id, format!("{}%", PLACEHOLDER_TITLE)], |row| {
            row.get::<_, String>(0)
        })?;

        let mut titles = Vec::new();
        for title in title_iter {
            titles.push(title?);
        }

        if !titles.iter().any(|t| t == PLACEHOLDER_TITLE) {
            return Ok(PLACEHOLDER_TITLE.to_string());
        }
        let mut suffix = 1;
        loop {
            let candidate = format!("{} {}", PLACEHOLDER_TITLE, suffix);
            if !titles.contains(&candidate) {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            semester_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            due: Due::merge(row.get(4)?, row.get(5)?),
            schedule: ScheduleBlock::merge(row.get(6)?, row.get(7)?),
            completed: row.get(8)?,
        })
    }
}

/// Empty and whitespace descriptions are stored as NULL.
fn normalize_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
