//! Semester CRUD operations.
//!
//! Accessors borrow the application's open database handle and, for
//! creation, the preference store: creating a semester also makes it the
//! selected one, so a user lands in the term they just set up.

use crate::db::db::Db;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use crate::libs::semester::Semester;
use crate::msg_debug;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_SEMESTER: &str = "INSERT INTO semesters (title, start_date, end_date) VALUES (?1, ?2, ?3)";
const SELECT_SEMESTERS: &str = "SELECT id, title, start_date, end_date FROM semesters";
const SELECT_SEMESTER_BY_ID: &str = "SELECT id, title, start_date, end_date FROM semesters WHERE id = ?1";
const DELETE_SEMESTER: &str = "DELETE FROM semesters WHERE id = ?1";

pub struct Semesters<'a> {
    conn: &'a Connection,
    preferences: &'a Preferences,
}

impl<'a> Semesters<'a> {
    pub fn new(db: &'a Db, preferences: &'a Preferences) -> Self {
        Self {
            conn: &db.conn,
            preferences,
        }
    }

    /// All semesters in store order; empty when none exist yet.
    pub fn fetch(&self) -> Result<Vec<Semester>> {
        let mut stmt = self.conn.prepare(SELECT_SEMESTERS)?;
        let semester_iter = stmt.query_map([], Self::map_row)?;

        let mut semesters = Vec::new();
        for semester in semester_iter {
            semesters.push(semester?);
        }
        Ok(semesters)
    }

    /// Point lookup; `None` is a valid "not found" result, not an error.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Semester>> {
        self.conn
            .query_row(SELECT_SEMESTER_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Validates and inserts a new semester, returning the stored row.
    ///
    /// The new semester is also written to the preference store as the
    /// selected one: creating a term activates it.
    pub fn create(&self, title: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<Semester> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::validation(Message::SemesterTitleEmpty));
        }
        if start_date > end_date {
            return Err(Error::validation(Message::SemesterDatesInverted(
                start_date.to_string(),
                end_date.to_string(),
            )));
        }

        self.conn.execute(INSERT_SEMESTER, params![title, start_date, end_date])?;
        let semester = Semester {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            start_date,
            end_date,
        };

        self.preferences.set_selected_semester(&semester)?;
        msg_debug!(Message::SemesterCreated(semester.title.clone()));

        Ok(semester)
    }

    /// Deletes a semester; the cascade constraint removes its tasks.
    ///
    /// A selected-semester preference pointing at the deleted id is left in
    /// place; the caller detects the stale snapshot by `get_by_id` returning
    /// `None` and resets the preference itself.
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_SEMESTER, params![id])?;
        if affected == 0 {
            return Err(Error::not_found(Message::SemesterNotFound(id)));
        }
        msg_debug!(Message::SemesterDeleted(id));
        Ok(())
    }

    fn map_row(row: &Row) -> rusqlite::Result<Semester> {
        Ok(Semester {
            id: row.get(0)?,
            title: row.get(1)?,
            start_date: row.get(2)?,
            end_date: row.get(3)?,
        })
    }
}
