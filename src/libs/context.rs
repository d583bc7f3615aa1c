//! Application-level context tying the stores together.
//!
//! The database handle and the preference store are process-wide singletons
//! initialized once at startup and passed explicitly to the accessor layer.
//! `AppContext` is that single owner: it opens both stores, surfaces any
//! initialization problem as a fatal [`Error::Startup`], and hands out
//! short-lived accessors borrowing its handles.

use crate::db::db::{Db, DB_FILE_NAME};
use crate::db::semesters::Semesters;
use crate::db::tasks::Tasks;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::preferences::{Preferences, PREFERENCES_FILE_NAME};
use crate::msg_debug;
use std::path::Path;

pub struct AppContext {
    pub db: Db,
    pub preferences: Preferences,
}

impl AppContext {
    /// Opens the database and preference store in the platform data
    /// directory. Any failure here is fatal: the application cannot run on
    /// a partially initialized store.
    pub fn init() -> Result<Self> {
        let db = Db::new().map_err(|e| Error::startup(Message::DbInitFailed(e.to_string())))?;
        let preferences = Preferences::new().map_err(|e| Error::startup(Message::PreferencesInitFailed(e.to_string())))?;
        Ok(Self { db, preferences })
    }

    /// Opens both stores rooted at an explicit directory.
    pub fn init_at(dir: &Path) -> Result<Self> {
        let db = Db::open(&dir.join(DB_FILE_NAME)).map_err(|e| Error::startup(Message::DbInitFailed(e.to_string())))?;
        let preferences = Preferences::open(dir.join(PREFERENCES_FILE_NAME));
        Ok(Self { db, preferences })
    }

    pub fn semesters(&self) -> Semesters<'_> {
        Semesters::new(&self.db, &self.preferences)
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(&self.db)
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// App-reset: drops every task and semester, then the preference.
    ///
    /// Tasks are deleted explicitly first; the cascade alone would miss
    /// orphans written before foreign keys were enforced.
    pub fn reset(&self) -> Result<()> {
        self.db.conn.execute("DELETE FROM tasks", [])?;
        self.db.conn.execute("DELETE FROM semesters", [])?;
        self.preferences.clear()?;
        msg_debug!(Message::StoreReset);
        Ok(())
    }
}
