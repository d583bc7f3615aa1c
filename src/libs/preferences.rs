//! Durable preference storage for the planit application.
//!
//! Preferences live outside the relational store, in a small JSON key-value
//! file in the platform data directory. The single key in use today is
//! `selected-semester`, holding a full snapshot of the active semester so
//! the UI can render immediately at startup without a round trip to the
//! database.
//!
//! The snapshot is written whenever the user switches (or creates) a
//! semester. It is never synthesized from the relational store; when no
//! semester has ever been created the key is simply absent and the caller
//! must offer a "create first semester" flow. A snapshot can also go stale
//! when its semester is deleted; callers detect that by looking the id up
//! and finding nothing.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::semester::Semester;
use crate::msg_debug;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::path::PathBuf;

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

const SELECTED_SEMESTER_KEY: &str = "selected-semester";

pub struct Preferences {
    path: PathBuf,
}

impl Preferences {
    /// Opens the preference store in the platform data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(PREFERENCES_FILE_NAME)?;
        Ok(Self { path })
    }

    /// Opens the preference store at an explicit file path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the durable selected-semester snapshot, reconstructing typed
    /// dates from their ISO-8601 form. Absent file or absent key is a valid
    /// "nothing selected yet" result.
    pub fn get_selected_semester(&self) -> Result<Option<Semester>> {
        let store = self.read_store()?;
        match store.get(SELECTED_SEMESTER_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Overwrites the selected-semester snapshot with the full record.
    pub fn set_selected_semester(&self, semester: &Semester) -> Result<()> {
        let mut store = self.read_store()?;
        store.insert(SELECTED_SEMESTER_KEY.to_string(), serde_json::to_value(semester)?);
        self.write_store(&store)?;
        msg_debug!(Message::SelectedSemesterSaved(semester.title.clone()));
        Ok(())
    }

    /// Removes the selected-semester preference.
    pub fn clear(&self) -> Result<()> {
        let mut store = self.read_store()?;
        if store.remove(SELECTED_SEMESTER_KEY).is_some() {
            self.write_store(&store)?;
            msg_debug!(Message::SelectedSemesterCleared);
        }
        Ok(())
    }

    fn read_store(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_store(&self, store: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, store)?;
        Ok(())
    }
}
