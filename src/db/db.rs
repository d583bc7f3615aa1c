use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "planit.db";

/// An open handle on the planit database.
///
/// Opening enables foreign-key enforcement for the connection (SQLite
/// defaults it off, and without it cascade deletes silently do nothing)
/// and brings the schema up to date. Safe to call on every start.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens the database at an explicit path.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Self::open_without_migrations(path)?;
        migrations::init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens a raw connection with constraints enabled but no schema setup.
    ///
    /// Used by migration tests that drive the manager by hand.
    pub fn open_without_migrations(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }
}
