//! Storage layer: one single-file SQLite store per resource pair.

pub mod players;
pub mod task_lists;
pub mod tasks;
pub mod teams;

use crate::error::ApiResult;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

mod roster_migrations {
    use refinery::embed_migrations;
    embed_migrations!("migrations/roster");
}

mod board_migrations {
    use refinery::embed_migrations;
    embed_migrations!("migrations/board");
}

fn open_file(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;

    // Enable WAL mode for concurrent access
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA foreign_keys=ON;
         PRAGMA busy_timeout=5000;",
    )?;

    Ok(conn)
}

fn open_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

/// Handle for the roster store (teams and players).
#[derive(Clone)]
pub struct RosterDb {
    conn: Arc<Mutex<Connection>>,
}

impl RosterDb {
    /// Open or create the roster database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = open_file(path.as_ref())?;
        roster_migrations::migrations::runner().run(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory roster database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = open_memory()?;
        roster_migrations::migrations::runner().run(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a function with exclusive access to the connection. The
    /// connection is held for exactly this call and released on all paths.
    pub fn with_conn<F, T>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&Connection) -> ApiResult<T>,
    {
        let conn = self.conn.lock().unwrap();
        f(&conn)
    }
}

/// Handle for the board store (task lists and tasks).
#[derive(Clone)]
pub struct BoardDb {
    conn: Arc<Mutex<Connection>>,
}

impl BoardDb {
    /// Open or create the board database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = open_file(path.as_ref())?;
        board_migrations::migrations::runner().run(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory board database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = open_memory()?;
        board_migrations::migrations::runner().run(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a function with exclusive access to the connection. The
    /// connection is held for exactly this call and released on all paths.
    pub fn with_conn<F, T>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&Connection) -> ApiResult<T>,
    {
        let conn = self.conn.lock().unwrap();
        f(&conn)
    }
}
