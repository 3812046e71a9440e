//! Connection setup for phone book databases.

use crate::error::{Result, StoreError};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Stamped into the SQLite header of every phone book file ("PFLD").
pub const APPLICATION_ID: i32 = 0x5046_4c44;

const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

const PRAGMAS: &[(&str, &str)] = &[
    ("foreign_keys", "ON"),
    ("journal_mode", "WAL"),
    ("synchronous", "NORMAL"),
];

pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    restrict_db_permissions(path)?;
    configure(&conn)?;
    claim_application_id(&conn, path)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    for &(name, value) in PRAGMAS {
        conn.pragma_update(None, name, value)?;
    }
    Ok(())
}

// Unstamped files are claimed; files stamped by another program are refused.
fn claim_application_id(conn: &Connection, path: &Path) -> Result<()> {
    let current: i32 = conn.pragma_query_value(None, "application_id", |row| row.get(0))?;
    match current {
        APPLICATION_ID => Ok(()),
        0 => {
            conn.pragma_update(None, "application_id", APPLICATION_ID)?;
            Ok(())
        }
        other => Err(StoreError::ForeignDatabase {
            path: path.to_path_buf(),
            application_id: other,
        }),
    }
}

#[cfg(unix)]
fn restrict_db_permissions(path: &Path) -> Result<()> {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(meta) if meta.permissions().mode() & 0o077 != 0 => {
            fs::set_permissions(path, Permissions::from_mode(0o600))?;
        }
        Ok(_) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

#[cfg(not(unix))]
fn restrict_db_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
