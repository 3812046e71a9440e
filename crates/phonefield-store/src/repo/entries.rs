use crate::codec;
use crate::error::{Result, StoreError};
use phonefield_core::domain::{normalize_entry_name, Entry, EntryId};
use phonefield_core::PhoneNumber;
use rusqlite::{params, Connection, OptionalExtension};
use std::str::FromStr;

const ENTRY_COLUMNS: &str = "id, name, phone, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct EntryNew {
    pub name: String,
    pub phone: PhoneNumber,
}

pub struct EntriesRepo<'a> {
    conn: &'a Connection,
}

impl<'a> EntriesRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, now_utc: i64, input: EntryNew) -> Result<Entry> {
        let entry = Entry {
            id: EntryId::new(),
            name: normalize_entry_name(&input.name)?,
            phone: input.phone,
            created_at: now_utc,
            updated_at: now_utc,
        };
        let phone = codec::store(&entry.phone)?;

        self.conn.execute(
            "INSERT INTO entries (id, name, phone, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                entry.id.to_string(),
                entry.name,
                phone,
                entry.created_at,
                entry.updated_at
            ],
        )?;
        Ok(entry)
    }

    pub fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1;"))?;
        let row = stmt
            .query_row([id.to_string()], |row| Ok(EntryRow::from_row(row)))
            .optional()?;
        row.transpose()?.map(EntryRow::into_entry).transpose()
    }

    pub fn list_all(&self) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries ORDER BY name COLLATE NOCASE ASC, created_at ASC;"
        ))?;
        let entries = collect_entries(stmt.query([])?);
        entries
    }

    /// Entries whose stored number has the same cleaned form as `phone`.
    pub fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE phone = ?1
             ORDER BY name COLLATE NOCASE ASC, created_at ASC;"
        ))?;
        let entries = collect_entries(stmt.query([phone.cleaned()])?);
        entries
    }

    pub fn update_phone(&self, now_utc: i64, id: EntryId, phone: PhoneNumber) -> Result<Entry> {
        let value = codec::store(&phone)?;
        let updated = self.conn.execute(
            "UPDATE entries SET phone = ?1, updated_at = ?2 WHERE id = ?3;",
            params![value, now_utc, id.to_string()],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.get(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn delete(&self, id: EntryId) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1;", [id.to_string()])?;
        if deleted == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

struct EntryRow {
    id: String,
    name: String,
    phone: String,
    created_at: i64,
    updated_at: i64,
}

impl EntryRow {
    fn from_row(row: &rusqlite::Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }

    fn into_entry(self) -> Result<Entry> {
        let id = EntryId::from_str(&self.id).map_err(|_| StoreError::InvalidId(self.id.clone()))?;
        Ok(Entry {
            id,
            name: self.name,
            phone: codec::load(&self.phone),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn collect_entries(mut rows: rusqlite::Rows<'_>) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    while let Some(row) = rows.next()? {
        entries.push(EntryRow::from_row(row)?.into_entry()?);
    }
    Ok(entries)
}
