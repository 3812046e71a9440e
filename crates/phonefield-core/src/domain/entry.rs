use crate::domain::ids::EntryId;
use crate::error::CoreError;
use crate::phone::PhoneNumber;
use serde::{Deserialize, Serialize};

/// A named phone book entry. The phone may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub phone: PhoneNumber,
    pub created_at: i64,
    pub updated_at: i64,
}

pub fn normalize_entry_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyEntryName);
    }
    Ok(trimmed.to_string())
}
