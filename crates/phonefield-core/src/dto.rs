use crate::domain::{Entry, EntryId};
use crate::phone::PhoneNumber;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberDto {
    pub raw: String,
    pub cleaned: String,
    pub formatted: String,
    pub base_number: String,
    pub base_number_fmt: String,
    pub extensions: Vec<String>,
    pub is_e164: bool,
    pub is_standard: bool,
    pub is_usa: bool,
}

impl From<&PhoneNumber> for PhoneNumberDto {
    fn from(phone: &PhoneNumber) -> Self {
        Self {
            raw: phone.raw().to_string(),
            cleaned: phone.cleaned().to_string(),
            formatted: phone.formatted().to_string(),
            base_number: phone.base_number().to_string(),
            base_number_fmt: phone.base_number_fmt().to_string(),
            extensions: phone.extensions().to_vec(),
            is_e164: phone.is_e164(),
            is_standard: phone.is_standard(),
            is_usa: phone.is_usa(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDto {
    pub id: EntryId,
    pub name: String,
    pub phone: String,
    pub formatted: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&Entry> for EntryDto {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            phone: entry.phone.cleaned().to_string(),
            formatted: entry.phone.formatted().to_string(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
