use crate::error::invalid_input;
use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use phonefield_core::EntryId;
use std::str::FromStr;

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn format_timestamp_datetime(ts: i64) -> String {
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => ts.to_string(),
    }
}

pub fn parse_entry_id(raw: &str) -> Result<EntryId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("entry id cannot be empty"));
    }
    EntryId::from_str(trimmed).map_err(|_| invalid_input(format!("invalid entry id: {trimmed}")))
}
