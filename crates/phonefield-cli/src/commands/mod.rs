use anyhow::Result;
use phonefield_config::AppConfig;
use phonefield_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod entries;
pub mod text;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

/// Context for commands that never touch the database.
pub struct TextContext<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
