pub mod entry;
pub mod ids;

pub use entry::{normalize_entry_name, Entry};
pub use ids::EntryId;
