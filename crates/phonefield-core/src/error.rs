use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("phone number is required")]
    MissingPhone,
    #[error("phone number too long: {actual} characters (max {max})")]
    PhoneTooLong { max: usize, actual: usize },
    #[error("entry name is required")]
    EmptyEntryName,
    #[error("unknown numbering plan: {0}")]
    UnknownRegion(String),
}
