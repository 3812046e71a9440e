pub mod domain;
pub mod dto;
pub mod error;
pub mod field;
pub mod phone;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use field::{decompose, recompose, PhoneField, PhoneValue, MAX_PHONE_LEN};
pub use phone::{NumberingPlan, PhoneNumber, Region};
