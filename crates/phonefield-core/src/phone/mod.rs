mod cleaner;
mod format;
mod number;
mod plan;

pub use cleaner::{clean, CleanedInput, DialDigits};
pub use number::PhoneNumber;
pub use plan::{
    default_plan, Classification, NumberingPlan, Recognized, Region, UsaPlan, USA_PLAN,
};

pub(crate) use format::join_extensions;
