//! Column codec for phone numbers.
//!
//! A number is stored as its cleaned form and read back by parsing, which
//! reproduces the same cleaned form exactly.

use crate::error::{Result, StoreError};
use phonefield_core::{PhoneNumber, MAX_PHONE_LEN};

pub fn store(phone: &PhoneNumber) -> Result<String> {
    let value = phone.cleaned();
    let actual = value.chars().count();
    if actual > MAX_PHONE_LEN {
        return Err(StoreError::PhoneTooLong {
            max: MAX_PHONE_LEN,
            actual,
        });
    }
    Ok(value.to_string())
}

pub fn load(value: &str) -> PhoneNumber {
    PhoneNumber::parse(value)
}
