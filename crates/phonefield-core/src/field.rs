use crate::error::CoreError;
use crate::phone::{clean, join_extensions, PhoneNumber};
use std::fmt;

/// Width of the column a cleaned number is stored in.
pub const MAX_PHONE_LEN: usize = 31;

/// Splits a number into the main-number and extension inputs of a form.
pub fn decompose(phone: &PhoneNumber) -> (String, String) {
    let ext = phone.extensions().first().cloned().unwrap_or_default();
    (phone.base_number_fmt().to_string(), ext)
}

/// Joins edited form inputs back into one raw string for parsing.
///
/// Empty parts are dropped, so an extension typed without a main number
/// stands alone.
pub fn recompose(main: &str, ext: &str) -> String {
    [main.trim(), ext.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("x")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneField {
    pub required: bool,
    pub max_length: usize,
}

impl Default for PhoneField {
    fn default() -> Self {
        Self {
            required: true,
            max_length: MAX_PHONE_LEN,
        }
    }
}

impl PhoneField {
    pub fn optional() -> Self {
        Self {
            required: false,
            ..Self::default()
        }
    }

    pub fn clean(&self, main: &str, ext: &str) -> Result<Option<PhoneNumber>, CoreError> {
        self.clean_raw(&recompose(main, ext))
    }

    pub fn clean_raw(&self, raw: &str) -> Result<Option<PhoneNumber>, CoreError> {
        if raw.trim().is_empty() {
            if self.required {
                return Err(CoreError::MissingPhone);
            }
            return Ok(None);
        }

        let phone = PhoneNumber::parse(raw);
        let actual = phone.cleaned().chars().count();
        if actual > self.max_length {
            return Err(CoreError::PhoneTooLong {
                max: self.max_length,
                actual,
            });
        }
        Ok(Some(phone))
    }
}

/// A value handed to the display filters: already parsed, or raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneValue {
    Normalized(PhoneNumber),
    Raw(String),
}

impl PhoneValue {
    pub fn display(&self) -> String {
        match self {
            PhoneValue::Normalized(phone) => phone.formatted().to_string(),
            PhoneValue::Raw(raw) => PhoneNumber::parse(raw).formatted().to_string(),
        }
    }

    /// Machine form: the cleaned number, or for raw text its bare digits.
    pub fn raw_display(&self) -> String {
        match self {
            PhoneValue::Normalized(phone) => phone.cleaned().to_string(),
            PhoneValue::Raw(raw) => {
                let input = clean(raw);
                join_extensions(&input.dial.digits, &input.extensions)
            }
        }
    }
}

impl fmt::Display for PhoneValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<PhoneNumber> for PhoneValue {
    fn from(value: PhoneNumber) -> Self {
        PhoneValue::Normalized(value)
    }
}

impl From<&str> for PhoneValue {
    fn from(value: &str) -> Self {
        PhoneValue::Raw(value.to_string())
    }
}

impl From<String> for PhoneValue {
    fn from(value: String) -> Self {
        PhoneValue::Raw(value)
    }
}
