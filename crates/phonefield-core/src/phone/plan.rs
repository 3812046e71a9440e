use crate::error::CoreError;
use crate::phone::cleaner::DialDigits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Usa,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Usa => "usa",
        }
    }

    pub fn plan(self) -> &'static dyn NumberingPlan {
        match self {
            Region::Usa => &USA_PLAN,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "usa" | "us" | "nanp" => Ok(Region::Usa),
            _ => Err(CoreError::UnknownRegion(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognized {
    pub region: Region,
    pub country_code: &'static str,
    /// National significant number, digits only.
    pub national: String,
    pub country_digit_present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Recognized(Recognized),
    Unrecognized,
}

impl Classification {
    pub fn recognized(&self) -> Option<&Recognized> {
        match self {
            Classification::Recognized(recognized) => Some(recognized),
            Classification::Unrecognized => None,
        }
    }
}

/// A national numbering plan the parser can recognize.
///
/// Numbers a plan does not recognize pass through unchanged, so a plan only
/// has to describe the shapes it accepts and how to lay out its national
/// number for display.
pub trait NumberingPlan: Send + Sync {
    fn classify(&self, dial: &DialDigits) -> Classification;

    fn format_national(&self, national: &str) -> String;
}

pub static USA_PLAN: UsaPlan = UsaPlan;

pub fn default_plan() -> &'static dyn NumberingPlan {
    &USA_PLAN
}

/// Ten-digit numbers with an optional leading country digit `1`.
///
/// A leading `+` announces a country code, so `+` followed by ten digits
/// names some other country's number and is left unrecognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsaPlan;

const USA_COUNTRY_CODE: &str = "1";
const USA_NATIONAL_LEN: usize = 10;

impl NumberingPlan for UsaPlan {
    fn classify(&self, dial: &DialDigits) -> Classification {
        let digits = dial.digits.as_str();
        let (national, country_digit_present) = match digits.len() {
            USA_NATIONAL_LEN if !dial.plus => (digits, false),
            len if len == USA_NATIONAL_LEN + 1 => match digits.strip_prefix(USA_COUNTRY_CODE) {
                Some(rest) => (rest, true),
                None => return Classification::Unrecognized,
            },
            _ => return Classification::Unrecognized,
        };

        Classification::Recognized(Recognized {
            region: Region::Usa,
            country_code: USA_COUNTRY_CODE,
            national: national.to_string(),
            country_digit_present,
        })
    }

    fn format_national(&self, national: &str) -> String {
        if national.len() != USA_NATIONAL_LEN || !national.is_ascii() {
            return national.to_string();
        }
        format!(
            "({}) {}-{}",
            &national[..3],
            &national[3..6],
            &national[6..]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Classification, NumberingPlan, Region, UsaPlan};
    use crate::phone::cleaner::DialDigits;

    fn dial(plus: bool, digits: &str) -> DialDigits {
        DialDigits {
            plus,
            digits: digits.to_string(),
        }
    }

    #[test]
    fn usa_plan_accepts_ten_digits() {
        let result = UsaPlan.classify(&dial(false, "4151234567"));
        let recognized = result.recognized().expect("recognized");
        assert_eq!(recognized.region, Region::Usa);
        assert_eq!(recognized.national, "4151234567");
        assert!(!recognized.country_digit_present);
    }

    #[test]
    fn usa_plan_accepts_leading_country_digit() {
        for plus in [false, true] {
            let result = UsaPlan.classify(&dial(plus, "14151234567"));
            let recognized = result.recognized().expect("recognized");
            assert_eq!(recognized.national, "4151234567");
            assert!(recognized.country_digit_present);
        }
    }

    #[test]
    fn usa_plan_rejects_other_country_digits() {
        assert_eq!(
            UsaPlan.classify(&dial(false, "44151234567")),
            Classification::Unrecognized
        );
        assert_eq!(
            UsaPlan.classify(&dial(true, "4151234567")),
            Classification::Unrecognized
        );
    }

    #[test]
    fn usa_plan_rejects_wrong_lengths() {
        for digits in ["", "415123456", "4402012343000", "141512345678"] {
            assert_eq!(
                UsaPlan.classify(&dial(false, digits)),
                Classification::Unrecognized,
                "digits: {digits}"
            );
        }
    }

    #[test]
    fn usa_plan_formats_national_number() {
        assert_eq!(UsaPlan.format_national("4151234567"), "(415) 123-4567");
        assert_eq!(UsaPlan.format_national("415"), "415");
    }

    #[test]
    fn region_parses_aliases() {
        assert_eq!("USA".parse::<Region>().unwrap(), Region::Usa);
        assert_eq!(" nanp ".parse::<Region>().unwrap(), Region::Usa);
        assert!("uk".parse::<Region>().is_err());
    }
}
