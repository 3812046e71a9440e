use crate::phone::cleaner::clean;
use crate::phone::format::render;
use crate::phone::plan::{default_plan, NumberingPlan, Region};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A parsed phone number.
///
/// Every view is derived once from the raw input. Numbers the numbering plan
/// does not recognize are kept as trimmed text, so parsing never fails.
/// Equality, ordering and hashing only look at [`PhoneNumber::cleaned`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PhoneNumber {
    raw: String,
    cleaned: String,
    base_number: String,
    base_number_fmt: String,
    formatted: String,
    extensions: Vec<String>,
    region: Option<Region>,
}

impl PhoneNumber {
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, default_plan())
    }

    pub fn parse_with(raw: &str, plan: &dyn NumberingPlan) -> Self {
        let input = clean(raw);
        let classification = plan.classify(&input.dial);
        let rendered = render(&input, &classification, plan);

        Self {
            raw: raw.to_string(),
            cleaned: rendered.cleaned,
            base_number: rendered.base_number,
            base_number_fmt: rendered.base_number_fmt,
            formatted: rendered.formatted,
            extensions: input.extensions,
            region: classification.recognized().map(|recognized| recognized.region),
        }
    }

    /// Parses this number's canonical form again.
    pub fn renormalize(&self) -> Self {
        match self.region {
            Some(region) => Self::parse_with(&self.cleaned, region.plan()),
            None => Self::parse(&self.cleaned),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn base_number(&self) -> &str {
        &self.base_number
    }

    pub fn base_number_fmt(&self) -> &str {
        &self.base_number_fmt
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn is_usa(&self) -> bool {
        self.region == Some(Region::Usa)
    }

    pub fn is_standard(&self) -> bool {
        self.region.is_some()
    }

    pub fn is_e164(&self) -> bool {
        self.is_usa() && self.extensions.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }

    /// True for non-empty input that no plan recognized.
    pub fn is_passthrough(&self) -> bool {
        self.region.is_none() && !self.base_number.is_empty()
    }
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self::parse("")
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cleaned == other.cleaned
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cleaned.hash(state);
    }
}

impl PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cleaned.cmp(&other.cleaned)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

impl FromStr for PhoneNumber {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(raw))
    }
}

impl From<&str> for PhoneNumber {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for PhoneNumber {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&PhoneNumber> for PhoneNumber {
    fn from(value: &PhoneNumber) -> Self {
        value.renormalize()
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumber;
    use crate::phone::plan::Region;

    struct Expected {
        cleaned: &'static str,
        formatted: &'static str,
        base_number: &'static str,
        base_number_fmt: &'static str,
        is_e164: bool,
        is_standard: bool,
        is_usa: bool,
    }

    const USA: Expected = Expected {
        cleaned: "+14151234567",
        formatted: "(415) 123-4567",
        base_number: "+14151234567",
        base_number_fmt: "(415) 123-4567",
        is_e164: true,
        is_standard: true,
        is_usa: true,
    };

    const USA_WITH_EXTENSION: Expected = Expected {
        cleaned: "+14151234567x44",
        formatted: "(415) 123-4567, press 44",
        base_number: "+14151234567",
        base_number_fmt: "(415) 123-4567",
        is_e164: false,
        is_standard: true,
        is_usa: true,
    };

    const INTERNATIONAL: Expected = Expected {
        cleaned: "+44 (0)20-1234-3000",
        formatted: "+44 (0)20-1234-3000",
        base_number: "+44 (0)20-1234-3000",
        base_number_fmt: "+44 (0)20-1234-3000",
        is_e164: false,
        is_standard: false,
        is_usa: false,
    };

    const EMPTY: Expected = Expected {
        cleaned: "",
        formatted: "",
        base_number: "",
        base_number_fmt: "",
        is_e164: false,
        is_standard: false,
        is_usa: false,
    };

    fn assert_parses(input: &str, label: &str, expected: &Expected) {
        let phone = PhoneNumber::parse(input);
        assert_eq!(phone.cleaned(), expected.cleaned, "{label}");
        assert_eq!(phone.formatted(), expected.formatted, "{label}");
        assert_eq!(phone.base_number(), expected.base_number, "{label}");
        assert_eq!(phone.base_number_fmt(), expected.base_number_fmt, "{label}");
        assert_eq!(phone.is_e164(), expected.is_e164, "{label}");
        assert_eq!(phone.is_standard(), expected.is_standard, "{label}");
        assert_eq!(phone.is_usa(), expected.is_usa, "{label}");
    }

    #[test]
    fn parse_known_inputs() {
        let cases = [
            ("4151234567", "simple", &USA),
            ("(415) 123-4567", "already formatted", &USA),
            (
                "(415) 123-4567, press 44",
                "already formatted with extension",
                &USA_WITH_EXTENSION,
            ),
            (" (415).123 - 4567 ", "messy formatted", &USA),
            (
                " (415).123 - 4567 x 44",
                "messy formatted with extension",
                &USA_WITH_EXTENSION,
            ),
            ("+44 (0)20-1234-3000", "international", &INTERNATIONAL),
            ("", "empty", &EMPTY),
        ];
        for (input, label, expected) in cases {
            assert_parses(input, label, expected);
        }
    }

    #[test]
    fn parse_keeps_raw_verbatim() {
        let phone = PhoneNumber::parse(" (415).123 - 4567 ");
        assert_eq!(phone.raw(), " (415).123 - 4567 ");
    }

    #[test]
    fn parse_accepts_country_prefix() {
        for input in ["1 415 123 4567", "+1 (415) 123-4567", "1-415-123-4567"] {
            let phone = PhoneNumber::parse(input);
            assert_eq!(phone.cleaned(), "+14151234567", "input: {input}");
            assert_eq!(phone.region(), Some(Region::Usa));
        }
    }

    #[test]
    fn parse_is_idempotent() {
        for input in [
            "4151234567",
            "(415) 123-4567, press 44",
            "415.123.4567 x 44 x 12",
            "+44 (0)20-1234-3000",
            "+44 20 1234 3000 ext 5",
            "call me maybe",
            "Box 12",
            "Fax x 12",
            "x44",
            "",
            "   ",
            "☎ 415",
        ] {
            let first = PhoneNumber::parse(input);
            let second = PhoneNumber::parse(first.cleaned());
            assert_eq!(first.cleaned(), second.cleaned(), "input: {input:?}");
            assert_eq!(first.renormalize(), first, "input: {input:?}");
        }
    }

    #[test]
    fn extensions_are_marker_agnostic() {
        for input in [
            "4151234567x44",
            "4151234567 ext 44",
            "4151234567, press 44",
        ] {
            let phone = PhoneNumber::parse(input);
            assert_eq!(phone.extensions(), ["44".to_string()], "input: {input}");
        }
    }

    #[test]
    fn labels_around_the_number_are_not_extensions() {
        let phone = PhoneNumber::parse("Fax 415-123-4567");
        assert!(phone.is_usa());
        assert!(phone.extensions().is_empty());
        assert_eq!(phone.cleaned(), "+14151234567");
        assert_eq!(phone.to_string(), "(415) 123-4567");

        let phone = PhoneNumber::parse("4151234567 x 44 (desk 2)");
        assert_eq!(phone.cleaned(), "+14151234567x44");
        assert_eq!(phone.to_string(), "(415) 123-4567, press 44");
    }

    #[test]
    fn plus_with_ten_digits_is_a_foreign_number() {
        let phone = PhoneNumber::parse("+4151234567");
        assert!(!phone.is_usa());
        assert!(phone.is_passthrough());
        assert_eq!(phone.cleaned(), "+4151234567");
    }

    #[test]
    fn passthrough_is_trimmed_only() {
        let phone = PhoneNumber::parse("  415-CALL-NOW  ");
        assert!(phone.is_passthrough());
        assert_eq!(phone.cleaned(), "415-CALL-NOW");
        assert_eq!(phone.to_string(), "415-CALL-NOW");
    }

    #[test]
    fn equality_uses_cleaned() {
        let a = PhoneNumber::parse("(415) 123-4567");
        let b = PhoneNumber::parse("415.123.4567");
        assert_eq!(a, b);
        assert_ne!(a.raw(), b.raw());
        assert_ne!(a, PhoneNumber::parse("415.123.4567 x 1"));
    }

    #[test]
    fn empty_number_is_not_passthrough() {
        let phone = PhoneNumber::default();
        assert!(phone.is_empty());
        assert!(!phone.is_passthrough());
        assert!(phone.extensions().is_empty());
    }

    #[test]
    fn display_renders_formatted() {
        let phone = PhoneNumber::parse("4151234567");
        assert_eq!(phone.to_string(), "(415) 123-4567");
    }

    #[test]
    fn serde_uses_cleaned_string() {
        let phone = PhoneNumber::parse("(415) 123-4567 x 88");
        let json = serde_json::to_string(&phone).expect("serialize");
        assert_eq!(json, "\"+14151234567x88\"");

        let back: PhoneNumber = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, phone);
        assert_eq!(back.formatted(), "(415) 123-4567, press 88");
    }
}
