use crate::phone::cleaner::CleanedInput;
use crate::phone::plan::{Classification, NumberingPlan};

const EXTENSION_SEPARATOR: &str = "x";
const SPOKEN_EXTENSION: &str = ", press ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rendered {
    pub base_number: String,
    pub base_number_fmt: String,
    pub cleaned: String,
    pub formatted: String,
}

pub(crate) fn render(
    input: &CleanedInput<'_>,
    classification: &Classification,
    plan: &dyn NumberingPlan,
) -> Rendered {
    let (base_number, base_number_fmt) = match classification {
        Classification::Recognized(recognized) => (
            format!("+{}{}", recognized.country_code, recognized.national),
            plan.format_national(&recognized.national),
        ),
        Classification::Unrecognized => (input.main.to_string(), input.main.to_string()),
    };

    let cleaned = join_extensions(&base_number, &input.extensions);

    let formatted = match (classification, input.extensions.first()) {
        (Classification::Recognized(_), Some(ext)) => {
            format!("{base_number_fmt}{SPOKEN_EXTENSION}{ext}")
        }
        _ => base_number_fmt.clone(),
    };

    Rendered {
        base_number,
        base_number_fmt,
        cleaned,
        formatted,
    }
}

pub(crate) fn join_extensions(base: &str, extensions: &[String]) -> String {
    let mut out = String::with_capacity(
        base.len()
            + extensions
                .iter()
                .map(|ext| ext.len() + EXTENSION_SEPARATOR.len())
                .sum::<usize>(),
    );
    out.push_str(base);
    for ext in extensions {
        out.push_str(EXTENSION_SEPARATOR);
        out.push_str(ext);
    }
    out
}
