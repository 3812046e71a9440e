const EXTENSION_MARKERS: [&str; 5] = ["ext.", "ext", "press", "x", ","];

/// Digits of the main number after formatting has been stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialDigits {
    pub plus: bool,
    pub digits: String,
}

impl DialDigits {
    pub fn from_text(text: &str) -> Self {
        Self {
            plus: text.starts_with('+'),
            digits: text.chars().filter(|ch| ch.is_ascii_digit()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedInput<'a> {
    /// Trimmed main-number text, before any extension marker.
    pub main: &'a str,
    pub dial: DialDigits,
    pub extensions: Vec<String>,
}

pub fn clean(raw: &str) -> CleanedInput<'_> {
    let trimmed = raw.trim();
    let (main, extensions) = match find_extension_start(trimmed, 0) {
        Some(idx) => (trimmed[..idx].trim_end(), extension_runs(trimmed, idx)),
        None => (trimmed, Vec::new()),
    };

    CleanedInput {
        main,
        dial: DialDigits::from_text(main),
        extensions,
    }
}

fn find_extension_start(text: &str, from: usize) -> Option<usize> {
    text[from..]
        .char_indices()
        .map(|(idx, _)| from + idx)
        .find(|&idx| at_marker_boundary(text, idx) && marker_chain_len(&text[idx..]).is_some())
}

// Word markers start a chain only at a word boundary, except the compact `x44` form.
fn at_marker_boundary(text: &str, idx: usize) -> bool {
    let rest = &text[idx..];
    let follows_letter = text[..idx]
        .chars()
        .next_back()
        .is_some_and(|ch| ch.is_ascii_alphabetic());
    if !follows_letter || !rest.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
        return true;
    }
    starts_with_ignore_case(rest, "x") && rest[1..].starts_with(|ch: char| ch.is_ascii_digit())
}

// One or more markers, each optionally followed by whitespace, then a digit.
// Returns the byte length up to that digit.
fn marker_chain_len(text: &str) -> Option<usize> {
    let mut rest = text;
    let mut matched = false;
    while let Some(marker) = EXTENSION_MARKERS
        .iter()
        .find(|marker| starts_with_ignore_case(rest, marker))
    {
        rest = rest[marker.len()..].trim_start();
        matched = true;
    }
    (matched && rest.starts_with(|ch: char| ch.is_ascii_digit())).then(|| text.len() - rest.len())
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

// Only the digit run right after each marker chain is an extension.
fn extension_runs(text: &str, start: usize) -> Vec<String> {
    let mut extensions = Vec::new();
    let mut next = Some(start);
    while let Some(idx) = next {
        let Some(chain_len) = marker_chain_len(&text[idx..]) else {
            break;
        };
        let digits_start = idx + chain_len;
        let digits_end = text[digits_start..]
            .find(|ch: char| !ch.is_ascii_digit())
            .map_or(text.len(), |len| digits_start + len);
        extensions.push(text[digits_start..digits_end].to_string());
        next = find_extension_start(text, digits_end);
    }
    extensions
}
