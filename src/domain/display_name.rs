//! Human readable names derived from track locators.
//!
//! A locator ends in a slug such as `hello%2Dworld-mix.html`. Literal hyphens
//! separate words, each word is percent-decoded on its own, so an encoded
//! hyphen survives inside its word: `Hello-world Mix`.

pub const UNKNOWN_TRACK: &str = "Unknown Track";

const MAX_EXTENSION_LEN: usize = 5;

pub fn extract_display_name(locator: &str) -> String {
    let segment = strip_extension(last_segment(locator));

    let name = match decode_words(segment) {
        Ok(words) => join_capitalized(words.iter().map(String::as_str)),
        Err(e) => {
            log::debug!("Falling back to raw slug for {locator:?}: {e}");
            join_capitalized(segment.split('-'))
        }
    };

    match name.is_empty() {
        true => UNKNOWN_TRACK.to_string(),
        false => name,
    }
}

fn last_segment(locator: &str) -> &str {
    let end = locator.find(['?', '#']).unwrap_or(locator.len());
    let path = &locator[..end];

    path.rsplit('/').next().unwrap_or(path)
}

fn strip_extension(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, ext))
            if !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            stem
        }
        _ => segment,
    }
}

fn decode_words(segment: &str) -> Result<Vec<String>, DecodeError> {
    segment
        .split('-')
        .map(|word| percent_decode(word).map(|w| normalize(&w)))
        .collect()
}

fn join_capitalized<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps the invisible and exotic space code points to a plain space or to
/// nothing, turns `+` into a space and collapses whitespace runs.
fn normalize(word: &str) -> String {
    let replaced = word.chars().filter_map(|c| match c {
        '\u{2006}'..='\u{200A}' | '\u{00A0}' | '+' => Some(' '),
        '\u{200B}'..='\u{200F}' | '\u{2060}' => None,
        c => Some(c),
    });

    let mut out = String::with_capacity(word.len());
    let mut in_space = false;
    for c in replaced {
        if c.is_whitespace() {
            in_space = true;
            continue;
        }
        if in_space && !out.is_empty() {
            out.push(' ');
        }
        in_space = false;
        out.push(c);
    }
    out
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DecodeError {
    MalformedEscape(usize),
    InvalidUtf8,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::MalformedEscape(at) => write!(f, "malformed percent escape at byte {at}"),
            DecodeError::InvalidUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
        }
    }
}

/// `decodeURIComponent`: every `%` must start a two digit hex escape and the
/// decoded bytes must form valid UTF-8.
pub(crate) fn percent_decode(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|b| hex_value(*b));
                let lo = bytes.get(i + 2).and_then(|b| hex_value(*b));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
                    _ => return Err(DecodeError::MalformedEscape(i)),
                }
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| DecodeError::InvalidUtf8)
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
