//! Line parser for origin files.
//!
//! An origin file holds one entry per line:
//!
//! ```text
//! greeting.hello=Hello
//! greeting.hello[ja]=こんにちは
//! # comment
//! ```
//!
//! Lines without `=` are ignored rather than reported.

/// A single parsed `key[lang]=value` line.
///
/// `language` is empty for the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub language: String,
    pub value: String,
}

/// Parse one raw line into an [`Entry`].
///
/// Returns `None` for blank lines, comments and lines without `=`.
/// Only the first `=` separates key and value; the value is kept verbatim.
///
/// ```
/// use resgen::parsers::origin::parse_line;
///
/// let entry = parse_line("greeting.hello[ja]=こんにちは").unwrap();
/// assert_eq!(entry.key, "greeting.hello");
/// assert_eq!(entry.language, "ja");
/// assert_eq!(entry.value, "こんにちは");
///
/// assert!(parse_line("# comment").is_none());
/// assert!(parse_line("no separator").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Entry> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (raw_key, value) = line.split_once('=')?;
    let (key, language) = split_language(raw_key);

    Some(Entry {
        key: key.to_string(),
        language: language.to_string(),
        value: value.to_string(),
    })
}

/// Split `key[lang]` into `("key", "lang")`.
///
/// A trailing `]` without any `[` leaves the whole raw key in place with the
/// default language.
fn split_language(raw_key: &str) -> (&str, &str) {
    let Some(inner) = raw_key.strip_suffix(']') else {
        return (raw_key, "");
    };
    match inner.find('[') {
        Some(idx) => (&inner[..idx], &inner[idx + 1..]),
        None => (raw_key, ""),
    }
}
