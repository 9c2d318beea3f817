//! Entry store: parsed origin entries grouped by language.
//!
//! The store is built once per generation run and dropped afterwards.
//! Every language gets its own [`LanguageMap`], sorted by key so that
//! emitted files are deterministic.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::parsers::origin::{Entry, parse_line};

/// Tag of the default (base) language.
pub const DEFAULT_LANGUAGE: &str = "";

/// Key to value mapping for a single language, iterated in key order.
pub type LanguageMap = BTreeMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntryStore {
    languages: BTreeMap<String, LanguageMap>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an origin file (UTF-8) into a new store.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD` rather than failing
    /// the whole run.
    pub fn read_from(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open origin file: {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read origin file: {}", path.display()))
    }

    /// Feed every line of `reader` through [`EntryStore::add`].
    ///
    /// Lines end at `\n`; a trailing `\r` is dropped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut store = Self::new();
        for line in reader.split(b'\n') {
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line);
            store.add(&String::from_utf8_lossy(line));
        }
        Ok(store)
    }

    /// Parse a raw line and upsert the resulting entry.
    ///
    /// Returns `false` when the line produced no entry (comment, blank or
    /// malformed).
    pub fn add(&mut self, line: &str) -> bool {
        match parse_line(line) {
            Some(entry) => {
                self.insert(entry);
                true
            }
            None => false,
        }
    }

    /// Insert an entry. A later entry for the same key and language replaces
    /// the earlier one.
    pub fn insert(&mut self, entry: Entry) {
        self.languages
            .entry(entry.language)
            .or_default()
            .insert(entry.key, entry.value);
    }

    /// The default-language mapping, if any default entry was seen.
    pub fn base_map(&self) -> Option<&LanguageMap> {
        self.map(DEFAULT_LANGUAGE)
    }

    pub fn map(&self, language: &str) -> Option<&LanguageMap> {
        self.languages.get(language)
    }

    /// Every language tag seen, the default tag (`""`) first when present.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Language maps other than the default one.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &LanguageMap)> {
        self.languages
            .iter()
            .filter(|(language, _)| language.as_str() != DEFAULT_LANGUAGE)
            .map(|(language, map)| (language.as_str(), map))
    }
}
