//! resgen - message resource generator
//!
//! Reads a single origin file of `key=value` / `key[lang]=value` lines and
//! writes one flat resource file per language, plus an optional Java class
//! exposing every key as a documented constant.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Generator configuration and host settings
//! - `emit`: Resource and source file emitters
//! - `generator`: The parse → validate → emit driver
//! - `hook`: Adapter for host applications that regenerate on startup
//! - `issues`: Advisory issue types
//! - `parsers`: Origin file line parser
//! - `rules`: Validation rules
//! - `store`: Parsed entries grouped by language

pub mod cli;
pub mod config;
pub mod emit;
pub mod generator;
pub mod hook;
pub mod issues;
pub mod parsers;
pub mod rules;
pub mod store;

pub use crate::{
    config::{GeneratorConfig, HostSettings},
    generator::{GenerationReport, Generator, run, should_regenerate},
    hook::{HookOutcome, detect_changes, on_startup, on_startup_in},
    issues::{Issue, Rule, Severity},
    store::{EntryStore, LanguageMap},
};
