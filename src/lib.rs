#![forbid(unsafe_code)]
//! UI Events Code Generator
//!
//! Scrapes the W3C UI Events `key` and `code` specification documents and
//! generates the `Key`/`Code` Rust enums consumed by keyboard-input crates:
//! extraction (HTML table scraping), enrichment (synthetic entries and legacy
//! aliases), validation, and rendering of the generated source.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The render module emits match arms and error types as
//!   *string literals* in generated Rust code; those are output strings, not
//!   calls made by the generator.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error),
//!   use `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;
pub mod document;
pub mod enrich;
pub mod entry;
pub mod extract;
pub mod render;
pub mod rules;
pub mod source;

pub use document::DocKind;
pub use enrich::{EnrichmentReport, enrich};
pub use entry::{Entry, ValidationError, is_key_string, validate};
pub use extract::extract_entries;
pub use render::render_module;
pub use rules::EnrichmentRules;
