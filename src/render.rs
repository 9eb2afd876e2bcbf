//! Renders the enriched record set into generated Rust source text.
//!
//! The three artifacts of a module (variant list, display mapping, parse
//! mapping) are all driven off the same ordered entry slice, which is what
//! keeps them mutually consistent.

use crate::document::DocKind;
use crate::entry::Entry;

/// A buffer for building Rust source with proper indentation.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buffer: String,
    indent_level: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a line with current indentation.
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a blank line.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write pre-formatted text verbatim, ensuring it ends a line.
    pub fn raw(&mut self, text: &str) {
        self.buffer.push_str(text);
        if !text.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str("    ");
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a braced block with its body one level deeper.
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{header} {{"));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Get the generated code.
    pub fn finish(self) -> String {
        self.buffer
    }
}

const KEY_MODULE_HEADER: &str = r#"// AUTO GENERATED CODE - DO NOT EDIT

use core::fmt::{self, Display};

#[cfg(feature = "std")]
use std::error::Error;

/// Key represents the meaning of a keypress.
///
/// Specification:
/// <https://w3c.github.io/uievents-key/>
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Key<'a> {
    /// A key string that corresponds to the character typed by the user,
    /// taking into account the user’s current locale setting, modifier state,
    /// and any system-level keyboard mapping overrides that are in effect.
    Character(&'a str),
"#;

const CODE_MODULE_HEADER: &str = r#"// AUTO GENERATED CODE - DO NOT EDIT

use core::fmt::{self, Display};
use core::str::FromStr;

#[cfg(feature = "std")]
use std::error::Error;

/// Code is the physical position of a key.
///
/// The names are based on the US keyboard. If the key
/// is not present on US keyboards a name from another
/// layout is used.
///
/// Specification:
/// <https://w3c.github.io/uievents-code/>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Code {
"#;

const KEY_STRING_PREDICATE: &str = r#"/// Check if string can be used as a `Key::Character` _keystring_.
///
/// This check is simple and is meant to prevent common mistakes like mistyped keynames
/// (e.g. `Ennter`) from being recognized as characters.
fn is_key_string(s: &str) -> bool {
    s.chars().all(|c| !c.is_control()) && s.chars().skip(1).all(|c| !c.is_ascii())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_key_string() {
        assert!(is_key_string("A"));
        assert!(!is_key_string("AA"));
        assert!(!is_key_string("\t"));
    }
}
"#;

/// Render one generated module from a final, validated record list.
pub fn render_module(kind: DocKind, entries: &[Entry]) -> String {
    let mut w = SourceWriter::new();
    render_enum(&mut w, kind, entries);
    w.blank_line();
    render_display_impl(&mut w, kind, entries);
    w.blank_line();
    render_parse_impl(&mut w, kind, entries);
    w.blank_line();
    render_error_type(&mut w, kind);
    if kind == DocKind::Key {
        w.blank_line();
        w.raw(KEY_STRING_PREDICATE);
    }
    w.finish()
}

fn render_enum(w: &mut SourceWriter, kind: DocKind, entries: &[Entry]) {
    match kind {
        DocKind::Key => w.raw(KEY_MODULE_HEADER),
        DocKind::Code => w.raw(CODE_MODULE_HEADER),
    }
    w.indent();
    for entry in entries {
        for line in &entry.doc {
            w.line(&format!("/// {line}"));
        }
        w.line(&format!("{},", entry.key));
    }
    w.dedent();
    w.line("}");
}

fn render_display_impl(w: &mut SourceWriter, kind: DocKind, entries: &[Entry]) {
    let header = match kind {
        DocKind::Key => "impl Display for Key<'_>",
        DocKind::Code => "impl Display for Code",
    };
    w.block(header, |w| {
        w.block("fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result", |w| {
            w.line(&format!("use self::{}::*;", kind.type_name()));
            w.block("match *self", |w| {
                if kind == DocKind::Key {
                    w.line("Character(s) => f.write_str(s),");
                }
                for entry in entries {
                    w.line(&format!("{0} => f.write_str(\"{0}\"),", entry.key));
                }
            });
        });
    });
}

fn render_parse_impl(w: &mut SourceWriter, kind: DocKind, entries: &[Entry]) {
    match kind {
        DocKind::Key => {
            w.block("impl<'a> Key<'a>", |w| {
                w.line("/// Parse this `Key` from a string.");
                w.block(
                    "pub fn parse(s: &'a str) -> Result<Self, UnrecognizedKeyError>",
                    |w| {
                        w.line("use Key::*;");
                        w.block("match s", |w| {
                            // The guard arm must precede the identifier table
                            w.line("s if is_key_string(s) => Ok(Character(s)),");
                            render_parse_arms(w, entries);
                            w.line("_ => Err(UnrecognizedKeyError),");
                        });
                    },
                );
            });
        }
        DocKind::Code => {
            w.block("impl FromStr for Code", |w| {
                w.line("type Err = UnrecognizedCodeError;");
                w.blank_line();
                w.block("fn from_str(s: &str) -> Result<Self, Self::Err>", |w| {
                    w.line("use Code::*;");
                    w.block("match s", |w| {
                        render_parse_arms(w, entries);
                        w.line("_ => Err(UnrecognizedCodeError),");
                    });
                });
            });
        }
    }
}

fn render_parse_arms(w: &mut SourceWriter, entries: &[Entry]) {
    for entry in entries {
        let mut arm = format!("\"{}\"", entry.key);
        for alias in &entry.aliases {
            arm.push_str(&format!(" | \"{alias}\""));
        }
        arm.push_str(&format!(" => Ok({}),", entry.key));
        w.line(&arm);
    }
}

fn render_error_type(w: &mut SourceWriter, kind: DocKind) {
    let ty = kind.error_type();
    w.line(&format!(
        "/// Parse from string error, returned when string does not match to any {} variant.",
        kind.type_name()
    ));
    w.line("#[derive(Clone, Debug)]");
    w.line(&format!("pub struct {ty};"));
    w.blank_line();
    w.block(&format!("impl fmt::Display for {ty}"), |w| {
        w.block("fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result", |w| {
            w.line(&format!("write!(f, \"Unrecognized {kind}\")"));
        });
    });
    w.blank_line();
    w.line("#[cfg(feature = \"std\")]");
    w.line(&format!("impl Error for {ty} {{}}"));
}
