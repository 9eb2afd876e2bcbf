//! Entry record and record-set validation.

use std::collections::HashSet;

use thiserror::Error;

use crate::document::DocKind;

/// One variant of a generated enum: a canonical key, its documentation, and
/// any alternate spellings that must parse to the same variant.
///
/// Entry order is significant end to end: it fixes the emission order of the
/// enum variants, the display arms, and the parse arms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Canonical identifier; also the variant's display text.
    pub key: String,
    /// Doc-comment lines, one `///` line each, order preserved.
    pub doc: Vec<String>,
    /// Alternate strings accepted by the generated parse mapping.
    pub aliases: Vec<String>,
}

impl Entry {
    pub fn new(key: impl Into<String>, doc: Vec<String>) -> Self {
        Self {
            key: key.into(),
            doc,
            aliases: Vec::new(),
        }
    }
}

/// Contract violations that would produce a broken generated module
/// (unreachable or ambiguous match arms).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate canonical key `{0}`")]
    DuplicateKey(String),

    #[error("alias `{alias}` of `{key}` collides with another entry's canonical key")]
    AliasCollidesWithKey { key: String, alias: String },

    #[error("alias `{alias}` is attached to more than one entry (last seen on `{key}`)")]
    DuplicateAlias { key: String, alias: String },

    #[error("key `{0}` would be unreachable behind the Character guard arm")]
    KeyShadowedByCharacter(String),
}

/// Check the uniqueness invariants of an enriched record set.
///
/// Runs after enrichment and before rendering. For the key document this also
/// rejects any canonical key that `is_key_string` accepts, since the generated
/// parse mapping consults the `Character` guard arm first.
pub fn validate(kind: DocKind, entries: &[Entry]) -> Result<(), ValidationError> {
    let mut keys = HashSet::new();
    for entry in entries {
        if !keys.insert(entry.key.as_str()) {
            return Err(ValidationError::DuplicateKey(entry.key.clone()));
        }
        if kind == DocKind::Key && is_key_string(&entry.key) {
            return Err(ValidationError::KeyShadowedByCharacter(entry.key.clone()));
        }
    }

    let mut seen_aliases = HashSet::new();
    for entry in entries {
        for alias in &entry.aliases {
            if keys.contains(alias.as_str()) {
                return Err(ValidationError::AliasCollidesWithKey {
                    key: entry.key.clone(),
                    alias: alias.clone(),
                });
            }
            if !seen_aliases.insert(alias.as_str()) {
                return Err(ValidationError::DuplicateAlias {
                    key: entry.key.clone(),
                    alias: alias.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Whether a string is usable as a free-form `Character` payload.
///
/// Accepts a string only if none of its characters are control characters and
/// no character beyond the first is plain ASCII. Must stay in sync with the
/// predicate emitted into the generated key module.
pub fn is_key_string(s: &str) -> bool {
    s.chars().all(|c| !c.is_control()) && s.chars().skip(1).all(|c| !c.is_ascii())
}
