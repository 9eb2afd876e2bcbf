//! Fixed enrichment data coupled to the specification documents.
//!
//! These tables are hand-maintained against the published documents. They are
//! plain data, passed into enrichment as parameters, so the coupling stays
//! auditable and testable without a network fetch.

use std::ops::RangeInclusive;

use crate::document::DocKind;

/// Function keys beyond F12; the documents stop enumerating there but the
/// values are defined and widely reported by platforms.
pub const FUNCTION_KEY_RANGE: RangeInclusive<u32> = 13..=24;

/// Non-standard code values supported by Chromium.
pub const CHROMIUM_CODES: &[&str] = &[
    "BrightnessDown",
    "BrightnessUp",
    "DisplayToggleIntExt",
    "KeyboardLayoutSelect",
    "LaunchAssistant",
    "LaunchControlPanel",
    "LaunchScreenSaver",
    "MailForward",
    "MailReply",
    "MailSend",
    "MediaFastForward",
    "MediaPause",
    "MediaPlay",
    "MediaRecord",
    "MediaRewind",
    "MicrophoneMuteToggle",
    "PrivacyScreenToggle",
    "SelectTask",
    "ShowAllWindows",
    "ZoomToggle",
];

/// Legacy spellings that must keep parsing to the current code values.
pub const CODE_ALIASES: &[(&str, &str)] = &[
    ("MetaLeft", "OSLeft"),
    ("MetaRight", "OSRight"),
    ("AudioVolumeDown", "VolumeDown"),
    ("AudioVolumeMute", "VolumeMute"),
    ("AudioVolumeUp", "VolumeUp"),
    ("MediaSelect", "LaunchMediaPlayer"),
];

/// The enrichment rule set for one document run.
#[derive(Debug, Clone)]
pub struct EnrichmentRules {
    pub kind: DocKind,
    /// Synthetic function keys to append, in ascending order.
    pub function_keys: RangeInclusive<u32>,
    /// Additional identifiers appended after the function keys.
    pub extra_codes: &'static [&'static str],
    /// (canonical key, alias) pairs to attach to extracted entries.
    pub aliases: &'static [(&'static str, &'static str)],
}

impl EnrichmentRules {
    pub fn for_doc(kind: DocKind) -> Self {
        match kind {
            DocKind::Key => Self {
                kind,
                function_keys: FUNCTION_KEY_RANGE,
                extra_codes: &[],
                aliases: &[],
            },
            DocKind::Code => Self {
                kind,
                function_keys: FUNCTION_KEY_RANGE,
                extra_codes: CHROMIUM_CODES,
                aliases: CODE_ALIASES,
            },
        }
    }

    /// Doc line for a synthetic function key, matching the register of the
    /// surrounding document's extracted descriptions.
    pub fn function_key_doc(&self, index: u32) -> String {
        match self.kind {
            DocKind::Key => {
                format!("The F{index} key, a general purpose function key, as index {index}.")
            }
            DocKind::Code => format!("<code class=\"keycap\">F{index}</code>"),
        }
    }

    /// Doc line for an entry from the extra-codes list.
    pub fn extra_code_doc(&self) -> String {
        "Non-standard code value supported by Chromium.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_tables_are_internally_consistent() {
        // No alias may repeat or shadow a canonical key in the fixed tables
        for (i, (key, alias)) in CODE_ALIASES.iter().enumerate() {
            assert_ne!(key, alias);
            for (other_key, other_alias) in &CODE_ALIASES[i + 1..] {
                assert_ne!(alias, other_alias);
                assert_ne!(alias, other_key);
            }
        }
    }

    #[test]
    fn chromium_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for code in CHROMIUM_CODES {
            assert!(seen.insert(code), "duplicate chromium code {code}");
        }
    }
}
