//! Record-set enrichment: synthetic entries and alias attachment.

use crate::entry::Entry;
use crate::rules::EnrichmentRules;

/// What enrichment actually did, so callers can spot document drift instead
/// of silently losing aliases.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnrichmentReport {
    /// Synthetic function keys appended.
    pub function_keys_added: usize,
    /// Extra-codes entries appended.
    pub extra_entries_added: usize,
    /// Aliases attached to an extracted entry.
    pub aliases_applied: usize,
    /// (canonical key, alias) pairs whose target was not in the record set.
    pub aliases_dropped: Vec<(String, String)>,
}

/// Apply a rule set to an extracted record list, in place.
///
/// Synthetic function keys are appended after all extracted entries in
/// ascending index order, then the extra-codes entries in list order. Alias
/// attachment locates its target by canonical key; a missing target is
/// recorded in the report and otherwise skipped.
pub fn enrich(entries: &mut Vec<Entry>, rules: &EnrichmentRules) -> EnrichmentReport {
    let mut report = EnrichmentReport::default();

    for index in rules.function_keys.clone() {
        entries.push(Entry::new(
            format!("F{index}"),
            vec![rules.function_key_doc(index)],
        ));
        report.function_keys_added += 1;
    }

    for &code in rules.extra_codes {
        entries.push(Entry::new(code, vec![rules.extra_code_doc()]));
        report.extra_entries_added += 1;
    }

    for &(key, alias) in rules.aliases {
        match entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.aliases.push(alias.to_string());
                report.aliases_applied += 1;
            }
            None => {
                report
                    .aliases_dropped
                    .push((key.to_string(), alias.to_string()));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocKind;

    fn extracted(keys: &[&str]) -> Vec<Entry> {
        keys.iter()
            .map(|key| Entry::new(*key, vec![format!("The {key} key.")]))
            .collect()
    }

    #[test]
    fn function_keys_are_always_twelve() {
        for keys in [&[][..], &["Enter", "MetaLeft"][..]] {
            let mut entries = extracted(keys);
            let report = enrich(&mut entries, &EnrichmentRules::for_doc(DocKind::Key));
            assert_eq!(report.function_keys_added, 12);
            let f_keys: Vec<&str> = entries
                .iter()
                .filter(|e| e.key.starts_with('F') && e.key[1..].chars().all(|c| c.is_ascii_digit()))
                .map(|e| e.key.as_str())
                .collect();
            assert_eq!(
                f_keys,
                ["F13", "F14", "F15", "F16", "F17", "F18", "F19", "F20", "F21", "F22", "F23", "F24"]
            );
        }
    }

    #[test]
    fn function_keys_appended_after_extracted_entries() {
        let mut entries = extracted(&["Enter"]);
        enrich(&mut entries, &EnrichmentRules::for_doc(DocKind::Key));
        assert_eq!(entries[0].key, "Enter");
        assert_eq!(entries[1].key, "F13");
        assert_eq!(
            entries[1].doc,
            ["The F13 key, a general purpose function key, as index 13."]
        );
    }

    #[test]
    fn chromium_codes_follow_function_keys_in_list_order() {
        let mut entries = extracted(&["Enter"]);
        let rules = EnrichmentRules::for_doc(DocKind::Code);
        let report = enrich(&mut entries, &rules);
        assert_eq!(report.extra_entries_added, rules.extra_codes.len());
        assert_eq!(entries[12].key, "F24");
        assert_eq!(entries[13].key, "BrightnessDown");
        assert_eq!(entries.last().unwrap().key, "ZoomToggle");
        assert_eq!(
            entries[13].doc,
            ["Non-standard code value supported by Chromium."]
        );
    }

    #[test]
    fn aliases_attach_to_their_canonical_entry() {
        let mut entries = extracted(&["MetaLeft", "MetaRight", "AudioVolumeUp"]);
        let report = enrich(&mut entries, &EnrichmentRules::for_doc(DocKind::Code));
        assert_eq!(entries[0].aliases, ["OSLeft"]);
        assert_eq!(entries[1].aliases, ["OSRight"]);
        assert_eq!(entries[2].aliases, ["VolumeUp"]);
        assert_eq!(report.aliases_applied, 3);
    }

    #[test]
    fn missing_alias_target_is_reported_not_applied() {
        let mut entries = extracted(&["MetaLeft"]);
        let report = enrich(&mut entries, &EnrichmentRules::for_doc(DocKind::Code));
        assert_eq!(report.aliases_applied, 1);
        assert!(
            report
                .aliases_dropped
                .contains(&("MetaRight".to_string(), "OSRight".to_string()))
        );
        assert!(entries.iter().all(|e| !e.aliases.contains(&"OSRight".to_string())));
    }

    #[test]
    fn key_document_rules_add_no_aliases_or_extra_codes() {
        let mut entries = extracted(&["MetaLeft"]);
        let report = enrich(&mut entries, &EnrichmentRules::for_doc(DocKind::Key));
        assert_eq!(report.extra_entries_added, 0);
        assert_eq!(report.aliases_applied, 0);
        assert!(report.aliases_dropped.is_empty());
        assert_eq!(entries.len(), 13);
    }

    #[test]
    fn code_document_function_keys_use_keycap_doc() {
        let mut entries = Vec::new();
        enrich(&mut entries, &EnrichmentRules::for_doc(DocKind::Code));
        assert_eq!(entries[0].doc, ["<code class=\"keycap\">F13</code>"]);
    }
}
