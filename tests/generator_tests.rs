//! End-to-end pipeline tests over saved specification fragments
//!
//! These tests run extract → enrich → validate → render on fixture HTML in
//! the shape of the published W3C tables, then check that the three coupled
//! artifacts of each generated module stay consistent.

use std::fs;

use uievents_codegen::{
    DocKind, Entry, EnrichmentRules, enrich, extract_entries, render_module, validate,
};

fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{name}");
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {path}"))
}

fn pipeline(kind: DocKind, html: &str) -> (Vec<Entry>, String) {
    let mut entries = extract_entries(html);
    enrich(&mut entries, &EnrichmentRules::for_doc(kind));
    validate(kind, &entries).expect("enriched fixture record set must validate");
    let module = render_module(kind, &entries);
    (entries, module)
}

/// Every entry must appear as a variant, a display arm, and a parse arm.
fn assert_artifacts_coupled(entries: &[Entry], module: &str) {
    for entry in entries {
        let key = &entry.key;
        assert!(
            module.contains(&format!("    {key},\n")),
            "missing variant for {key}"
        );
        assert!(
            module.contains(&format!("{key} => f.write_str(\"{key}\"),")),
            "missing display arm for {key}"
        );
        assert!(
            module.contains(&format!("\"{key}\"")),
            "missing parse arm for {key}"
        );
    }
}

#[test]
fn code_pipeline_keeps_all_artifacts_consistent() {
    let html = load_fixture("uievents-code-fragment.html");
    let (entries, module) = pipeline(DocKind::Code, &html);

    // 7 extracted + 12 function keys + 20 chromium codes
    assert_eq!(entries.len(), 39);
    assert_artifacts_coupled(&entries, &module);
}

#[test]
fn code_pipeline_preserves_emission_order() {
    let html = load_fixture("uievents-code-fragment.html");
    let (_, module) = pipeline(DocKind::Code, &html);

    let backquote = module.find("    Backquote,").unwrap();
    let f13 = module.find("    F13,").unwrap();
    let brightness = module.find("    BrightnessDown,").unwrap();
    assert!(backquote < f13, "extracted entries come first");
    assert!(f13 < brightness, "function keys precede chromium codes");
}

#[test]
fn code_pipeline_attaches_all_legacy_aliases() {
    let html = load_fixture("uievents-code-fragment.html");
    let (entries, module) = pipeline(DocKind::Code, &html);

    let meta_left = entries.iter().find(|e| e.key == "MetaLeft").unwrap();
    assert_eq!(meta_left.aliases, ["OSLeft"]);

    assert!(module.contains("\"MetaLeft\" | \"OSLeft\" => Ok(MetaLeft),"));
    assert!(module.contains("\"AudioVolumeUp\" | \"VolumeUp\" => Ok(AudioVolumeUp),"));
    assert!(module.contains("\"MediaSelect\" | \"LaunchMediaPlayer\" => Ok(MediaSelect),"));
}

#[test]
fn code_pipeline_extracts_documentation() {
    let html = load_fixture("uievents-code-fragment.html");
    let (entries, module) = pipeline(DocKind::Code, &html);

    // Hyperlinks collapse to their text; wide gaps split doc lines
    let meta_left = entries.iter().find(|e| e.key == "MetaLeft").unwrap();
    assert_eq!(meta_left.doc[0], "The left Meta key.");
    assert_eq!(meta_left.doc.len(), 2);
    assert!(module.contains("    /// The left Meta key.\n"));
}

#[test]
fn key_pipeline_emits_character_machinery() {
    let html = load_fixture("uievents-key-fragment.html");
    let (entries, module) = pipeline(DocKind::Key, &html);

    // 4 extracted + 12 function keys, no chromium codes for the key document
    assert_eq!(entries.len(), 16);
    assert_artifacts_coupled(&entries, &module);

    // The free-form case leads the enum and the parse mapping
    let character = module.find("Character(&'a str),").unwrap();
    let first_variant = module.find("    Alt,").unwrap();
    assert!(character < first_variant);

    let guard = module
        .find("s if is_key_string(s) => Ok(Character(s)),")
        .unwrap();
    let first_arm = module.find("\"Alt\" => Ok(Alt),").unwrap();
    assert!(guard < first_arm);

    assert!(module.contains("Character(s) => f.write_str(s),"));
    assert!(module.contains("fn is_key_string(s: &str) -> bool"));
}

#[test]
fn key_pipeline_splits_multi_line_descriptions() {
    let html = load_fixture("uievents-key-fragment.html");
    let (entries, _) = pipeline(DocKind::Key, &html);

    let enter = entries.iter().find(|e| e.key == "Enter").unwrap();
    assert_eq!(enter.doc.len(), 2);
    assert!(enter.doc[1].starts_with("This key value is also used"));

    let tab = entries.iter().find(|e| e.key == "Tab").unwrap();
    assert_eq!(tab.doc, ["The Horizontal Tabulation key."]);
}

#[test]
fn both_documents_gain_exactly_twelve_function_keys() {
    for (kind, fixture) in [
        (DocKind::Key, "uievents-key-fragment.html"),
        (DocKind::Code, "uievents-code-fragment.html"),
    ] {
        let html = load_fixture(fixture);
        let (entries, _) = pipeline(kind, &html);
        let count = (13..=24)
            .filter(|i| entries.iter().any(|e| e.key == format!("F{i}")))
            .count();
        assert_eq!(count, 12, "{kind} document");
    }
}

#[test]
fn unknown_strings_fall_through_to_the_error_arm() {
    let html = load_fixture("uievents-code-fragment.html");
    let (_, module) = pipeline(DocKind::Code, &html);

    assert!(!module.contains("\"NotACode\""));
    assert!(module.contains("_ => Err(UnrecognizedCodeError),"));
}

#[test]
fn restructured_document_still_renders_a_degenerate_module() {
    let (entries, module) = pipeline(DocKind::Code, "<html><p>tables moved</p></html>");
    // Only the synthetic entries survive, and the module is still well-formed
    assert_eq!(entries.len(), 32);
    assert_artifacts_coupled(&entries, &module);
    assert!(module.starts_with("// AUTO GENERATED CODE - DO NOT EDIT\n"));
}
