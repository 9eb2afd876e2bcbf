//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::document::DocKind;
use crate::enrich::{self, EnrichmentReport};
use crate::entry::{self, Entry};
use crate::extract;
use crate::render;
use crate::rules::EnrichmentRules;
use crate::source::{DocumentSource, FileSource, HttpSource};

use super::{CliError, CliResult, ExitCode};

/// Run the full pipeline for both documents and write the generated modules.
pub fn generate(
    out_dir: &Path,
    key_html: Option<&Path>,
    code_html: Option<&Path>,
) -> CliResult<ExitCode> {
    fs::create_dir_all(out_dir).map_err(|e| {
        CliError::failure(format!(
            "failed to create output directory {}: {e}",
            out_dir.display()
        ))
    })?;

    for (kind, saved) in [(DocKind::Key, key_html), (DocKind::Code, code_html)] {
        let html = fetch_document(kind, saved)?;
        let entries = build_entries(kind, &html)?;
        let module = render::render_module(kind, &entries);

        let path = out_dir.join(kind.output_file());
        fs::write(&path, module)
            .map_err(|e| CliError::failure(format!("failed to write {}: {e}", path.display())))?;
        tracing::info!("wrote {} ({} entries)", path.display(), entries.len());
    }

    Ok(ExitCode::SUCCESS)
}

/// Run extraction and enrichment on a saved document and print the result,
/// without writing anything.
pub fn inspect(kind: &str, file: &Path) -> CliResult<ExitCode> {
    let kind: DocKind = kind.parse().map_err(CliError::failure)?;
    let html = FileSource::new(file)
        .fetch(kind)
        .map_err(|e| CliError::failure(e.to_string()))?;

    let mut entries = extract::extract_entries(&html);
    let extracted = entries.len();
    let report = enrich::enrich(&mut entries, &EnrichmentRules::for_doc(kind));

    for entry in &entries {
        if entry.aliases.is_empty() {
            println!("{}", entry.key);
        } else {
            println!("{} (aliases: {})", entry.key, entry.aliases.join(", "));
        }
    }
    println!();
    println!("extracted: {extracted}");
    println!(
        "synthetic: {}",
        report.function_keys_added + report.extra_entries_added
    );
    println!("aliases applied: {}", report.aliases_applied);
    for (key, alias) in &report.aliases_dropped {
        println!("alias dropped: {alias} (no entry with key {key})");
    }

    match entry::validate(kind, &entries) {
        Ok(()) => println!("validation: ok"),
        Err(e) => {
            println!("validation: {e}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Obtain one document, from a saved file when given, otherwise over HTTP.
fn fetch_document(kind: DocKind, saved: Option<&Path>) -> CliResult<String> {
    let result = match saved {
        Some(path) => FileSource::new(path).fetch(kind),
        None => HttpSource.fetch(kind),
    };
    result.map_err(|e| CliError::failure(e.to_string()))
}

/// Extract, enrich, and validate one document's record set.
///
/// Zero extracted entries and dropped aliases are drift signals, not errors;
/// they are logged and the run continues. Uniqueness violations fail the run,
/// since they would render a module that does not compile.
fn build_entries(kind: DocKind, html: &str) -> CliResult<Vec<Entry>> {
    let mut entries = extract::extract_entries(html);
    if entries.is_empty() {
        tracing::warn!("no entries extracted from the {kind} document; its structure may have changed");
    } else {
        tracing::debug!("extracted {} entries from the {kind} document", entries.len());
    }

    let report = enrich::enrich(&mut entries, &EnrichmentRules::for_doc(kind));
    warn_on_drift(kind, &report);

    entry::validate(kind, &entries)
        .map_err(|e| CliError::failure(format!("{kind} document: {e}")))?;

    Ok(entries)
}

fn warn_on_drift(kind: DocKind, report: &EnrichmentReport) {
    for (key, alias) in &report.aliases_dropped {
        tracing::warn!("{kind} document: alias {alias} dropped, no extracted entry with key {key}");
    }
}
