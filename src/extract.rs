//! Extracts entry records from the specification HTML.
//!
//! The W3C documents enumerate their values in generated tables where each
//! row anchors a `<code id="…">"Name"</code>` label and carries the
//! description in a later cell. The tables omit closing `</td>`/`</tr>` tags,
//! so a row's description cell runs until the next `<tr>` or the end of the
//! table.

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::Entry;

/// One table row: the quoted identifier label, then (two lines later) the
/// description cell, captured up to the next row or the end of the table.
static ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"id=".*?">"(.*?)"</code>\n.*\n.*<td>((?:.*?\n)+?)\s+(?:<tr>|</table>)"#)
        .expect("static regex must compile")
});

/// Wide horizontal gaps separate clauses that become separate doc lines.
static WIDE_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t][ \t]+").expect("static regex must compile"));

/// Inline hyperlinks collapse to their visible text.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a .*?>(.*?)</a>").expect("static regex must compile"));

/// Scan the document for value-table rows and return them in document order,
/// with aliases initialized empty.
///
/// A document whose structure no longer matches the row pattern yields an
/// empty list rather than an error; callers are expected to treat zero
/// entries as a drift signal.
pub fn extract_entries(html: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    for caps in ROW.captures_iter(html) {
        let key = caps[1].to_string();
        let cell = WIDE_GAP.replace_all(&caps[2], "\n");
        let cell = LINK.replace_all(&cell, "$1");
        let doc = cell
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        entries.push(Entry {
            key,
            doc,
            aliases: Vec::new(),
        });
    }
    entries
}
