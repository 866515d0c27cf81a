//! Reference renumbering.
//!
//! The single transformation pass: split off the signature, number the
//! bibliography entries in order of first appearance, rewrite every
//! citation marker in the body with its assigned label, and put the
//! signature back untouched.

use regex::{Captures, Regex};

use crate::diagnostics::Diagnostic;
use crate::document::{find_bib_section, scan_entries, split_signature};
use crate::table::ReferenceTable;

/// The result of renumbering a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renumbered {
    /// The transformed document text
    pub text: String,
    /// Diagnostics collected along the way, in order of emission
    pub diagnostics: Vec<Diagnostic>,
    /// Number of distinct keys assigned a number from the bibliography
    pub numbered: usize,
}

/// Renumbers all citation markers in `text`.
///
/// Numbers are assigned 1, 2, 3, … purely from the order in which keys
/// first appear in the bibliography section, independent of prose usage.
/// The whole body is rewritten, so the bibliography's own entries get
/// numbered in place; keys never defined in the bibliography are
/// substituted with an `UNMATCHED` placeholder and reported once each.
///
/// This is a pure transformation: the same input always yields the same
/// output, nothing outside the returned value is touched, and malformed
/// or incomplete input degrades to diagnostics rather than failing.
///
/// # Examples
///
/// ```
/// use refnum::renumber;
///
/// let result = renumber("See [^a] and [^b].\n\n[^a]: First.\n[^b]: Second.\n");
/// assert_eq!(result.text, "See [1] and [2].\n\n[1]: First.\n[2]: Second.\n");
/// assert!(result.diagnostics.is_empty());
/// ```
pub fn renumber(text: &str) -> Renumbered {
    let mut diagnostics = Vec::new();

    // 1. Split body/signature; the signature is never scanned or rewritten
    let regions = split_signature(text);

    // 2. Locate the bibliography and assign numbers in entry order
    let mut table = ReferenceTable::new();
    match find_bib_section(regions.body) {
        Some(section) => {
            for key in scan_entries(&section) {
                table.define(key);
            }
        }
        None => diagnostics.push(Diagnostic::NoBibSection),
    }

    // 3. Rewrite every marker across the entire body, bibliography included
    let marker = Regex::new(r"\[(\^[^\]\n]+)\]").unwrap();
    let body = marker.replace_all(regions.body, |caps: &Captures| {
        format!("[{}]", table.resolve(&caps[1], &mut diagnostics))
    });

    // 4. Recompose
    Renumbered {
        text: format!("{}{}", body, regions.signature),
        numbered: table.numbered(),
        diagnostics,
    }
}
