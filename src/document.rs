//! Document structure detection.
//!
//! Splits a document into the regions renumbering cares about: the body
//! (where citation markers are rewritten), an optional trailing signature
//! (preserved verbatim), and the bibliography section inside the body
//! (where numbers are assigned).

use regex::Regex;

/// Start of the signature block: a line of exactly `-- ` preceded by a
/// line break.
const SIGNATURE_MARKER: &str = "\n-- \n";

/// The body/signature partition of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions<'a> {
    /// Everything before the signature; markers in here get rewritten
    pub body: &'a str,
    /// The signature, starting at the line break before `-- ` (empty if absent)
    pub signature: &'a str,
}

/// Splits a document into body and signature at the first `-- ` line.
///
/// Only the first qualifying line counts; everything after it, including
/// further `-- ` lines, is signature content and is never touched.
///
/// # Examples
///
/// ```
/// use refnum::split_signature;
///
/// let regions = split_signature("Hello.\n-- \nAlice\n");
/// assert_eq!(regions.body, "Hello.");
/// assert_eq!(regions.signature, "\n-- \nAlice\n");
///
/// let regions = split_signature("No signature here.\n");
/// assert_eq!(regions.signature, "");
/// ```
pub fn split_signature(text: &str) -> Regions<'_> {
    match text.find(SIGNATURE_MARKER) {
        Some(pos) => Regions {
            body: &text[..pos],
            signature: &text[pos..],
        },
        None => Regions {
            body: text,
            signature: "",
        },
    }
}

/// The bibliography section detected inside a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibSection<'a> {
    /// Everything before the blank line that opens the section
    pub prefix: &'a str,
    /// Leading whitespace of the first entry line, matched verbatim when
    /// scanning for further entries
    pub indent: &'a str,
    /// The section text, from the blank line to the end of the body
    pub region: &'a str,
}

/// Finds the bibliography section of a body.
///
/// The section starts at the first blank line that is followed by a line
/// whose leading whitespace (spaces/tabs, possibly empty) is immediately
/// followed by a citation marker `[^key]`.
///
/// # Returns
///
/// The section with its captured indent, or `None` when the body has no
/// such section.
pub fn find_bib_section(body: &str) -> Option<BibSection<'_>> {
    let re = Regex::new(r"\n\n([ \t]*)\[\^[^\]\n]+\]").unwrap();

    let caps = re.captures(body)?;
    let start = caps.get(0).unwrap().start();
    let indent = caps.get(1).unwrap().as_str();

    Some(BibSection {
        prefix: &body[..start],
        indent,
        region: &body[start..],
    })
}

/// Scans a bibliography section for entry keys, in order of appearance.
///
/// Only lines beginning with exactly the section's indent followed by a
/// citation marker count as entries; markers at any other indentation are
/// invisible here. Duplicate keys are returned as-is — the numbering
/// policy lives in the reference table.
pub fn scan_entries<'a>(section: &BibSection<'a>) -> Vec<&'a str> {
    let re = Regex::new(&format!(
        r"(?m)^{}\[(\^[^\]\n]+)\]",
        regex::escape(section.indent)
    ))
    .unwrap();

    re.captures_iter(section.region)
        .map(|cap| cap.get(1).unwrap().as_str())
        .collect()
}
