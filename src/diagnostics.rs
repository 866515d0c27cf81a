//! Diagnostics emitted while renumbering.
//!
//! Renumbering never fails: a missing bibliography section or an unmatched
//! reference degrades to a warning collected alongside the output.

use thiserror::Error;

/// A non-fatal condition encountered while renumbering a document.
///
/// The `Display` text is exactly what the CLI prints on stderr.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No blank line followed by a citation-definition marker was found
    /// in the body. Emitted at most once per document.
    #[error("No bib section found")]
    NoBibSection,

    /// A citation key was used but never defined in the bibliography.
    /// Emitted at most once per distinct key, at first encounter during
    /// substitution. Carries the key as written in the marker.
    #[error("Found unmatched reference [{0}]")]
    UnmatchedReference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_warning_text() {
        assert_eq!(Diagnostic::NoBibSection.to_string(), "No bib section found");
        assert_eq!(
            Diagnostic::UnmatchedReference("^x".to_string()).to_string(),
            "Found unmatched reference [^x]"
        );
    }
}
