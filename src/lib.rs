//! refnum: renumber footnote-style citation markers in plain-text documents.
//!
//! Documents cite references with `[^key]` markers and define them in a
//! trailing bibliography section. This library provides functionality to:
//! - Split a document into body and signature regions
//! - Detect the bibliography section and its indentation
//! - Assign sequential numbers to citation keys in bibliography order
//! - Rewrite every citation marker with its assigned number

pub mod diagnostics;
pub mod document;
pub mod renumber;
pub mod table;

pub use diagnostics::Diagnostic;
pub use document::{find_bib_section, scan_entries, split_signature, BibSection, Regions};
pub use renumber::{renumber, Renumbered};
pub use table::ReferenceTable;
