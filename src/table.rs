//! The reference table: citation keys and their assigned labels.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::diagnostics::Diagnostic;

/// Maps citation keys to their assigned labels.
///
/// Numbers are handed out in definition order, starting at 1. A key that
/// is looked up without ever being defined gets a fallback label carrying
/// an `UNMATCHED` suffix instead of a number.
///
/// Keys are the marker's inner token including the `^` sigil (e.g. `^a`)
/// and are compared by exact string equality.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    labels: HashMap<String, String>,
    assigned: usize,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a bibliography definition for `key`.
    ///
    /// The first definition wins: redefining an already-numbered key keeps
    /// its original number, and an unmatched key keeps its fallback label.
    pub fn define(&mut self, key: &str) {
        if let Entry::Vacant(entry) = self.labels.entry(key.to_string()) {
            self.assigned += 1;
            entry.insert(self.assigned.to_string());
        }
    }

    /// Looks up the label for `key`.
    ///
    /// On a miss the key is reported as unmatched, given a fallback label
    /// of its identifier (without the `^` sigil) followed by ` UNMATCHED`,
    /// and cached — repeated lookups of the same missing key warn only
    /// once and substitute consistently.
    pub fn resolve(&mut self, key: &str, diagnostics: &mut Vec<Diagnostic>) -> &str {
        let label = match self.labels.entry(key.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                diagnostics.push(Diagnostic::UnmatchedReference(key.to_string()));
                let ident = key.strip_prefix('^').unwrap_or(key);
                entry.insert(format!("{} UNMATCHED", ident))
            }
        };
        label.as_str()
    }

    /// Number of keys that received a number from a bibliography definition.
    pub fn numbered(&self) -> usize {
        self.assigned
    }

    /// Returns the label currently held for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}
