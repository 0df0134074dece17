use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// SIGTAP procedure codes are fixed-width 10-digit strings; anything else in
/// the configured literal (pipes, newlines, stray text) is separator noise.
static PROCEDURE_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{10}").expect("Invalid procedure code pattern"));

/// Immutable allow-list of procedure codes.
///
/// Parsed once from the configured multi-line literal; duplicates collapse
/// and leading zeros are preserved (codes are strings, never numbers).
#[derive(Debug, Clone)]
pub struct ProcedureCodeSet {
    codes: HashSet<String>,
}

impl ProcedureCodeSet {
    /// Extracts every 10-digit run from `raw` into the set.
    pub fn parse(raw: &str) -> Self {
        let codes = PROCEDURE_CODE_PATTERN
            .find_iter(raw)
            .map(|m| m.as_str().to_string())
            .collect();
        Self { codes }
    }

    /// Exact string membership; callers are expected to trim first.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
