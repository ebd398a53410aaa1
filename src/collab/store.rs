//! Document store contract: read-only access to previously retrieved
//! source-text fragments (an email store, in the original deployment).

use std::collections::HashSet;

use crate::Result;

/// Read-only store of source-text fragments.
pub trait DocumentStore: Send + Sync {
    /// Fetch all stored fragment bodies.
    fn bodies(&self) -> Result<Vec<String>>;

    /// Store name for diagnostics.
    fn name(&self) -> &'static str {
        "store"
    }
}

/// In-memory store, for tests and the CLI's file-backed corpus.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    bodies: Vec<String>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over the given fragments.
    #[must_use]
    pub fn with_bodies(bodies: Vec<String>) -> Self {
        Self { bodies }
    }

    /// Append a fragment.
    pub fn push(&mut self, body: impl Into<String>) {
        self.bodies.push(body.into());
    }
}

impl DocumentStore for InMemoryStore {
    fn bodies(&self) -> Result<Vec<String>> {
        Ok(self.bodies.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Concatenate caller-provided text with stored fragments.
///
/// Fragments are deduplicated by exact text equality before
/// concatenation. First occurrence wins and input order is preserved,
/// so the combined text is deterministic.
#[must_use]
pub fn combine_with_stored(text: &str, bodies: &[String]) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut parts: Vec<&str> = Vec::new();

    if !text.trim().is_empty() {
        parts.push(text.trim());
        seen.insert(text.trim());
    }
    for body in bodies {
        let body = body.trim();
        if !body.is_empty() && seen.insert(body) {
            parts.push(body);
        }
    }

    parts.join(" ")
}
