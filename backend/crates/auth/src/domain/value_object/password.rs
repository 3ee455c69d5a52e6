//! Candidate password
//!
//! Plain-text placeholder credential of the built-in candidate list.
//! Never hashed, never persisted, never printed.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct CandidatePassword(String);

impl CandidatePassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Exact, case-sensitive comparison
    pub fn matches(&self, attempt: &str) -> bool {
        self.0 == attempt
    }
}

impl fmt::Debug for CandidatePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CandidatePassword(***)")
    }
}
