// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while orchestrating signup validation.
///
/// These are caller/storage faults, never ordinary rule denials: a quota
/// or capacity denial is returned as data in the violation list, not as
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The candidate shift does not exist.
    ///
    /// Callers must resolve the shift before validating; a missing shift
    /// is a contract violation and fails fast rather than silently
    /// producing an empty violation list.
    ShiftNotFound(i64),
    /// The counting provider failed to produce a count or lookup.
    Storage(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShiftNotFound(shift_id) => write!(f, "Shift {shift_id} not found"),
            Self::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}
