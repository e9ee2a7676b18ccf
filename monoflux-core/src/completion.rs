// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::MonofluxError;

/// Terminal notification of a subscription.
///
/// Exactly one completion is delivered per handle: `Finished` after the
/// single value, or `Failed` carrying the error when no value is produced.
/// Nothing follows a completion.
#[derive(Debug, Clone)]
pub enum Completion {
    /// The emission ended successfully.
    Finished,
    /// The emission terminated with an error; no value was delivered.
    Failed(MonofluxError),
}

impl Completion {
    /// Returns `true` if this is `Finished`.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Completion::Finished)
    }

    /// Returns `true` if this is `Failed`.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Completion::Failed(_))
    }

    /// The carried error, if this is `Failed`.
    #[must_use]
    pub const fn failure(&self) -> Option<&MonofluxError> {
        match self {
            Completion::Finished => None,
            Completion::Failed(e) => Some(e),
        }
    }

    /// Converts the completion into a `Result`, surfacing the error.
    ///
    /// # Errors
    ///
    /// Returns the carried error if this is `Failed`.
    pub fn into_result(self) -> Result<(), MonofluxError> {
        match self {
            Completion::Finished => Ok(()),
            Completion::Failed(e) => Err(e),
        }
    }
}

impl PartialEq for Completion {
    fn eq(&self, other: &Self) -> bool {
        // Failures are never equal, mirroring error comparison semantics.
        matches!((self, other), (Completion::Finished, Completion::Finished))
    }
}
