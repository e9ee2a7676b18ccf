// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

/// How many values a subscriber is willing to accept next.
///
/// The one-shot emitters deliver their single outcome for any requested
/// quantity, including zero, so demand carries no weight here — it is part
/// of the handshake so that subscribers written against this contract can
/// later drive multi-value publishers unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demand(Option<usize>);

impl Demand {
    /// Willing to accept at most `count` values.
    #[must_use]
    pub const fn max(count: usize) -> Self {
        Self(Some(count))
    }

    /// Willing to accept any number of values.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self(None)
    }

    /// Not willing to accept any value right now.
    #[must_use]
    pub const fn none() -> Self {
        Self(Some(0))
    }

    /// Returns `true` for [`Demand::unlimited`].
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.0.is_none()
    }

    /// The requested count, or `None` for unlimited demand.
    #[must_use]
    pub const fn count(&self) -> Option<usize> {
        self.0
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(count) => write!(f, "max({count})"),
            None => write!(f, "unlimited"),
        }
    }
}
