// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the monoflux one-shot publisher contract.
//!
//! A single root [`MonofluxError`] covers the whole workspace: handshake
//! violations (re-request, request-after-cancel), address validation, and
//! failures surfaced from an underlying source. There is no retry or
//! recovery machinery; errors are reported to the consumer unmodified.
//!
//! # Examples
//!
//! ```
//! use monoflux_core::{MonofluxError, Result};
//!
//! fn lookup(raw: &str) -> Result<()> {
//!     Err(MonofluxError::invalid_address(raw))
//! }
//!
//! assert!(matches!(
//!     lookup("not an address"),
//!     Err(MonofluxError::InvalidAddress { .. })
//! ));
//! ```

/// Root error type for all monoflux operations.
#[derive(Debug, thiserror::Error)]
pub enum MonofluxError {
    /// The address string failed syntactic validation.
    ///
    /// Reported before any load is attempted; the caller must return this
    /// to its consumer immediately instead of calling the source.
    #[error("invalid address: {address}")]
    InvalidAddress {
        /// The raw string that failed validation.
        address: String,
    },

    /// `request` was called a second time on an already-fulfilled handle.
    ///
    /// A one-shot handle delivers at most once; re-requesting fails loudly
    /// rather than silently double-delivering.
    #[error("subscription already fulfilled")]
    AlreadyFulfilled,

    /// `request` was called on a cancelled handle.
    ///
    /// Cancellation is terminal: no value may be delivered afterwards.
    #[error("subscription cancelled")]
    HandleCancelled,

    /// The publisher terminated without delivering a value.
    ///
    /// Cannot happen with the deterministic emitters; guards against
    /// misbehaving [`Publisher`](crate::Publisher) implementations.
    #[error("publisher completed without delivering a value")]
    NoValue,

    /// An error surfaced from the underlying source, unmodified.
    #[error("source error: {0}")]
    SourceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The fetched payload could not be decoded.
    #[error("decode error: {context}")]
    DecodeError {
        /// What was being decoded when the failure occurred.
        context: String,
        /// The underlying decoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MonofluxError {
    /// Create an invalid-address error for the given raw string.
    pub fn invalid_address(address: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.into(),
        }
    }

    /// Wrap an underlying source error.
    pub fn source_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SourceError(Box::new(error))
    }

    /// Wrap a decoder error with context about what was being decoded.
    pub fn decode_error(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DecodeError {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Returns `true` if this error reports a handshake violation on a
    /// terminal handle (`AlreadyFulfilled` or `HandleCancelled`).
    #[must_use]
    pub const fn is_terminal_handle(&self) -> bool {
        matches!(self, Self::AlreadyFulfilled | Self::HandleCancelled)
    }
}

/// Specialized Result type for monoflux operations.
pub type Result<T> = std::result::Result<T, MonofluxError>;

/// Stand-in for boxed source errors that cannot themselves be cloned.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct OpaqueError(String);

impl Clone for MonofluxError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidAddress { address } => Self::InvalidAddress {
                address: address.clone(),
            },
            Self::AlreadyFulfilled => Self::AlreadyFulfilled,
            Self::HandleCancelled => Self::HandleCancelled,
            Self::NoValue => Self::NoValue,
            // Boxed errors cannot be cloned; keep the rendered message.
            Self::SourceError(e) => Self::SourceError(Box::new(OpaqueError(e.to_string()))),
            Self::DecodeError { context, source } => Self::DecodeError {
                context: context.clone(),
                source: Box::new(OpaqueError(source.to_string())),
            },
        }
    }
}
