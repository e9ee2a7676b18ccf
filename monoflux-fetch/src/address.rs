// Copyright 2025 Monoflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use monoflux_core::{MonofluxError, Result};
use std::fmt;
use std::str::FromStr;

/// A syntactically validated address of the form `scheme://host[/path]`.
///
/// Validation is purely syntactic: scheme starts with an ASCII letter and
/// continues with letters, digits, `+`, `-` or `.`; host is non-empty and
/// free of whitespace; the optional path starts at the first `/` after the
/// host. Whether anything answers at the address is the source's problem.
///
/// # Examples
///
/// ```
/// use monoflux_fetch::Address;
///
/// let address: Address = "https://api.example.com/v1/posts".parse().unwrap();
/// assert_eq!(address.scheme(), "https");
/// assert_eq!(address.host(), "api.example.com");
/// assert_eq!(address.path(), "/v1/posts");
///
/// assert!("no scheme here".parse::<Address>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    scheme: String,
    host: String,
    path: String,
}

impl Address {
    /// Validate `raw` and build an address from it.
    ///
    /// # Errors
    ///
    /// Returns [`MonofluxError::InvalidAddress`] carrying the raw string if
    /// it is malformed.
    pub fn parse(raw: &str) -> Result<Self> {
        let (scheme, rest) = raw
            .split_once("://")
            .ok_or_else(|| MonofluxError::invalid_address(raw))?;

        if !valid_scheme(scheme) {
            return Err(MonofluxError::invalid_address(raw));
        }

        let (host, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };

        if host.is_empty() || host.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(MonofluxError::invalid_address(raw));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(MonofluxError::invalid_address(raw));
        }

        Ok(Self {
            scheme: scheme.to_owned(),
            host: host.to_owned(),
            path: path.to_owned(),
        })
    }

    /// The scheme component, without the `://` separator.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host component, including any port.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The path component (may be empty), starting with `/` when present.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

impl FromStr for Address {
    type Err = MonofluxError;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)
    }
}
