//! vCard parameter string handling.
//!
//! Parameters are kept as the raw `;`-separated token text rather than a map,
//! so tokens the codec does not manage survive a re-encode byte for byte.

use std::fmt;

/// A single `key` or `key=value` parameter token, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterToken {
    raw: String,
}

impl ParameterToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Creates a `key=value` token.
    #[must_use]
    pub fn pair(key: &str, value: &str) -> Self {
        Self::new(format!("{key}={value}"))
    }

    /// Text before the first `=`, or the whole token.
    #[must_use]
    pub fn key(&self) -> &str {
        self.raw.split_once('=').map_or(self.raw.as_str(), |(key, _)| key)
    }

    /// Text after the first `=`, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.raw.split_once('=').map(|(_, value)| value)
    }

    /// Returns whether the key matches `name` (case-insensitive).
    #[must_use]
    pub fn has_key(&self, name: &str) -> bool {
        self.key().eq_ignore_ascii_case(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Ordered list of parameter tokens parsed from a parameter string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterList {
    tokens: Vec<ParameterToken>,
}

impl ParameterList {
    /// Splits a parameter string on `;`, dropping empty tokens.
    #[must_use]
    pub fn parse(parameters: &str) -> Self {
        let tokens = parameters
            .split(';')
            .filter(|token| !token.is_empty())
            .map(ParameterToken::new)
            .collect();
        Self { tokens }
    }

    /// Returns the value of the first `name=value` token (case-insensitive key).
    ///
    /// A bare `name` token without `=` carries no value and is skipped.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens
            .iter()
            .filter(|token| token.has_key(name))
            .find_map(ParameterToken::value)
    }

    /// Drops every token whose key matches `name` (case-insensitive).
    pub fn remove(&mut self, name: &str) {
        self.tokens.retain(|token| !token.has_key(name));
    }

    /// Drops the `ENCODING` and `CHARSET` tokens the codec recomputes.
    pub fn remove_managed(&mut self) {
        self.remove(names::ENCODING);
        self.remove(names::CHARSET);
    }

    pub fn push(&mut self, token: ParameterToken) {
        self.tokens.push(token);
    }
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}

/// Parameter names the codec reads or writes.
pub mod names {
    pub const ENCODING: &str = "ENCODING";
    pub const CHARSET: &str = "CHARSET";
}
