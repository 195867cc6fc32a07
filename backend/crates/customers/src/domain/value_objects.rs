//! Domain Value Objects
//!
//! Presence-checked customer names. Only emptiness is validated; no
//! format or length rules apply.

use std::fmt;

/// Company name - stored in `CompanyName`, sent as `company`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    /// Accepts any non-empty string; missing or empty input yields `None`
    pub fn parse(raw: Option<String>) -> Option<Self> {
        raw.filter(|s| !s.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact person - stored in `ContactName`, sent as `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(raw: Option<String>) -> Option<Self> {
        raw.filter(|s| !s.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
