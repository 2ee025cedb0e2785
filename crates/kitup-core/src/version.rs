//! Component-wise numeric version comparison.
//!
//! Tool versions are compared numerically per component, never as
//! strings: "20.10.0" is newer than "9.9.9", and "2.0" is equal to
//! "2.0.0" (missing components compare as zero).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a version string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    /// The string contained no leading numeric component.
    #[error("no numeric version component in {0:?}")]
    NoDigits(String),
}

/// A dotted numeric version such as `20.10.0`.
///
/// The original string is kept for display; ordering uses the parsed
/// components with zero padding for missing positions.
#[derive(Debug, Clone)]
pub struct Version {
    parts: Vec<u64>,
    raw: String,
}

impl Version {
    /// Build a version from known components (used for static minimums).
    pub fn new(parts: &[u64]) -> Self {
        let raw = parts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        Self {
            parts: parts.to_vec(),
            raw,
        }
    }

    /// Numeric components of this version.
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// Extract a version from free-form tool output.
    ///
    /// Scans whitespace-separated words and returns the first one that
    /// parses as a version ("Docker version 24.0.7, build afdd53b"
    /// yields 24.0.7). Single-word outputs like "2.23.0" work too.
    pub fn extract(text: &str) -> Option<Self> {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| c == ',' || c == ';'))
            .find_map(|word| {
                // Require a digit up front so words like "build" are skipped
                if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                    word.parse().ok()
                } else {
                    None
                }
            })
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let mut parts = Vec::new();
        for component in body.split('.') {
            let digits: String = component.chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                break;
            }
            let value = digits.parse().map_err(|_| VersionParseError::NoDigits(s.to_string()))?;
            parts.push(value);
            // A component with a non-numeric tail ("0-rc1") ends the version
            if digits.len() != component.len() {
                break;
            }
        }

        if parts.is_empty() {
            return Err(VersionParseError::NoDigits(s.to_string()));
        }

        Ok(Self {
            parts,
            raw: trimmed.to_string(),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
