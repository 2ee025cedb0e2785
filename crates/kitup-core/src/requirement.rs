//! External tool requirements.

use crate::version::Version;

/// A required external tool with its minimum supported version.
#[derive(Debug, Clone)]
pub struct ToolRequirement {
    /// Name of the tool (e.g. "docker", "git").
    pub name: String,
    /// Oldest version the installer supports.
    pub min_version: Version,
    /// Version found on this host, if the tool is installed at all.
    pub detected: Option<Version>,
    /// Installation instructions shown when the tool is missing.
    pub install_hint: String,
}

impl ToolRequirement {
    /// Create a requirement that has not been probed yet.
    pub fn new(
        name: impl Into<String>,
        min_version: Version,
        install_hint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            min_version,
            detected: None,
            install_hint: install_hint.into(),
        }
    }

    /// Record the version found on this host.
    #[must_use]
    pub fn with_detected(mut self, detected: Option<Version>) -> Self {
        self.detected = detected;
        self
    }

    /// True iff the tool was found and meets the minimum version.
    pub fn satisfied(&self) -> bool {
        self.detected
            .as_ref()
            .is_some_and(|found| *found >= self.min_version)
    }
}
