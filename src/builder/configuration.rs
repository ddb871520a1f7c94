//! Build configurations - the named build modes a graph is built under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A build configuration.
///
/// The set is closed: every projection produces exactly one entry per
/// variant listed in [`BuildConfiguration::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfiguration {
    /// Unoptimized build with debug info
    Debug,

    /// Optimized build
    Release,
}

impl BuildConfiguration {
    /// Every build configuration.
    pub const ALL: [BuildConfiguration; 2] = [BuildConfiguration::Debug, BuildConfiguration::Release];

    /// Iterate over every build configuration.
    pub fn all() -> impl Iterator<Item = BuildConfiguration> {
        Self::ALL.into_iter()
    }

    /// Get the configuration identifier, e.g. "debug".
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "debug",
            BuildConfiguration::Release => "release",
        }
    }
}

impl Default for BuildConfiguration {
    fn default() -> Self {
        BuildConfiguration::Debug
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildConfiguration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildConfiguration::Debug),
            "release" => Ok(BuildConfiguration::Release),
            _ => Err(format!(
                "invalid build configuration '{}'; expected 'debug' or 'release'",
                s
            )),
        }
    }
}
