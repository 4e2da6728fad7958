//! Platform tokens and their widget families.

use std::fmt;
use std::str::FromStr;

use crate::families::{AndroidFamily, IosFamily};
use crate::traits::WidgetFamily;

/// A platform the dispatcher knows how to build widgets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

/// Token lookup table; tokens are lowercase.
const PLATFORMS: [(&str, Platform); 2] = [("ios", Platform::Ios), ("android", Platform::Android)];

impl Platform {
    /// Every recognized platform, in listing order.
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// Resolve a platform name, ignoring case.
    pub fn lookup(name: &str) -> Option<Platform> {
        let name = name.to_lowercase();
        PLATFORMS
            .iter()
            .find(|(token, _)| *token == name)
            .map(|(_, platform)| *platform)
    }

    /// The lowercase token for this platform.
    pub fn token(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// The shared widget family for this platform.
    pub fn family(self) -> &'static dyn WidgetFamily {
        match self {
            Platform::Ios => IosFamily::instance(),
            Platform::Android => AndroidFamily::instance(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Platform {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::lookup(s).ok_or_else(|| DispatchError::UnknownPlatform(s.to_string()))
    }
}

/// Errors that can occur when selecting a widget family.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown platform: {0:?} (expected one of: ios, android)")]
    UnknownPlatform(String),
}
