//! Store platforms that publish remote top-100 catalogs.
//!
//! The `platform` column on a game is an open set of strings; these are the
//! two values the populate import tags its records with.

use std::fmt;

/// Platform label for Google Play catalog entries.
pub const PLATFORM_ANDROID: &str = "android";

/// Platform label for App Store catalog entries.
pub const PLATFORM_IOS: &str = "ios";

/// A platform with a remote catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// The lowercase label stored in `games.platform`.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => PLATFORM_ANDROID,
            Platform::Ios => PLATFORM_IOS,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
