//! Admin API version selection.
//!
//! The version is baked into every request URL
//! (`/admin/api/{version}/...`) and fixed for the lifetime of a session.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Admin API version.
///
/// Shopify releases a version every quarter (January, April, July, October).
/// Known releases get a variant; anything newer that still follows the
/// `YYYY-MM` release pattern parses into [`ApiVersion::Custom`].
///
/// # Example
///
/// ```rust
/// use shopipy::ApiVersion;
///
/// let version: ApiVersion = "2023-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2023_07);
/// assert_eq!(version.to_string(), "2023-07");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// 2023-07
    V2023_07,
    /// 2023-10
    V2023_10,
    /// 2024-01
    V2024_01,
    /// 2024-04
    V2024_04,
    /// 2024-07
    V2024_07,
    /// 2024-10
    V2024_10,
    /// 2025-01
    V2025_01,
    /// 2025-04
    V2025_04,
    /// 2025-07
    V2025_07,
    /// 2025-10
    V2025_10,
    /// The unstable channel, for development stores only.
    Unstable,
    /// A release this crate does not know about yet.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable version known to this crate.
    ///
    /// Used as the default when a configuration does not pin a version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` for known stable releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    const fn ordinal(&self) -> u32 {
        match self {
            Self::V2023_07 => 1,
            Self::V2023_10 => 2,
            Self::V2024_01 => 3,
            Self::V2024_04 => 4,
            Self::V2024_07 => 5,
            Self::V2024_10 => 6,
            Self::V2025_01 => 7,
            Self::V2025_04 => 8,
            Self::V2025_07 => 9,
            Self::V2025_10 => 10,
            Self::Unstable => 100,
            Self::Custom(_) => 101,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => self.ordinal().cmp(&other.ordinal()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = match self {
            Self::V2023_07 => "2023-07",
            Self::V2023_10 => "2023-10",
            Self::V2024_01 => "2024-01",
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2023-07" => Ok(Self::V2023_07),
            "2023-10" => Ok(Self::V2023_10),
            "2024-01" => Ok(Self::V2024_01),
            "2024-04" => Ok(Self::V2024_04),
            "2024-07" => Ok(Self::V2024_07),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "unstable" => Ok(Self::Unstable),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
