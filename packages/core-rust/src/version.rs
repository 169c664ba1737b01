//! vSphere API version strings.

use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// A dotted API version such as `6.7.3` or `8.0.2.0`.
///
/// Only the major and minor components take part in comparisons that gate
/// features; further components are kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub rest: Vec<u32>,
}

impl ApiVersion {
    /// The first API release that exposes the vSAN management service.
    pub const VSAN_MINIMUM: (u32, u32) = (5, 5);

    /// Creates a `major.minor` version.
    #[must_use]
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            rest: Vec::new(),
        }
    }

    /// Whether this version is at least `major.minor`.
    #[must_use]
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }

    /// Whether the vSAN management API is available at this version.
    #[must_use]
    pub fn supports_vsan(&self) -> bool {
        let (major, minor) = Self::VSAN_MINIMUM;
        self.at_least(major, minor)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        for part in &self.rest {
            write!(f, ".{part}")?;
        }
        Ok(())
    }
}

impl FromStr for ApiVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Version(s.to_string());
        let mut parts = s.trim().split('.').map(|p| p.parse::<u32>().map_err(|_| err()));
        let major = parts.next().ok_or_else(err)??;
        let minor = parts.next().ok_or_else(err)??;
        let rest = parts.collect::<Result<Vec<_>, _>>()?;
        Ok(Self { major, minor, rest })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_and_more_components() {
        assert_eq!("6.7".parse::<ApiVersion>().unwrap(), ApiVersion::new(6, 7));
        let v: ApiVersion = "8.0.2.0".parse().unwrap();
        assert_eq!((v.major, v.minor), (8, 0));
        assert_eq!(v.rest, vec![2, 0]);
        assert_eq!(v.to_string(), "8.0.2.0");
    }

    #[test]
    fn rejects_malformed_versions() {
        for bad in ["", "6", "six.seven", "6.x", "6..7", "-1.0"] {
            assert!(bad.parse::<ApiVersion>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn vsan_gate_starts_at_five_five() {
        assert!(!ApiVersion::new(4, 1).supports_vsan());
        assert!(!ApiVersion::new(5, 1).supports_vsan());
        assert!(ApiVersion::new(5, 5).supports_vsan());
        assert!(ApiVersion::new(6, 0).supports_vsan());
        assert!(ApiVersion::new(10, 0).supports_vsan());
    }
}
