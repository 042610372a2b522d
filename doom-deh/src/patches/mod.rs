//! The supported executable versions and their constant tables

use std::fmt;
use std::str::FromStr;

use crate::patch::DehPatch;

mod boom;
mod doom19;
pub mod udoom19;

pub use boom::Boom;
pub use udoom19::UDoom19;

/// Selector for the supported patch target versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PatchVersion {
    /// The Ultimate Doom v1.9 executable
    UltimateDoom19,
    /// Boom-compatible engines (extended DeHackEd addressing)
    Boom,
}

impl PatchVersion {
    /// All supported versions
    pub const ALL: [Self; 2] = [Self::UltimateDoom19, Self::Boom];

    /// The shared patch data for this version
    pub fn patch(self) -> &'static dyn DehPatch {
        match self {
            Self::UltimateDoom19 => udoom19::UDoom19::get(),
            Self::Boom => boom::Boom::get(),
        }
    }

    /// The canonical name of this version
    pub fn name(self) -> &'static str {
        match self {
            Self::UltimateDoom19 => "udoom19",
            Self::Boom => "boom",
        }
    }
}

impl fmt::Display for PatchVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PatchVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udoom19" | "udoom" | "ultimate-doom-1.9" => Ok(Self::UltimateDoom19),
            "boom" => Ok(Self::Boom),
            other => Err(format!(
                "unknown patch version '{other}' (expected one of: udoom19, boom)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_names_round_trip() {
        for version in PatchVersion::ALL {
            assert_eq!(version.name().parse::<PatchVersion>(), Ok(version));
        }
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        assert!("doom95".parse::<PatchVersion>().is_err());
    }

    #[test]
    fn test_every_version_resolves_to_a_patch() {
        for version in PatchVersion::ALL {
            let patch = version.patch();
            assert!(patch.state_count() > 0, "{version} has no states");
        }
    }
}
