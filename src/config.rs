//! Per-record propagator settings: gravity model and operation mode.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gravity::GravityModel;

/// Angle-wrap and sidereal-time convention.
///
/// `Afspc` reproduces the legacy Air Force Space Command code (`'a'`): the
/// 1970-based sidereal time formula and node wrapping into `[0, 2π)` inside
/// the Lyddane branch. `Improved` (`'i'`) uses `gstime` and leaves the node
/// unwrapped. The two paths intentionally diverge near 180° boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OpsMode {
    Afspc,
    #[default]
    Improved,
}

impl OpsMode {
    pub fn as_char(self) -> char {
        match self {
            OpsMode::Afspc => 'a',
            OpsMode::Improved => 'i',
        }
    }

    pub fn from_char(c: char) -> Result<OpsMode, ConfigError> {
        match c {
            'a' => Ok(OpsMode::Afspc),
            'i' => Ok(OpsMode::Improved),
            other => Err(ConfigError::UnknownOpsMode(other.to_string())),
        }
    }
}

impl fmt::Display for OpsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpsMode::Afspc => f.write_str("afspc"),
            OpsMode::Improved => f.write_str("improved"),
        }
    }
}

impl FromStr for OpsMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "afspc" => Ok(OpsMode::Afspc),
            "i" | "improved" => Ok(OpsMode::Improved),
            other => Err(ConfigError::UnknownOpsMode(other.to_string())),
        }
    }
}

/// Settings fixed at initialization for one satellite record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropagatorConfig {
    pub gravity_model: GravityModel,
    pub opsmode: OpsMode,
}

impl PropagatorConfig {
    pub fn new(gravity_model: GravityModel, opsmode: OpsMode) -> Self {
        PropagatorConfig {
            gravity_model,
            opsmode,
        }
    }
}
