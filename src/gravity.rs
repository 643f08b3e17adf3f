//! Earth gravity constants used by SGP4.
//!
//! Mirrors Vallado's `getgravconst()`: three constant sets, selected once per
//! satellite record and never changed afterwards.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which set of Earth constants to use.
///
/// `Wgs72` is what the published element sets are fitted against and is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GravityModel {
    /// WGS-72 low precision constants from Spacetrack Report #3.
    Wgs72Old,
    #[default]
    Wgs72,
    Wgs84,
}

/// Gravity constants, corresponds to `getgravconst()` outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravConst {
    /// Minutes in one canonical time unit.
    pub tumin: f64,
    /// Gravitational parameter, km^3 / s^2.
    pub mu: f64,
    pub radiusearthkm: f64,
    /// Reciprocal of `tumin`.
    pub xke: f64,
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
    pub j3oj2: f64,
}

impl GravityModel {
    pub const ALL: [GravityModel; 3] =
        [GravityModel::Wgs72Old, GravityModel::Wgs72, GravityModel::Wgs84];

    pub fn name(self) -> &'static str {
        match self {
            GravityModel::Wgs72Old => "wgs72old",
            GravityModel::Wgs72 => "wgs72",
            GravityModel::Wgs84 => "wgs84",
        }
    }

    /// Look up the constant set for this model.
    pub fn constants(self) -> GravConst {
        match self {
            GravityModel::Wgs72Old => {
                let xke = 0.074_366_916_1_f64;
                let j2 = 0.001_082_616_f64;
                let j3 = -0.000_002_538_81_f64;
                GravConst {
                    tumin: 1.0 / xke,
                    mu: 398_600.799_64,
                    radiusearthkm: 6378.135,
                    xke,
                    j2,
                    j3,
                    j4: -0.000_001_655_97,
                    j3oj2: j3 / j2,
                }
            }
            GravityModel::Wgs72 => {
                let mu = 398_600.8_f64;
                let radiusearthkm = 6378.135_f64;
                let xke = 60.0 / (radiusearthkm * radiusearthkm * radiusearthkm / mu).sqrt();
                let j2 = 0.001_082_616_f64;
                let j3 = -0.000_002_538_81_f64;
                GravConst {
                    tumin: 1.0 / xke,
                    mu,
                    radiusearthkm,
                    xke,
                    j2,
                    j3,
                    j4: -0.000_001_655_97,
                    j3oj2: j3 / j2,
                }
            }
            GravityModel::Wgs84 => {
                let mu = 398_600.5_f64;
                let radiusearthkm = 6378.137_f64;
                let xke = 60.0 / (radiusearthkm * radiusearthkm * radiusearthkm / mu).sqrt();
                let j2 = 0.001_082_629_989_05_f64;
                let j3 = -0.000_002_532_153_06_f64;
                GravConst {
                    tumin: 1.0 / xke,
                    mu,
                    radiusearthkm,
                    xke,
                    j2,
                    j3,
                    j4: -0.000_001_610_987_61,
                    j3oj2: j3 / j2,
                }
            }
        }
    }
}

impl GravConst {
    /// Velocity unit: Earth radii per canonical time unit expressed in km/s.
    pub fn vkmpersec(&self) -> f64 {
        self.radiusearthkm * self.xke / 60.0
    }
}

impl fmt::Display for GravityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GravityModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs72old" => Ok(GravityModel::Wgs72Old),
            "wgs72" => Ok(GravityModel::Wgs72),
            "wgs84" => Ok(GravityModel::Wgs84),
            other => Err(ConfigError::UnknownGravityModel(other.to_string())),
        }
    }
}
