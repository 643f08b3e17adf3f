//! Mean-element input record.
//!
//! Parsing of TLE/OMM text is left to the caller; this is the shape the
//! parsed values are handed over in.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::propagation::{DEG2RAD, TWOPI};
use crate::time::epoch_from_year_day;

/// Minutes per day divided by 2π: converts rev/day to rad/min.
pub const XPDOTP: f64 = 1440.0 / TWOPI;

/// Brouwer mean elements of one satellite at its epoch.
///
/// Angles are radians, mean motion is radians per minute and `epoch` is days
/// since 1949 December 31 00:00 UT.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeanElements {
    pub satnum: String,
    pub epoch: f64,
    /// Drag term, 1 / earth radii.
    pub bstar: f64,
    /// First derivative of mean motion. Carried along, unused by SGP4.
    pub ndot: f64,
    /// Second derivative of mean motion. Carried along, unused by SGP4.
    pub nddot: f64,
    pub ecco: f64,
    pub argpo: f64,
    pub inclo: f64,
    pub mo: f64,
    /// Kozai mean motion as published in element sets.
    pub no_kozai: f64,
    pub nodeo: f64,
}

impl MeanElements {
    /// Build from the units a TLE uses: degrees, revolutions per day and a
    /// `(year, day of year)` epoch.
    ///
    /// `ndot` is rev/day² and `nddot` rev/day³ as printed in the element set.
    #[allow(clippy::too_many_arguments)]
    pub fn from_tle_units(
        satnum: &str,
        epoch_year: i32,
        epoch_days: f64,
        bstar: f64,
        ndot: f64,
        nddot: f64,
        ecco: f64,
        argpo_deg: f64,
        inclo_deg: f64,
        mo_deg: f64,
        revs_per_day: f64,
        nodeo_deg: f64,
    ) -> MeanElements {
        MeanElements {
            satnum: satnum.to_string(),
            epoch: epoch_from_year_day(epoch_year, epoch_days),
            bstar,
            ndot: ndot / (XPDOTP * 1440.0),
            nddot: nddot / (XPDOTP * 1440.0 * 1440.0),
            ecco,
            argpo: argpo_deg * DEG2RAD,
            inclo: inclo_deg * DEG2RAD,
            mo: mo_deg * DEG2RAD,
            no_kozai: revs_per_day / XPDOTP,
            nodeo: nodeo_deg * DEG2RAD,
        }
    }

    /// Orbital period in minutes implied by the Kozai mean motion.
    pub fn period_minutes(&self) -> f64 {
        TWOPI / self.no_kozai
    }
}
