//! Deep-space (SDP4) extensions: lunar-solar periodics, Earth resonance and
//! the resonance integrator.
//!
//! The classic code threads ~100 scalars through `dscom`, `dpper`, `dsinit`
//! and `dspace`. Here they are grouped into a handful of value records:
//!
//! * [`LunarSolarTerms`] - long-period amplitudes from `dscom`, read by `dpper`
//! * [`SecularRates`] - lunar-solar secular rates from `dsinit`
//! * [`ResonanceTerms`] - geopotential resonance coefficients from `dsinit`
//! * [`IntegratorState`] - the only state carried from one call to the next
//!
//! All four live in [`DeepSpace`], which a satellite record owns if and only
//! if it uses the deep-space method.

mod common;
mod integrator;
mod periodics;
mod resonance;

pub use common::{dscom, BodyTerms, DeepSpaceCommon};
pub use integrator::dspace;
pub use periodics::{dpper, long_period_offsets};
pub use resonance::{dsinit, ResonanceEpoch};

// solar and lunar mean motions (rad/min) and orbit eccentricities
pub(crate) const ZNS: f64 = 1.19459e-5;
pub(crate) const ZES: f64 = 0.01675;
pub(crate) const ZNL: f64 = 1.5835218e-4;
pub(crate) const ZEL: f64 = 0.05490;

/// Earth rotation rate, rad/min.
pub(crate) const RPTIM: f64 = 4.375_269_088_011_299_66e-3;

/// Amplitudes of one perturbing body's long-period periodics.
///
/// For the sun these are `se2, se3, si2, si3, sl2, sl3, sl4, sgh2, sgh3, sgh4,
/// sh2, sh3`; for the moon `ee2, e3, xi2, xi3, xl2, xl3, xl4, xgh2, xgh3, xgh4,
/// xh2, xh3`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodicAmplitudes {
    pub e2: f64,
    pub e3: f64,
    pub i2: f64,
    pub i3: f64,
    pub l2: f64,
    pub l3: f64,
    pub l4: f64,
    pub gh2: f64,
    pub gh3: f64,
    pub gh4: f64,
    pub h2: f64,
    pub h3: f64,
}

/// Periodic corrections to eccentricity, inclination, mean longitude,
/// argument of perigee and node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodicOffsets {
    pub pe: f64,
    pub pinc: f64,
    pub pl: f64,
    pub pgh: f64,
    pub ph: f64,
}

/// Everything `dpper` needs, computed once by `dscom` at epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LunarSolarTerms {
    pub solar: PeriodicAmplitudes,
    pub lunar: PeriodicAmplitudes,
    /// Mean lunar anomaly at epoch.
    pub zmol: f64,
    /// Mean solar anomaly at epoch.
    pub zmos: f64,
    /// Offsets subtracted from every non-initialization correction
    /// (`peo, pinco, plo, pgho, pho`). `dscom` leaves them at zero.
    pub baseline: PeriodicOffsets,
}

/// Lunar-solar secular rates of the mean elements, per minute.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SecularRates {
    pub dedt: f64,
    pub didt: f64,
    pub dmdt: f64,
    pub dnodt: f64,
    pub domdt: f64,
}

/// Earth-resonance classification of a deep-space orbit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resonance {
    #[default]
    None,
    /// Geosynchronous, period near one day (`irez = 1`).
    Synchronous,
    /// Period near half a day with high eccentricity (`irez = 2`).
    HalfDay,
}

impl Resonance {
    /// Numeric `irez` value.
    pub fn irez(self) -> i32 {
        match self {
            Resonance::None => 0,
            Resonance::Synchronous => 1,
            Resonance::HalfDay => 2,
        }
    }

    /// Classify from mean motion (rad/min) and eccentricity.
    pub fn classify(nm: f64, em: f64) -> Resonance {
        let mut res = Resonance::None;
        if nm > 0.003_490_658_5 && nm < 0.005_235_987_7 {
            res = Resonance::Synchronous;
        }
        if (8.26e-3..=9.24e-3).contains(&nm) && em >= 0.5 {
            res = Resonance::HalfDay;
        }
        res
    }
}

/// Resonance force coefficients and the epoch libration seed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResonanceTerms {
    pub kind: Resonance,
    pub d2201: f64,
    pub d2211: f64,
    pub d3210: f64,
    pub d3222: f64,
    pub d4410: f64,
    pub d4422: f64,
    pub d5220: f64,
    pub d5232: f64,
    pub d5421: f64,
    pub d5433: f64,
    pub del1: f64,
    pub del2: f64,
    pub del3: f64,
    pub xfact: f64,
    pub xlamo: f64,
}

/// Resonance integrator state: time reached so far, libration angle and
/// libration rate (`atime, xli, xni`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntegratorState {
    pub atime: f64,
    pub xli: f64,
    pub xni: f64,
}

impl IntegratorState {
    /// Whether a request for `t` minutes cannot continue from this state and
    /// the integration must start over at epoch.
    ///
    /// The integrator only ever walks monotonically away from epoch, so it
    /// restarts when it has not moved yet, when `t` lies on the other side of
    /// epoch, or when `t` is closer to epoch than the state already is.
    pub fn needs_restart(&self, t: f64) -> bool {
        self.atime == 0.0 || t * self.atime <= 0.0 || t.abs() < self.atime.abs()
    }

    /// Reset to the epoch seed.
    pub fn restart(&mut self, xlamo: f64, no: f64) {
        self.atime = 0.0;
        self.xni = no;
        self.xli = xlamo;
    }
}

/// Singly-averaged elements that the deep-space routines update in place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanState {
    pub em: f64,
    pub argpm: f64,
    pub inclm: f64,
    pub mm: f64,
    pub nodem: f64,
    pub nm: f64,
}

/// The five slowly-varying elements `dpper` corrects.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerturbedElements {
    pub ep: f64,
    pub inclp: f64,
    pub nodep: f64,
    pub argpp: f64,
    pub mp: f64,
}

/// Deep-space portion of a satellite record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeepSpace {
    pub periodics: LunarSolarTerms,
    pub rates: SecularRates,
    pub resonance: ResonanceTerms,
    pub integrator: IntegratorState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_resonance_bands() {
        // one revolution per sidereal day
        assert_eq!(Resonance::classify(0.004_375, 0.0003), Resonance::Synchronous);
        // Molniya: two revolutions per day, high eccentricity
        assert_eq!(Resonance::classify(0.008_749, 0.69), Resonance::HalfDay);
        // same period, low eccentricity
        assert_eq!(Resonance::classify(0.008_749, 0.01), Resonance::None);
        // faster than the half-day band
        assert_eq!(Resonance::classify(0.0095, 0.7), Resonance::None);
        // band edges
        assert_eq!(Resonance::classify(0.003_490_658_5, 0.0), Resonance::None);
        assert_eq!(Resonance::classify(8.26e-3, 0.5), Resonance::HalfDay);
        assert_eq!(Resonance::classify(9.24e-3, 0.5), Resonance::HalfDay);
    }

    #[test]
    fn irez_codes() {
        assert_eq!(Resonance::None.irez(), 0);
        assert_eq!(Resonance::Synchronous.irez(), 1);
        assert_eq!(Resonance::HalfDay.irez(), 2);
    }

    #[test]
    fn restart_rule() {
        let fresh = IntegratorState::default();
        assert!(fresh.needs_restart(100.0));

        let forward = IntegratorState { atime: 1440.0, xli: 1.0, xni: 0.004 };
        assert!(!forward.needs_restart(1440.0));
        assert!(!forward.needs_restart(5000.0));
        assert!(forward.needs_restart(1000.0));
        assert!(forward.needs_restart(-2000.0));

        let backward = IntegratorState { atime: -720.0, xli: 1.0, xni: 0.004 };
        assert!(!backward.needs_restart(-800.0));
        assert!(backward.needs_restart(-700.0));
        assert!(backward.needs_restart(800.0));
    }

    #[test]
    fn restart_reseeds_from_epoch() {
        let mut state = IntegratorState { atime: 2160.0, xli: 3.0, xni: 0.0045 };
        state.restart(1.5, 0.004_37);
        assert_eq!(state, IntegratorState { atime: 0.0, xli: 1.5, xni: 0.004_37 });
    }
}
