// dsinit: lunar-solar secular rates and Earth-resonance set-up.

use log::debug;

use super::{
    BodyTerms, DeepSpace, DeepSpaceCommon, IntegratorState, MeanState, Resonance,
    ResonanceTerms, SecularRates, RPTIM, ZNL, ZNS,
};
use crate::propagation::TWOPI;

use std::f64::consts::PI;

const Q22: f64 = 1.789_167_9e-6;
const Q31: f64 = 2.146_074_8e-6;
const Q33: f64 = 2.212_301_5e-7;
const ROOT22: f64 = 1.789_167_9e-6;
const ROOT44: f64 = 7.363_695_3e-9;
const ROOT54: f64 = 2.176_580_3e-9;
const ROOT32: f64 = 3.739_379_2e-7;
const ROOT52: f64 = 1.142_863_9e-7;

/// Within 3° of 0° or 180° inclination the node rate terms are dropped.
const POLAR_GUARD: f64 = 5.235_987_7e-2;

/// Epoch quantities from the near-earth initialization that the resonance
/// set-up needs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResonanceEpoch {
    pub xke: f64,
    pub gsto: f64,
    pub ecco: f64,
    pub eccsq: f64,
    pub argpo: f64,
    pub mo: f64,
    pub nodeo: f64,
    /// Un-Kozai'd mean motion, rad/min.
    pub no: f64,
    pub mdot: f64,
    pub nodedot: f64,
    pub xpidot: f64,
}

/// Secular contribution of one body: `(e, i, m, gh, h)` rates.
fn body_rates(b: &BodyTerms, zn: f64, emsq: f64) -> (f64, f64, f64, f64, f64) {
    (
        b.s1 * zn * b.s5,
        b.s2 * zn * (b.z11 + b.z13),
        -zn * b.s3 * (b.z1 + b.z3 - 14.0 - 6.0 * emsq),
        b.s4 * zn * (b.z31 + b.z33 - 6.0),
        -zn * b.s2 * (b.z21 + b.z23),
    )
}

fn secular_rates(c: &DeepSpaceCommon, inclm: f64) -> SecularRates {
    let near_polar_axis = inclm < POLAR_GUARD || inclm > PI - POLAR_GUARD;

    let (ses, sis, sls, sghs, mut shs) = body_rates(&c.solar, ZNS, c.emsq);
    if near_polar_axis {
        shs = 0.0;
    }
    if c.sinim != 0.0 {
        shs /= c.sinim;
    }
    let sgs = sghs - c.cosim * shs;

    let (sel, sil, sll, sghl, mut shll) = body_rates(&c.lunar, ZNL, c.emsq);
    if near_polar_axis {
        shll = 0.0;
    }
    let mut domdt = sgs + sghl;
    let mut dnodt = shs;
    if c.sinim != 0.0 {
        domdt -= c.cosim / c.sinim * shll;
        dnodt += shll / c.sinim;
    }

    SecularRates {
        dedt: ses + sel,
        didt: sis + sil,
        dmdt: sls + sll,
        dnodt,
        domdt,
    }
}

/// Geopotential resonance coefficients for 12-hour, eccentric orbits.
fn half_day_terms(
    c: &DeepSpaceCommon,
    ep: &ResonanceEpoch,
    rates: &SecularRates,
    aonv: f64,
    nm: f64,
    theta: f64,
) -> ResonanceTerms {
    let cosim = c.cosim;
    let sinim = c.sinim;
    let cosisq = cosim * cosim;
    let em = ep.ecco;
    let emsq = ep.eccsq;
    let eoc = em * emsq;
    let g201 = -0.306 - (em - 0.64) * 0.440;

    let (g211, g310, g322, g410, g422, g520);
    if em <= 0.65 {
        g211 = 3.616 - 13.2470 * em + 16.2900 * emsq;
        g310 = -19.302 + 117.3900 * em - 228.4190 * emsq + 156.5910 * eoc;
        g322 = -18.9068 + 109.7927 * em - 214.6334 * emsq + 146.5816 * eoc;
        g410 = -41.122 + 242.6940 * em - 471.0940 * emsq + 313.9530 * eoc;
        g422 = -146.407 + 841.8800 * em - 1629.014 * emsq + 1083.4350 * eoc;
        g520 = -532.114 + 3017.977 * em - 5740.032 * emsq + 3708.2760 * eoc;
    } else {
        g211 = -72.099 + 331.819 * em - 508.738 * emsq + 266.724 * eoc;
        g310 = -346.844 + 1582.851 * em - 2415.925 * emsq + 1246.113 * eoc;
        g322 = -342.585 + 1554.908 * em - 2366.899 * emsq + 1215.972 * eoc;
        g410 = -1052.797 + 4758.686 * em - 7193.992 * emsq + 3651.957 * eoc;
        g422 = -3581.690 + 16178.110 * em - 24462.770 * emsq + 12422.520 * eoc;
        g520 = if em > 0.715 {
            -5149.66 + 29936.92 * em - 54087.36 * emsq + 31324.56 * eoc
        } else {
            1464.74 - 4664.75 * em + 3763.64 * emsq
        };
    }

    let (g533, g521, g532);
    if em < 0.7 {
        g533 = -919.22770 + 4988.6100 * em - 9064.7700 * emsq + 5542.21 * eoc;
        g521 = -822.71072 + 4568.6173 * em - 8491.4146 * emsq + 5337.524 * eoc;
        g532 = -853.66600 + 4690.2500 * em - 8624.7700 * emsq + 5341.4 * eoc;
    } else {
        g533 = -37995.780 + 161616.52 * em - 229838.20 * emsq + 109377.94 * eoc;
        g521 = -51752.104 + 218913.95 * em - 309468.16 * emsq + 146349.42 * eoc;
        g532 = -40023.880 + 170470.89 * em - 242699.48 * emsq + 115605.82 * eoc;
    }

    let sini2 = sinim * sinim;
    let f220 = 0.75 * (1.0 + 2.0 * cosim + cosisq);
    let f221 = 1.5 * sini2;
    let f321 = 1.875 * sinim * (1.0 - 2.0 * cosim - 3.0 * cosisq);
    let f322 = -1.875 * sinim * (1.0 + 2.0 * cosim - 3.0 * cosisq);
    let f441 = 35.0 * sini2 * f220;
    let f442 = 39.3750 * sini2 * sini2;
    let f522 = 9.84375
        * sinim
        * (sini2 * (1.0 - 2.0 * cosim - 5.0 * cosisq)
            + 0.33333333 * (-2.0 + 4.0 * cosim + 6.0 * cosisq));
    let f523 = sinim
        * (4.92187512 * sini2 * (-2.0 - 4.0 * cosim + 10.0 * cosisq)
            + 6.56250012 * (1.0 + 2.0 * cosim - 3.0 * cosisq));
    let f542 = 29.53125
        * sinim
        * (2.0 - 8.0 * cosim + cosisq * (-12.0 + 8.0 * cosim + 10.0 * cosisq));
    let f543 = 29.53125
        * sinim
        * (-2.0 - 8.0 * cosim + cosisq * (12.0 + 8.0 * cosim - 10.0 * cosisq));

    let xno2 = nm * nm;
    let ainv2 = aonv * aonv;
    let mut temp1 = 3.0 * xno2 * ainv2;
    let mut temp = temp1 * ROOT22;
    let d2201 = temp * f220 * g201;
    let d2211 = temp * f221 * g211;
    temp1 *= aonv;
    temp = temp1 * ROOT32;
    let d3210 = temp * f321 * g310;
    let d3222 = temp * f322 * g322;
    temp1 *= aonv;
    temp = 2.0 * temp1 * ROOT44;
    let d4410 = temp * f441 * g410;
    let d4422 = temp * f442 * g422;
    temp1 *= aonv;
    temp = temp1 * ROOT52;
    let d5220 = temp * f522 * g520;
    let d5232 = temp * f523 * g532;
    temp = 2.0 * temp1 * ROOT54;
    let d5421 = temp * f542 * g521;
    let d5433 = temp * f543 * g533;

    ResonanceTerms {
        kind: Resonance::HalfDay,
        d2201,
        d2211,
        d3210,
        d3222,
        d4410,
        d4422,
        d5220,
        d5232,
        d5421,
        d5433,
        xlamo: (ep.mo + ep.nodeo + ep.nodeo - theta - theta) % TWOPI,
        xfact: ep.mdot + rates.dmdt + 2.0 * (ep.nodedot + rates.dnodt - RPTIM) - ep.no,
        ..ResonanceTerms::default()
    }
}

/// Resonance coefficients for one-day (geosynchronous) orbits.
fn synchronous_terms(
    c: &DeepSpaceCommon,
    ep: &ResonanceEpoch,
    rates: &SecularRates,
    aonv: f64,
    nm: f64,
    theta: f64,
) -> ResonanceTerms {
    let cosim = c.cosim;
    let sinim = c.sinim;
    let emsq = c.emsq;

    let g200 = 1.0 + emsq * (-2.5 + 0.8125 * emsq);
    let g310 = 1.0 + 2.0 * emsq;
    let g300 = 1.0 + emsq * (-6.0 + 6.60937 * emsq);
    let f220 = 0.75 * (1.0 + cosim) * (1.0 + cosim);
    let f311 = 0.9375 * sinim * sinim * (1.0 + 3.0 * cosim) - 0.75 * (1.0 + cosim);
    let f330 = 1.0 + cosim;
    let f330 = 1.875 * f330 * f330 * f330;

    let del1 = 3.0 * nm * nm * aonv * aonv;
    let del2 = 2.0 * del1 * f220 * g200 * Q22;
    let del3 = 3.0 * del1 * f330 * g300 * Q33 * aonv;
    let del1 = del1 * f311 * g310 * Q31 * aonv;

    ResonanceTerms {
        kind: Resonance::Synchronous,
        del1,
        del2,
        del3,
        xlamo: (ep.mo + ep.nodeo + ep.argpo - theta) % TWOPI,
        xfact: ep.mdot + ep.xpidot - RPTIM + rates.dmdt + rates.domdt + rates.dnodt - ep.no,
        ..ResonanceTerms::default()
    }
}

/// Deep-space initialization.
///
/// Computes the lunar-solar secular rates, advances `state` by them over
/// `t` minutes, classifies the orbit's Earth resonance and, for resonant
/// orbits, derives the resonance coefficients and seeds the integrator at
/// epoch. `state` must hold the elements `dscom` was run on, with `nm` the
/// un-Kozai'd mean motion.
pub fn dsinit(
    common: &DeepSpaceCommon,
    epoch: &ResonanceEpoch,
    t: f64,
    tc: f64,
    state: &mut MeanState,
) -> DeepSpace {
    let kind = Resonance::classify(state.nm, state.em);

    let rates = secular_rates(common, state.inclm);

    let theta = (epoch.gsto + tc * RPTIM) % TWOPI;
    state.em += rates.dedt * t;
    state.inclm += rates.didt * t;
    state.argpm += rates.domdt * t;
    state.nodem += rates.dnodt * t;
    state.mm += rates.dmdt * t;

    let mut ds = DeepSpace {
        periodics: common.terms,
        rates,
        ..DeepSpace::default()
    };

    let aonv = (state.nm / epoch.xke).powf(2.0 / 3.0);
    ds.resonance = match kind {
        Resonance::None => {
            debug!("deep space: no resonance, nm = {:.9} rad/min", state.nm);
            return ds;
        }
        Resonance::Synchronous => synchronous_terms(common, epoch, &rates, aonv, state.nm, theta),
        Resonance::HalfDay => half_day_terms(common, epoch, &rates, aonv, state.nm, theta),
    };
    debug!(
        "deep space: {:?} resonance, xlamo = {:.9}, xfact = {:.6e}",
        kind, ds.resonance.xlamo, ds.resonance.xfact
    );

    ds.integrator = IntegratorState {
        atime: 0.0,
        xli: ds.resonance.xlamo,
        xni: epoch.no,
    };
    state.nm = epoch.no;
    ds
}
