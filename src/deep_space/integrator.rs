// dspace: secular lunar-solar update and the resonance integrator.

use log::trace;

use super::{DeepSpace, MeanState, Resonance, ResonanceTerms, RPTIM};
use crate::propagation::TWOPI;

const FASX2: f64 = 0.131_309_08;
const FASX4: f64 = 2.884_319_8;
const FASX6: f64 = 0.374_480_87;
const G22: f64 = 5.768_639_6;
const G32: f64 = 0.952_408_98;
const G44: f64 = 1.801_499_8;
const G52: f64 = 1.050_833_0;
const G54: f64 = 4.410_889_8;

/// Integrator step, minutes.
const STEP: f64 = 720.0;
/// Half the step squared.
const STEP2: f64 = 259_200.0;

/// Libration rate, its derivative, and the second derivative of the
/// libration rate (`xndt, xldot, xnddt`) at the current integrator state.
fn rates(r: &ResonanceTerms, xli: f64, xni: f64, omega: f64) -> (f64, f64, f64) {
    let xldot = xni + r.xfact;
    if r.kind != Resonance::HalfDay {
        let xndt = r.del1 * (xli - FASX2).sin()
            + r.del2 * (2.0 * (xli - FASX4)).sin()
            + r.del3 * (3.0 * (xli - FASX6)).sin();
        let xnddt = r.del1 * (xli - FASX2).cos()
            + 2.0 * r.del2 * (2.0 * (xli - FASX4)).cos()
            + 3.0 * r.del3 * (3.0 * (xli - FASX6)).cos();
        return (xndt, xldot, xnddt * xldot);
    }

    let xomi = omega;
    let x2omi = xomi + xomi;
    let x2li = xli + xli;
    let xndt = r.d2201 * (x2omi + xli - G22).sin()
        + r.d2211 * (xli - G22).sin()
        + r.d3210 * (xomi + xli - G32).sin()
        + r.d3222 * (-xomi + xli - G32).sin()
        + r.d4410 * (x2omi + x2li - G44).sin()
        + r.d4422 * (x2li - G44).sin()
        + r.d5220 * (xomi + xli - G52).sin()
        + r.d5232 * (-xomi + xli - G52).sin()
        + r.d5421 * (xomi + x2li - G54).sin()
        + r.d5433 * (-xomi + x2li - G54).sin();
    let xnddt = r.d2201 * (x2omi + xli - G22).cos()
        + r.d2211 * (xli - G22).cos()
        + r.d3210 * (xomi + xli - G32).cos()
        + r.d3222 * (-xomi + xli - G32).cos()
        + r.d5220 * (xomi + xli - G52).cos()
        + r.d5232 * (-xomi + xli - G52).cos()
        + 2.0
            * (r.d4410 * (x2omi + x2li - G44).cos()
                + r.d4422 * (x2li - G44).cos()
                + r.d5421 * (xomi + x2li - G54).cos()
                + r.d5433 * (-xomi + x2li - G54).cos());
    (xndt, xldot, xnddt * xldot)
}

/// Advance the mean elements in `state` to `t` minutes past epoch.
///
/// Applies the lunar-solar secular rates and, for resonant orbits,
/// integrates the libration angle and rate in fixed 720-minute steps from
/// wherever the previous call left off. The integrator restarts from epoch
/// when `t` cannot be reached by continuing monotonically. `state.nm` must
/// hold `no` on entry; it is replaced by the resonance-corrected motion.
pub fn dspace(
    ds: &mut DeepSpace,
    argpo: f64,
    argpdot: f64,
    t: f64,
    gsto: f64,
    no: f64,
    state: &mut MeanState,
) {
    let r = ds.rates;
    let theta = (gsto + t * RPTIM) % TWOPI;
    state.em += r.dedt * t;
    state.inclm += r.didt * t;
    state.argpm += r.domdt * t;
    state.nodem += r.dnodt * t;
    state.mm += r.dmdt * t;

    let res = &ds.resonance;
    if res.kind == Resonance::None {
        return;
    }

    let it = &mut ds.integrator;
    if it.needs_restart(t) {
        trace!("resonance integrator restart at t = {t} (was at {})", it.atime);
        it.restart(res.xlamo, no);
    }
    let delt = if t > 0.0 { STEP } else { -STEP };

    let (xndt, xldot, xnddt) = loop {
        let omega = argpo + argpdot * it.atime;
        let (xndt, xldot, xnddt) = rates(res, it.xli, it.xni, omega);
        // stays false for a NaN `t`, so the loop still ends
        if (t - it.atime).abs() >= STEP {
            it.xli += xldot * delt + xndt * STEP2;
            it.xni += xndt * delt + xnddt * STEP2;
            it.atime += delt;
            continue;
        }
        break (xndt, xldot, xnddt);
    };

    let ft = t - it.atime;
    let nm = it.xni + xndt * ft + xnddt * ft * ft * 0.5;
    let xl = it.xli + xldot * ft + xndt * ft * ft * 0.5;
    state.mm = if res.kind == Resonance::Synchronous {
        xl - state.nodem - state.argpm + theta
    } else {
        xl - 2.0 * state.nodem + 2.0 * theta
    };
    let dndt = nm - no;
    state.nm = no + dndt;
}
