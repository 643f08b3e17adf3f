// dpper: lunar-solar long-period periodics applied to the mean elements.

use super::{
    LunarSolarTerms, PeriodicAmplitudes, PeriodicOffsets, PerturbedElements, ZEL, ZES, ZNL, ZNS,
};
use crate::config::OpsMode;
use crate::propagation::TWOPI;

use std::f64::consts::PI;

/// Below this perturbed inclination (rad) the Lyddane form is used.
const LYDDANE_INCLINATION: f64 = 0.2;

/// One body's contribution at mean anomaly `zm`.
fn body_contributions(amp: &PeriodicAmplitudes, zm: f64, ze: f64) -> PeriodicOffsets {
    let zf = zm + 2.0 * ze * zm.sin();
    let sinzf = zf.sin();
    let f2 = 0.5 * sinzf * sinzf - 0.25;
    let f3 = -0.5 * sinzf * zf.cos();
    PeriodicOffsets {
        pe: amp.e2 * f2 + amp.e3 * f3,
        pinc: amp.i2 * f2 + amp.i3 * f3,
        pl: amp.l2 * f2 + amp.l3 * f3 + amp.l4 * sinzf,
        pgh: amp.gh2 * f2 + amp.gh3 * f3 + amp.gh4 * sinzf,
        ph: amp.h2 * f2 + amp.h3 * f3,
    }
}

/// Summed solar and lunar periodics at `t` minutes from epoch, before the
/// baseline is removed. With `init` set, the epoch anomalies are used
/// whatever `t` is.
pub fn long_period_offsets(terms: &LunarSolarTerms, t: f64, init: bool) -> PeriodicOffsets {
    let (zms, zml) = if init {
        (terms.zmos, terms.zmol)
    } else {
        (terms.zmos + ZNS * t, terms.zmol + ZNL * t)
    };
    let s = body_contributions(&terms.solar, zms, ZES);
    let l = body_contributions(&terms.lunar, zml, ZEL);
    PeriodicOffsets {
        pe: s.pe + l.pe,
        pinc: s.pinc + l.pinc,
        pl: s.pl + l.pl,
        pgh: s.pgh + l.pgh,
        ph: s.ph + l.ph,
    }
}

/// Apply the long-period periodics to `el` at `t` minutes from epoch.
///
/// The initialization call (`init == true`) leaves the elements alone.
/// Above 0.2 rad of perturbed inclination the corrections are added
/// directly; below it they are applied through the Lyddane modification,
/// which works in `(sin i sin Ω, sin i cos Ω)` to stay regular at zero
/// inclination. In [`OpsMode::Afspc`] the node is kept in `[0, 2π)` there.
pub fn dpper(
    terms: &LunarSolarTerms,
    t: f64,
    init: bool,
    el: &mut PerturbedElements,
    opsmode: OpsMode,
) {
    if init {
        return;
    }

    let p = long_period_offsets(terms, t, init);
    let base = &terms.baseline;
    let pe = p.pe - base.pe;
    let pinc = p.pinc - base.pinc;
    let pl = p.pl - base.pl;
    let mut pgh = p.pgh - base.pgh;
    let mut ph = p.ph - base.ph;

    el.inclp += pinc;
    el.ep += pe;
    let sinip = el.inclp.sin();
    let cosip = el.inclp.cos();

    if el.inclp >= LYDDANE_INCLINATION {
        ph /= sinip;
        pgh -= cosip * ph;
        el.argpp += pgh;
        el.nodep += ph;
        el.mp += pl;
        return;
    }

    let sinop = el.nodep.sin();
    let cosop = el.nodep.cos();
    let alfdp = sinip * sinop + (ph * cosop + pinc * cosip * sinop);
    let betdp = sinip * cosop + (-ph * sinop + pinc * cosip * cosop);

    let afspc = opsmode == OpsMode::Afspc;
    let mut nodep = el.nodep % TWOPI;
    if nodep < 0.0 && afspc {
        nodep += TWOPI;
    }
    let mut xls = el.mp + el.argpp + cosip * nodep;
    let dls = pl + pgh - pinc * nodep * sinip;
    xls += dls;

    let xnoh = nodep;
    nodep = alfdp.atan2(betdp);
    if nodep < 0.0 && afspc {
        nodep += TWOPI;
    }
    if (xnoh - nodep).abs() > PI {
        if nodep < xnoh {
            nodep += TWOPI;
        } else {
            nodep -= TWOPI;
        }
    }

    el.nodep = nodep;
    el.mp += pl;
    el.argpp = xls - el.mp - cosip * nodep;
}
