// dscom: deep-space common items used by both the secular and the periodic
// routines. Computed once at epoch.

use super::{LunarSolarTerms, PeriodicAmplitudes, PeriodicOffsets, ZEL, ZES};
use crate::propagation::TWOPI;

const C1SS: f64 = 2.986_479_7e-6;
const C1L: f64 = 4.796_806_5e-7;
const ZSINIS: f64 = 0.397_854_16;
const ZCOSIS: f64 = 0.917_448_67;
const ZCOSGS: f64 = 0.194_590_5;
const ZSINGS: f64 = -0.980_884_58;

/// Geometry coefficients of one perturbing body relative to the orbit.
///
/// For the sun these are the classic `ss1..ss7, sz1..sz33`; for the moon
/// `s1..s7, z1..z33`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyTerms {
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    pub s4: f64,
    pub s5: f64,
    pub s6: f64,
    pub s7: f64,
    pub z1: f64,
    pub z2: f64,
    pub z3: f64,
    pub z11: f64,
    pub z12: f64,
    pub z13: f64,
    pub z21: f64,
    pub z22: f64,
    pub z23: f64,
    pub z31: f64,
    pub z32: f64,
    pub z33: f64,
}

/// Orientation of a perturbing body's orbit: argument, inclination and node
/// as cosine/sine pairs, plus its coupling constant.
#[derive(Debug, Clone, Copy)]
struct BodyGeometry {
    zcosg: f64,
    zsing: f64,
    zcosi: f64,
    zsini: f64,
    zcosh: f64,
    zsinh: f64,
    cc: f64,
}

/// Output of [`dscom`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeepSpaceCommon {
    pub snodm: f64,
    pub cnodm: f64,
    pub sinim: f64,
    pub cosim: f64,
    pub sinomm: f64,
    pub cosomm: f64,
    pub day: f64,
    pub em: f64,
    pub emsq: f64,
    pub gam: f64,
    pub rtemsq: f64,
    pub nm: f64,
    pub solar: BodyTerms,
    pub lunar: BodyTerms,
    pub terms: LunarSolarTerms,
}

impl BodyTerms {
    #[allow(clippy::too_many_arguments)]
    fn compute(
        g: &BodyGeometry,
        cosim: f64,
        sinim: f64,
        cosomm: f64,
        sinomm: f64,
        em: f64,
        emsq: f64,
        betasq: f64,
        rtemsq: f64,
        xnoi: f64,
    ) -> BodyTerms {
        let a1 = g.zcosg * g.zcosh + g.zsing * g.zcosi * g.zsinh;
        let a3 = -g.zsing * g.zcosh + g.zcosg * g.zcosi * g.zsinh;
        let a7 = -g.zcosg * g.zsinh + g.zsing * g.zcosi * g.zcosh;
        let a8 = g.zsing * g.zsini;
        let a9 = g.zsing * g.zsinh + g.zcosg * g.zcosi * g.zcosh;
        let a10 = g.zcosg * g.zsini;
        let a2 = cosim * a7 + sinim * a8;
        let a4 = cosim * a9 + sinim * a10;
        let a5 = -sinim * a7 + cosim * a8;
        let a6 = -sinim * a9 + cosim * a10;

        let x1 = a1 * cosomm + a2 * sinomm;
        let x2 = a3 * cosomm + a4 * sinomm;
        let x3 = -a1 * sinomm + a2 * cosomm;
        let x4 = -a3 * sinomm + a4 * cosomm;
        let x5 = a5 * sinomm;
        let x6 = a6 * sinomm;
        let x7 = a5 * cosomm;
        let x8 = a6 * cosomm;

        let z31 = 12.0 * x1 * x1 - 3.0 * x3 * x3;
        let z32 = 24.0 * x1 * x2 - 6.0 * x3 * x4;
        let z33 = 12.0 * x2 * x2 - 3.0 * x4 * x4;
        let z1 = 3.0 * (a1 * a1 + a2 * a2) + z31 * emsq;
        let z2 = 6.0 * (a1 * a3 + a2 * a4) + z32 * emsq;
        let z3 = 3.0 * (a3 * a3 + a4 * a4) + z33 * emsq;
        let z11 = -6.0 * a1 * a5 + emsq * (-24.0 * x1 * x7 - 6.0 * x3 * x5);
        let z12 = -6.0 * (a1 * a6 + a3 * a5)
            + emsq * (-24.0 * (x2 * x7 + x1 * x8) - 6.0 * (x3 * x6 + x4 * x5));
        let z13 = -6.0 * a3 * a6 + emsq * (-24.0 * x2 * x8 - 6.0 * x4 * x6);
        let z21 = 6.0 * a2 * a5 + emsq * (24.0 * x1 * x5 - 6.0 * x3 * x7);
        let z22 = 6.0 * (a4 * a5 + a2 * a6)
            + emsq * (24.0 * (x2 * x5 + x1 * x6) - 6.0 * (x4 * x7 + x3 * x8));
        let z23 = 6.0 * a4 * a6 + emsq * (24.0 * x2 * x6 - 6.0 * x4 * x8);
        let z1 = z1 + z1 + betasq * z31;
        let z2 = z2 + z2 + betasq * z32;
        let z3 = z3 + z3 + betasq * z33;

        let s3 = g.cc * xnoi;
        let s2 = -0.5 * s3 / rtemsq;
        let s4 = s3 * rtemsq;
        let s1 = -15.0 * em * s4;
        let s5 = x1 * x3 + x2 * x4;
        let s6 = x2 * x3 + x1 * x4;
        let s7 = x2 * x4 - x1 * x3;

        BodyTerms {
            s1,
            s2,
            s3,
            s4,
            s5,
            s6,
            s7,
            z1,
            z2,
            z3,
            z11,
            z12,
            z13,
            z21,
            z22,
            z23,
            z31,
            z32,
            z33,
        }
    }

    /// Long-period amplitudes for a body whose orbit has eccentricity `ze`.
    fn amplitudes(&self, emsq: f64, ze: f64) -> PeriodicAmplitudes {
        PeriodicAmplitudes {
            e2: 2.0 * self.s1 * self.s6,
            e3: 2.0 * self.s1 * self.s7,
            i2: 2.0 * self.s2 * self.z12,
            i3: 2.0 * self.s2 * (self.z13 - self.z11),
            l2: -2.0 * self.s3 * self.z2,
            l3: -2.0 * self.s3 * (self.z3 - self.z1),
            l4: -2.0 * self.s3 * (-21.0 - 9.0 * emsq) * ze,
            gh2: 2.0 * self.s4 * self.z32,
            gh3: 2.0 * self.s4 * (self.z33 - self.z31),
            gh4: -18.0 * self.s4 * ze,
            h2: -2.0 * self.s2 * self.z22,
            h3: -2.0 * self.s2 * (self.z23 - self.z21),
        }
    }
}

/// Lunar-solar geometry at `tc` minutes past `epoch` for the given elements.
///
/// The sun and the moon go through the same computation; only their orbit
/// orientation and coupling constant differ. The moon's orientation is
/// itself derived from the lunar node at the requested day.
pub fn dscom(
    epoch: f64,
    ep: f64,
    argpp: f64,
    tc: f64,
    inclp: f64,
    nodep: f64,
    np: f64,
) -> DeepSpaceCommon {
    let nm = np;
    let em = ep;
    let snodm = nodep.sin();
    let cnodm = nodep.cos();
    let sinomm = argpp.sin();
    let cosomm = argpp.cos();
    let sinim = inclp.sin();
    let cosim = inclp.cos();
    let emsq = em * em;
    let betasq = 1.0 - emsq;
    let rtemsq = betasq.sqrt();

    let day = epoch + 18_261.5 + tc / 1440.0;
    let xnodce = (4.523_602_0 - 9.242_202_9e-4 * day) % TWOPI;
    let stem = xnodce.sin();
    let ctem = xnodce.cos();
    let zcosil = 0.913_751_64 - 0.035_680_96 * ctem;
    let zsinil = (1.0 - zcosil * zcosil).sqrt();
    let zsinhl = 0.089_683_511 * stem / zsinil;
    let zcoshl = (1.0 - zsinhl * zsinhl).sqrt();
    let gam = 5.835_151_4 + 0.001_944_368_0 * day;
    let zx = 0.397_854_16 * stem / zsinil;
    let zy = zcoshl * ctem + 0.917_448_67 * zsinhl * stem;
    let zx = gam + zx.atan2(zy) - xnodce;
    let zcosgl = zx.cos();
    let zsingl = zx.sin();

    let xnoi = 1.0 / nm;
    let sun = BodyGeometry {
        zcosg: ZCOSGS,
        zsing: ZSINGS,
        zcosi: ZCOSIS,
        zsini: ZSINIS,
        zcosh: cnodm,
        zsinh: snodm,
        cc: C1SS,
    };
    let moon = BodyGeometry {
        zcosg: zcosgl,
        zsing: zsingl,
        zcosi: zcosil,
        zsini: zsinil,
        zcosh: zcoshl * cnodm + zsinhl * snodm,
        zsinh: snodm * zcoshl - cnodm * zsinhl,
        cc: C1L,
    };

    let [solar, lunar] = [sun, moon].map(|body| {
        BodyTerms::compute(&body, cosim, sinim, cosomm, sinomm, em, emsq, betasq, rtemsq, xnoi)
    });

    let zmol = (4.719_967_2 + 0.229_971_50 * day - gam) % TWOPI;
    let zmos = (6.256_583_7 + 0.017_201_977 * day) % TWOPI;

    DeepSpaceCommon {
        snodm,
        cnodm,
        sinim,
        cosim,
        sinomm,
        cosomm,
        day,
        em,
        emsq,
        gam,
        rtemsq,
        nm,
        solar,
        lunar,
        terms: LunarSolarTerms {
            solar: solar.amplitudes(emsq, ZES),
            lunar: lunar.amplitudes(emsq, ZEL),
            zmol,
            zmos,
            baseline: PeriodicOffsets::default(),
        },
    }
}
