// SGP4/SDP4 initialization and propagation.
// The math and flow follow Vallado's 2006 revision of Spacetrack Report #3;
// the deep-space state lives in cohesive records instead of flat scalars.

use chrono::{DateTime, Utc};
use log::debug;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{OpsMode, PropagatorConfig};
use crate::deep_space::{
    dpper, dscom, dsinit, dspace, DeepSpace, MeanState, PerturbedElements, ResonanceEpoch,
};
use crate::elements::MeanElements;
use crate::error::PropagationError;
use crate::gravity::GravConst;
use crate::time::{gstime, gstime_afspc, julian_date, JD_1950_EPOCH, MINUTES_PER_DAY};

pub const DEG2RAD: f64 = PI / 180.0;
pub const TWOPI: f64 = 2.0 * PI;

const X2O3: f64 = 2.0 / 3.0;

/// Stand-in for `1 + cos i` at 180° inclination.
const TEMP4: f64 = 1.5e-12;

/// Orbital period (minutes) at and above which the deep-space method is used.
const DEEP_SPACE_PERIOD: f64 = 225.0;

/// Propagation method, fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    NearEarth,
    DeepSpace,
}

impl Method {
    pub fn as_char(self) -> char {
        match self {
            Method::NearEarth => 'n',
            Method::DeepSpace => 'd',
        }
    }
}

/// TEME position (km) and velocity (km/s).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVector {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

/// Singly-averaged mean elements after the secular and resonance update of
/// the latest call that got that far.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AveragedElements {
    /// Semi-major axis, earth radii.
    pub am: f64,
    pub em: f64,
    pub im: f64,
    /// Right ascension of the ascending node (`Om`).
    pub nodem: f64,
    /// Argument of perigee (`om`).
    pub argpm: f64,
    pub mm: f64,
    /// Mean motion, rad/min.
    pub nm: f64,
}

/// Auxiliary epoch quantities from [`initl`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochQuantities {
    pub no_unkozai: f64,
    pub ainv: f64,
    pub ao: f64,
    pub con41: f64,
    pub con42: f64,
    pub cosio: f64,
    pub cosio2: f64,
    pub eccsq: f64,
    pub omeosq: f64,
    pub posq: f64,
    pub rp: f64,
    pub rteosq: f64,
    pub sinio: f64,
    pub gsto: f64,
}

/// Epoch initialization: auxiliary quantities, the un-Kozai'd mean motion
/// and Greenwich sidereal time at epoch.
///
/// `epoch` is days since 1949 December 31 00:00 UT and `no_kozai` the
/// element-set mean motion in rad/min.
pub fn initl(
    grav: &GravConst,
    ecco: f64,
    epoch: f64,
    inclo: f64,
    no_kozai: f64,
    opsmode: OpsMode,
) -> EpochQuantities {
    let eccsq = ecco * ecco;
    let omeosq = 1.0 - eccsq;
    let rteosq = omeosq.sqrt();
    let cosio = inclo.cos();
    let cosio2 = cosio * cosio;

    // un-kozai the mean motion
    let ak = (grav.xke / no_kozai).powf(X2O3);
    let d1 = 0.75 * grav.j2 * (3.0 * cosio2 - 1.0) / (rteosq * omeosq);
    let del = d1 / (ak * ak);
    let adel = ak * (1.0 - del * del - del * (1.0 / 3.0 + 134.0 * del * del / 81.0));
    let del = d1 / (adel * adel);
    let no_unkozai = no_kozai / (1.0 + del);

    let ao = (grav.xke / no_unkozai).powf(X2O3);
    let sinio = inclo.sin();
    let po = ao * omeosq;
    let con42 = 1.0 - 5.0 * cosio2;
    let con41 = -con42 - cosio2 - cosio2;

    let gsto = match opsmode {
        OpsMode::Afspc => gstime_afspc(epoch),
        OpsMode::Improved => gstime(epoch + JD_1950_EPOCH),
    };

    EpochQuantities {
        no_unkozai,
        ainv: 1.0 / ao,
        ao,
        con41,
        con42,
        cosio,
        cosio2,
        eccsq,
        omeosq,
        posq: po * po,
        rp: ao * (1.0 - ecco),
        rteosq,
        sinio,
        gsto,
    }
}

/// Per-satellite state: element set, gravity constants, the near-earth
/// drag and short-period coefficients, the deep-space record for
/// deep-space orbits and the result of the latest call.
#[derive(Debug, Clone, PartialEq)]
pub struct SatRec {
    pub satnum: String,
    pub config: PropagatorConfig,
    pub grav: GravConst,
    pub method: Method,

    pub epoch: f64,
    pub jdsatepoch: f64,
    pub jdsatepoch_f: f64,

    pub bstar: f64,
    pub ndot: f64,
    pub nddot: f64,
    pub ecco: f64,
    pub argpo: f64,
    pub inclo: f64,
    pub mo: f64,
    pub no_kozai: f64,
    pub no_unkozai: f64,
    pub nodeo: f64,

    /// Semi-major axis at epoch, earth radii.
    pub a: f64,
    /// Apogee altitude at epoch, earth radii.
    pub alta: f64,
    /// Perigee altitude at epoch, earth radii.
    pub altp: f64,
    pub gsto: f64,

    /// Simplified drag: perigee below 220 km, or any deep-space orbit.
    pub isimp: bool,
    pub aycof: f64,
    pub con41: f64,
    pub cc1: f64,
    pub cc4: f64,
    pub cc5: f64,
    pub d2: f64,
    pub d3: f64,
    pub d4: f64,
    pub delmo: f64,
    pub eta: f64,
    pub argpdot: f64,
    pub omgcof: f64,
    pub sinmao: f64,
    pub t2cof: f64,
    pub t3cof: f64,
    pub t4cof: f64,
    pub t5cof: f64,
    pub x1mth2: f64,
    pub x7thm1: f64,
    pub mdot: f64,
    pub nodedot: f64,
    pub xlcof: f64,
    pub xmcof: f64,
    pub nodecf: f64,

    /// Present if and only if `method` is [`Method::DeepSpace`].
    pub deep_space: Option<DeepSpace>,

    /// Minutes since epoch of the latest call.
    pub t: f64,
    pub error: Option<PropagationError>,
    averaged: AveragedElements,
}

impl SatRec {
    /// Build and validate a satellite record (`sgp4init`).
    ///
    /// Chooses near-earth or deep-space from the orbital period, computes
    /// every coefficient the propagator needs and finishes with a
    /// propagation to epoch. An error from that propagation is returned and
    /// the record discarded.
    pub fn new(
        elements: &MeanElements,
        config: PropagatorConfig,
    ) -> Result<SatRec, PropagationError> {
        let grav = config.gravity_model.constants();
        let opsmode = config.opsmode;
        let re = grav.radiusearthkm;

        let ss = 78.0 / re + 1.0;
        let qzms2t = ((120.0 - 78.0) / re).powf(4.0);

        let ecco = elements.ecco;
        let inclo = elements.inclo;
        let argpo = elements.argpo;
        let bstar = elements.bstar;
        let epoch = elements.epoch;

        let eq = initl(&grav, ecco, epoch, inclo, elements.no_kozai, opsmode);
        let no = eq.no_unkozai;
        let ao = eq.ao;

        let mut isimp = eq.rp < 220.0 / re + 1.0;

        // perigees below 156 km use altered s and qoms2t
        let mut sfour = ss;
        let mut qzms24 = qzms2t;
        let perige = (eq.rp - 1.0) * re;
        if perige < 156.0 {
            sfour = perige - 78.0;
            if perige < 98.0 {
                sfour = 20.0;
            }
            qzms24 = ((120.0 - sfour) / re).powf(4.0);
            sfour = sfour / re + 1.0;
        }
        let pinvsq = 1.0 / eq.posq;

        let tsi = 1.0 / (ao - sfour);
        let eta = ao * ecco * tsi;
        let etasq = eta * eta;
        let eeta = ecco * eta;
        let psisq = (1.0 - etasq).abs();
        let coef = qzms24 * tsi.powf(4.0);
        let coef1 = coef / psisq.powf(3.5);
        let cc2 = coef1
            * no
            * (ao * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.375 * grav.j2 * tsi / psisq * eq.con41 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        let cc1 = bstar * cc2;
        let mut cc3 = 0.0;
        if ecco > 1.0e-4 {
            cc3 = -2.0 * coef * tsi * grav.j3oj2 * no * eq.sinio / ecco;
        }
        let x1mth2 = 1.0 - eq.cosio2;
        let cc4 = 2.0
            * no
            * coef1
            * ao
            * eq.omeosq
            * (eta * (2.0 + 0.5 * etasq) + ecco * (0.5 + 2.0 * etasq)
                - grav.j2 * tsi / (ao * psisq)
                    * (-3.0 * eq.con41 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75
                            * x1mth2
                            * (2.0 * etasq - eeta * (1.0 + etasq))
                            * (2.0 * argpo).cos()));
        let cc5 = 2.0 * coef1 * ao * eq.omeosq * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);

        let cosio = eq.cosio;
        let cosio2 = eq.cosio2;
        let cosio4 = cosio2 * cosio2;
        let temp1 = 1.5 * grav.j2 * pinvsq * no;
        let temp2 = 0.5 * temp1 * grav.j2 * pinvsq;
        let temp3 = -0.46875 * grav.j4 * pinvsq * pinvsq * no;
        let mdot = no
            + 0.5 * temp1 * eq.rteosq * eq.con41
            + 0.0625 * temp2 * eq.rteosq * (13.0 - 78.0 * cosio2 + 137.0 * cosio4);
        let argpdot = -0.5 * temp1 * eq.con42
            + 0.0625 * temp2 * (7.0 - 114.0 * cosio2 + 395.0 * cosio4)
            + temp3 * (3.0 - 36.0 * cosio2 + 49.0 * cosio4);
        let xhdot1 = -temp1 * cosio;
        let nodedot = xhdot1
            + (0.5 * temp2 * (4.0 - 19.0 * cosio2) + 2.0 * temp3 * (3.0 - 7.0 * cosio2)) * cosio;
        let xpidot = argpdot + nodedot;
        let omgcof = bstar * cc3 * argpo.cos();
        let mut xmcof = 0.0;
        if ecco > 1.0e-4 {
            xmcof = -X2O3 * coef * bstar / eeta;
        }
        let nodecf = 3.5 * eq.omeosq * xhdot1 * cc1;
        let t2cof = 1.5 * cc1;
        let xlcof = if (cosio + 1.0).abs() > TEMP4 {
            -0.25 * grav.j3oj2 * eq.sinio * (3.0 + 5.0 * cosio) / (1.0 + cosio)
        } else {
            -0.25 * grav.j3oj2 * eq.sinio * (3.0 + 5.0 * cosio) / TEMP4
        };
        let aycof = -0.5 * grav.j3oj2 * eq.sinio;
        let delmo = (1.0 + eta * elements.mo.cos()).powf(3.0);
        let sinmao = elements.mo.sin();
        let x7thm1 = 7.0 * cosio2 - 1.0;

        let mut method = Method::NearEarth;
        let mut deep_space = None;
        let mut el = PerturbedElements {
            ep: ecco,
            inclp: inclo,
            nodep: elements.nodeo,
            argpp: argpo,
            mp: elements.mo,
        };

        if TWOPI / no >= DEEP_SPACE_PERIOD {
            method = Method::DeepSpace;
            isimp = true;
            let tc = 0.0;
            let common = dscom(epoch, ecco, argpo, tc, inclo, elements.nodeo, no);
            dpper(&common.terms, 0.0, true, &mut el, opsmode);

            let mut state = MeanState {
                em: common.em,
                argpm: 0.0,
                inclm: inclo,
                mm: 0.0,
                nodem: 0.0,
                nm: common.nm,
            };
            let resonance_epoch = ResonanceEpoch {
                xke: grav.xke,
                gsto: eq.gsto,
                ecco: el.ep,
                eccsq: eq.eccsq,
                argpo: el.argpp,
                mo: el.mp,
                nodeo: el.nodep,
                no,
                mdot,
                nodedot,
                xpidot,
            };
            deep_space = Some(dsinit(&common, &resonance_epoch, 0.0, tc, &mut state));
        }

        let (mut d2, mut d3, mut d4) = (0.0, 0.0, 0.0);
        let (mut t3cof, mut t4cof, mut t5cof) = (0.0, 0.0, 0.0);
        if !isimp {
            let cc1sq = cc1 * cc1;
            d2 = 4.0 * ao * tsi * cc1sq;
            let temp = d2 * tsi * cc1 / 3.0;
            d3 = (17.0 * ao + sfour) * temp;
            d4 = 0.5 * temp * ao * tsi * (221.0 * ao + 31.0 * sfour) * cc1;
            t3cof = d2 + 2.0 * cc1sq;
            t4cof = 0.25 * (3.0 * d3 + cc1 * (12.0 * d2 + 10.0 * cc1sq));
            t5cof = 0.2
                * (3.0 * d4 + 12.0 * cc1 * d3 + 6.0 * d2 * d2 + 15.0 * cc1sq * (2.0 * d2 + cc1sq));
        }

        let (jdsatepoch, jdsatepoch_f) = split_epoch(epoch);
        let a = (no * grav.tumin).powf(-X2O3);

        let mut rec = SatRec {
            satnum: elements.satnum.clone(),
            config,
            grav,
            method,
            epoch,
            jdsatepoch,
            jdsatepoch_f,
            bstar,
            ndot: elements.ndot,
            nddot: elements.nddot,
            ecco: el.ep,
            argpo: el.argpp,
            inclo: el.inclp,
            mo: el.mp,
            no_kozai: elements.no_kozai,
            no_unkozai: no,
            nodeo: el.nodep,
            a,
            alta: a * (1.0 + ecco) - 1.0,
            altp: a * (1.0 - ecco) - 1.0,
            gsto: eq.gsto,
            isimp,
            aycof,
            con41: eq.con41,
            cc1,
            cc4,
            cc5,
            d2,
            d3,
            d4,
            delmo,
            eta,
            argpdot,
            omgcof,
            sinmao,
            t2cof,
            t3cof,
            t4cof,
            t5cof,
            x1mth2,
            x7thm1,
            mdot,
            nodedot,
            xlcof,
            xmcof,
            nodecf,
            deep_space,
            t: 0.0,
            error: None,
            averaged: AveragedElements::default(),
        };

        debug!(
            "satellite {}: {:?} method, {} / {}, period {:.3} min, resonance {}",
            rec.satnum,
            rec.method,
            rec.config.gravity_model,
            rec.config.opsmode,
            TWOPI / no,
            rec.deep_space.as_ref().map_or(0, |ds| ds.resonance.kind.irez()),
        );

        rec.propagate(0.0)?;
        Ok(rec)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// `0` after a successful call, otherwise the numeric code of the
    /// latest call's error.
    pub fn error_code(&self) -> i32 {
        self.error.map_or(0, |e| e.code())
    }

    pub fn averaged(&self) -> AveragedElements {
        self.averaged
    }

    /// Propagate to `tsince` minutes from epoch.
    ///
    /// Deep-space records carry resonance integrator state from one call to
    /// the next, so calls on a record must be made one at a time.
    pub fn propagate(&mut self, tsince: f64) -> Result<StateVector, PropagationError> {
        let result = self.sgp4(tsince);
        self.error = result.err();
        if let Err(e) = result {
            debug!("satellite {} at t = {} min: {}", self.satnum, tsince, e);
        }
        result
    }

    /// Propagate to the split Julian date `jd + fr`.
    pub fn propagate_jd(&mut self, jd: f64, fr: f64) -> Result<StateVector, PropagationError> {
        let tsince =
            (jd - self.jdsatepoch) * MINUTES_PER_DAY + (fr - self.jdsatepoch_f) * MINUTES_PER_DAY;
        self.propagate(tsince)
    }

    pub fn propagate_datetime(
        &mut self,
        when: &DateTime<Utc>,
    ) -> Result<StateVector, PropagationError> {
        let (jd, fr) = julian_date(when);
        self.propagate_jd(jd, fr)
    }

    /// Propagate to each time in turn, in the order given.
    pub fn propagate_many(&mut self, tsince: &[f64]) -> Vec<Result<StateVector, PropagationError>> {
        tsince.iter().map(|&t| self.propagate(t)).collect()
    }

    fn sgp4(&mut self, tsince: f64) -> Result<StateVector, PropagationError> {
        let grav = self.grav;
        let vkmpersec = grav.vkmpersec();
        let t = tsince;
        self.t = t;

        // secular gravity and atmospheric drag
        let xmdf = self.mo + self.mdot * t;
        let argpdf = self.argpo + self.argpdot * t;
        let nodedf = self.nodeo + self.nodedot * t;
        let mut argpm = argpdf;
        let mut mm = xmdf;
        let t2 = t * t;
        let mut nodem = nodedf + self.nodecf * t2;
        let mut tempa = 1.0 - self.cc1 * t;
        let mut tempe = self.bstar * self.cc4 * t;
        let mut templ = self.t2cof * t2;

        if !self.isimp {
            let delomg = self.omgcof * t;
            let delm = self.xmcof * ((1.0 + self.eta * xmdf.cos()).powf(3.0) - self.delmo);
            let temp = delomg + delm;
            mm = xmdf + temp;
            argpm = argpdf - temp;
            let t3 = t2 * t;
            let t4 = t3 * t;
            tempa = tempa - self.d2 * t2 - self.d3 * t3 - self.d4 * t4;
            tempe += self.bstar * self.cc5 * (mm.sin() - self.sinmao);
            templ = templ + self.t3cof * t3 + t4 * (self.t4cof + t * self.t5cof);
        }

        let mut nm = self.no_unkozai;
        let mut em = self.ecco;
        let mut inclm = self.inclo;

        if let Some(ds) = self.deep_space.as_mut() {
            let mut state = MeanState {
                em,
                argpm,
                inclm,
                mm,
                nodem,
                nm,
            };
            dspace(ds, self.argpo, self.argpdot, t, self.gsto, self.no_unkozai, &mut state);
            em = state.em;
            argpm = state.argpm;
            inclm = state.inclm;
            mm = state.mm;
            nodem = state.nodem;
            nm = state.nm;
        }

        if nm <= 0.0 {
            return Err(PropagationError::NegativeMeanMotion(nm));
        }

        let am = (grav.xke / nm).powf(X2O3) * tempa * tempa;
        nm = grav.xke / am.powf(1.5);
        em -= tempe;

        if !(-0.001..1.0).contains(&em) {
            return Err(PropagationError::MeanEccentricity(em));
        }
        if em < 1.0e-6 {
            em = 1.0e-6;
        }
        mm += self.no_unkozai * templ;
        let xlm = mm + argpm + nodem;
        nodem %= TWOPI;
        argpm %= TWOPI;
        let xlm = xlm % TWOPI;
        mm = (xlm - argpm - nodem) % TWOPI;

        self.averaged = AveragedElements {
            am,
            em,
            im: inclm,
            nodem,
            argpm,
            mm,
            nm,
        };

        let sinim = inclm.sin();
        let cosim = inclm.cos();

        // lunar-solar periodics
        let mut el = PerturbedElements {
            ep: em,
            inclp: inclm,
            nodep: nodem,
            argpp: argpm,
            mp: mm,
        };
        let mut sinip = sinim;
        let mut cosip = cosim;
        let mut aycof = self.aycof;
        let mut xlcof = self.xlcof;
        let mut con41 = self.con41;
        let mut x1mth2 = self.x1mth2;
        let mut x7thm1 = self.x7thm1;

        if let Some(ds) = &self.deep_space {
            dpper(&ds.periodics, t, false, &mut el, self.config.opsmode);
            if el.inclp < 0.0 {
                el.inclp = -el.inclp;
                el.nodep += PI;
                el.argpp -= PI;
            }
            if el.ep < 0.0 || el.ep > 1.0 {
                return Err(PropagationError::PerturbedEccentricity(el.ep));
            }

            // long period coefficients follow the perturbed inclination
            sinip = el.inclp.sin();
            cosip = el.inclp.cos();
            aycof = -0.5 * grav.j3oj2 * sinip;
            xlcof = if (cosip + 1.0).abs() > TEMP4 {
                -0.25 * grav.j3oj2 * sinip * (3.0 + 5.0 * cosip) / (1.0 + cosip)
            } else {
                -0.25 * grav.j3oj2 * sinip * (3.0 + 5.0 * cosip) / TEMP4
            };
            let cosisq = cosip * cosip;
            con41 = 3.0 * cosisq - 1.0;
            x1mth2 = 1.0 - cosisq;
            x7thm1 = 7.0 * cosisq - 1.0;
        }

        let PerturbedElements {
            ep,
            inclp: xincp,
            nodep,
            argpp,
            mp,
        } = el;

        let axnl = ep * argpp.cos();
        let temp = 1.0 / (am * (1.0 - ep * ep));
        let aynl = ep * argpp.sin() + temp * aycof;
        let xl = mp + argpp + nodep + temp * xlcof * axnl;

        // kepler's equation
        let u = (xl - nodep) % TWOPI;
        let mut eo1 = u;
        let mut tem5 = 9999.9_f64;
        let mut ktr = 1;
        let mut sineo1 = 0.0;
        let mut coseo1 = 0.0;
        while tem5.abs() >= 1.0e-12 && ktr <= 10 {
            sineo1 = eo1.sin();
            coseo1 = eo1.cos();
            tem5 = 1.0 - coseo1 * axnl - sineo1 * aynl;
            tem5 = (u - aynl * coseo1 + axnl * sineo1 - eo1) / tem5;
            if tem5.abs() >= 0.95 {
                tem5 = if tem5 > 0.0 { 0.95 } else { -0.95 };
            }
            eo1 += tem5;
            ktr += 1;
        }

        // short period preliminary quantities
        let ecose = axnl * coseo1 + aynl * sineo1;
        let esine = axnl * sineo1 - aynl * coseo1;
        let el2 = axnl * axnl + aynl * aynl;
        let pl = am * (1.0 - el2);
        if pl < 0.0 {
            return Err(PropagationError::NegativeSemiLatusRectum(pl));
        }

        let rl = am * (1.0 - ecose);
        let rdotl = am.sqrt() * esine / rl;
        let rvdotl = pl.sqrt() / rl;
        let betal = (1.0 - el2).sqrt();
        let temp = esine / (1.0 + betal);
        let sinu = am / rl * (sineo1 - aynl - axnl * temp);
        let cosu = am / rl * (coseo1 - axnl + aynl * temp);
        let mut su = sinu.atan2(cosu);
        let sin2u = (cosu + cosu) * sinu;
        let cos2u = 1.0 - 2.0 * sinu * sinu;
        let temp = 1.0 / pl;
        let temp1 = 0.5 * grav.j2 * temp;
        let temp2 = temp1 * temp;

        let mrt = rl * (1.0 - 1.5 * temp2 * betal * con41) + 0.5 * temp1 * x1mth2 * cos2u;
        su -= 0.25 * temp2 * x7thm1 * sin2u;
        let xnode = nodep + 1.5 * temp2 * cosip * sin2u;
        let xinc = xincp + 1.5 * temp2 * cosip * sinip * cos2u;
        let mvt = rdotl - nm * temp1 * x1mth2 * sin2u / grav.xke;
        let rvdot = rvdotl + nm * temp1 * (x1mth2 * cos2u + 1.5 * con41) / grav.xke;

        // orientation vectors
        let sinsu = su.sin();
        let cossu = su.cos();
        let snod = xnode.sin();
        let cnod = xnode.cos();
        let sini = xinc.sin();
        let cosi = xinc.cos();
        let xmx = -snod * cosi;
        let xmy = cnod * cosi;
        let ux = xmx * sinsu + cnod * cossu;
        let uy = xmy * sinsu + snod * cossu;
        let uz = sini * sinsu;
        let vx = xmx * cossu - cnod * sinsu;
        let vy = xmy * cossu - snod * sinsu;
        let vz = sini * cossu;

        if mrt < 1.0 {
            return Err(PropagationError::Decayed(mrt));
        }

        let re = grav.radiusearthkm;
        Ok(StateVector {
            position: [(mrt * ux) * re, (mrt * uy) * re, (mrt * uz) * re],
            velocity: [
                (mvt * ux + rvdot * vx) * vkmpersec,
                (mvt * uy + rvdot * vy) * vkmpersec,
                (mvt * uz + rvdot * vz) * vkmpersec,
            ],
        })
    }
}

/// Split an SGP4 epoch into `(jd, fraction)`. An epoch given to 8 decimals,
/// as element sets print it, has its fraction rounded back to 8 decimals.
fn split_epoch(epoch: f64) -> (f64, f64) {
    let whole = epoch.floor();
    let mut fraction = epoch - whole;
    if (epoch * 1.0e8).round() / 1.0e8 == epoch {
        fraction = (fraction * 1.0e8).round() / 1.0e8;
    }
    (whole + JD_1950_EPOCH, fraction)
}
