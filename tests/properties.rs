use chrono::{TimeZone, Utc};

use sgp4_core::deep_space::Resonance;
use sgp4_core::{
    GravityModel, MeanElements, Method, OpsMode, PropagationError, PropagatorConfig, SatRec,
};

fn vanguard() -> MeanElements {
    MeanElements::from_tle_units(
        "00005", 2000, 179.78495062, 2.8098e-5, 2.3e-7, 0.0, 0.1859667, 331.7664, 34.2682,
        19.3264, 10.82419157, 348.7242,
    )
}

// near-geostationary, one-day resonance
fn geo() -> MeanElements {
    MeanElements::from_tle_units(
        "28626", 2006, 176.46683397, 1.0e-4, -2.05e-6, 0.0, 0.0003034, 31.5817, 0.0019,
        200.1396, 1.00272009, 286.9433,
    )
}

fn molniya() -> MeanElements {
    MeanElements::from_tle_units(
        "08195", 2006, 176.33215444, 1.1873e-4, 8.2e-7, 0.0, 0.6877146, 264.7651, 64.1586,
        20.2257, 2.00491383, 279.0717,
    )
}

fn finite(sv: &sgp4_core::StateVector) -> bool {
    sv.position.iter().chain(sv.velocity.iter()).all(|x| x.is_finite())
}

#[test]
fn zero_time_succeeds_after_init() {
    for el in [vanguard(), geo(), molniya()] {
        for model in GravityModel::ALL {
            for opsmode in [OpsMode::Afspc, OpsMode::Improved] {
                let mut sat = SatRec::new(&el, PropagatorConfig::new(model, opsmode)).unwrap();
                assert!(sat.propagate(0.0).is_ok(), "{} {model} {opsmode}", el.satnum);
                assert_eq!(sat.error_code(), 0);
            }
        }
    }
}

#[test]
fn geo_is_synchronous_deep_space() {
    let sat = SatRec::new(&geo(), PropagatorConfig::default()).unwrap();
    assert_eq!(sat.method(), Method::DeepSpace);
    assert!(sat.isimp);
    let ds = sat.deep_space.as_ref().unwrap();
    assert_eq!(ds.resonance.kind, Resonance::Synchronous);
    assert_eq!(ds.integrator.atime, 0.0);
}

#[test]
fn continuation_matches_direct_call() {
    for el in [geo(), molniya()] {
        let fresh = SatRec::new(&el, PropagatorConfig::default()).unwrap();

        let mut stepped = fresh.clone();
        for t in [1_000.0, 4_321.0, 9_000.0] {
            stepped.propagate(t).unwrap();
        }
        let via_steps = stepped.propagate(20_000.0).unwrap();

        let mut direct = fresh.clone();
        let in_one = direct.propagate(20_000.0).unwrap();

        assert_eq!(via_steps, in_one, "{}", el.satnum);
        assert_eq!(stepped.deep_space, direct.deep_space);
    }
}

#[test]
fn backward_continuation_matches_direct_call() {
    let fresh = SatRec::new(&molniya(), PropagatorConfig::default()).unwrap();
    let mut stepped = fresh.clone();
    for t in [-500.0, -2_000.0, -7_777.0] {
        stepped.propagate(t).unwrap();
    }
    let mut direct = fresh.clone();
    assert_eq!(stepped.propagate(-9_000.0), direct.propagate(-9_000.0));
}

#[test]
fn repeated_call_is_idempotent() {
    let mut sat = SatRec::new(&geo(), PropagatorConfig::default()).unwrap();
    let first = sat.propagate(5_000.0).unwrap();
    let second = sat.propagate(5_000.0).unwrap();
    assert_eq!(first, second);

    // going back toward epoch restarts the integrator and lands on the same answer
    let mut other = SatRec::new(&geo(), PropagatorConfig::default()).unwrap();
    let expected = other.propagate(100.0).unwrap();
    assert_eq!(sat.propagate(100.0).unwrap(), expected);
}

#[test]
fn propagate_many_is_sequential() {
    let times = [0.0, 720.0, 1_440.0, -360.0, 2_880.0];
    let mut batch = SatRec::new(&molniya(), PropagatorConfig::default()).unwrap();
    let mut one_by_one = batch.clone();

    let results = batch.propagate_many(&times);
    assert_eq!(results.len(), times.len());
    for (t, got) in times.iter().zip(results) {
        assert_eq!(got, one_by_one.propagate(*t));
    }
}

#[test]
fn eccentricity_lower_bound() {
    let mut el = vanguard();
    el.ecco = -0.001;
    assert!(SatRec::new(&el, PropagatorConfig::default()).is_ok());

    el.ecco = -0.0011;
    let err = SatRec::new(&el, PropagatorConfig::default()).unwrap_err();
    assert!(matches!(err, PropagationError::MeanEccentricity(_)));
    assert_eq!(err.code(), 1);
}

#[test]
fn decay_is_reported_at_first_subsurface_radius() {
    // 16 rev/day, e = 0.05: perigee lies below the surface, epoch at apogee
    let el = MeanElements::from_tle_units(
        "99001", 2020, 100.0, 0.0, 0.0, 0.0, 0.05, 0.0, 51.6, 180.0, 16.0, 0.0,
    );
    let mut sat = SatRec::new(&el, PropagatorConfig::default()).unwrap();

    let mut first_failure = None;
    for minute in 0..200 {
        let t = minute as f64;
        match sat.propagate(t) {
            Ok(sv) => assert!(finite(&sv)),
            Err(e) => {
                first_failure = Some((t, e));
                break;
            }
        }
    }
    let (t, err) = first_failure.expect("orbit never decayed");
    assert!(t > 20.0 && t < 60.0, "decayed at {t}");
    assert!(matches!(err, PropagationError::Decayed(r) if r < 1.0));
    assert_eq!(sat.error_code(), 6);
}

#[test]
fn retrograde_equatorial_is_finite() {
    let mut el = vanguard();
    el.inclo = std::f64::consts::PI;
    let mut sat = SatRec::new(&el, PropagatorConfig::default()).unwrap();
    for t in [0.0, 100.0, 500.0, 1_440.0] {
        assert!(finite(&sat.propagate(t).unwrap()));
    }

    el.inclo = 179.9999_f64.to_radians();
    let mut sat = SatRec::new(&el, PropagatorConfig::default()).unwrap();
    assert!(finite(&sat.propagate(100.0).unwrap()));

    let mut el = geo();
    el.inclo = std::f64::consts::PI;
    for opsmode in [OpsMode::Afspc, OpsMode::Improved] {
        let config = PropagatorConfig::new(GravityModel::Wgs72, opsmode);
        let mut sat = SatRec::new(&el, config).unwrap();
        assert!(finite(&sat.propagate(3_000.0).unwrap()));
    }
}

#[test]
fn opsmode_changes_resonant_geometry() {
    let mut afspc =
        SatRec::new(&geo(), PropagatorConfig::new(GravityModel::Wgs72, OpsMode::Afspc)).unwrap();
    let mut improved = SatRec::new(&geo(), PropagatorConfig::default()).unwrap();
    assert_ne!(afspc.gsto, improved.gsto);
    assert!((afspc.gsto - improved.gsto).abs() < 1.0e-6);
    let a = afspc.propagate(1_440.0).unwrap();
    let b = improved.propagate(1_440.0).unwrap();
    for i in 0..3 {
        assert!((a.position[i] - b.position[i]).abs() < 1.0);
    }
}

#[test]
fn datetime_propagation_matches_minutes() {
    let mut by_date = SatRec::new(&vanguard(), PropagatorConfig::default()).unwrap();
    let mut by_minutes = by_date.clone();
    // epoch 2000-06-27 18:50:19.733568 UTC, plus 12 hours
    let when = Utc.with_ymd_and_hms(2000, 6, 28, 6, 50, 19).unwrap()
        + chrono::Duration::microseconds(733_568);
    let a = by_date.propagate_datetime(&when).unwrap();
    let b = by_minutes.propagate(720.0).unwrap();
    for i in 0..3 {
        assert!((a.position[i] - b.position[i]).abs() < 1.0e-3, "{a:?} {b:?}");
    }
}
