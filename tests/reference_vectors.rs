// Reference state vectors from the Spacetrack Report #3 and Vallado test sets.

use sgp4_core::{GravityModel, MeanElements, Method, OpsMode, PropagatorConfig, SatRec};

fn approx(expected: f64, got: f64, eps: f64) {
    let diff = (expected - got).abs();
    assert!(diff <= eps, "expected {expected}, got {got} (|Δ| = {diff}, eps = {eps})");
}

fn check(sat: &mut SatRec, t: f64, r: [f64; 3], v: [f64; 3], r_eps: f64, v_eps: f64) {
    let sv = sat
        .propagate(t)
        .unwrap_or_else(|e| panic!("t = {t}: {e}"));
    for i in 0..3 {
        approx(r[i], sv.position[i], r_eps);
        approx(v[i], sv.velocity[i], v_eps);
    }
}

// 1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753
// 2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667
fn vanguard() -> MeanElements {
    MeanElements::from_tle_units(
        "00005", 2000, 179.78495062, 2.8098e-5, 2.3e-7, 0.0, 0.1859667, 331.7664, 34.2682,
        19.3264, 10.82419157, 348.7242,
    )
}

// 1 11801U          80230.29629788  .01431103  00000-0  14311-1       13
// 2 11801  46.7916 230.4354 7318036  47.4722  10.4117  2.28537848    13
fn str3_11801() -> MeanElements {
    MeanElements::from_tle_units(
        "11801", 1980, 230.29629788, 1.4311e-2, 1.431103e-2, 0.0, 0.7318036, 47.4722, 46.7916,
        10.4117, 2.28537848, 230.4354,
    )
}

// near-geostationary, 24-hour resonance
fn geo() -> MeanElements {
    MeanElements::from_tle_units(
        "28626", 2006, 176.46683397, 1.0e-4, -2.05e-6, 0.0, 0.0003034, 31.5817, 0.0019,
        200.1396, 1.00272009, 286.9433,
    )
}

// Molniya 3-19: twelve-hour resonance
fn molniya() -> MeanElements {
    MeanElements::from_tle_units(
        "08195", 2006, 176.33215444, 1.1873e-4, 8.2e-7, 0.0, 0.6877146, 264.7651, 64.1586,
        20.2257, 2.00491383, 279.0717,
    )
}

#[test]
fn vanguard_wgs72() {
    let mut sat = SatRec::new(&vanguard(), PropagatorConfig::default()).unwrap();
    assert_eq!(sat.method(), Method::NearEarth);

    check(
        &mut sat,
        0.0,
        [7022.46529266, -1400.08296755, 0.03995155],
        [1.893841015, 6.405893759, 4.534807250],
        1.0e-6,
        1.0e-8,
    );
    check(
        &mut sat,
        360.0,
        [-7154.03120202, -3783.17682504, -3536.19412294],
        [4.741887409, -4.151817765, -2.093935425],
        1.0e-6,
        1.0e-8,
    );
    check(
        &mut sat,
        720.0,
        [-7134.59340119, 6531.68641334, 3260.27186483],
        [-4.113793027, -2.911922039, -2.557327851],
        1.0e-6,
        1.0e-8,
    );
    check(
        &mut sat,
        1440.0,
        [-938.55923943, -6268.18748831, -4294.02924751],
        [7.536105209, -0.427127707, 0.989878080],
        1.0e-6,
        1.0e-8,
    );
}

#[test]
fn vanguard_under_each_gravity_model() {
    let t = 309.67110720001529;
    let expected = [
        (GravityModel::Wgs72Old, [-3754.251473242793, 7876.346815095482, 4719.220855042922]),
        (GravityModel::Wgs72, [-3754.2514743216166, 7876.346817439062, 4719.220856478582]),
        (GravityModel::Wgs84, [-3754.2437675772426, 7876.3549956188945, 4719.227897029576]),
    ];
    for (model, r) in expected {
        let config = PropagatorConfig::new(model, OpsMode::Improved);
        let mut sat = SatRec::new(&vanguard(), config).unwrap();
        let sv = sat.propagate(t).unwrap();
        for i in 0..3 {
            approx(r[i], sv.position[i], 1.0e-6);
        }
    }
}

#[test]
fn str3_near_earth_afspc() {
    // 88888 from Spacetrack Report #3, double-precision values
    let el = MeanElements::from_tle_units(
        "88888", 1980, 275.98708465, 6.6816e-5, 7.3e-4, 0.0, 0.0086731, 52.6988, 72.8435,
        110.5714, 16.05824518, 115.9689,
    );
    let config = PropagatorConfig::new(GravityModel::Wgs72, OpsMode::Afspc);
    let mut sat = SatRec::new(&el, config).unwrap();
    assert_eq!(sat.method(), Method::NearEarth);

    let expected = [
        (
            0.0,
            [2328.96975262, -5995.22051338, 1719.97297192],
            [2.912073281, -0.983417956, -7.090816210],
        ),
        (
            360.0,
            [2456.10706533, -6071.93855503, 1222.89768554],
            [2.679390040, -0.448290811, -7.228792155],
        ),
        (
            720.0,
            [2567.56229695, -6112.50383922, 713.96374435],
            [2.440245751, 0.098109002, -7.319959258],
        ),
        (
            1080.0,
            [2663.08964352, -6115.48290885, 196.40072866],
            [2.196121564, 0.652415093, -7.362824152],
        ),
        (
            1440.0,
            [2742.55398832, -6079.67009123, -326.39012649],
            [1.948497651, 1.211072678, -7.356193131],
        ),
    ];
    for (t, r, v) in expected {
        check(&mut sat, t, r, v, 1.0e-6, 1.0e-8);
    }
}

#[test]
fn str3_deep_space_vectors() {
    let config = PropagatorConfig::new(GravityModel::Wgs72, OpsMode::Afspc);
    let mut sat = SatRec::new(&str3_11801(), config).unwrap();
    assert_eq!(sat.method(), Method::DeepSpace);
    let ds = sat.deep_space.as_ref().unwrap();
    assert_eq!(ds.resonance.kind.irez(), 0);

    check(
        &mut sat,
        0.0,
        [7473.37102491, 428.94748312, 5828.74846783],
        [5.10715539, 6.44468030, -0.18613330],
        1.0e-5,
        1.0e-7,
    );
    check(
        &mut sat,
        720.0,
        [14271.29083858, 24110.44309009, -4725.76320143],
        [-0.32050453, 2.67984154, -2.08405435],
        1.0e-5,
        1.0e-7,
    );
    check(
        &mut sat,
        1440.0,
        [9787.87836256, 33753.32249667, -15030.79874625],
        [-1.09425155, 0.92358991, -1.52231101],
        1.0e-5,
        1.0e-7,
    );
}

#[test]
fn molniya_half_day_resonance() {
    let mut sat = SatRec::new(&molniya(), PropagatorConfig::default()).unwrap();
    assert_eq!(sat.method(), Method::DeepSpace);
    assert_eq!(sat.deep_space.as_ref().unwrap().resonance.kind.irez(), 2);

    check(
        &mut sat,
        0.0,
        [2349.89483350, -14785.93811562, 0.02119379],
        [2.72148810, -3.25681165, 4.49841667],
        1.0e-5,
        1.0e-7,
    );
    check(
        &mut sat,
        720.0,
        [2622.13222207, -15125.15464924, 474.51048398],
        [2.68828720, -3.07842666, 4.49497953],
        1.0e-5,
        1.0e-7,
    );
    check(
        &mut sat,
        2880.0,
        [3417.20931586, -16038.79510665, 1894.74934058],
        [2.58551586, -2.59681815, 4.45688256],
        1.0e-5,
        1.0e-7,
    );
    check(
        &mut sat,
        -1440.0,
        [1795.04933268, -14049.70061318, -947.43454031],
        [2.78463718, -3.64392732, 4.48640551],
        1.0e-5,
        1.0e-7,
    );
}

#[test]
fn geo_synchronous_resonance_over_days() {
    let mut sat = SatRec::new(&geo(), PropagatorConfig::default()).unwrap();
    assert_eq!(sat.method(), Method::DeepSpace);
    assert_eq!(sat.deep_space.as_ref().unwrap().resonance.kind.irez(), 1);

    // vectors from a separate double-precision SGP4 run; each day is two
    // integrator steps past the last
    let expected = [
        (
            0.0,
            [-39285.67297963, 15344.79694559, 1.05219642],
            [-1.118042777, -2.863303269, -0.000435665],
        ),
        (
            1440.0,
            [-39544.28568723, 14665.30312286, 0.93893896],
            [-1.068507809, -2.882160063, -0.000166587],
        ),
        (
            2880.0,
            [-39790.92395250, 13982.07782903, -0.57972216],
            [-1.018700882, -2.900144078, 0.000058798],
        ),
        (
            4320.0,
            [-40025.51258147, 13295.43626740, -3.08616692],
            [-0.968645004, -2.917249947, 0.000199762],
        ),
        (
            5760.0,
            [-40248.01597190, 12605.60466153, -5.83393781],
            [-0.918356643, -2.933475182, 0.000256099],
        ),
        (
            -1440.0,
            [-39015.20594952, 16020.16327626, -0.04950201],
            [-1.167276855, -2.843582376, -0.000696225],
        ),
    ];
    for (t, r, v) in expected {
        check(&mut sat, t, r, v, 1.0e-5, 1.0e-7);
        let sv = sat.propagate(t).unwrap();
        let radius = sv.position.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((radius - 42_164.0).abs() < 30.0, "t = {t}: r = {radius}");
    }
}

#[test]
fn nan_time_is_rejected_on_resonant_record() {
    let mut sat = SatRec::new(&geo(), PropagatorConfig::default()).unwrap();
    let err = sat.propagate(f64::NAN).unwrap_err();
    assert_eq!(err.code(), 1);
    assert_eq!(sat.error_code(), 1);

    // the record stays usable afterwards
    let mut fresh = SatRec::new(&geo(), PropagatorConfig::default()).unwrap();
    assert_eq!(sat.propagate(1440.0), fresh.propagate(1440.0));
    assert_eq!(sat.error_code(), 0);
}
