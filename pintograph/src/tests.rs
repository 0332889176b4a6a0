use crate::*;
use approx::assert_abs_diff_eq;
use std::time::{Duration, Instant};

#[test]
fn end_to_end_first_intersection() {
    // d1=10, r1=r2=2, l1=l2=6 at t=0: A=(2,0), B=(12,0), so d=10, a=5,
    // h=sqrt(11) and the positive branch gives H=(7, -sqrt(11))
    let mech = PintoConfig::example().validated().unwrap();
    let pos = mech.pos(0.).unwrap();
    assert_abs_diff_eq!(pos.a[0], 2., epsilon = 1e-9);
    assert_abs_diff_eq!(pos.a[1], 0., epsilon = 1e-9);
    assert_abs_diff_eq!(pos.b[0], 12., epsilon = 1e-9);
    assert_abs_diff_eq!(pos.b[1], 0., epsilon = 1e-9);
    assert_abs_diff_eq!(pos.h[0], 7., epsilon = 1e-9);
    assert_abs_diff_eq!(pos.h[1], -11f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn symmetric_followers_put_h_on_the_bisector() {
    let mech = PintoConfig::example().validated().unwrap();
    // equal speeds and radii keep A and B mirrored about their midpoint
    for t in [0., 0.125, 0.3, 0.72] {
        let pos = mech.pos(t).unwrap();
        let mid = (pos.a[0] + pos.b[0]) * 0.5;
        assert_abs_diff_eq!(pos.h[0], mid, epsilon = 1e-9);
    }
}

#[test]
fn evaluation_is_deterministic() {
    let mech = PintoConfig::example().validated().unwrap();
    assert_eq!(mech.pos(0.37).unwrap(), mech.pos(0.37).unwrap());
    assert_eq!(mech.frame(1.61).unwrap(), mech.frame(1.61).unwrap());
}

#[test]
fn frame_geometry_shape() {
    let mech = PintoConfig::example().validated().unwrap();
    let frame = mech.frame(0.).unwrap();
    assert_eq!(frame.disks[1].center, [10., 0.]);
    assert_eq!(frame.disks[2].center, [5., -5.]);
    let LinkagePos { a, c, d, e, .. } = frame.pos;
    assert_eq!(frame.rods[0], Rod { start: a, end: c });
    assert_eq!(frame.rods[5], Rod { start: d, end: e });
}

#[test]
fn rod_ratio_extrapolation() {
    // C-H must extend A-H by l4/l1 of its length, same for D and P
    let mech = PintoConfig::example().validated().unwrap();
    let pos = mech.pos(0.4).unwrap();
    let [l1, _, _, l4, l5, _, l7] = mech.l;
    let ha = point::distance(pos.a, pos.h);
    let hc = point::distance(pos.h, pos.c);
    assert_abs_diff_eq!(hc, ha * l4 / l1, epsilon = 1e-9);
    let ce = point::distance(pos.c, pos.e);
    let ep = point::distance(pos.e, pos.p);
    assert_abs_diff_eq!(ep, ce * l7 / l5, epsilon = 1e-9);
}

#[test]
fn wrong_list_length_is_a_config_error() {
    let mut cfg = PintoConfig::example();
    cfg.radii.pop();
    let err = cfg.validated().unwrap_err();
    assert_eq!(err, ConfigError::Len { list: "radii", expect: 3, got: 2 });
}

#[test]
fn zero_divisor_rod_is_a_config_error() {
    let mut cfg = PintoConfig::example();
    cfg.lengths[4] = 0.;
    assert_eq!(cfg.validated().unwrap_err(), ConfigError::ZeroRod(5));
}

#[test]
fn unreachable_rods_are_degenerate() {
    let mut cfg = PintoConfig::example();
    // two 1-unit rods cannot span ~10 units of follower separation
    cfg.lengths[0] = 1.;
    cfg.lengths[1] = 1.;
    match Engine::evaluate_at(&cfg, 0.) {
        Err(PintoError::Degenerate(e)) => assert_eq!(e.stage, Stage::Elbow),
        r => panic!("expected a degenerate linkage, got {r:?}"),
    }
}

#[test]
fn curve_skips_degenerate_samples() {
    let mech = PintoConfig::example().validated().unwrap();
    let curve = mech.curve(1., 360);
    assert_eq!(curve.len(), 360);
    // counter-rotating disks separate A and B beyond l1+l2 at some angles
    let mut cfg = PintoConfig::example();
    cfg.directions[1] = true;
    cfg.lengths[0] = 5.2;
    cfg.lengths[1] = 5.2;
    let partial = cfg.validated().unwrap().curve(1., 360);
    assert!(!partial.is_empty());
    assert!(partial.len() < 360);
}

#[test]
fn tick_accumulates_then_freezes() {
    let cfg = PintoConfig::example();
    let mech = cfg.validated().unwrap();
    let mut engine = Engine::default();
    let base = Instant::now();
    let mut sig = Signals { start: true, reset: true, runtime: 0.3 };
    let r0 = engine.tick(&cfg, sig, base).unwrap();
    assert_eq!(engine.state(), ClockState::Running);
    assert_eq!(r0.time, 0.);
    assert_eq!(r0.path.len(), 1);
    sig.reset = false;
    let r1 = engine.tick(&cfg, sig, base + Duration::from_millis(250)).unwrap();
    assert_eq!(r1.time, 0.25);
    assert_eq!(r1.path.len(), 2);
    // the pen disk is not spinning, so the rendered path is the raw pen track
    let p = mech.pos(0.25).unwrap().p;
    assert_abs_diff_eq!(r1.path[1][0], p[0], epsilon = 1e-9);
    assert_abs_diff_eq!(r1.path[1][1], p[1], epsilon = 1e-9);
    // past the run window the snapshot freezes
    let r2 = engine.tick(&cfg, sig, base + Duration::from_millis(400)).unwrap();
    assert_eq!(engine.state(), ClockState::Stopped);
    assert_eq!(r2.time, 0.);
    assert_eq!(r2.path.len(), 2);
    assert_eq!(r2.frame, r1.frame);
    // a bare start signal cannot reopen it
    let r3 = engine.tick(&cfg, sig, base + Duration::from_millis(500)).unwrap();
    assert_eq!(r3.time, 0.);
    assert_eq!(r3.path.len(), 2);
    // reset wipes the trace and re-arms from the new origin
    sig.reset = true;
    let r4 = engine.tick(&cfg, sig, base + Duration::from_millis(600)).unwrap();
    assert_eq!(engine.state(), ClockState::Running);
    assert_eq!(r4.time, 0.);
    assert_eq!(r4.path.len(), 1);
}

#[test]
fn spinning_pen_disk_derotates_back() {
    // with a spinning pen disk the last rendered point still lands on the
    // stationary pen position after the rotate/derotate pair
    let mut cfg = PintoConfig::example();
    cfg.speeds[2] = 0.5;
    let mech = cfg.validated().unwrap();
    let mut engine = Engine::default();
    let base = Instant::now();
    let mut sig = Signals { start: true, reset: true, runtime: 10. };
    engine.tick(&cfg, sig, base).unwrap();
    sig.reset = false;
    let t = 0.375;
    let r = engine.tick(&cfg, sig, base + Duration::from_secs_f64(t)).unwrap();
    let p = mech.pos(t).unwrap().p;
    let last = r.path.last().unwrap();
    assert_abs_diff_eq!(last[0], p[0], epsilon = 1e-9);
    assert_abs_diff_eq!(last[1], p[1], epsilon = 1e-9);
}

#[test]
fn failed_validation_leaves_the_state_alone() {
    let cfg = PintoConfig::example();
    let mut engine = Engine::default();
    let base = Instant::now();
    let mut sig = Signals { start: true, reset: true, runtime: 10. };
    engine.tick(&cfg, sig, base).unwrap();
    sig.reset = false;
    engine.tick(&cfg, sig, base + Duration::from_millis(100)).unwrap();
    assert_eq!(engine.trace().len(), 2);
    let mut bad = cfg.clone();
    bad.distances.push(1.);
    let err = engine.tick(&bad, sig, base + Duration::from_millis(200)).unwrap_err();
    assert!(matches!(err, PintoError::Config(ConfigError::Len { list: "distances", .. })));
    assert_eq!(engine.trace().len(), 2);
    assert_eq!(engine.state(), ClockState::Running);
    // the animation continues where it left off
    let r = engine.tick(&cfg, sig, base + Duration::from_millis(300)).unwrap();
    assert_eq!(r.path.len(), 3);
}

#[test]
fn frozen_tick_before_any_run_is_empty() {
    let cfg = PintoConfig::example();
    let mut engine = Engine::default();
    let sig = Signals { start: false, reset: false, runtime: 10. };
    let r = engine.tick(&cfg, sig, Instant::now()).unwrap();
    assert_eq!(r.frame, None);
    assert!(r.path.is_empty());
    assert_eq!(r.time, 0.);
}
