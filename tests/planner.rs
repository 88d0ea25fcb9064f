// Native tests for spin planning: the resting angle must put the winning
// sector's center exactly under the pointer, modulo full rotations, no matter
// how much rotation earlier spins accumulated.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use fortune_wheel::wheel::config::WheelConfig;
use fortune_wheel::wheel::planner::{ease_out_cubic, plan_spin};
use fortune_wheel::wheel::selector::SeededRandom;

const EPS: f64 = 1e-9;

fn angle_eq_mod_tau(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(TAU);
    d < EPS || (TAU - d) < EPS
}

#[test]
fn resting_angle_centers_winner_under_pointer() {
    let config = WheelConfig::default();
    let n = config.outcome_count();
    let seg = TAU / n as f64;
    let mut rng = SeededRandom::new(99);
    for winner in 0..n {
        for &angle0 in &[0.0, 1.234, -5.0, 123.456, TAU * 41.0 + 0.7] {
            let plan = plan_spin(winner, angle0, &config, 0.0, &mut rng);
            let target = config.pointer_angle - (winner as f64 + 0.5) * seg;
            assert!(
                angle_eq_mod_tau(plan.end_angle, target),
                "winner {winner} from angle0 {angle0}: end {} !≡ {target} (mod 2π)",
                plan.end_angle
            );
        }
    }
}

#[test]
fn known_scenario_eight_sectors_winner_two() {
    // angle0 = 0, N = 8, pointer up: resting angle ≡ -π/2 - 2.5·(π/4) (mod 2π),
    // plus an exact whole number of extra turns.
    let config = WheelConfig::default();
    let mut rng = SeededRandom::new(3);
    let plan = plan_spin(2, 0.0, &config, 0.0, &mut rng);
    let expected = -FRAC_PI_2 - 2.5 * (PI / 4.0);
    assert!(angle_eq_mod_tau(plan.end_angle, expected));
}

#[test]
fn extra_rotations_are_whole_and_in_range() {
    let config = WheelConfig::default();
    let mut rng = SeededRandom::new(0xABCD);
    for i in 0..500 {
        let winner = i % config.outcome_count();
        let angle0 = (i as f64) * 0.37;
        let plan = plan_spin(winner, angle0, &config, 0.0, &mut rng);
        // Sweep = normalized diff in [0, 2π) + 2π·extra, so the turn count is
        // the floor of the sweep over a full circle.
        let sweep = plan.end_angle - plan.start_angle;
        assert!(sweep >= 0.0);
        let turns = (sweep / TAU).floor() as u32;
        assert!(
            (config.min_extra_rotations..=config.max_extra_rotations).contains(&turns),
            "sweep {sweep} → {turns} turns"
        );
    }
}

#[test]
fn duration_stays_in_configured_range() {
    let config = WheelConfig::default();
    let mut rng = SeededRandom::new(17);
    for _ in 0..500 {
        let plan = plan_spin(0, 0.0, &config, 0.0, &mut rng);
        assert!(plan.duration_ms >= config.min_duration_ms);
        assert!(plan.duration_ms < config.max_duration_ms);
    }
}

#[test]
fn plan_records_start_state() {
    let config = WheelConfig::default();
    let mut rng = SeededRandom::new(5);
    let plan = plan_spin(4, 9.5, &config, 1234.0, &mut rng);
    assert_eq!(plan.start_angle, 9.5);
    assert_eq!(plan.start_ms, 1234.0);
    assert!(plan.end_angle > plan.start_angle);
}

#[test]
fn easing_hits_endpoints_exactly() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
}

#[test]
fn easing_is_monotone_nondecreasing() {
    let mut prev = 0.0;
    for i in 0..=1_000 {
        let e = ease_out_cubic(f64::from(i) / 1000.0);
        assert!(e >= prev);
        prev = e;
    }
}
