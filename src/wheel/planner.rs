//! Spin planning: reconcile a pre-drawn winner with the wheel geometry.
//!
//! Sectors are equal-width regardless of weight, so stopping winner `i` under
//! the pointer is pure angle arithmetic: aim the sector center, normalize the
//! remaining sweep into `[0, 2π)`, then pad with whole extra rotations so the
//! stop reads as natural.

use std::f64::consts::TAU;

use super::config::WheelConfig;
use super::selector::RandomSource;

/// One spin's animation parameters. Computed when the spin starts, consumed
/// by the animator, then discarded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinPlan {
    pub start_angle: f64,
    pub end_angle: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

/// Cubic ease-out: fast start, zero velocity at the stop. `e(0) = 0` and
/// `e(1) = 1` exactly.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Build the plan that stops sector `winner`'s center exactly under the
/// pointer after a randomized number of extra full rotations.
///
/// Precondition: `config` validated (at least one outcome). The guarantee is
/// `end_angle ≡ pointer_angle - (winner + 0.5)·seg (mod 2π)` no matter how
/// much rotation `angle0` has accumulated.
pub fn plan_spin(
    winner: usize,
    angle0: f64,
    config: &WheelConfig,
    now_ms: f64,
    rng: &mut dyn RandomSource,
) -> SpinPlan {
    let seg = TAU / config.outcome_count() as f64;
    // Sector i's center sits at angle + (i + 0.5)·seg in canvas coordinates,
    // so the resting angle must satisfy angle ≡ pointer - (i + 0.5)·seg.
    let target_base = config.pointer_angle - (winner as f64 + 0.5) * seg;
    let diff = (target_base - angle0).rem_euclid(TAU);

    let span = config.max_extra_rotations - config.min_extra_rotations + 1;
    let extra = config.min_extra_rotations + (rng.next_f64() * f64::from(span)) as u32;

    let duration_ms =
        config.min_duration_ms + rng.next_f64() * (config.max_duration_ms - config.min_duration_ms);

    SpinPlan {
        start_angle: angle0,
        end_angle: angle0 + diff + TAU * f64::from(extra),
        start_ms: now_ms,
        duration_ms,
    }
}
