//! Two-state spin machine: Idle and Spinning.
//!
//! A spin request draws the winner first, then builds a plan whose end angle
//! is reconciled to that winner; the animation merely plays the plan out.
//! Requests while spinning are ignored. The machine is pure over explicit
//! millisecond timestamps so tests can drive it with a synthetic clock.

use super::config::WheelConfig;
use super::planner::{self, SpinPlan, ease_out_cubic};
use super::selector::{self, RandomSource};

/// Mutable wheel state shared between spin requests and the frame loop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WheelState {
    /// Current rotation in radians. Unbounded; accumulates across spins.
    pub angle: f64,
    pub spinning: bool,
    /// Winner drawn for the active (or most recent) spin.
    pub selected: Option<usize>,
    /// Active animation parameters; `None` while idle.
    pub plan: Option<SpinPlan>,
}

/// Outcome of advancing the machine by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Not spinning; nothing changed.
    Idle,
    /// Mid-spin; the angle was updated.
    Running,
    /// The spin completed on this frame; carries the pre-drawn winner.
    Finished(usize),
}

/// Start a spin if the machine is idle: draw the winner, plan the stop, flip
/// to Spinning. Returns false (and changes nothing) while a spin is already
/// in flight.
pub fn begin_spin(
    state: &mut WheelState,
    config: &WheelConfig,
    now_ms: f64,
    rng: &mut dyn RandomSource,
) -> bool {
    if state.spinning {
        return false;
    }
    let winner = selector::weighted_draw(&config.weights, rng);
    let plan = planner::plan_spin(winner, state.angle, config, now_ms, rng);
    state.selected = Some(winner);
    state.plan = Some(plan);
    state.spinning = true;
    true
}

/// Advance the animation to `now_ms`. The elapsed fraction is clamped to
/// `[0, 1]`; on the frame where it reaches 1 the machine returns to Idle and
/// reports the winner exactly once.
pub fn advance(state: &mut WheelState, now_ms: f64) -> Step {
    if !state.spinning {
        return Step::Idle;
    }
    let Some(plan) = state.plan else {
        // Unreachable through begin_spin; recover to Idle rather than animate
        // without a target.
        state.spinning = false;
        return Step::Idle;
    };
    let duration = if plan.duration_ms <= 0.0 {
        1.0
    } else {
        plan.duration_ms
    };
    let t = ((now_ms - plan.start_ms) / duration).clamp(0.0, 1.0);
    let eased = ease_out_cubic(t);
    state.angle = plan.start_angle + (plan.end_angle - plan.start_angle) * eased;
    if t < 1.0 {
        Step::Running
    } else {
        state.spinning = false;
        state.plan = None;
        Step::Finished(state.selected.unwrap_or(0))
    }
}
