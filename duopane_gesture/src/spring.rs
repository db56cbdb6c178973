// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form damped-spring easing.
//!
//! The settle animation needs an easing curve that starts from the release
//! velocity, optionally overshoots, and comes to rest on the target within a
//! fixed wall-clock duration. Rather than free-running a physical simulation,
//! this module evaluates the closed-form response of a damped spring over
//! normalized time, so the curve is a pure function any host tick loop can
//! sample.

use libm::{cos, exp, sin, sqrt};

/// Decay rate of the motion envelope over the normalized duration; roughly
/// `e^-8 ≈ 3e-4` of the remaining distance is left at `t = 1`.
const SETTLE_DECAY: f64 = 8.0;

/// Samples the spring easing curve at normalized time `t`.
///
/// - `t` is wall-clock progress through the animation in `[0, 1]`; values
///   outside are clamped, and the curve is pinned to exactly `1.0` at the
///   end so the pane rests precisely on its target.
/// - `damping` is the spring's damping ratio: `< 1` under-damped (the pane
///   overshoots and oscillates once or twice), `1` critically damped, `> 1`
///   over-damped. Non-positive or non-finite values are treated as
///   critically damped.
/// - `initial_velocity` is the normalized velocity at `t = 0` in distances
///   per duration, positive toward the target; pass the release velocity so
///   the animation picks up where the finger left off.
///
/// Returns the eased fraction of the distance covered; under-damped springs
/// exceed `1.0` transiently while overshooting.
#[must_use]
pub fn spring_fraction(t: f64, damping: f64, initial_velocity: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let zeta = if damping.is_finite() && damping > 0.0 {
        damping
    } else {
        1.0
    };
    let v0 = if initial_velocity.is_finite() {
        initial_velocity
    } else {
        0.0
    };

    // `remaining` solves y'' + 2ζωy' + ω²y = 0 with y(0) = 1, y'(0) = -v0,
    // with ω chosen per branch so the envelope decays at SETTLE_DECAY.
    let remaining = if zeta < 1.0 {
        let omega = SETTLE_DECAY / zeta;
        let omega_d = omega * sqrt(1.0 - zeta * zeta);
        exp(-SETTLE_DECAY * t) * (cos(omega_d * t) + (SETTLE_DECAY - v0) / omega_d * sin(omega_d * t))
    } else if zeta > 1.0 {
        // Two real roots; ω is picked so the slower one decays at SETTLE_DECAY.
        let spread = sqrt(zeta * zeta - 1.0);
        let omega = SETTLE_DECAY / (zeta - spread);
        let slow = -SETTLE_DECAY;
        let fast = omega * (-zeta - spread);
        let a = (-v0 - fast) / (slow - fast);
        let b = 1.0 - a;
        a * exp(slow * t) + b * exp(fast * t)
    } else {
        exp(-SETTLE_DECAY * t) * (1.0 + (SETTLE_DECAY - v0) * t)
    };

    1.0 - remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for damping in [0.3, 0.7, 1.0, 2.0] {
            assert_eq!(spring_fraction(0.0, damping, 0.95), 0.0);
            assert_eq!(spring_fraction(1.0, damping, 0.95), 1.0);
            assert_eq!(spring_fraction(-0.5, damping, 0.95), 0.0);
            assert_eq!(spring_fraction(2.0, damping, 0.95), 1.0);
        }
    }

    #[test]
    fn curve_is_nearly_settled_before_the_end() {
        for damping in [0.5, 0.7, 1.0, 2.0] {
            let late = spring_fraction(0.95, damping, 0.95);
            assert!((late - 1.0).abs() < 0.01);
        }
    }

    #[test]
    fn critically_damped_curve_is_monotone() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let fraction = spring_fraction(f64::from(step) / 100.0, 1.0, 0.95);
            assert!(fraction >= previous);
            previous = fraction;
        }
    }

    #[test]
    fn under_damped_curve_overshoots() {
        let mut peak = 0.0_f64;
        for step in 1..=200 {
            peak = peak.max(spring_fraction(f64::from(step) / 200.0, 0.3, 0.95));
        }
        assert!(peak > 1.0);
    }

    #[test]
    fn over_damped_curve_never_overshoots() {
        for step in 1..=200 {
            let fraction = spring_fraction(f64::from(step) / 200.0, 2.0, 0.0);
            assert!(fraction <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn initial_velocity_advances_the_early_curve() {
        let slow = spring_fraction(0.1, 1.0, 0.0);
        let fast = spring_fraction(0.1, 1.0, 4.0);
        assert!(fast > slow);
    }

    #[test]
    fn degenerate_damping_falls_back_to_critical() {
        let reference = spring_fraction(0.4, 1.0, 0.95);
        assert_eq!(spring_fraction(0.4, 0.0, 0.95), reference);
        assert_eq!(spring_fraction(0.4, f64::NAN, 0.95), reference);
    }
}
