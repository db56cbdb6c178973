// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-stepped settle animation toward a target height.

use crate::spring::spring_fraction;

/// Tunables for the settle animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationSettings {
    /// Wall-clock duration in seconds.
    pub duration: f64,
    /// Damping ratio of the spring easing; `< 1` overshoots.
    pub damping: f64,
    /// Normalized starting velocity in distances per duration.
    pub initial_velocity: f64,
}

impl AnimationSettings {
    /// The standard settle feel: a little bounce at the end.
    pub const DEFAULT: Self = Self {
        duration: 0.45,
        damping: 0.7,
        initial_velocity: 0.95,
    };

    /// A quicker, stiffer settle.
    pub const FAST: Self = Self {
        duration: 0.25,
        damping: 0.9,
        initial_velocity: 0.8,
    };
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Drives a height from its release value to a target over a fixed duration.
///
/// The animation owns no clock: the host advances it with frame deltas via
/// [`advance`](Self::advance) and reads [`is_finished`](Self::is_finished) to
/// decide whether to schedule another frame. Interruption is simply dropping
/// the value after reading [`height`](Self::height): the interrupting drag
/// or transition baselines on whatever height the animation had reached, so
/// there is no visual discontinuity.
#[derive(Clone, Debug)]
pub struct SettleAnimation {
    start_height: f64,
    target_height: f64,
    settings: AnimationSettings,
    elapsed: f64,
}

impl SettleAnimation {
    /// Creates an animation from `start_height` toward `target_height`.
    ///
    /// A non-positive or non-finite duration yields an animation that is
    /// already finished, which callers resolve as an immediate jump.
    #[must_use]
    pub fn new(start_height: f64, target_height: f64, settings: AnimationSettings) -> Self {
        let mut settings = settings;
        if !(settings.duration.is_finite() && settings.duration > 0.0) {
            settings.duration = 0.0;
        }
        Self {
            start_height,
            target_height,
            settings,
            elapsed: 0.0,
        }
    }

    /// The height the animation started from.
    #[must_use]
    pub fn start_height(&self) -> f64 {
        self.start_height
    }

    /// The height the animation is settling toward.
    #[must_use]
    pub fn target_height(&self) -> f64 {
        self.target_height
    }

    /// The settings the animation was started with.
    #[must_use]
    pub fn settings(&self) -> AnimationSettings {
        self.settings
    }

    /// Advances the animation by a frame delta (seconds) and returns the new
    /// height. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.height()
    }

    /// The current height, without advancing time.
    #[must_use]
    pub fn height(&self) -> f64 {
        let fraction = spring_fraction(
            self.progress(),
            self.settings.damping,
            self.settings.initial_velocity,
        );
        self.start_height + (self.target_height - self.start_height) * fraction
    }

    /// Normalized elapsed time in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.settings.duration > 0.0 {
            (self.elapsed / self.settings.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Returns `true` once the full duration has elapsed; the height is then
    /// exactly the target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.settings.duration
    }
}
