// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine: from pointer deltas to a target breakpoint.
//!
//! ## Usage
//!
//! 1) Call [`PaneDrag::begin`] with the committed height when the pointer
//!    goes down (freezing any in-flight settle animation first).
//! 2) On each pointer move, call [`PaneDrag::update`] with the cumulative
//!    translation; it returns the rubber-banded live height to display.
//! 3) On release, call [`PaneDrag::end`]; it picks the breakpoint to settle
//!    on and enters [`PanePhase::Settling`].
//! 4) When the settle animation completes (or the drag is cancelled), call
//!    [`PaneDrag::settle_finished`] / [`PaneDrag::cancel`].
//!
//! Live updates are rubber-banded against the outermost breakpoints but are
//! never snapped; snapping happens once, at release. That keeps the drag
//! continuous under the finger while guaranteeing the pane always rests
//! exactly on a declared breakpoint when idle.

use duopane_breakpoint::{Breakpoint, BreakpointSet, rubber_band_clamp};
use kurbo::Vec2;

/// Ratio margin applied around the current ratio during the release scan, so
/// a pane resting within a hair of a breakpoint does not re-select it.
const RATIO_MARGIN: f64 = 0.01;

/// Lifecycle phase of the pane's height driver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PanePhase {
    /// At rest on the current breakpoint.
    #[default]
    Idle,
    /// A pointer gesture is driving the height.
    Dragging,
    /// A settle animation is driving the height toward a breakpoint.
    Settling,
}

/// Tunables for the release decision and the live-drag feel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragTuning {
    /// Minimum net drag distance (in height units) for a release to change
    /// breakpoints.
    pub drag_threshold: f64,
    /// Minimum release speed (height units per second) for a flick to change
    /// breakpoints regardless of distance.
    pub velocity_threshold: f64,
    /// Rubber-band strength in `[0, 1]` applied to drags past the outermost
    /// breakpoints; `1` is a hard stop, `0` no resistance.
    pub rubber_band_strength: f64,
}

impl Default for DragTuning {
    fn default() -> Self {
        Self {
            drag_threshold: 70.0,
            velocity_threshold: 300.0,
            rubber_band_strength: 0.7,
        }
    }
}

/// Tracks one pane-height gesture from pointer down to settled rest.
///
/// The machine is single-gesture by construction: the caller (the host's
/// gesture-recognition layer) serializes gesture starts, and a new
/// [`begin`](Self::begin) while settling freezes the animation's current
/// height as the new drag baseline.
#[derive(Clone, Debug)]
pub struct PaneDrag {
    tuning: DragTuning,
    phase: PanePhase,
    height_at_start: f64,
    live_height: f64,
    last_translation: Vec2,
    last_velocity: Vec2,
}

impl PaneDrag {
    /// Creates an idle machine with the given tuning.
    #[must_use]
    pub fn new(tuning: DragTuning) -> Self {
        Self {
            tuning,
            phase: PanePhase::Idle,
            height_at_start: 0.0,
            live_height: 0.0,
            last_translation: Vec2::ZERO,
            last_velocity: Vec2::ZERO,
        }
    }

    /// The machine's tuning.
    #[must_use]
    pub fn tuning(&self) -> DragTuning {
        self.tuning
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PanePhase {
        self.phase
    }

    /// Returns `true` while a pointer gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == PanePhase::Dragging
    }

    /// The committed height captured when the gesture began.
    #[must_use]
    pub fn height_at_start(&self) -> f64 {
        self.height_at_start
    }

    /// The most recent rubber-banded live height.
    #[must_use]
    pub fn live_height(&self) -> f64 {
        self.live_height
    }

    /// The most recent pointer translation seen by [`update`](Self::update).
    #[must_use]
    pub fn last_translation(&self) -> Vec2 {
        self.last_translation
    }

    /// The most recent pointer velocity seen by [`update`](Self::update).
    #[must_use]
    pub fn last_velocity(&self) -> Vec2 {
        self.last_velocity
    }

    /// Starts a gesture from the given committed height.
    ///
    /// Valid from [`PanePhase::Idle`] or [`PanePhase::Settling`]; when a
    /// settle animation is interrupted, `committed_height` is the height the
    /// animation had reached, so the new drag begins with no visual jump.
    pub fn begin(&mut self, committed_height: f64) {
        self.phase = PanePhase::Dragging;
        self.height_at_start = committed_height;
        self.live_height = committed_height;
        self.last_translation = Vec2::ZERO;
        self.last_velocity = Vec2::ZERO;
    }

    /// Feeds a pointer move into an active gesture.
    ///
    /// `translation` is cumulative since the pointer went down, with
    /// downward positive; dragging the handle up grows the bottom pane. The
    /// raw candidate height is rubber-banded against
    /// `[min_height, max_height]` and returned as the live height to
    /// display. Returns `None` when no gesture is active.
    pub fn update(
        &mut self,
        translation: Vec2,
        velocity: Vec2,
        min_height: f64,
        max_height: f64,
    ) -> Option<f64> {
        if self.phase != PanePhase::Dragging {
            return None;
        }
        self.last_translation = translation;
        self.last_velocity = velocity;

        let raw = self.height_at_start - translation.y;
        let clamped = rubber_band_clamp(raw, min_height, max_height, self.tuning.rubber_band_strength);
        self.live_height = clamped;
        Some(clamped)
    }

    /// Ends the gesture and picks the breakpoint to settle on.
    ///
    /// A release that exceeds neither the drag-distance threshold nor the
    /// velocity threshold stays on `current`. Otherwise the velocity sign
    /// picks the direction (upward pointer motion grows the pane; an exactly
    /// zero velocity falls back to the sign of the net drag), and the
    /// nearest breakpoint in that direction wins, saturating at the ends of
    /// the set. Enters [`PanePhase::Settling`]; the caller starts the settle
    /// animation toward the returned breakpoint.
    pub fn end(
        &mut self,
        velocity_y: f64,
        total_height: f64,
        breakpoints: &BreakpointSet,
        current: &Breakpoint,
    ) -> Breakpoint {
        if self.phase != PanePhase::Dragging {
            return current.clone();
        }
        self.phase = PanePhase::Settling;

        if total_height <= 0.0 {
            return current.clone();
        }

        let total_drag = self.height_at_start - self.live_height;
        let exceeded_distance = total_drag.abs() > self.tuning.drag_threshold;
        let exceeded_velocity = velocity_y.abs() > self.tuning.velocity_threshold;
        if !exceeded_distance && !exceeded_velocity {
            return current.clone();
        }

        let current_ratio = self.live_height / total_height;
        let moving_down = velocity_y > 0.0 || (velocity_y == 0.0 && total_drag > 0.0);
        let target = if moving_down {
            breakpoints.closest_below(current_ratio - RATIO_MARGIN)
        } else {
            breakpoints.closest_above(current_ratio + RATIO_MARGIN)
        };
        target.cloned().unwrap_or_else(|| current.clone())
    }

    /// Abandons an active gesture without changing breakpoints.
    ///
    /// Returns the pre-gesture committed height the caller should restore,
    /// with no animation.
    pub fn cancel(&mut self) -> f64 {
        self.phase = PanePhase::Idle;
        self.live_height = self.height_at_start;
        self.height_at_start
    }

    /// Marks the settle animation as complete, returning the machine to
    /// [`PanePhase::Idle`].
    pub fn settle_finished(&mut self) {
        if self.phase == PanePhase::Settling {
            self.phase = PanePhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_set() -> BreakpointSet {
        BreakpointSet::from_iter([
            Breakpoint::QUARTER,
            Breakpoint::HALF,
            Breakpoint::THREE_QUARTERS,
        ])
    }

    const TOTAL: f64 = 1000.0;

    fn dragging_from(height: f64) -> PaneDrag {
        let mut drag = PaneDrag::new(DragTuning::default());
        drag.begin(height);
        drag
    }

    #[test]
    fn new_machine_is_idle() {
        let drag = PaneDrag::new(DragTuning::default());
        assert_eq!(drag.phase(), PanePhase::Idle);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn begin_captures_the_committed_height() {
        let drag = dragging_from(250.0);
        assert_eq!(drag.phase(), PanePhase::Dragging);
        assert_eq!(drag.height_at_start(), 250.0);
        assert_eq!(drag.live_height(), 250.0);
    }

    #[test]
    fn update_outside_a_gesture_is_ignored() {
        let mut drag = PaneDrag::new(DragTuning::default());
        assert!(
            drag.update(Vec2::new(0.0, -50.0), Vec2::ZERO, 250.0, 750.0)
                .is_none()
        );
    }

    #[test]
    fn upward_translation_grows_the_pane() {
        let mut drag = dragging_from(250.0);
        let live = drag
            .update(Vec2::new(0.0, -100.0), Vec2::ZERO, 250.0, 750.0)
            .unwrap();
        assert_eq!(live, 350.0);
        assert_eq!(drag.live_height(), 350.0);
    }

    #[test]
    fn update_rubber_bands_past_the_bounds() {
        let mut drag = dragging_from(250.0);
        // 100 below the minimum at strength 0.7 leaves 30% of the overshoot.
        let live = drag
            .update(Vec2::new(0.0, 100.0), Vec2::ZERO, 250.0, 750.0)
            .unwrap();
        assert!((live - 220.0).abs() < 1e-9);
    }

    #[test]
    fn update_records_translation_and_velocity() {
        let mut drag = dragging_from(250.0);
        let translation = Vec2::new(3.0, -40.0);
        let velocity = Vec2::new(0.0, -120.0);
        drag.update(translation, velocity, 250.0, 750.0);
        assert_eq!(drag.last_translation(), translation);
        assert_eq!(drag.last_velocity(), velocity);
    }

    #[test]
    fn release_below_both_thresholds_stays_put() {
        let mut drag = dragging_from(250.0);
        drag.update(Vec2::new(0.0, -50.0), Vec2::ZERO, 250.0, 750.0);
        let target = drag.end(0.0, TOTAL, &standard_set(), &Breakpoint::QUARTER);
        assert_eq!(target, Breakpoint::QUARTER);
        assert_eq!(drag.phase(), PanePhase::Settling);
    }

    #[test]
    fn release_past_drag_threshold_snaps_to_next_above() {
        let mut drag = dragging_from(250.0);
        drag.update(Vec2::new(0.0, -150.0), Vec2::ZERO, 250.0, 750.0);
        let target = drag.end(0.0, TOTAL, &standard_set(), &Breakpoint::QUARTER);
        assert_eq!(target, Breakpoint::HALF);
    }

    #[test]
    fn fast_flick_overrides_short_distance() {
        let mut drag = dragging_from(250.0);
        // Only 30px of travel, but an upward flick well past the threshold.
        drag.update(Vec2::new(0.0, -30.0), Vec2::new(0.0, -900.0), 250.0, 750.0);
        let target = drag.end(-900.0, TOTAL, &standard_set(), &Breakpoint::QUARTER);
        assert_eq!(target, Breakpoint::HALF);
    }

    #[test]
    fn downward_release_snaps_to_next_below() {
        let mut drag = dragging_from(750.0);
        drag.update(Vec2::new(0.0, 200.0), Vec2::new(0.0, 400.0), 250.0, 750.0);
        let target = drag.end(400.0, TOTAL, &standard_set(), &Breakpoint::THREE_QUARTERS);
        assert_eq!(target, Breakpoint::HALF);
    }

    #[test]
    fn zero_velocity_release_follows_net_drag_direction() {
        // Net downward drag with an exactly zero release velocity shrinks.
        let mut drag = dragging_from(750.0);
        drag.update(Vec2::new(0.0, 200.0), Vec2::ZERO, 250.0, 750.0);
        let target = drag.end(0.0, TOTAL, &standard_set(), &Breakpoint::THREE_QUARTERS);
        assert_eq!(target, Breakpoint::HALF);
    }

    #[test]
    fn snap_saturates_at_the_ends_of_the_set() {
        // Flinging upward from the top breakpoint stays on it.
        let mut drag = dragging_from(750.0);
        drag.update(Vec2::new(0.0, -10.0), Vec2::new(0.0, -900.0), 250.0, 750.0);
        let target = drag.end(-900.0, TOTAL, &standard_set(), &Breakpoint::THREE_QUARTERS);
        assert_eq!(target, Breakpoint::THREE_QUARTERS);
    }

    #[test]
    fn near_breakpoint_margin_skips_a_grazed_breakpoint() {
        // A downward drag released a hair above half (ratio 0.505): half is
        // within the scan margin, so the release lands on quarter instead of
        // stopping just past where it already is.
        let mut drag = dragging_from(750.0);
        drag.update(Vec2::new(0.0, 245.0), Vec2::new(0.0, 500.0), 250.0, 750.0);
        let target = drag.end(500.0, TOTAL, &standard_set(), &Breakpoint::THREE_QUARTERS);
        assert_eq!(target, Breakpoint::QUARTER);
    }

    #[test]
    fn release_with_empty_set_keeps_the_current_breakpoint() {
        let mut drag = dragging_from(250.0);
        drag.update(Vec2::new(0.0, -200.0), Vec2::ZERO, 250.0, 750.0);
        let target = drag.end(0.0, TOTAL, &BreakpointSet::new(), &Breakpoint::QUARTER);
        assert_eq!(target, Breakpoint::QUARTER);
    }

    #[test]
    fn release_with_unknown_geometry_keeps_the_current_breakpoint() {
        let mut drag = dragging_from(250.0);
        drag.update(Vec2::new(0.0, -200.0), Vec2::ZERO, 250.0, 750.0);
        let target = drag.end(0.0, 0.0, &standard_set(), &Breakpoint::QUARTER);
        assert_eq!(target, Breakpoint::QUARTER);
    }

    #[test]
    fn cancel_restores_the_pre_gesture_height() {
        let mut drag = dragging_from(250.0);
        drag.update(Vec2::new(0.0, -200.0), Vec2::ZERO, 250.0, 750.0);
        let restored = drag.cancel();
        assert_eq!(restored, 250.0);
        assert_eq!(drag.phase(), PanePhase::Idle);
        assert_eq!(drag.live_height(), 250.0);
    }

    #[test]
    fn settle_finished_returns_to_idle() {
        let mut drag = dragging_from(250.0);
        drag.update(Vec2::new(0.0, -150.0), Vec2::ZERO, 250.0, 750.0);
        drag.end(0.0, TOTAL, &standard_set(), &Breakpoint::QUARTER);
        assert_eq!(drag.phase(), PanePhase::Settling);
        drag.settle_finished();
        assert_eq!(drag.phase(), PanePhase::Idle);
    }

    #[test]
    fn begin_while_settling_freezes_the_given_height() {
        let mut drag = dragging_from(250.0);
        drag.update(Vec2::new(0.0, -150.0), Vec2::ZERO, 250.0, 750.0);
        drag.end(0.0, TOTAL, &standard_set(), &Breakpoint::QUARTER);

        // Interrupt mid-settle at 437px; the new drag baselines there.
        drag.begin(437.0);
        assert_eq!(drag.phase(), PanePhase::Dragging);
        assert_eq!(drag.height_at_start(), 437.0);
        assert_eq!(drag.live_height(), 437.0);
    }

    #[test]
    fn end_outside_a_gesture_is_a_no_op() {
        let mut drag = PaneDrag::new(DragTuning::default());
        let target = drag.end(0.0, TOTAL, &standard_set(), &Breakpoint::HALF);
        assert_eq!(target, Breakpoint::HALF);
        assert_eq!(drag.phase(), PanePhase::Idle);
    }
}
