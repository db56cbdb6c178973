// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture arbitration between the pane drag and embedded scroll regions.
//!
//! When the bottom pane hosts a scrollable region, a vertical pointer gesture
//! is ambiguous: it may mean "scroll the content" or "move the pane". The
//! policy that resolves the ambiguity is expressed as pure predicates over
//! plain data, which the host's gesture-recognition layer consults before
//! starting a pane drag. The engine itself never calls these; the host
//! serializes gesture starts.
//!
//! The policy, matching the feel of system sheet components:
//!
//! - Only predominantly vertical gestures can become pane drags.
//! - A scroll region that is not at its top keeps the gesture.
//! - At the top, a downward pull hands the gesture off to the pane (the
//!   "drag the sheet down from the top of its content" dismissal motion).

use kurbo::Vec2;

/// Snapshot of an embedded scrollable region at gesture time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollRegionState {
    /// Current vertical content offset.
    pub offset_y: f64,
    /// Top content inset; the region is at rest when
    /// `offset_y <= -top_inset`.
    pub top_inset: f64,
    /// Whether the region currently scrolls at all.
    pub scroll_enabled: bool,
}

impl ScrollRegionState {
    /// Returns `true` when the region is scrolled to (or rubber-banded past)
    /// its top inset.
    #[must_use]
    pub fn is_at_top(&self) -> bool {
        self.offset_y <= -self.top_inset
    }
}

/// Whether a pointer gesture is vertical enough to drive the pane at all.
#[must_use]
pub fn drag_should_begin(velocity: Vec2) -> bool {
    velocity.y.abs() > velocity.x.abs()
}

/// Whether a gesture captured by the scroll region should be forwarded to
/// the pane: the region is at its top and the pointer pulls downward.
#[must_use]
pub fn scroll_region_hands_off(region: &ScrollRegionState, velocity_y: f64) -> bool {
    region.is_at_top() && velocity_y > 0.0
}

/// Whether a gesture on the pane's content area should begin a pane drag.
///
/// Without a scroll region (or with scrolling disabled) any sufficiently
/// vertical gesture qualifies. With an enabled region, the region keeps the
/// gesture unless it is at its top and the pointer pulls downward.
#[must_use]
pub fn content_drag_should_begin(velocity: Vec2, region: Option<&ScrollRegionState>) -> bool {
    if !drag_should_begin(velocity) {
        return false;
    }
    match region {
        Some(region) if region.scroll_enabled => {
            region.is_at_top() && velocity.y > 0.0
        }
        _ => true,
    }
}
