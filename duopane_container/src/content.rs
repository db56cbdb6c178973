// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque pane content.

use duopane_breakpoint::Breakpoint;
use duopane_gesture::arbitration::ScrollRegionState;

use crate::observer::HeightUpdate;

/// Content hosted inside one of the two panes.
///
/// Content is an external collaborator the engine knows almost nothing
/// about. It may expose a scrollable region whose state participates in
/// gesture arbitration (the "pull down from the top of the list to move the
/// pane" motion), and it receives the same notifications as registered
/// observers so it can track the pane it lives in. All methods have
/// defaults, so inert content implements nothing.
pub trait PaneContent {
    /// State of the content's dismissal-coordinating scroll region, if it
    /// has one. Sampled at gesture time by the host's arbitration layer.
    fn dismissal_scroll(&self) -> Option<ScrollRegionState> {
        None
    }

    /// The pane's height changed while being dragged or settling.
    fn height_updated(&mut self, _update: &HeightUpdate) {}

    /// The pane came to rest on a breakpoint.
    fn breakpoint_arrived(&mut self, _breakpoint: &Breakpoint) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_content_needs_no_implementation() {
        struct Plain;
        impl PaneContent for Plain {}

        let mut content = Plain;
        assert!(content.dismissal_scroll().is_none());
        content.breakpoint_arrived(&Breakpoint::HALF);
    }

    #[test]
    fn scrolling_content_reports_its_region() {
        struct List {
            offset: f64,
        }
        impl PaneContent for List {
            fn dismissal_scroll(&self) -> Option<ScrollRegionState> {
                Some(ScrollRegionState {
                    offset_y: self.offset,
                    top_inset: 0.0,
                    scroll_enabled: true,
                })
            }
        }

        let list = List { offset: 40.0 };
        let region = list.dismissal_scroll().unwrap();
        assert!(!region.is_at_top());
    }
}
