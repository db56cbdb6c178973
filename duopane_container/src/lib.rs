// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=duopane_container --heading-base-level=0

//! Duopane Container: the split-pane orchestrator.
//!
//! [`SplitPane`] ties the engine together: it owns the configuration, the
//! breakpoint set, the current breakpoint, the gesture state machine, the
//! settle animation, and the observer registry, and exposes the public API a
//! host embeds. The host remains responsible for everything visual (it
//! renders the two panes and the handle from the heights this type reports)
//! and for feeding in pointer events, frame ticks, and geometry changes.
//!
//! The container maintains one invariant downstream layout code may rely on:
//! whenever the pane is idle, its height is exactly the current breakpoint's
//! absolute height. Drags move the height continuously (with rubber-banding
//! past the ends), and every release or programmatic transition settles back
//! onto a declared breakpoint.
//!
//! ## Minimal example
//!
//! ```rust
//! use duopane_breakpoint::Breakpoint;
//! use duopane_container::{PaneConfig, SplitPane};
//! use kurbo::Vec2;
//!
//! let mut pane = SplitPane::new(PaneConfig::default());
//! pane.set_breakpoints([
//!     Breakpoint::QUARTER,
//!     Breakpoint::HALF,
//!     Breakpoint::THREE_QUARTERS,
//! ]);
//!
//! // Geometry arrives from the host's layout pass.
//! pane.set_total_height(1000.0);
//! assert_eq!(pane.height(), 250.0);
//!
//! // An upward drag past the threshold snaps to the next breakpoint up.
//! pane.begin_drag();
//! pane.update_drag(Vec2::new(0.0, -150.0), Vec2::ZERO);
//! pane.end_drag(Vec2::ZERO);
//! assert_eq!(pane.current_breakpoint(), &Breakpoint::HALF);
//!
//! // The host drives the settle animation from its frame loop.
//! while pane.tick(1.0 / 60.0) {}
//! assert_eq!(pane.height(), 500.0);
//! ```
//!
//! All calls must come from the host's single UI execution context;
//! cross-thread use is unsupported.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod content;
mod observer;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use duopane_breakpoint::progress_between;
use duopane_gesture::{DragTuning, PaneDrag, SettleAnimation};
use kurbo::Vec2;

pub use config::{HapticStyle, PaneConfig, PaneShadow};
pub use content::PaneContent;
pub use duopane_breakpoint::{Breakpoint, BreakpointProgress, BreakpointSet};
pub use duopane_gesture::{AnimationSettings, PanePhase};
pub use observer::{HeightUpdate, ObserverId, ObserverRegistry, PaneObserver};

/// Host-level callbacks fired at interaction milestones.
///
/// All methods have no-op defaults. Unlike [`PaneObserver`]s, of which there
/// may be many, a pane has at most one delegate, and it hears about
/// decisions (breakpoint changes, raw drag motion, haptic moments) rather
/// than continuous height state.
pub trait PaneDelegate {
    /// The pane committed to a new breakpoint (at release or via
    /// [`SplitPane::transition_to`]), before the settle animation runs.
    fn did_transition_to(&mut self, _breakpoint: &Breakpoint) {}

    /// Raw pointer translation and velocity during a live drag.
    fn is_dragging(&mut self, _translation: Vec2, _velocity: Vec2) {}

    /// The host should play a haptic pulse of the given style.
    ///
    /// Fired at most once per distinct arrival breakpoint.
    fn haptic_pulse(&mut self, _style: HapticStyle) {}
}

/// A draggable dual-pane container whose bottom pane snaps to breakpoints.
///
/// See the [crate docs](crate) for an overview and example.
pub struct SplitPane {
    config: PaneConfig,
    breakpoints: BreakpointSet,
    current: Breakpoint,
    total_height: f64,
    height: f64,
    cached_heights: Vec<f64>,
    drag: PaneDrag,
    settle: Option<SettleAnimation>,
    observers: ObserverRegistry,
    delegate: Option<Box<dyn PaneDelegate>>,
    top_content: Option<Box<dyn PaneContent>>,
    bottom_content: Option<Box<dyn PaneContent>>,
    last_haptic: Option<Breakpoint>,
    laid_out: bool,
}

impl SplitPane {
    /// Creates a pane from a configuration bundle.
    ///
    /// Initial content moves out of the config into the pane. The pane
    /// starts on the configured default breakpoint with unknown geometry;
    /// nothing is notified until [`set_total_height`](Self::set_total_height)
    /// provides a real height.
    #[must_use]
    pub fn new(mut config: PaneConfig) -> Self {
        let top_content = config.top_content.take();
        let bottom_content = config.bottom_content.take();
        let tuning = DragTuning {
            drag_threshold: config.drag_threshold,
            velocity_threshold: config.velocity_threshold,
            rubber_band_strength: config.rubber_band_strength.clamp(0.0, 1.0),
        };
        let current = config.default_breakpoint.clone();
        Self {
            breakpoints: BreakpointSet::new(),
            current,
            total_height: 0.0,
            height: 0.0,
            cached_heights: Vec::new(),
            drag: PaneDrag::new(tuning),
            settle: None,
            observers: ObserverRegistry::new(),
            delegate: None,
            top_content,
            bottom_content,
            last_haptic: None,
            laid_out: false,
            config,
        }
    }

    /// The configuration supplied at construction.
    #[must_use]
    pub fn config(&self) -> &PaneConfig {
        &self.config
    }

    /// The current breakpoint set.
    #[must_use]
    pub fn breakpoints(&self) -> &BreakpointSet {
        &self.breakpoints
    }

    /// The breakpoint the pane is resting on or settling toward.
    #[must_use]
    pub fn current_breakpoint(&self) -> &Breakpoint {
        &self.current
    }

    /// The bottom pane's current height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The container's total height, `0.0` until layout provides one.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// The pane's lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PanePhase {
        if self.drag.is_dragging() {
            PanePhase::Dragging
        } else if self.settle.is_some() {
            PanePhase::Settling
        } else {
            PanePhase::Idle
        }
    }

    /// Replaces the breakpoint set.
    ///
    /// The set is sorted ascending and deduplicated by ratio. If the active
    /// breakpoint's ratio is absent from the new set, the breakpoint with
    /// the closest ratio takes over. When geometry is already known the
    /// height resyncs immediately, without animation.
    pub fn set_breakpoints<I: IntoIterator<Item = Breakpoint>>(&mut self, breakpoints: I) {
        self.breakpoints = BreakpointSet::from_iter(breakpoints);
        self.cached_heights.clear();

        if !self.breakpoints.contains_ratio(self.current.ratio()) {
            if let Some(closest) = self.breakpoints.closest_to(self.current.ratio()) {
                self.current = closest.clone();
            }
        }

        if self.total_height > 0.0 {
            self.resync_height();
        }
    }

    /// Reports the container's total height.
    ///
    /// This is the explicit "geometry changed" event from the host's layout
    /// system. The first non-zero height performs the initial layout: the
    /// pane jumps to its current breakpoint and observers hear both a height
    /// update and a breakpoint arrival. Later changes resync the resting
    /// height without an arrival; a change mid-drag only refreshes the
    /// cached bounds the gesture clamps against.
    pub fn set_total_height(&mut self, total_height: f64) {
        let total_height = if total_height.is_finite() {
            total_height.max(0.0)
        } else {
            0.0
        };
        if total_height == self.total_height && self.laid_out {
            return;
        }
        self.total_height = total_height;
        self.cached_heights.clear();
        if total_height <= 0.0 {
            return;
        }

        if !self.laid_out {
            self.laid_out = true;
            self.resync_height();
            self.notify_arrival();
        } else if !self.drag.is_dragging() {
            self.resync_height();
        }
    }

    /// Replaces the top pane's content, returning the previous content.
    pub fn set_top_content(
        &mut self,
        content: Box<dyn PaneContent>,
    ) -> Option<Box<dyn PaneContent>> {
        self.top_content.replace(content)
    }

    /// Replaces the bottom pane's content, returning the previous content.
    pub fn set_bottom_content(
        &mut self,
        content: Box<dyn PaneContent>,
    ) -> Option<Box<dyn PaneContent>> {
        self.bottom_content.replace(content)
    }

    /// The top pane's content, if any.
    #[must_use]
    pub fn top_content(&self) -> Option<&dyn PaneContent> {
        self.top_content.as_deref()
    }

    /// The bottom pane's content, if any.
    #[must_use]
    pub fn bottom_content(&self) -> Option<&dyn PaneContent> {
        self.bottom_content.as_deref()
    }

    /// Registers an observer for height updates and breakpoint arrivals.
    pub fn add_observer(&mut self, observer: Box<dyn PaneObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    /// Removes an observer; removing an unknown id is a no-op.
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn PaneObserver>> {
        self.observers.remove(id)
    }

    /// Installs the delegate, replacing any previous one.
    pub fn set_delegate(&mut self, delegate: Box<dyn PaneDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Removes and returns the delegate.
    pub fn take_delegate(&mut self) -> Option<Box<dyn PaneDelegate>> {
        self.delegate.take()
    }

    /// Moves the pane to a breakpoint.
    ///
    /// The delegate hears the transition immediately; with `animated` the
    /// height then settles over the configured animation (interrupting any
    /// settle already in flight with no discontinuity), otherwise it jumps.
    /// Observers hear the arrival when the pane actually comes to rest.
    /// Calling this repeatedly with the same breakpoint re-fires the
    /// arrival each time.
    pub fn transition_to(&mut self, breakpoint: &Breakpoint, animated: bool) {
        self.current = breakpoint.clone();
        let committed = self.current.clone();
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_transition_to(&committed);
        }
        self.pulse_haptic();
        self.drive_to_current(animated);
    }

    /// Progress of the current height between its neighboring breakpoints.
    #[must_use]
    pub fn current_progress(&self) -> BreakpointProgress {
        progress_between(self.height, self.total_height, &self.breakpoints)
    }

    /// Begins a pointer gesture on the pane.
    ///
    /// Any in-flight settle animation stops and its current height becomes
    /// the drag baseline, so the interruption is seamless. Ignored until
    /// geometry is known. The caller's gesture-recognition layer is
    /// responsible for serializing gesture starts (see
    /// [`duopane_gesture::arbitration`]).
    pub fn begin_drag(&mut self) {
        if !self.laid_out || self.total_height <= 0.0 {
            return;
        }
        if let Some(animation) = self.settle.take() {
            self.height = animation.height();
        }
        self.drag.settle_finished();
        self.drag.begin(self.height);
        self.last_haptic = Some(self.current.clone());
        self.notify_height_update();
    }

    /// Feeds a pointer move into the active gesture.
    ///
    /// `translation` is cumulative since the pointer went down, downward
    /// positive. The live height is rubber-banded against the outermost
    /// breakpoints and broadcast to observers; the current breakpoint does
    /// not change until release.
    pub fn update_drag(&mut self, translation: Vec2, velocity: Vec2) {
        if self.total_height <= 0.0 {
            return;
        }
        let (min_height, max_height) = self.drag_bounds();
        if let Some(live) = self.drag.update(translation, velocity, min_height, max_height) {
            self.height = live;
            self.notify_height_update();
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.is_dragging(translation, velocity);
            }
        }
    }

    /// Ends the active gesture, snapping to the release decision's target.
    pub fn end_drag(&mut self, velocity: Vec2) {
        if !self.drag.is_dragging() {
            return;
        }
        if self.total_height <= 0.0 {
            self.drag.cancel();
            return;
        }
        let target = self
            .drag
            .end(velocity.y, self.total_height, &self.breakpoints, &self.current);
        self.transition_to(&target, true);
    }

    /// Abandons the active gesture, restoring the pre-gesture height with no
    /// animation and no breakpoint change.
    pub fn cancel_drag(&mut self) {
        if !self.drag.is_dragging() {
            return;
        }
        self.height = self.drag.cancel();
        self.notify_height_update();
    }

    /// Advances the settle animation by a frame delta (seconds).
    ///
    /// Returns `true` while the animation still needs frames; the host
    /// schedules its next tick only in that case and never idle-polls. Each
    /// tick broadcasts a height update; natural completion also broadcasts
    /// the breakpoint arrival.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(animation) = self.settle.as_mut() else {
            return false;
        };
        self.height = animation.advance(dt);
        let finished = animation.is_finished();
        if finished {
            self.settle = None;
            self.drag.settle_finished();
        }
        self.notify_height_update();
        if finished {
            self.notify_arrival();
        }
        self.settle.is_some()
    }

    /// Snapshot of the pane's state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SplitPaneDebugInfo {
        SplitPaneDebugInfo {
            phase: self.phase(),
            height: self.height,
            total_height: self.total_height,
            current_breakpoint: self.current.clone(),
            breakpoint_count: self.breakpoints.len(),
            laid_out: self.laid_out,
        }
    }

    /// Resyncs the resting height to the current breakpoint, dropping any
    /// settle animation, with a height update but no arrival.
    fn resync_height(&mut self) {
        if self.total_height <= 0.0 {
            return;
        }
        self.settle = None;
        self.drag.settle_finished();
        self.height = self.absolute_height_of_current();
        self.notify_height_update();
    }

    /// Starts (or skips) the settle toward the current breakpoint.
    fn drive_to_current(&mut self, animated: bool) {
        if self.total_height <= 0.0 {
            // Not laid out yet; the initial layout will place the pane.
            return;
        }
        self.settle = None;
        let target = self.absolute_height_of_current();
        if animated {
            let animation = SettleAnimation::new(self.height, target, self.config.animation);
            if animation.is_finished() {
                self.arrive_at(target);
            } else {
                self.settle = Some(animation);
            }
        } else {
            self.arrive_at(target);
        }
    }

    fn arrive_at(&mut self, target: f64) {
        self.drag.settle_finished();
        self.height = target;
        self.notify_height_update();
        self.notify_arrival();
    }

    fn pulse_haptic(&mut self) {
        let Some(style) = self.config.haptic_style else {
            return;
        };
        if self.last_haptic.as_ref() == Some(&self.current) {
            return;
        }
        self.last_haptic = Some(self.current.clone());
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.haptic_pulse(style);
        }
    }

    /// Bounds live drags clamp against: the first/last breakpoint's absolute
    /// height, with 10%/90% fallbacks for an empty set.
    fn drag_bounds(&self) -> (f64, f64) {
        let min_ratio = self.breakpoints.first().map_or(0.1, Breakpoint::ratio);
        let max_ratio = self.breakpoints.last().map_or(0.9, Breakpoint::ratio);
        (min_ratio * self.total_height, max_ratio * self.total_height)
    }

    fn absolute_height_of_current(&mut self) -> f64 {
        self.ensure_height_cache();
        let index = self.breakpoints.iter().position(|b| b == &self.current);
        match index.and_then(|i| self.cached_heights.get(i)) {
            Some(height) => *height,
            // Current breakpoint outside the set (including the empty set):
            // fall back to its own ratio.
            None => self.current.height_in(self.total_height),
        }
    }

    fn ensure_height_cache(&mut self) {
        if self.cached_heights.len() != self.breakpoints.len() {
            self.cached_heights = self
                .breakpoints
                .iter()
                .map(|b| b.height_in(self.total_height))
                .collect();
        }
    }

    fn notify_height_update(&mut self) {
        let update = HeightUpdate {
            height: self.height,
            progress: self.current_progress(),
        };
        self.observers.notify_height(&update);
        if let Some(content) = self.top_content.as_mut() {
            content.height_updated(&update);
        }
        if let Some(content) = self.bottom_content.as_mut() {
            content.height_updated(&update);
        }
    }

    fn notify_arrival(&mut self) {
        let breakpoint = self.current.clone();
        self.observers.notify_arrival(&breakpoint);
        if let Some(content) = self.top_content.as_mut() {
            content.breakpoint_arrived(&breakpoint);
        }
        if let Some(content) = self.bottom_content.as_mut() {
            content.breakpoint_arrived(&breakpoint);
        }
    }
}

impl fmt::Debug for SplitPane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitPane")
            .field("phase", &self.phase())
            .field("height", &self.height)
            .field("total_height", &self.total_height)
            .field("current", &self.current)
            .field("breakpoints", &self.breakpoints)
            .field("observers", &self.observers)
            .field("laid_out", &self.laid_out)
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`SplitPane`]'s state.
#[derive(Clone, Debug)]
pub struct SplitPaneDebugInfo {
    /// Current lifecycle phase.
    pub phase: PanePhase,
    /// Current bottom-pane height.
    pub height: f64,
    /// Container total height.
    pub total_height: f64,
    /// Breakpoint the pane rests on or settles toward.
    pub current_breakpoint: Breakpoint,
    /// Number of breakpoints in the set.
    pub breakpoint_count: usize,
    /// Whether the initial layout has happened.
    pub laid_out: bool,
}
