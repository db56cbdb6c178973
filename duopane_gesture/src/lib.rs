// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=duopane_gesture --heading-base-level=0

//! Duopane Gesture: the drag-to-breakpoint interaction machine.
//!
//! This crate holds the stateful half of the split-pane engine: everything
//! that turns a stream of pointer events into a height that finally rests on
//! a breakpoint. Each module handles one concern:
//!
//! - [`drag`]: the gesture state machine ([`PaneDrag`]) tracking
//!   idle → dragging → settling, live rubber-banded heights, and the
//!   threshold/velocity release decision.
//! - [`settle`]: the explicit time-stepped settle animation
//!   ([`SettleAnimation`]) that carries the height from its release value to
//!   the target breakpoint.
//! - [`spring`]: the pure damped-spring easing curve ([`spring_fraction`])
//!   the settle animation samples.
//! - [`arbitration`]: pure predicates deciding whether a pane drag or an
//!   embedded scroll region should win a pointer gesture.
//!
//! Nothing here owns a clock, a view, or an observer list. The host feeds
//! pointer translations and frame deltas in; heights and decisions come out.
//! That keeps the machine total, deterministic, and testable without any UI
//! framework.
//!
//! ## Minimal example
//!
//! ```rust
//! use duopane_breakpoint::{Breakpoint, BreakpointSet};
//! use duopane_gesture::{DragTuning, PaneDrag, PanePhase};
//! use kurbo::Vec2;
//!
//! let set = BreakpointSet::from_iter([Breakpoint::QUARTER, Breakpoint::HALF]);
//! let mut drag = PaneDrag::new(DragTuning::default());
//!
//! // Container is 1000px tall and resting on the quarter breakpoint (250px).
//! drag.begin(250.0);
//! assert_eq!(drag.phase(), PanePhase::Dragging);
//!
//! // Pointer moves 120px upward; the bottom pane grows.
//! let live = drag
//!     .update(Vec2::new(0.0, -120.0), Vec2::ZERO, 250.0, 500.0)
//!     .unwrap();
//! assert_eq!(live, 370.0);
//!
//! // Released with no velocity but past the drag threshold: snap upward.
//! let target = drag.end(0.0, 1000.0, &set, &Breakpoint::QUARTER);
//! assert_eq!(target, Breakpoint::HALF);
//! assert_eq!(drag.phase(), PanePhase::Settling);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod arbitration;
pub mod drag;
pub mod settle;
pub mod spring;

pub use drag::{DragTuning, PaneDrag, PanePhase};
pub use settle::{AnimationSettings, SettleAnimation};
pub use spring::spring_fraction;
