// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=duopane_breakpoint --heading-base-level=0

//! Duopane Breakpoint: pure data primitives for drag-to-breakpoint panes.
//!
//! A split pane rests at one of a small number of *breakpoints*: named
//! fractional heights of the container. This crate provides the data layer
//! shared by the gesture and container crates:
//!
//! - [`Breakpoint`]: a named fractional rest position in `(0, 1]`.
//! - [`BreakpointSet`]: an ordered, ratio-deduplicated collection with the
//!   neighbor lookups (`closest_below`, `closest_above`, `closest_to`) that
//!   release-time snapping is built on.
//! - [`progress_between`]: normalized progress of a height between its two
//!   neighboring breakpoints.
//! - [`rubber_band_clamp`]: elastic resistance applied when a dragged height
//!   is pulled past the outermost breakpoints.
//!
//! Everything here is pure data and pure functions; no geometry is cached and
//! no notification is emitted. Heights and ratios are plain `f64` values in a
//! caller-chosen coordinate space.
//!
//! ## Minimal example
//!
//! ```rust
//! use duopane_breakpoint::{Breakpoint, BreakpointSet, progress_between};
//!
//! let set = BreakpointSet::from_iter([
//!     Breakpoint::QUARTER,
//!     Breakpoint::HALF,
//!     Breakpoint::THREE_QUARTERS,
//! ]);
//!
//! // A 400px bottom pane in a 1000px container sits between quarter and half.
//! let progress = progress_between(400.0, 1000.0, &set);
//! assert_eq!(progress.lower.as_ref().map(Breakpoint::name), Some("quarter"));
//! assert_eq!(progress.upper.as_ref().map(Breakpoint::name), Some("half"));
//! assert!((progress.fraction - 0.6).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod progress;
mod rubber;
mod set;

pub use progress::{BreakpointProgress, progress_between};
pub use rubber::rubber_band_clamp;
pub use set::{Breakpoint, BreakpointSet};
