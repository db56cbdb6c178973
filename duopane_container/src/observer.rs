// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer registry for continuous and discrete pane notifications.
//!
//! Observers are held in an explicit registry keyed by stable
//! [`ObserverId`] handles. Registration transfers ownership of the observer
//! to the registry; removal is explicit and returns the observer, and
//! removing an id twice is a harmless no-op. Notification order across
//! observers is unspecified.

use alloc::boxed::Box;
use core::fmt;

use duopane_breakpoint::{Breakpoint, BreakpointProgress};
use hashbrown::HashMap;

/// Payload of a continuous height notification.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightUpdate {
    /// Current bottom-pane height.
    pub height: f64,
    /// Progress of that height between its neighboring breakpoints.
    pub progress: BreakpointProgress,
}

/// Receives pane notifications.
///
/// Both methods have no-op defaults, so an observer that only cares about
/// one kind implements just that one:
///
/// - [`height_updated`](Self::height_updated) fires on every live drag
///   update and every settle animation frame.
/// - [`breakpoint_arrived`](Self::breakpoint_arrived) fires once each time
///   the pane comes to rest on a breakpoint.
pub trait PaneObserver {
    /// The pane's height changed while being dragged or settling.
    fn height_updated(&mut self, _update: &HeightUpdate) {}

    /// The pane came to rest on a breakpoint.
    fn breakpoint_arrived(&mut self, _breakpoint: &Breakpoint) {}
}

/// Stable handle identifying a registered observer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

impl fmt::Debug for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObserverId").field(&self.0).finish()
    }
}

/// Owning registry of pane observers.
#[derive(Default)]
pub struct ObserverRegistry {
    entries: HashMap<u64, Box<dyn PaneObserver>>,
    next_id: u64,
}

impl ObserverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers an observer, returning the handle used to remove it.
    pub fn add(&mut self, observer: Box<dyn PaneObserver>) -> ObserverId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, observer);
        ObserverId(id)
    }

    /// Removes an observer, returning it if it was still registered.
    ///
    /// Removing an id that was already removed returns `None`.
    pub fn remove(&mut self, id: ObserverId) -> Option<Box<dyn PaneObserver>> {
        self.entries.remove(&id.0)
    }

    /// Delivers a height update to every registered observer.
    pub fn notify_height(&mut self, update: &HeightUpdate) {
        for observer in self.entries.values_mut() {
            observer.height_updated(update);
        }
    }

    /// Delivers a breakpoint arrival to every registered observer.
    pub fn notify_arrival(&mut self, breakpoint: &Breakpoint) {
        for observer in self.entries.values_mut() {
            observer.breakpoint_arrived(breakpoint);
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
