// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoints and ordered breakpoint sets.

use alloc::borrow::Cow;
use core::cmp::Ordering;
use core::fmt;

use smallvec::SmallVec;

/// A named fractional rest position for the bottom pane.
///
/// The ratio expresses the bottom pane's height as a fraction of the
/// container height and is expected to lie in `(0, 1]`; out-of-range values
/// are clamped on construction. Identity is the `(ratio, name)` pair, so two
/// breakpoints with the same ratio but different names are distinct.
///
/// A `Breakpoint` is immutable once constructed.
#[derive(Clone, PartialEq)]
pub struct Breakpoint {
    ratio: f64,
    name: Cow<'static, str>,
}

impl Breakpoint {
    /// Bottom pane takes a quarter of the container.
    pub const QUARTER: Self = Self::from_static(0.25, "quarter");
    /// Bottom pane takes a third of the container.
    pub const THIRD: Self = Self::from_static(0.33, "third");
    /// Bottom pane takes half of the container.
    pub const HALF: Self = Self::from_static(0.5, "half");
    /// Bottom pane takes two thirds of the container.
    pub const TWO_THIRDS: Self = Self::from_static(0.67, "twoThirds");
    /// Bottom pane takes three quarters of the container.
    pub const THREE_QUARTERS: Self = Self::from_static(0.75, "threeQuarters");

    /// Creates a breakpoint from a ratio and a name.
    ///
    /// The ratio is clamped into `(0, 1]`; a non-finite ratio becomes `1.0`.
    #[must_use]
    pub fn new(ratio: f64, name: impl Into<Cow<'static, str>>) -> Self {
        let ratio = if ratio.is_finite() {
            ratio.clamp(f64::MIN_POSITIVE, 1.0)
        } else {
            1.0
        };
        Self {
            ratio,
            name: name.into(),
        }
    }

    const fn from_static(ratio: f64, name: &'static str) -> Self {
        Self {
            ratio,
            name: Cow::Borrowed(name),
        }
    }

    /// The bottom pane's height as a fraction of the container height.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// The breakpoint's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The absolute bottom-pane height this breakpoint resolves to in a
    /// container of the given total height.
    #[must_use]
    pub fn height_in(&self, total_height: f64) -> f64 {
        self.ratio * total_height
    }
}

impl fmt::Debug for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Breakpoint")
            .field("ratio", &self.ratio)
            .field("name", &self.name)
            .finish()
    }
}

/// An ordered, ratio-deduplicated collection of breakpoints.
///
/// Entries are kept sorted ascending by ratio; when two entries share a
/// ratio, the first one encountered wins and the rest are dropped. The first
/// entry is the minimum rest position and the last entry the maximum.
///
/// The set may be empty. Lookup helpers return `None` only in that case;
/// callers that need a non-empty answer (the gesture release path, the
/// container's reselection logic) fall back to the currently active
/// breakpoint at their own level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BreakpointSet {
    entries: SmallVec<[Breakpoint; 4]>,
}

impl BreakpointSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of breakpoints in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set has no breakpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The breakpoint with the smallest ratio, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Breakpoint> {
        self.entries.first()
    }

    /// The breakpoint with the largest ratio, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Breakpoint> {
        self.entries.last()
    }

    /// The breakpoints in ascending ratio order.
    #[must_use]
    pub fn as_slice(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// Iterates the breakpoints in ascending ratio order.
    pub fn iter(&self) -> core::slice::Iter<'_, Breakpoint> {
        self.entries.iter()
    }

    /// Returns `true` if some breakpoint has exactly this ratio.
    #[must_use]
    pub fn contains_ratio(&self, ratio: f64) -> bool {
        self.entries.iter().any(|b| b.ratio == ratio)
    }

    /// The breakpoint with the greatest ratio strictly below `ratio`.
    ///
    /// Falls back to the first (smallest) breakpoint when nothing lies below,
    /// and returns `None` only for an empty set.
    #[must_use]
    pub fn closest_below(&self, ratio: f64) -> Option<&Breakpoint> {
        self.entries
            .iter()
            .rev()
            .find(|b| b.ratio < ratio)
            .or_else(|| self.first())
    }

    /// The breakpoint with the least ratio strictly above `ratio`.
    ///
    /// Falls back to the last (largest) breakpoint when nothing lies above,
    /// and returns `None` only for an empty set.
    #[must_use]
    pub fn closest_above(&self, ratio: f64) -> Option<&Breakpoint> {
        self.entries
            .iter()
            .find(|b| b.ratio > ratio)
            .or_else(|| self.last())
    }

    /// The breakpoint whose ratio is nearest to `ratio`.
    ///
    /// Ties resolve to the first match in ascending scan order. Returns
    /// `None` only for an empty set.
    #[must_use]
    pub fn closest_to(&self, ratio: f64) -> Option<&Breakpoint> {
        let mut best: Option<&Breakpoint> = None;
        for candidate in &self.entries {
            let better = match best {
                None => true,
                Some(current) => {
                    (candidate.ratio - ratio).abs() < (current.ratio - ratio).abs()
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        best
    }
}

impl FromIterator<Breakpoint> for BreakpointSet {
    /// Builds a set from arbitrary breakpoints, sorting ascending by ratio
    /// and dropping later entries that repeat an earlier ratio.
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        let mut entries: SmallVec<[Breakpoint; 4]> = iter.into_iter().collect();
        entries.sort_by(|a, b| a.ratio.partial_cmp(&b.ratio).unwrap_or(Ordering::Equal));
        entries.dedup_by(|a, b| a.ratio == b.ratio);
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a BreakpointSet {
    type Item = &'a Breakpoint;
    type IntoIter = core::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn standard_set() -> BreakpointSet {
        BreakpointSet::from_iter([
            Breakpoint::QUARTER,
            Breakpoint::HALF,
            Breakpoint::THREE_QUARTERS,
        ])
    }

    #[test]
    fn new_clamps_ratio_into_unit_interval() {
        assert_eq!(Breakpoint::new(1.5, "over").ratio(), 1.0);
        assert_eq!(Breakpoint::new(f64::NAN, "nan").ratio(), 1.0);
        assert!(Breakpoint::new(-0.3, "under").ratio() > 0.0);
        assert_eq!(Breakpoint::new(0.4, "ok").ratio(), 0.4);
    }

    #[test]
    fn identity_is_ratio_and_name_pair() {
        let a = Breakpoint::new(0.5, "half");
        let b = Breakpoint::new(0.5, "middle");
        assert_eq!(a, Breakpoint::HALF);
        assert_ne!(a, b);
    }

    #[test]
    fn owned_names_compare_against_static_names() {
        let owned = Breakpoint::new(0.25, String::from("quarter"));
        assert_eq!(owned, Breakpoint::QUARTER);
    }

    #[test]
    fn height_in_scales_by_total() {
        assert_eq!(Breakpoint::HALF.height_in(640.0), 320.0);
        assert_eq!(Breakpoint::QUARTER.height_in(0.0), 0.0);
    }

    #[test]
    fn from_iter_sorts_ascending() {
        let set = BreakpointSet::from_iter([
            Breakpoint::THREE_QUARTERS,
            Breakpoint::QUARTER,
            Breakpoint::HALF,
        ]);
        let ratios: Vec<f64> = set.iter().map(Breakpoint::ratio).collect();
        assert_eq!(ratios, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn from_iter_dedups_by_ratio_keeping_first() {
        let set = BreakpointSet::from_iter([
            Breakpoint::new(0.5, "first"),
            Breakpoint::new(0.5, "second"),
            Breakpoint::QUARTER,
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.last().map(Breakpoint::name), Some("first"));
    }

    #[test]
    fn first_and_last_follow_sort_order() {
        let set = standard_set();
        assert_eq!(set.first().map(Breakpoint::ratio), Some(0.25));
        assert_eq!(set.last().map(Breakpoint::ratio), Some(0.75));
    }

    #[test]
    fn closest_below_picks_greatest_strictly_below() {
        let set = standard_set();
        assert_eq!(set.closest_below(0.6).map(Breakpoint::ratio), Some(0.5));
        // Strictness: an exact match does not count as "below".
        assert_eq!(set.closest_below(0.5).map(Breakpoint::ratio), Some(0.25));
    }

    #[test]
    fn closest_below_falls_back_to_first() {
        let set = standard_set();
        assert_eq!(set.closest_below(0.1).map(Breakpoint::ratio), Some(0.25));
    }

    #[test]
    fn closest_above_picks_least_strictly_above() {
        let set = standard_set();
        assert_eq!(set.closest_above(0.3).map(Breakpoint::ratio), Some(0.5));
        assert_eq!(set.closest_above(0.5).map(Breakpoint::ratio), Some(0.75));
    }

    #[test]
    fn closest_above_falls_back_to_last() {
        let set = standard_set();
        assert_eq!(set.closest_above(0.9).map(Breakpoint::ratio), Some(0.75));
    }

    #[test]
    fn closest_lookups_on_empty_set_return_none() {
        let set = BreakpointSet::new();
        assert!(set.closest_below(0.5).is_none());
        assert!(set.closest_above(0.5).is_none());
        assert!(set.closest_to(0.5).is_none());
    }

    #[test]
    fn closest_to_minimizes_distance() {
        let set = standard_set();
        assert_eq!(set.closest_to(0.3).map(Breakpoint::ratio), Some(0.25));
        assert_eq!(set.closest_to(0.65).map(Breakpoint::ratio), Some(0.75));
    }

    #[test]
    fn closest_to_breaks_ties_toward_ascending_scan() {
        let set = standard_set();
        // 0.375 is equidistant from 0.25 and 0.5; the ascending scan wins.
        assert_eq!(set.closest_to(0.375).map(Breakpoint::ratio), Some(0.25));
    }

    #[test]
    fn contains_ratio_is_exact() {
        let set = standard_set();
        assert!(set.contains_ratio(0.5));
        assert!(!set.contains_ratio(0.500001));
    }
}
