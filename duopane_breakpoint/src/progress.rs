// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized progress between neighboring breakpoints.

use crate::set::{Breakpoint, BreakpointSet};

/// Where a height sits relative to the breakpoints around it.
///
/// `lower` is the greatest breakpoint at or below the current ratio and
/// `upper` the breakpoint immediately after it in the set. `fraction` is the
/// normalized position in `[0, 1]` between the two; when only one neighbor
/// exists the fraction saturates to `0` (below all breakpoints) or `1`
/// (at or above the last one).
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointProgress {
    /// Normalized position between `lower` and `upper`.
    pub fraction: f64,
    /// Greatest breakpoint at or below the current ratio.
    pub lower: Option<Breakpoint>,
    /// Breakpoint immediately above `lower` in the set.
    pub upper: Option<Breakpoint>,
}

impl BreakpointProgress {
    fn neutral() -> Self {
        Self {
            fraction: 0.0,
            lower: None,
            upper: None,
        }
    }
}

/// Computes the progress of `current_height` through `breakpoints`.
///
/// A non-positive `total_height` (geometry not yet known) short-circuits to
/// the neutral `(0, None, None)` answer. A zero-ratio span between two
/// breakpoints also yields a fraction of `0` rather than dividing by zero.
#[must_use]
pub fn progress_between(
    current_height: f64,
    total_height: f64,
    breakpoints: &BreakpointSet,
) -> BreakpointProgress {
    if total_height <= 0.0 {
        return BreakpointProgress::neutral();
    }

    let current_ratio = current_height / total_height;

    let mut lower: Option<&Breakpoint> = None;
    let mut upper: Option<&Breakpoint> = None;
    for (i, breakpoint) in breakpoints.iter().enumerate() {
        if breakpoint.ratio() <= current_ratio {
            lower = Some(breakpoint);
            upper = breakpoints.as_slice().get(i + 1);
        } else {
            break;
        }
    }

    match (lower, upper) {
        (Some(lower), Some(upper)) => {
            let span = upper.ratio() - lower.ratio();
            let fraction = if span > 0.0 {
                ((current_ratio - lower.ratio()) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            BreakpointProgress {
                fraction,
                lower: Some(lower.clone()),
                upper: Some(upper.clone()),
            }
        }
        // At or above the last breakpoint.
        (Some(lower), None) => BreakpointProgress {
            fraction: 1.0,
            lower: Some(lower.clone()),
            upper: None,
        },
        // Below every breakpoint.
        (None, _) => match breakpoints.first() {
            Some(first) => BreakpointProgress {
                fraction: 0.0,
                lower: None,
                upper: Some(first.clone()),
            },
            None => BreakpointProgress::neutral(),
        },
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

    #[test]
    fn zero_total_height_is_neutral() {
        let p = progress_between(100.0, 0.0, &standard_set());
        assert_eq!(p.fraction, 0.0);
        assert!(p.lower.is_none());
        assert!(p.upper.is_none());
    }

    #[test]
    fn between_two_breakpoints_interpolates() {
        // ratio 0.4 sits 60% of the way from 0.25 to 0.5.
        let p = progress_between(400.0, 1000.0, &standard_set());
        assert!((p.fraction - 0.6).abs() < 1e-9);
        assert_eq!(p.lower.as_ref().map(Breakpoint::ratio), Some(0.25));
        assert_eq!(p.upper.as_ref().map(Breakpoint::ratio), Some(0.5));
    }

    #[test]
    fn exactly_on_a_breakpoint_starts_the_next_span() {
        let p = progress_between(500.0, 1000.0, &standard_set());
        assert_eq!(p.fraction, 0.0);
        assert_eq!(p.lower.as_ref().map(Breakpoint::ratio), Some(0.5));
        assert_eq!(p.upper.as_ref().map(Breakpoint::ratio), Some(0.75));
    }

    #[test]
    fn below_all_breakpoints_points_at_first() {
        let p = progress_between(100.0, 1000.0, &standard_set());
        assert_eq!(p.fraction, 0.0);
        assert!(p.lower.is_none());
        assert_eq!(p.upper.as_ref().map(Breakpoint::ratio), Some(0.25));
    }

    #[test]
    fn above_all_breakpoints_saturates_to_one() {
        let p = progress_between(900.0, 1000.0, &standard_set());
        assert_eq!(p.fraction, 1.0);
        assert_eq!(p.lower.as_ref().map(Breakpoint::ratio), Some(0.75));
        assert!(p.upper.is_none());
    }

    #[test]
    fn empty_set_is_neutral() {
        let p = progress_between(500.0, 1000.0, &BreakpointSet::new());
        assert_eq!(p.fraction, 0.0);
        assert!(p.lower.is_none());
        assert!(p.upper.is_none());
    }

    #[test]
    fn single_breakpoint_below_and_above() {
        let set = BreakpointSet::from_iter([Breakpoint::HALF]);

        let below = progress_between(200.0, 1000.0, &set);
        assert_eq!(below.fraction, 0.0);
        assert!(below.lower.is_none());
        assert_eq!(below.upper.as_ref().map(Breakpoint::ratio), Some(0.5));

        let above = progress_between(700.0, 1000.0, &set);
        assert_eq!(above.fraction, 1.0);
        assert_eq!(above.lower.as_ref().map(Breakpoint::ratio), Some(0.5));
        assert!(above.upper.is_none());
    }

    #[test]
    fn progress_is_monotone_in_height() {
        let set = standard_set();
        let mut previous = -1.0;
        let mut previous_lower = f64::NEG_INFINITY;
        for step in 0..=100 {
            let height = f64::from(step) * 10.0;
            let p = progress_between(height, 1000.0, &set);
            let lower = p.lower.as_ref().map_or(0.0, Breakpoint::ratio);
            if (lower - previous_lower).abs() < 1e-12 {
                assert!(p.fraction >= previous);
            }
            previous = p.fraction;
            previous_lower = lower;
        }
    }
}
