// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band clamping for drags past the outermost breakpoints.

/// Applies elastic resistance to a height outside `[min_height, max_height]`.
///
/// Inside the bounds the height passes through unchanged. Outside, the
/// overshoot is scaled by `1 - strength`:
///
/// - `strength = 1.0` is a hard stop at the bound,
/// - `strength = 0.0` applies no resistance at all,
/// - values in between let the pane stretch a fraction of the overshoot,
///   which is what gives a drag past the end its elastic feel.
///
/// `strength` is clamped into `[0, 1]`, and a reversed bounds pair is
/// normalized, so the function is total over its inputs. Call this on every
/// live drag update only; committed heights always rest exactly on a
/// breakpoint and must not be re-clamped.
#[must_use]
pub fn rubber_band_clamp(height: f64, min_height: f64, max_height: f64, strength: f64) -> f64 {
    let (min_height, max_height) = if min_height <= max_height {
        (min_height, max_height)
    } else {
        (max_height, min_height)
    };
    let give = 1.0 - strength.clamp(0.0, 1.0);

    if height < min_height {
        min_height - (min_height - height) * give
    } else if height > max_height {
        max_height + (height - max_height) * give
    } else {
        height
    }
}
