// Copyright 2025 the Duopane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Split-pane configuration.

use alloc::boxed::Box;
use core::fmt;

use duopane_breakpoint::Breakpoint;
use duopane_gesture::AnimationSettings;
use kurbo::{Size, Vec2};
use peniko::Color;

use crate::content::PaneContent;

/// Strength of the haptic pulse delivered when the pane arrives at a new
/// breakpoint.
///
/// The engine never talks to a haptic actuator itself; the configured style
/// is handed to the host through
/// [`PaneDelegate::haptic_pulse`](crate::PaneDelegate::haptic_pulse).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HapticStyle {
    /// A light tap.
    Light,
    /// A medium tap.
    Medium,
    /// A heavy tap.
    Heavy,
}

/// Drop shadow applied to one pane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaneShadow {
    /// Shadow color.
    pub color: Color,
    /// Opacity in `[0, 1]`; `0` disables the shadow entirely.
    pub opacity: f32,
    /// Blur radius.
    pub radius: f64,
    /// Offset of the shadow from the pane.
    pub offset: Vec2,
}

impl PaneShadow {
    /// The standard soft upward shadow.
    pub const DEFAULT: Self = Self {
        color: Color::BLACK,
        opacity: 0.1,
        radius: 10.0,
        offset: Vec2::new(0.0, -3.0),
    };

    /// A fully transparent shadow.
    pub const NONE: Self = Self {
        color: Color::BLACK,
        opacity: 0.0,
        radius: 10.0,
        offset: Vec2::new(0.0, -3.0),
    };
}

impl Default for PaneShadow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immutable configuration bundle for a [`SplitPane`](crate::SplitPane).
///
/// Supplied once at construction. Visual fields (colors, handle geometry,
/// corner radius, shadows) are plain data the host's renderer consumes; the
/// engine itself only reads the interaction tunables. Initial pane content
/// moves into the pane at construction, so the config's content slots read
/// `None` afterwards.
pub struct PaneConfig {
    /// Size of the drag handle.
    pub handle_size: Size,
    /// Color of the drag handle.
    pub handle_color: Color,
    /// Vertical gap reserved for the handle between the panes.
    pub handle_spacing: f64,
    /// Corner radius of the pane edges facing the handle.
    pub corner_radius: f64,
    /// Background color of the top pane.
    pub top_pane_background: Color,
    /// Background color of the bottom pane.
    pub bottom_pane_background: Color,
    /// Settle animation tuning.
    pub animation: AnimationSettings,
    /// Shadow on the top pane, or `None` for no shadow.
    pub top_pane_shadow: Option<PaneShadow>,
    /// Shadow on the bottom pane, or `None` for no shadow.
    pub bottom_pane_shadow: Option<PaneShadow>,
    /// Minimum net drag distance for a release to change breakpoints.
    pub drag_threshold: f64,
    /// Minimum release speed for a flick to change breakpoints.
    pub velocity_threshold: f64,
    /// Breakpoint the pane starts on.
    pub default_breakpoint: Breakpoint,
    /// Rubber-band strength in `[0, 1]` for drags past the outermost
    /// breakpoints.
    pub rubber_band_strength: f64,
    /// Initial top pane content.
    pub top_content: Option<Box<dyn PaneContent>>,
    /// Initial bottom pane content.
    pub bottom_content: Option<Box<dyn PaneContent>>,
    /// Haptic pulse on breakpoint arrival, or `None` for no haptics.
    pub haptic_style: Option<HapticStyle>,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            handle_size: Size::new(56.0, 4.0),
            handle_color: Color::from_rgba8(0, 0, 0, 20),
            handle_spacing: 20.0,
            corner_radius: 40.0,
            top_pane_background: Color::WHITE,
            bottom_pane_background: Color::WHITE,
            animation: AnimationSettings::DEFAULT,
            top_pane_shadow: Some(PaneShadow::DEFAULT),
            bottom_pane_shadow: Some(PaneShadow::DEFAULT),
            drag_threshold: 70.0,
            velocity_threshold: 300.0,
            default_breakpoint: Breakpoint::QUARTER,
            rubber_band_strength: 0.7,
            top_content: None,
            bottom_content: None,
            haptic_style: Some(HapticStyle::Light),
        }
    }
}

impl fmt::Debug for PaneConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneConfig")
            .field("handle_size", &self.handle_size)
            .field("handle_spacing", &self.handle_spacing)
            .field("corner_radius", &self.corner_radius)
            .field("animation", &self.animation)
            .field("drag_threshold", &self.drag_threshold)
            .field("velocity_threshold", &self.velocity_threshold)
            .field("default_breakpoint", &self.default_breakpoint)
            .field("rubber_band_strength", &self.rubber_band_strength)
            .field("haptic_style", &self.haptic_style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_standard_feel() {
        let config = PaneConfig::default();
        assert_eq!(config.default_breakpoint, Breakpoint::QUARTER);
        assert_eq!(config.drag_threshold, 70.0);
        assert_eq!(config.velocity_threshold, 300.0);
        assert_eq!(config.rubber_band_strength, 0.7);
        assert_eq!(config.animation, AnimationSettings::DEFAULT);
        assert!(config.top_content.is_none());
    }

    #[test]
    fn none_shadow_is_invisible() {
        assert_eq!(PaneShadow::NONE.opacity, 0.0);
        assert_eq!(PaneShadow::NONE.color, PaneShadow::DEFAULT.color);
    }
}
