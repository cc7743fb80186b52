//! Marker components for the control panel widgets

use bevy::prelude::*;

use crate::bodies::BodyId;

/// Root node of the control panel
#[derive(Component)]
pub struct ControlPanel;

/// Speed slider bound to one body
#[derive(Component, Debug, Clone, Copy)]
pub struct BodySpeedSlider(pub BodyId);

/// Global speed multiplier slider
#[derive(Component)]
pub struct MultiplierSlider;

/// Text of the Pause/Resume button
#[derive(Component)]
pub struct PauseLabel;

/// Status line under the buttons
#[derive(Component)]
pub struct StatusText;

/// Hover tooltip node
#[derive(Component)]
pub struct Tooltip;

/// Text inside the hover tooltip
#[derive(Component)]
pub struct TooltipText;

/// Label for the pause button given the current paused flag
pub fn pause_label(paused: bool) -> &'static str {
    if paused { "Resume" } else { "Pause" }
}

/// Widen a slider value to f64, rounded to the slider's display precision.
///
/// `0.05_f32 as f64` lands just above 0.05 and would fail the range check.
pub fn slider_to_f64(value: f32, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value as f64 * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_to_f64_hits_range_ends() {
        assert_eq!(slider_to_f64(0.05, 3), 0.05);
        assert_eq!(slider_to_f64(0.0, 3), 0.0);
        assert_eq!(slider_to_f64(0.009, 3), 0.009);
        assert_eq!(slider_to_f64(2.3, 1), 2.3);
    }

    #[test]
    fn test_pause_label() {
        assert_eq!(pause_label(true), "Resume");
        assert_eq!(pause_label(false), "Pause");
    }
}
