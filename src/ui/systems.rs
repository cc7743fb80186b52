//! Systems keeping panel labels in step with simulation state

use bevy::prelude::*;

use crate::bodies::BodyRegistry;
use crate::control::ControlFeedback;
use crate::orbital::SimulationParams;
use crate::picking::HoverState;
use crate::ui::state::{PauseLabel, StatusText, pause_label};

pub fn update_pause_label(
    params: Res<SimulationParams>,
    mut labels: Query<&mut Text, With<PauseLabel>>,
) {
    if !params.is_changed() {
        return;
    }
    for mut text in labels.iter_mut() {
        text.0 = pause_label(params.paused()).to_string();
    }
}

/// One-line summary: run state, multiplier, hovered body and the last rejected write
pub fn status_line(
    params: &SimulationParams,
    hover: &HoverState,
    registry: &BodyRegistry,
    feedback: &ControlFeedback,
) -> String {
    let mut line = format!(
        "{} | x{:.1}",
        if params.paused() { "Paused" } else { "Running" },
        params.speed_multiplier()
    );
    if let Some(body) = hover.hovered().and_then(|id| registry.get(id)) {
        line.push_str(&format!(" | {}", body.name()));
    }
    if let Some(err) = &feedback.last_error {
        line.push_str(&format!("\n{}", err));
    }
    line
}

pub fn update_status_text(
    params: Res<SimulationParams>,
    hover: Res<HoverState>,
    registry: Res<BodyRegistry>,
    feedback: Res<ControlFeedback>,
    mut texts: Query<&mut Text, With<StatusText>>,
) {
    if !(params.is_changed() || hover.is_changed() || feedback.is_changed()) {
        return;
    }
    let line = status_line(&params, &hover, &registry, &feedback);
    for mut text in texts.iter_mut() {
        text.0 = line.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let mut registry = BodyRegistry::default();
        let mars = registry.create_body("Mars", 0.45, 10.0, 0.007).unwrap();
        let params = SimulationParams::default();
        let mut feedback = ControlFeedback::default();

        assert_eq!(
            status_line(&params, &HoverState::NoHover, &registry, &feedback),
            "Running | x1.0"
        );

        feedback.last_error = Some("rejected".to_string());
        assert_eq!(
            status_line(&params, &HoverState::Hovering(mars), &registry, &feedback),
            "Running | x1.0 | Mars\nrejected"
        );
    }
}
