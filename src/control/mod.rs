//! Control surface module
//!
//! UI observers and keyboard shortcuts go through [`Controls`], which wraps
//! the validated [`ControlSurface`] and records rejected writes for the UI.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::bodies::{BodyId, BodyRegistry};
use crate::config::SystemConfig;
use crate::error::SimResult;
use crate::orbital::{FrameLoop, FrameSet, SimulationParams};

pub mod surface;

pub use surface::{ControlSurface, SpeedLimits, ThemeState};

/// Outcome of the most recent control write, shown in the status line
#[derive(Resource, Default, Debug)]
pub struct ControlFeedback {
    pub last_error: Option<String>,
}

/// System parameter exposing the control surface to Bevy systems and observers
#[derive(SystemParam)]
pub struct Controls<'w> {
    registry: ResMut<'w, BodyRegistry>,
    params: ResMut<'w, SimulationParams>,
    theme: ResMut<'w, ThemeState>,
    limits: Res<'w, SpeedLimits>,
    feedback: ResMut<'w, ControlFeedback>,
}

impl Controls<'_> {
    /// Borrow the surface without touching change ticks. Each write below
    /// flags only the resource it actually changed.
    fn surface(&mut self) -> ControlSurface<'_> {
        ControlSurface::new(
            self.registry.bypass_change_detection(),
            self.params.bypass_change_detection(),
            self.theme.bypass_change_detection(),
            **self.limits,
        )
    }

    pub fn set_body_speed(&mut self, id: BodyId, value: f64) -> SimResult<()> {
        let result = self.surface().set_body_speed(id, value);
        if result.is_ok() {
            self.registry.set_changed();
        }
        self.report(&result);
        result
    }

    pub fn set_global_speed_multiplier(&mut self, value: f64) -> SimResult<()> {
        let result = self.surface().set_global_speed_multiplier(value);
        if result.is_ok() {
            self.params.set_changed();
        }
        self.report(&result);
        result
    }

    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.surface().toggle_pause();
        self.params.set_changed();
        info!("Simulation {}", if paused { "paused" } else { "resumed" });
        paused
    }

    pub fn toggle_theme(&mut self) -> ThemeState {
        let theme = self.surface().toggle_theme();
        self.theme.set_changed();
        debug!("Theme switched to {:?}", theme);
        theme
    }

    fn report(&mut self, result: &SimResult<()>) {
        match result {
            Ok(()) => {
                if self.feedback.last_error.is_some() {
                    self.feedback.last_error = None;
                }
            }
            Err(e) => {
                warn!("Rejected control write: {}", e);
                self.feedback.last_error = Some(e.to_string());
            }
        }
    }
}

/// Keyboard shortcuts: P pauses, T switches theme, Escape stops the frame loop
pub fn keyboard_controls(
    input: Res<ButtonInput<KeyCode>>,
    mut controls: Controls,
    frame_loop: Res<FrameLoop>,
) {
    if input.just_pressed(KeyCode::KeyP) {
        controls.toggle_pause();
    }
    if input.just_pressed(KeyCode::KeyT) {
        controls.toggle_theme();
    }
    if input.just_pressed(KeyCode::Escape) {
        frame_loop.stop();
    }
}

/// Plugin for the control surface and keyboard bindings
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        let range = app
            .world()
            .get_resource::<SystemConfig>()
            .map(|config| config.speed_range)
            .unwrap_or_default();

        app.insert_resource(SpeedLimits(range))
            .init_resource::<ThemeState>()
            .init_resource::<ControlFeedback>()
            .add_systems(Update, keyboard_controls.before(FrameSet::Step));
    }
}
