//! The single mutation point for simulation parameters
//!
//! Every write is validated first and applied in one assignment, so a
//! rejected write leaves the previous state untouched.

use bevy::prelude::*;

use crate::bodies::{BodyId, BodyRegistry};
use crate::config::SpeedRange;
use crate::error::{SimError, SimResult};
use crate::orbital::SimulationParams;

/// Visual theme flag. Has no effect on simulation numerics.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeState {
    #[default]
    Dark,
    Light,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Dark => ThemeState::Light,
            ThemeState::Light => ThemeState::Dark,
        }
    }
}

/// Accepted range for per-body speed writes, taken from config
#[derive(Resource, Default, Debug, Clone, Copy, Deref)]
pub struct SpeedLimits(pub SpeedRange);

pub struct ControlSurface<'a> {
    registry: &'a mut BodyRegistry,
    params: &'a mut SimulationParams,
    theme: &'a mut ThemeState,
    limits: SpeedRange,
}

impl<'a> ControlSurface<'a> {
    pub fn new(
        registry: &'a mut BodyRegistry,
        params: &'a mut SimulationParams,
        theme: &'a mut ThemeState,
        limits: SpeedRange,
    ) -> Self {
        Self {
            registry,
            params,
            theme,
            limits,
        }
    }

    pub fn set_body_speed(&mut self, id: BodyId, value: f64) -> SimResult<()> {
        if !self.limits.contains(value) {
            return Err(SimError::OutOfRange {
                what: "body speed",
                value,
                min: self.limits.min,
                max: self.limits.max,
            });
        }
        let body = self
            .registry
            .get_mut(id)
            .ok_or(SimError::UnknownBody(id.index()))?;
        body.set_angular_speed(value);
        Ok(())
    }

    pub fn set_global_speed_multiplier(&mut self, value: f64) -> SimResult<()> {
        if !(value.is_finite() && value >= 0.0) {
            return Err(SimError::OutOfRange {
                what: "speed multiplier",
                value,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        self.params.set_speed_multiplier(value);
        Ok(())
    }

    /// Flip the paused flag, returning the new value
    pub fn toggle_pause(&mut self) -> bool {
        let paused = !self.params.paused();
        self.params.set_paused(paused);
        paused
    }

    /// Flip the theme, returning the new one
    pub fn toggle_theme(&mut self) -> ThemeState {
        *self.theme = self.theme.toggled();
        *self.theme
    }
}
