//! Visualization module
//!
//! Scene dressing around the simulated bodies: the sun, lighting, orbit
//! rings and the starfield.

use bevy::prelude::*;

use crate::bodies::populate_registry;
use crate::orbital::{FrameSet, simulation_running};

pub mod lighting;
pub mod orbits;
pub mod starfield;
pub mod sun;

use lighting::spawn_lighting;
use orbits::spawn_orbit_rings;
use starfield::spawn_starfield;
use sun::{spawn_sun, spin_sun};

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                spawn_sun,
                spawn_lighting,
                spawn_starfield,
                spawn_orbit_rings.after(populate_registry),
            ),
        )
        .add_systems(
            Update,
            spin_sun.in_set(FrameSet::Step).run_if(simulation_running),
        );
    }
}
