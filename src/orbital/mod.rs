//! Orbital simulation module
//!
//! This module holds the orbit path generator, the per-frame clock and the
//! frame loop that orders and cancels per-frame work.

use bevy::prelude::*;

pub mod clock;
pub mod frame;
pub mod path;

pub use clock::{SimulationParams, advance_bodies, simulation_running, step};
pub use frame::{FrameLoop, FrameSet, frame_loop_running};
pub use path::{DEFAULT_ORBIT_SEGMENTS, generate_orbit_path};

/// Plugin for the simulation clock and frame ordering
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationParams>()
            .init_resource::<FrameLoop>()
            .configure_sets(
                Update,
                (
                    FrameSet::Step,
                    FrameSet::Sync,
                    FrameSet::Pick,
                    FrameSet::Present,
                )
                    .chain()
                    .run_if(frame_loop_running),
            )
            .add_systems(Update, advance_bodies.in_set(FrameSet::Step))
            .add_systems(Update, frame::count_frame.in_set(FrameSet::Present))
            .add_systems(Last, frame::exit_on_stop);
    }
}
