//! Body management module
//!
//! This module owns the body registry and the systems that mirror registry
//! state onto rendered entities in the Bevy ECS.

use bevy::prelude::*;

use crate::orbital::FrameSet;

pub mod components;
pub mod registry;
pub mod systems;

pub use registry::{BodyId, BodyRegistry};
pub use systems::populate_registry;

use systems::{spawn_body_entities, sync_body_transforms};

/// Plugin for body registration and transform updates
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                populate_registry,
                spawn_body_entities.after(populate_registry),
            ),
        )
        .add_systems(Update, sync_body_transforms.in_set(FrameSet::Sync));
    }
}
