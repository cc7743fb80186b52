//! Body components for the Bevy ECS system

use bevy::prelude::*;
use std::collections::HashMap;

use super::registry::BodyId;

/// Links a rendered entity to its registry entry
#[derive(Component, Copy, Clone, Debug)]
pub struct OrbitingBody(pub BodyId);

/// Display colors per body, filled from config at startup
#[derive(Resource, Default, Deref, DerefMut)]
pub struct BodyPalette(pub HashMap<BodyId, Color>);
