//! Body picking module
//!
//! This module resolves which body lies under the pointer each frame and
//! tracks hover state for the tooltip.

use bevy::prelude::*;

use crate::orbital::FrameSet;

pub mod hover;
pub mod resolver;
pub mod systems;

pub use hover::{HoverState, PointerState, TooltipCommand, tooltip_command};
pub use systems::resolve_hover;

use systems::track_pointer;

/// Plugin for pointer tracking and per-frame body picking.
///
/// Named apart from Bevy's own `PickingPlugin`, which handles UI widget hits.
pub struct BodyPickingPlugin;

impl Plugin for BodyPickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<HoverState>()
            .add_systems(Update, track_pointer.before(FrameSet::Step))
            .add_systems(Update, resolve_hover.in_set(FrameSet::Pick));
    }
}
