//! User interface module
//!
//! Feathers control panel, hover tooltip and theme application.

use bevy::prelude::*;

use crate::bodies::populate_registry;
use crate::orbital::FrameSet;
use crate::picking::resolve_hover;

pub mod panels;
pub mod state;
pub mod systems;
pub mod theme;
pub mod tooltip;

pub use theme::{apply_theme, dark_ui_theme};
pub use tooltip::update_tooltip;

/// Marker for the scene camera used for picking and theming
#[derive(Component)]
pub struct MainCamera;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                panels::spawn_control_panel.after(populate_registry),
                tooltip::spawn_tooltip,
            ),
        )
        .add_systems(
            Update,
            (
                update_tooltip.after(resolve_hover).in_set(FrameSet::Pick),
                (
                    apply_theme,
                    systems::update_pause_label,
                    systems::update_status_text,
                )
                    .in_set(FrameSet::Present),
            ),
        );
    }
}
