//! Picking systems: pointer tracking and per-frame hover resolution

use bevy::prelude::*;
use bevy::window::WindowEvent;

use crate::bodies::BodyRegistry;
use crate::picking::hover::{HoverState, HoverTransition, PointerState};
use crate::picking::resolver::{CameraView, resolve};
use crate::ui::MainCamera;

/// Store the latest pointer position from window cursor events.
///
/// Reads the combined window event stream so a leave followed by a move in
/// the same frame ends with the pointer recorded.
pub fn track_pointer(
    mut events: MessageReader<WindowEvent>,
    windows: Query<&Window>,
    mut pointer: ResMut<PointerState>,
) {
    for event in events.read() {
        match event {
            WindowEvent::CursorMoved(moved) => {
                if let Ok(window) = windows.get(moved.window) {
                    pointer.record(moved.position, window.size());
                }
            }
            WindowEvent::CursorLeft(_) => pointer.clear(),
            _ => {}
        }
    }
}

/// Resolve the pointer against current body positions. Never cached: bodies
/// move every unpaused frame even when the pointer is still.
pub fn resolve_hover(
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    pointer: Res<PointerState>,
    registry: Res<BodyRegistry>,
    mut hover: ResMut<HoverState>,
) -> Result {
    let (camera, transform) = camera.single()?;

    let hit = pointer.ndc.and_then(|ndc| {
        let view = CameraView { camera, transform };
        resolve(ndc, &view, &registry)
    });

    // Only write on change so downstream change detection stays meaningful
    if hover.hovered() == hit {
        return Ok(());
    }
    match hover.update(hit) {
        Some(HoverTransition::Entered(id)) | Some(HoverTransition::Switched { to: id, .. }) => {
            if let Some(body) = registry.get(id) {
                debug!("Hovering {}", body.name());
            }
        }
        Some(HoverTransition::Left(id)) => {
            if let Some(body) = registry.get(id) {
                debug!("Left {}", body.name());
            }
        }
        None => {}
    }
    Ok(())
}
