//! Pointer tracking, hover state machine and tooltip commands

use bevy::prelude::*;

use crate::bodies::{BodyId, BodyRegistry};

/// Tooltip offset from the pointer, in logical pixels
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Last pointer-move event, kept until the next one arrives
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Logical pixels from the window's top-left corner
    pub screen: Option<Vec2>,
    /// Normalized device coordinates, y up
    pub ndc: Option<Vec2>,
}

impl PointerState {
    pub fn record(&mut self, screen: Vec2, window_size: Vec2) {
        self.screen = Some(screen);
        self.ndc = screen_to_ndc(screen, window_size);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Convert a window position to NDC. None for a zero-sized window.
pub fn screen_to_ndc(screen: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (screen.x / window_size.x) * 2.0 - 1.0,
        -(screen.y / window_size.y) * 2.0 + 1.0,
    ))
}

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    NoHover,
    Hovering(BodyId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Entered(BodyId),
    Switched { from: BodyId, to: BodyId },
    Left(BodyId),
}

impl HoverState {
    /// Feed this frame's pick result; returns the transition if the state changed
    pub fn update(&mut self, hit: Option<BodyId>) -> Option<HoverTransition> {
        let transition = match (*self, hit) {
            (HoverState::NoHover, Some(id)) => Some(HoverTransition::Entered(id)),
            (HoverState::Hovering(from), Some(to)) if from != to => {
                Some(HoverTransition::Switched { from, to })
            }
            (HoverState::Hovering(from), None) => Some(HoverTransition::Left(from)),
            _ => None,
        };
        *self = match hit {
            Some(id) => HoverState::Hovering(id),
            None => HoverState::NoHover,
        };
        transition
    }

    pub fn hovered(&self) -> Option<BodyId> {
        match self {
            HoverState::Hovering(id) => Some(*id),
            HoverState::NoHover => None,
        }
    }
}

/// What the tooltip display should do this frame
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipCommand {
    Show { name: String, screen: Vec2 },
    Hide,
}

/// Tooltip placement pinned to the last raw pointer event, not the body's
/// projected position
pub fn tooltip_command(
    hover: &HoverState,
    registry: &BodyRegistry,
    pointer: &PointerState,
) -> TooltipCommand {
    let (Some(id), Some(screen)) = (hover.hovered(), pointer.screen) else {
        return TooltipCommand::Hide;
    };
    match registry.get(id) {
        Some(body) => TooltipCommand::Show {
            name: body.name().to_string(),
            screen: screen + TOOLTIP_OFFSET,
        },
        None => TooltipCommand::Hide,
    }
}
