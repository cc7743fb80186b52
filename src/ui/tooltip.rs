//! Hover tooltip that follows the pointer

use bevy::prelude::*;

use crate::bodies::BodyRegistry;
use crate::control::ThemeState;
use crate::picking::{HoverState, PointerState, TooltipCommand, tooltip_command};
use crate::ui::state::{Tooltip, TooltipText};
use crate::ui::theme::{text_color, tooltip_background};

pub fn spawn_tooltip(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            display: Display::None,
            padding: UiRect::axes(Val::Px(6.0), Val::Px(3.0)),
            ..default()
        },
        BackgroundColor(tooltip_background(ThemeState::default())),
        GlobalZIndex(10),
        Tooltip,
        Name::new("Tooltip"),
        children![(
            Text::new(""),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(text_color(ThemeState::default())),
            TooltipText,
        )],
    ));
}

/// Show the hovered body's name at the last pointer position, or hide
pub fn update_tooltip(
    hover: Res<HoverState>,
    pointer: Res<PointerState>,
    registry: Res<BodyRegistry>,
    mut tooltip: Query<&mut Node, With<Tooltip>>,
    mut label: Query<&mut Text, With<TooltipText>>,
) -> Result {
    let mut node = tooltip.single_mut()?;

    match tooltip_command(&hover, &registry, &pointer) {
        TooltipCommand::Show { name, screen } => {
            node.display = Display::Flex;
            node.left = Val::Px(screen.x);
            node.top = Val::Px(screen.y);
            let mut text = label.single_mut()?;
            if text.0 != name {
                text.0 = name;
            }
        }
        TooltipCommand::Hide => {
            if node.display != Display::None {
                node.display = Display::None;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn world_with_tooltip() -> (World, crate::bodies::BodyId) {
        let mut world = World::new();
        let mut registry = BodyRegistry::default();
        let earth = registry.create_body("Earth", 0.85, 8.0, 0.009).unwrap();
        world.insert_resource(registry);
        world.init_resource::<HoverState>();
        world.init_resource::<PointerState>();
        world.run_system_once(spawn_tooltip).unwrap();
        (world, earth)
    }

    fn run_update(world: &mut World) {
        let result: Result = world.run_system_once(update_tooltip).unwrap();
        result.unwrap();
    }

    fn tooltip_node(world: &mut World) -> Node {
        world
            .query_filtered::<&Node, With<Tooltip>>()
            .single(world)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_tooltip_follows_pointer_while_hovering() {
        let (mut world, earth) = world_with_tooltip();
        world
            .resource_mut::<PointerState>()
            .record(Vec2::new(200.0, 150.0), Vec2::new(800.0, 600.0));
        *world.resource_mut::<HoverState>() = HoverState::Hovering(earth);

        run_update(&mut world);

        let node = tooltip_node(&mut world);
        assert_eq!(node.display, Display::Flex);
        assert_eq!(node.left, Val::Px(210.0));
        assert_eq!(node.top, Val::Px(160.0));
        let text = world
            .query_filtered::<&Text, With<TooltipText>>()
            .single(&world)
            .unwrap();
        assert_eq!(text.0, "Earth");
    }

    #[test]
    fn test_tooltip_hidden_without_hover() {
        let (mut world, earth) = world_with_tooltip();
        *world.resource_mut::<HoverState>() = HoverState::Hovering(earth);
        world
            .resource_mut::<PointerState>()
            .record(Vec2::new(5.0, 5.0), Vec2::new(800.0, 600.0));
        run_update(&mut world);

        *world.resource_mut::<HoverState>() = HoverState::NoHover;
        run_update(&mut world);
        assert_eq!(tooltip_node(&mut world).display, Display::None);
    }
}
