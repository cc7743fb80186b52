//! Dark and light themes for the scene background and feathers widgets

use bevy::prelude::*;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::{ThemeFontColor, UiTheme};
use bevy_feathers::tokens;

use crate::control::ThemeState;
use crate::ui::MainCamera;
use crate::ui::state::{ControlPanel, Tooltip, TooltipText};

const DARK_BACKGROUND: Color = Color::srgb(0.02, 0.02, 0.03);
const LIGHT_BACKGROUND: Color = Color::srgb(0.933, 0.933, 0.933);
const DARK_TEXT: Color = Color::srgb(0.1, 0.1, 0.12);

/// Scene clear color for a theme
pub fn clear_color(theme: ThemeState) -> Color {
    match theme {
        ThemeState::Dark => DARK_BACKGROUND,
        ThemeState::Light => LIGHT_BACKGROUND,
    }
}

/// Foreground text color for a theme
pub fn text_color(theme: ThemeState) -> Color {
    match theme {
        ThemeState::Dark => palette::LIGHT_GRAY_1,
        ThemeState::Light => DARK_TEXT,
    }
}

/// Tooltip backdrop: translucent dark on the dark theme, translucent light on the light one
pub fn tooltip_background(theme: ThemeState) -> Color {
    match theme {
        ThemeState::Dark => Color::srgba(0.0, 0.0, 0.0, 0.6),
        ThemeState::Light => Color::srgba(1.0, 1.0, 1.0, 0.8),
    }
}

/// Feathers initializes `UiTheme` but leaves it empty; widgets without tokens
/// render with the missing-token fallback color.
pub fn dark_ui_theme() -> UiTheme {
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.window.bg", Color::srgba(0.03, 0.05, 0.08, 0.85));
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", palette::ACCENT);
    theme.set_color("feathers.slider.bg", Color::srgba(0.04, 0.08, 0.12, 0.9));
    theme.set_color("feathers.slider.bar", Color::srgba(0.18, 0.7, 0.8, 0.7));
    theme.set_color("feathers.slider.text", Color::srgba(0.5, 0.9, 0.95, 0.95));
    theme.set_color("feathers.button.bg", Color::srgba(0.06, 0.12, 0.16, 0.9));
    theme.set_color(
        "feathers.button.bg.hover",
        Color::srgba(0.08, 0.2, 0.26, 0.95),
    );
    theme.set_color(
        "feathers.button.bg.pressed",
        Color::srgba(0.1, 0.26, 0.32, 0.95),
    );
    theme.set_color("feathers.button.txt", Color::srgba(0.6, 1.0, 1.0, 1.0));
    theme.set_color(
        "feathers.button.primary.bg",
        Color::srgba(0.08, 0.22, 0.28, 0.95),
    );
    theme.set_color(
        "feathers.button.primary.bg.hover",
        Color::srgba(0.1, 0.28, 0.36, 0.98),
    );
    theme.set_color(
        "feathers.button.primary.bg.pressed",
        Color::srgba(0.12, 0.32, 0.4, 0.98),
    );
    theme.set_color(
        "feathers.button.primary.txt",
        Color::srgba(0.7, 1.0, 1.0, 1.0),
    );
    theme
}

/// Same widget set with light surfaces and dark text
pub fn light_ui_theme() -> UiTheme {
    let mut theme = dark_ui_theme();
    theme.set_color("feathers.window.bg", Color::srgba(0.98, 0.98, 0.98, 0.9));
    theme.set_color("feathers.text.main", DARK_TEXT);
    theme.set_color("feathers.text.dim", Color::srgb(0.35, 0.35, 0.4));
    theme.set_color("feathers.slider.bg", Color::srgba(0.82, 0.85, 0.88, 0.95));
    theme.set_color("feathers.slider.bar", Color::srgba(0.2, 0.5, 0.75, 0.8));
    theme.set_color("feathers.slider.text", DARK_TEXT);
    theme.set_color("feathers.button.bg", Color::srgba(0.85, 0.88, 0.9, 0.95));
    theme.set_color("feathers.button.bg.hover", Color::srgba(0.78, 0.83, 0.87, 1.0));
    theme.set_color(
        "feathers.button.bg.pressed",
        Color::srgba(0.7, 0.76, 0.82, 1.0),
    );
    theme.set_color("feathers.button.txt", DARK_TEXT);
    theme
}

/// Repaint the scene and widgets when the theme flag flips.
///
/// Panel text inherits its color from the panel root. Feathers resolves
/// `ThemeFontColor` only on insert, so it is inserted again after the swap.
pub fn apply_theme(
    theme: Res<ThemeState>,
    mut ui_theme: ResMut<UiTheme>,
    mut commands: Commands,
    mut cameras: Query<&mut Camera, With<MainCamera>>,
    panels: Query<Entity, With<ControlPanel>>,
    mut tooltips: Query<&mut BackgroundColor, With<Tooltip>>,
    mut tooltip_texts: Query<&mut TextColor, With<TooltipText>>,
) {
    if !theme.is_changed() {
        return;
    }

    *ui_theme = match *theme {
        ThemeState::Dark => dark_ui_theme(),
        ThemeState::Light => light_ui_theme(),
    };
    for mut camera in cameras.iter_mut() {
        camera.clear_color = ClearColorConfig::Custom(clear_color(*theme));
    }
    for panel in panels.iter() {
        commands
            .entity(panel)
            .insert(ThemeFontColor(tokens::TEXT_MAIN));
    }
    for mut background in tooltips.iter_mut() {
        background.0 = tooltip_background(*theme);
    }
    for mut color in tooltip_texts.iter_mut() {
        color.0 = text_color(*theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_background_is_eeeeee() {
        let srgba = clear_color(ThemeState::Light).to_srgba();
        assert_eq!(
            [srgba.red, srgba.green, srgba.blue].map(|c| (c * 255.0).round() as u8),
            [0xee, 0xee, 0xee]
        );
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in [ThemeState::Dark, ThemeState::Light] {
            let bg = clear_color(theme).to_srgba();
            let fg = text_color(theme).to_srgba();
            assert!((bg.red - fg.red).abs() > 0.5, "{:?}", theme);
        }
    }

    #[test]
    fn test_tooltip_follows_theme() {
        use crate::ui::tooltip::spawn_tooltip;
        use bevy::ecs::system::RunSystemOnce;

        let mut world = World::new();
        world.insert_resource(dark_ui_theme());
        world.insert_resource(ThemeState::Light);
        world.run_system_once(spawn_tooltip).unwrap();
        world.run_system_once(apply_theme).unwrap();

        let background = world
            .query_filtered::<&BackgroundColor, With<Tooltip>>()
            .single(&world)
            .unwrap()
            .0;
        let text = world
            .query_filtered::<&TextColor, With<TooltipText>>()
            .single(&world)
            .unwrap()
            .0;
        assert_eq!(background, tooltip_background(ThemeState::Light));
        assert_eq!(text, DARK_TEXT);

        let bg = background.to_srgba();
        let fg = text.to_srgba();
        assert!((bg.red - fg.red).abs() > 0.5);
    }
}
