//! Control panel layout and widget observers
use bevy::prelude::*;
use bevy_feathers::controls::{ButtonProps, ButtonVariant, SliderProps, button, slider};
use bevy_feathers::theme::{ThemeBackgroundColor, ThemeFontColor, ThemedText};
use bevy_feathers::tokens;
use bevy_input_focus::tab_navigation::TabGroup;
use bevy_ui_widgets::{Activate, SliderPrecision, SliderStep, SliderValue, ValueChange};

use crate::bodies::BodyRegistry;
use crate::config::SystemConfig;
use crate::control::Controls;
use crate::orbital::SimulationParams;
use crate::ui::state::{
    BodySpeedSlider, ControlPanel, MultiplierSlider, PauseLabel, StatusText, pause_label,
    slider_to_f64,
};

const PANEL_WIDTH_PX: f32 = 260.0;
const SPEED_STEP: f32 = 0.001;
const SPEED_PRECISION: i32 = 3;
const MULTIPLIER_STEP: f32 = 0.1;
const MULTIPLIER_PRECISION: i32 = 1;

fn row() -> Node {
    Node {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        column_gap: Val::Px(8.0),
        ..default()
    }
}

fn row_label(text: impl Into<String>) -> impl Bundle {
    (
        Node {
            width: Val::Px(64.0),
            ..default()
        },
        Text::new(text),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        ThemedText,
    )
}

/// Spawn the panel: one slider per body, the multiplier slider, buttons and status
pub fn spawn_control_panel(
    mut commands: Commands,
    registry: Res<BodyRegistry>,
    params: Res<SimulationParams>,
    config: Res<SystemConfig>,
) {
    let range = config.speed_range;

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                width: Val::Px(PANEL_WIDTH_PX),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
            TabGroup::default(),
            ThemeBackgroundColor(tokens::WINDOW_BG),
            ThemeFontColor(tokens::TEXT_MAIN),
            ControlPanel,
            Name::new("Control Panel"),
        ))
        .with_children(|panel| {
            panel.spawn((Text::new("Orbital speeds"), ThemedText));

            for (id, body) in registry.iter() {
                panel.spawn(row()).with_children(|r| {
                    r.spawn(row_label(body.name()));
                    r.spawn((
                        slider(
                            SliderProps {
                                value: body.angular_speed() as f32,
                                min: range.min as f32,
                                max: range.max as f32,
                            },
                            (SliderStep(SPEED_STEP), SliderPrecision(SPEED_PRECISION)),
                        ),
                        BodySpeedSlider(id),
                    ))
                    .observe(on_body_speed_change);
                });
            }

            panel.spawn(row()).with_children(|r| {
                r.spawn(row_label("Speed x"));
                r.spawn((
                    slider(
                        SliderProps {
                            value: params.speed_multiplier() as f32,
                            min: 0.0,
                            max: config.multiplier_max as f32,
                        },
                        (SliderStep(MULTIPLIER_STEP), SliderPrecision(MULTIPLIER_PRECISION)),
                    ),
                    MultiplierSlider,
                ))
                .observe(on_multiplier_change);
            });

            panel.spawn(row()).with_children(|r| {
                r.spawn(button(
                    ButtonProps {
                        variant: ButtonVariant::Primary,
                        ..default()
                    },
                    (),
                    Spawn((
                        Text::new(pause_label(params.paused())),
                        ThemedText,
                        PauseLabel,
                    )),
                ))
                .observe(|_activate: On<Activate>, mut controls: Controls| {
                    controls.toggle_pause();
                });
                r.spawn(button(
                    ButtonProps::default(),
                    (),
                    Spawn((Text::new("Theme"), ThemedText)),
                ))
                .observe(|_activate: On<Activate>, mut controls: Controls| {
                    controls.toggle_theme();
                });
            });

            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                ThemedText,
                StatusText,
            ));
        });
}

/// Accepted values move the slider thumb; rejected ones leave it where it was
fn on_body_speed_change(
    change: On<ValueChange<f32>>,
    sliders: Query<&BodySpeedSlider>,
    mut controls: Controls,
    mut commands: Commands,
) {
    let Ok(BodySpeedSlider(id)) = sliders.get(change.source) else {
        return;
    };
    if controls.set_body_speed(*id, slider_to_f64(change.value, SPEED_PRECISION)).is_ok() {
        commands
            .entity(change.source)
            .insert(SliderValue(change.value));
    }
}

fn on_multiplier_change(
    change: On<ValueChange<f32>>,
    mut controls: Controls,
    mut commands: Commands,
) {
    if controls
        .set_global_speed_multiplier(slider_to_f64(change.value, MULTIPLIER_PRECISION))
        .is_ok()
    {
        commands
            .entity(change.source)
            .insert(SliderValue(change.value));
    }
}
