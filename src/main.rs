use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_input_focus::directional_navigation::DirectionalNavigationPlugin;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod config;
mod control;
mod error;
mod orbital;
mod picking;
mod ui;
mod visualization;

use bodies::BodiesPlugin;
use config::SystemConfig;
use control::ControlPlugin;
use orbital::OrbitalPlugin;
use picking::BodyPickingPlugin;
use ui::{MainCamera, UiPlugin, dark_ui_theme};
use visualization::VisualizationPlugin;

const CAMERA_DISTANCE: f32 = 20.0;
const CAMERA_FOV_DEGREES: f32 = 75.0;

fn setup_camera(mut commands: Commands) {
    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(CAMERA_DISTANCE),
        yaw: Some(0.0),
        pitch: Some(0.0),
        force_update: true,
        // Left button belongs to the panel and hover
        button_orbit: MouseButton::Right,
        button_pan: MouseButton::Middle,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 2_000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    let mut app = App::new();

    // A failing frame system is logged and the loop carries on
    app.set_error_handler(bevy::ecs::error::warn);

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bevy Solar System".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    let config = SystemConfig::load().unwrap_or_else(|e| {
        warn!("Falling back to built-in config: {:#}", e);
        SystemConfig::default()
    });
    app.insert_resource(config);

    app.insert_resource(dark_ui_theme());
    app.add_plugins(FeathersPlugins);
    app.add_plugins(DirectionalNavigationPlugin);
    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(OrbitalPlugin);
    app.add_plugins(BodiesPlugin);
    app.add_plugins(BodyPickingPlugin);
    app.add_plugins(ControlPlugin);
    app.add_plugins(UiPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_systems(Startup, setup_camera);

    app.run();
}
