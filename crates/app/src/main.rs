use std::path::Path;

use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::error::abort_on_config_error;
use simulation::game_params::DriveParams;

/// Environment variable naming an optional JSON file of `DriveParams` overrides.
const PARAMS_ENV: &str = "RESCUE_DRIVE_PARAMS";

fn load_params() -> DriveParams {
    match std::env::var_os(PARAMS_ENV) {
        Some(path) => abort_on_config_error(DriveParams::load(Path::new(&path))),
        None => DriveParams::default(),
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Rescue Drive".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(rendering::color_ramps::WATER));

    // Before SimulationPlugin so its init_resource keeps these values.
    let params = load_params();
    info!("Drive parameters: {:?}", params);
    app.insert_resource(params);

    app.add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
}
