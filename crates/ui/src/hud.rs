//! Heads-up display: speed, active cap, terrain under the vehicle, and the
//! markers still on the map. Toggle with H.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::grid::{Marker, ObjectLayer, TerrainLayer, TileMapGeometry};
use simulation::motion::DriveState;
use simulation::physics::LinearVelocity;
use simulation::pointer::TargetPoint;
use simulation::scene::SceneHandles;
use simulation::TickCounter;

#[derive(Resource)]
pub struct HudVisible(pub bool);

impl Default for HudVisible {
    fn default() -> Self {
        Self(true)
    }
}

/// Everything the HUD shows, gathered once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HudReadout {
    pub speed: f32,
    pub acceleration: f32,
    pub cap: f32,
    /// `None` when the vehicle is outside the map.
    pub on_land: Option<bool>,
    pub ducks_left: usize,
    pub gas_cans_left: usize,
    pub target: Vec2,
    pub tick: u64,
}

impl HudReadout {
    #[allow(clippy::too_many_arguments)]
    pub fn gather(
        position: Vec2,
        velocity: Vec2,
        drive: &DriveState,
        geometry: &TileMapGeometry,
        terrain: &TerrainLayer,
        objects: &ObjectLayer,
        target: Vec2,
        tick: u64,
    ) -> Self {
        Self {
            speed: velocity.length(),
            acceleration: drive.acceleration,
            cap: drive.max_speed,
            on_land: geometry.cell_at(position).map(|cell| terrain.is_land(cell)),
            ducks_left: objects.count(Marker::Duck),
            gas_cans_left: objects.count(Marker::GasCan),
            target,
            tick,
        }
    }

    pub fn terrain_label(&self) -> &'static str {
        match self.on_land {
            Some(true) => "Land",
            Some(false) => "Water",
            None => "Off map",
        }
    }
}

pub fn toggle_hud(keys: Res<ButtonInput<KeyCode>>, mut visible: ResMut<HudVisible>) {
    if keys.just_pressed(KeyCode::KeyH) {
        visible.0 = !visible.0;
    }
}

#[allow(clippy::too_many_arguments)]
pub fn hud_ui(
    mut contexts: EguiContexts,
    visible: Res<HudVisible>,
    handles: Res<SceneHandles>,
    vehicles: Query<(&Transform, &LinearVelocity, &DriveState)>,
    geometry: Res<TileMapGeometry>,
    terrain: Res<TerrainLayer>,
    objects: Res<ObjectLayer>,
    target: Res<TargetPoint>,
    tick: Res<TickCounter>,
) {
    if !visible.0 {
        return;
    }
    let Ok((transform, velocity, drive)) = vehicles.get(handles.vehicle) else {
        return;
    };
    let readout = HudReadout::gather(
        transform.translation.truncate(),
        velocity.0,
        drive,
        &geometry,
        &terrain,
        &objects,
        target.0,
        tick.0,
    );

    egui::Window::new("Drive")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .resizable(false)
        .collapsible(false)
        .default_width(200.0)
        .show(contexts.ctx_mut(), |ui| {
            egui::Grid::new("drive_hud_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Speed");
                    ui.label(format!("{:.0}", readout.speed));
                    ui.end_row();

                    ui.label("Acceleration");
                    ui.label(format!("{:.0} / {:.0}", readout.acceleration, readout.cap));
                    ui.end_row();

                    ui.label("Terrain");
                    ui.label(readout.terrain_label());
                    ui.end_row();

                    ui.label("Ducks");
                    ui.label(readout.ducks_left.to_string());
                    ui.end_row();

                    ui.label("Gas cans");
                    ui.label(readout.gas_cans_left.to_string());
                    ui.end_row();

                    ui.label("Target");
                    ui.label(format!("({:.0}, {:.0})", readout.target.x, readout.target.y));
                    ui.end_row();

                    ui.label("Tick");
                    ui.label(readout.tick.to_string());
                    ui.end_row();
                });
        });
}
