use bevy::prelude::*;

use simulation::grid::TileMapGeometry;

/// The single 2D camera looking at the map.
#[derive(Component)]
pub struct SceneCamera;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, SceneCamera));
}

/// Orthographic scale that fits a `map` of scene units inside a `window` of
/// logical pixels. Degenerate windows (minimised) keep scale 1.
pub fn fit_scale(map: Vec2, window: Vec2) -> f32 {
    if window.x <= 0.0 || window.y <= 0.0 {
        return 1.0;
    }
    (map.x / window.x).max(map.y / window.y)
}

/// Keep the whole map in view as the window is resized.
pub fn fit_camera_to_map(
    windows: Query<&Window>,
    geometry: Res<TileMapGeometry>,
    mut cameras: Query<&mut OrthographicProjection, With<SceneCamera>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok(mut projection) = cameras.get_single_mut() else {
        return;
    };
    let scale = fit_scale(
        geometry.bounds().size(),
        Vec2::new(window.width(), window.height()),
    );
    if (projection.scale - scale).abs() > f32::EPSILON {
        projection.scale = scale;
    }
}
