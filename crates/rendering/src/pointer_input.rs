//! Pointer capture: mouse and touch input turned into scene-space
//! [`PointerEvent`]s for the simulation.
//!
//! A press or drag anywhere on the map moves the target. When several
//! touches are down, they are reported together, ordered by touch id, and
//! the simulation steers toward the first.

use bevy::prelude::*;

use simulation::pointer::{PointerEvent, PointerPhase};

use crate::camera::SceneCamera;
use crate::egui_input_guard::egui_wants_pointer;

/// Screen positions of the active touches, lowest id first.
pub fn ordered_touch_positions(touches: impl IntoIterator<Item = (u64, Vec2)>) -> Vec<Vec2> {
    let mut touches: Vec<(u64, Vec2)> = touches.into_iter().collect();
    touches.sort_by_key(|(id, _)| *id);
    touches.into_iter().map(|(_, position)| position).collect()
}

/// Phase for this frame's pointer activity, if any.
pub fn pointer_phase(just_pressed: bool, held_and_moved: bool) -> Option<PointerPhase> {
    if just_pressed {
        Some(PointerPhase::Pressed)
    } else if held_and_moved {
        Some(PointerPhase::Moved)
    } else {
        None
    }
}

pub fn capture_pointer(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    touches: Res<Touches>,
    mut contexts: bevy_egui::EguiContexts,
    mut pointer_events: EventWriter<PointerEvent>,
) {
    let moved = cursor_moved.read().count() > 0;
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let to_scene = |screen: Vec2| camera.viewport_to_world_2d(camera_transform, screen).ok();

    // Touch first: on touch screens the cursor mirrors the primary touch.
    let touch_phase = pointer_phase(
        touches.any_just_pressed(),
        touches.iter().any(|t| t.delta() != Vec2::ZERO),
    );
    if let Some(phase) = touch_phase {
        let locations: Vec<Vec2> =
            ordered_touch_positions(touches.iter().map(|t| (t.id(), t.position())))
                .into_iter()
                .filter_map(to_scene)
                .collect();
        if !locations.is_empty() {
            pointer_events.send(PointerEvent { phase, locations });
        }
        return;
    }

    let mouse_phase = pointer_phase(
        buttons.just_pressed(MouseButton::Left),
        buttons.pressed(MouseButton::Left) && moved,
    );
    let Some(phase) = mouse_phase else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(location) = window.cursor_position().and_then(to_scene) {
        pointer_events.send(PointerEvent {
            phase,
            locations: vec![location],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_sorted_by_id() {
        let ordered = ordered_touch_positions([
            (7, Vec2::new(7.0, 0.0)),
            (2, Vec2::new(2.0, 0.0)),
            (4, Vec2::new(4.0, 0.0)),
        ]);
        assert_eq!(
            ordered,
            vec![Vec2::new(2.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(7.0, 0.0)]
        );
    }

    #[test]
    fn test_press_wins_over_move() {
        assert_eq!(pointer_phase(true, true), Some(PointerPhase::Pressed));
        assert_eq!(pointer_phase(false, true), Some(PointerPhase::Moved));
        assert_eq!(pointer_phase(false, false), None);
    }
}
