//! Pointer input: the last press/drag location becomes the steering target.
//!
//! Input handling does no computation. The target is read by the motion
//! controller on the next fixed tick.

use bevy::prelude::*;

/// Last known pointer location in scene coordinates. Persists with no decay.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct TargetPoint(pub Vec2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Moved,
}

/// One batch of pointer locations (all touches reported together).
/// Only the first location in a batch is used.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub locations: Vec<Vec2>,
}

impl PointerEvent {
    pub fn pressed(location: Vec2) -> Self {
        Self {
            phase: PointerPhase::Pressed,
            locations: vec![location],
        }
    }

    pub fn moved(location: Vec2) -> Self {
        Self {
            phase: PointerPhase::Moved,
            locations: vec![location],
        }
    }
}

/// Target after applying `events` in order. Empty batches are ignored.
pub fn latest_target<'a>(
    current: Vec2,
    events: impl IntoIterator<Item = &'a PointerEvent>,
) -> Vec2 {
    events
        .into_iter()
        .filter_map(|e| e.locations.first().copied())
        .last()
        .unwrap_or(current)
}

pub fn apply_pointer_events(
    mut events: EventReader<PointerEvent>,
    mut target: ResMut<TargetPoint>,
) {
    let next = latest_target(target.0, events.read());
    if next != target.0 {
        target.0 = next;
    }
}
