//! Audio cue triggers.
//!
//! Gameplay code never plays sound. It calls [`CueSink::play`], and the
//! in-game sink turns that into a [`PlayCueEvent`] for the downstream audio
//! playback system (rendering crate). Cues are fire-and-forget: nothing
//! tracks whether or when the sound finishes.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Vehicle drove over a gas can.
    Refuel,
    /// Vehicle picked up a duck.
    Duck,
}

impl Cue {
    /// Sound file, relative to the asset root.
    pub fn sound_path(self) -> &'static str {
        match self {
            Cue::Refuel => "sounds/Gas.wav",
            Cue::Duck => "sounds/Duck.wav",
        }
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCueEvent {
    pub cue: Cue,
}

impl PlayCueEvent {
    pub fn new(cue: Cue) -> Self {
        Self { cue }
    }
}

/// Anything that can accept a cue.
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

impl CueSink for EventWriter<'_, PlayCueEvent> {
    fn play(&mut self, cue: Cue) {
        debug!("cue: {:?}", cue);
        self.send(PlayCueEvent::new(cue));
    }
}

/// Collects cues in order.
impl CueSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<Cue> = Vec::new();
        sink.play(Cue::Duck);
        sink.play(Cue::Refuel);
        assert_eq!(sink, vec![Cue::Duck, Cue::Refuel]);
    }

    #[test]
    fn test_sound_paths() {
        assert!(Cue::Refuel.sound_path().ends_with("Gas.wav"));
        assert!(Cue::Duck.sound_path().ends_with("Duck.wav"));
    }

    #[test]
    fn test_event_writer_sink_sends_events() {
        let mut world = World::new();
        world.init_resource::<Events<PlayCueEvent>>();
        let mut schedule = Schedule::default();
        schedule.add_systems(|mut writer: EventWriter<PlayCueEvent>| {
            writer.play(Cue::Refuel);
            writer.play(Cue::Duck);
        });
        schedule.run(&mut world);

        let sent: Vec<Cue> = world
            .resource_mut::<Events<PlayCueEvent>>()
            .drain()
            .map(|e| e.cue)
            .collect();
        assert_eq!(sent, vec![Cue::Refuel, Cue::Duck]);
    }
}
