//! Seedable RNG resource for object placement.
//!
//! Wraps `ChaCha8Rng` so the scatter is reproducible when a seed is
//! configured. Systems take `ResMut<PlacementRng>` and use `rng.0`
//! (a `ChaCha8Rng` implementing `rand::Rng`); nothing reads a process-wide RNG.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::game_params::DriveParams;

#[derive(Resource)]
pub struct PlacementRng(pub ChaCha8Rng);

impl PlacementRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from `placement_seed`, or from OS entropy when unset.
    pub fn from_params(params: &DriveParams) -> Self {
        match params.placement_seed {
            Some(seed) => Self::from_seed_u64(seed),
            None => Self(ChaCha8Rng::from_entropy()),
        }
    }
}

impl FromWorld for PlacementRng {
    fn from_world(world: &mut World) -> Self {
        let params = world.get_resource::<DriveParams>().cloned().unwrap_or_default();
        Self::from_params(&params)
    }
}
