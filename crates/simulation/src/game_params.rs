//! Data-driven drive parameters.
//!
//! All speed limits and controller constants live in the [`DriveParams`]
//! resource so they can be tuned from a JSON file without recompiling.
//! Values are in scene units; steps are applied once per fixed tick.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SceneConfigError;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveParams {
    /// Speed cap while the vehicle's cell has no terrain tile.
    pub water_max_speed: f32,
    /// Speed cap while the vehicle's cell has a terrain tile.
    pub land_max_speed: f32,
    /// Inside this distance from the target the car slows down.
    pub target_threshold: f32,
    /// Largest per-tick increase when below the cap.
    pub max_accel_step: f32,
    /// Largest per-tick decrease when above the cap.
    pub max_decel_step: f32,
    /// Heading only follows velocity above this acceleration.
    pub heading_threshold: f32,
    /// Near-target acceleration below this snaps to zero.
    pub stop_threshold: f32,
    /// Number of random picks made by object placement.
    pub object_count: usize,
    /// Placement seed; `None` draws from OS entropy.
    pub placement_seed: Option<u64>,
    pub terrain_seed: i32,
}

impl Default for DriveParams {
    fn default() -> Self {
        Self {
            water_max_speed: 200.0,
            land_max_speed: 4000.0,
            target_threshold: 200.0,
            max_accel_step: 40.0,
            max_decel_step: 80.0,
            heading_threshold: 5.0,
            stop_threshold: 2.0,
            object_count: 64,
            placement_seed: None,
            terrain_seed: 1337,
        }
    }
}

impl DriveParams {
    /// Parse a (possibly partial) parameter file. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SceneConfigError> {
        serde_json::from_str(json).map_err(|e| SceneConfigError::ParamsParse(e.to_string()))
    }

    /// Read and parse a parameter file from disk.
    pub fn load(path: &std::path::Path) -> Result<Self, SceneConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Cap for a cell, given whether it holds a terrain tile.
    pub fn cap_for(&self, on_land: bool) -> f32 {
        if on_land {
            self.land_max_speed
        } else {
            self.water_max_speed
        }
    }
}
