//! Tile-group definitions for the object layer.
//!
//! The tile set is data: a list of named groups, each declaring which
//! [`Marker`] it stands for. Placement needs the two groups named `"Duck"`
//! and `"Gas Can"`; if either is missing the scene cannot start.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SceneConfigError;
use crate::grid::Marker;

pub const DUCK_GROUP: &str = "Duck";
pub const GAS_CAN_GROUP: &str = "Gas Can";

const DEFAULT_TILESET: &str = include_str!("../data/tileset.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGroup {
    pub name: String,
    #[serde(default)]
    pub marker: Marker,
    /// sRGB colour used by the sprite renderer.
    pub color: [f32; 3],
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct TileSet {
    pub groups: Vec<TileGroup>,
}

impl TileSet {
    /// The definition shipped inside the crate.
    pub fn embedded() -> Result<Self, SceneConfigError> {
        Self::from_json(DEFAULT_TILESET)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneConfigError> {
        serde_json::from_str(json).map_err(|e| SceneConfigError::TileSetParse(e.to_string()))
    }

    pub fn group(&self, name: &str) -> Option<&TileGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Group drawn for a given marker, if the set defines one.
    pub fn group_for(&self, marker: Marker) -> Option<&TileGroup> {
        self.groups.iter().find(|g| g.marker == marker)
    }
}

/// The two marker templates resolved from the tile set.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MarkerTemplates {
    pub duck: TileGroup,
    pub gas_can: TileGroup,
}

impl MarkerTemplates {
    pub fn resolve(tileset: &TileSet) -> Result<Self, SceneConfigError> {
        let lookup = |name: &str, expected: Marker| {
            let group = tileset
                .group(name)
                .ok_or_else(|| SceneConfigError::MissingTileGroup(name.to_string()))?;
            if group.marker != expected {
                return Err(SceneConfigError::TemplateMarkerMismatch {
                    group: name.to_string(),
                    expected,
                    found: group.marker,
                });
            }
            Ok(group.clone())
        };
        Ok(Self {
            duck: lookup(DUCK_GROUP, Marker::Duck)?,
            gas_can: lookup(GAS_CAN_GROUP, Marker::GasCan)?,
        })
    }

    /// Template for a cell: water gets the duck, land gets the gas can.
    pub fn for_terrain(&self, on_land: bool) -> &TileGroup {
        if on_land {
            &self.gas_can
        } else {
            &self.duck
        }
    }
}
