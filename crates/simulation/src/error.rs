// ---------------------------------------------------------------------------
// SceneConfigError: fatal configuration errors detected at startup
// ---------------------------------------------------------------------------

use std::fmt;

use bevy::log::error;

use crate::grid::Marker;

/// Errors raised while binding the scene or loading its definitions.
///
/// None of these are recoverable: the scene cannot run without its vehicle,
/// its two tile layers, or the marker templates. They are detected once at
/// startup and turned into an abort by [`abort_on_config_error`].
#[derive(Debug)]
pub enum SceneConfigError {
    /// No entity carries the `Vehicle` marker.
    MissingVehicle,
    /// More than one entity carries the `Vehicle` marker.
    DuplicateVehicle(usize),
    /// A required tile layer or map resource was not inserted.
    MissingLayer(&'static str),
    /// The tile set has no group with the given name.
    MissingTileGroup(String),
    /// A required tile group exists but declares the wrong marker.
    TemplateMarkerMismatch {
        group: String,
        expected: Marker,
        found: Marker,
    },
    /// The tile set definition could not be parsed.
    TileSetParse(String),
    /// The parameter file could not be parsed.
    ParamsParse(String),
    /// The parameter file could not be read.
    ParamsIo(std::io::Error),
}

impl fmt::Display for SceneConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneConfigError::MissingVehicle => write!(f, "Scene has no vehicle node"),
            SceneConfigError::DuplicateVehicle(count) => {
                write!(f, "Scene has {count} vehicle nodes, expected exactly one")
            }
            SceneConfigError::MissingLayer(name) => {
                write!(f, "Scene is missing required layer: {name}")
            }
            SceneConfigError::MissingTileGroup(name) => {
                write!(f, "No {name} tile definition found")
            }
            SceneConfigError::TemplateMarkerMismatch {
                group,
                expected,
                found,
            } => write!(
                f,
                "{group} tile definition places {found:?}, expected {expected:?}"
            ),
            SceneConfigError::TileSetParse(msg) => write!(f, "Invalid tile set: {msg}"),
            SceneConfigError::ParamsParse(msg) => write!(f, "Invalid drive parameters: {msg}"),
            SceneConfigError::ParamsIo(e) => write!(f, "Cannot read drive parameters: {e}"),
        }
    }
}

impl std::error::Error for SceneConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneConfigError::ParamsIo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SceneConfigError {
    fn from(e: std::io::Error) -> Self {
        SceneConfigError::ParamsIo(e)
    }
}

/// Unwrap a startup result, aborting the scene with the error message.
pub fn abort_on_config_error<T>(result: Result<T, SceneConfigError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!("Scene configuration error: {e}");
            panic!("Scene configuration error: {e}");
        }
    }
}
