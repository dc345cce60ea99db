//! Per-tick ordering via `SystemSet` phases.
//!
//! The controller depends on this order; it is a contract, not a preference.
//!
//! # FixedUpdate phases (`SimulationSet`)
//!
//! ```text
//! Sense  →  PhysicsStep  →  Steer
//! ```
//!
//! * **Sense** – Tick counter, then terrain/pickup sensing. Reads the grid
//!   cell from the position the previous physics step produced and sets the
//!   active speed cap.
//! * **PhysicsStep** – Integrates the velocity computed by the *previous*
//!   tick's steering into position. This is the one-tick actuation lag.
//! * **Steer** – Motion controller: writes velocity and heading for the next
//!   physics step and updates the acceleration scalar.
//!
//! # Update phases (`SimulationUpdateSet`)
//!
//! ```text
//! Input  →  Visual
//! ```
//!
//! * **Input** – Pointer events overwrite the target point. No other effect.
//! * **Visual** – Sprite and HUD sync; never mutates simulation state.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Sense,
    PhysicsStep,
    Steer,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationUpdateSet {
    Input,
    Visual,
}
