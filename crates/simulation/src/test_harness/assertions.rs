//! Assertion helpers for `TestDrive` integration tests.

use crate::cues::Cue;
use crate::grid::{GridCell, Marker};

use super::TestDrive;

impl TestDrive {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert a cell holds the given marker.
    pub fn assert_marker(&self, cell: GridCell, expected: Marker) {
        let found = self.marker(cell);
        assert_eq!(
            found, expected,
            "Expected {expected:?} at {cell:?}, found {found:?}"
        );
    }

    /// Assert exactly these cues fired since the last drain, in order.
    pub fn assert_cues(&mut self, expected: &[Cue]) {
        let fired = self.drain_cues();
        assert_eq!(fired, expected, "Unexpected cues");
    }

    pub fn assert_no_cues(&mut self) {
        self.assert_cues(&[]);
    }

    /// Assert the acceleration scalar equals a value exactly.
    pub fn assert_acceleration(&self, expected: f32) {
        let found = self.drive_state().acceleration;
        assert_eq!(found, expected, "Expected acceleration {expected}, got {found}");
    }

    /// Assert the active cap equals a value exactly.
    pub fn assert_cap(&self, expected: f32) {
        let found = self.drive_state().max_speed;
        assert_eq!(found, expected, "Expected cap {expected}, got {found}");
    }

    /// Assert the vehicle's velocity is finite (no NaN from a degenerate step).
    pub fn assert_velocity_finite(&self) {
        let v = self.velocity();
        assert!(v.is_finite(), "Velocity is not finite: {v:?}");
    }
}
