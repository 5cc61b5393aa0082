//! Cuboid model elements and their rotation.

use crate::types::{quarter_turns, Axis};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Edge length of the local model space.
pub const MODEL_UNITS: f32 = 16.0;

/// Centre of the local model space; rotations pivot around it.
const CENTRE: f32 = MODEL_UNITS / 2.0;

/// An axis-aligned cuboid within a model.
///
/// Corners are in local model coordinates (0-16). They are stored as written
/// in the document, so `from` is not guaranteed to be the minimum corner; use
/// [`Element::min`] and [`Element::max`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// First corner.
    pub from: [f32; 3],
    /// Opposite corner.
    pub to: [f32; 3],
}

impl Element {
    pub fn new(from: [f32; 3], to: [f32; 3]) -> Self {
        Self { from, to }
    }

    /// Per-axis minimum of the two corners.
    pub fn min(&self) -> [f32; 3] {
        [
            self.from[0].min(self.to[0]),
            self.from[1].min(self.to[1]),
            self.from[2].min(self.to[2]),
        ]
    }

    /// Per-axis maximum of the two corners.
    pub fn max(&self) -> [f32; 3] {
        [
            self.from[0].max(self.to[0]),
            self.from[1].max(self.to[1]),
            self.from[2].max(self.to[2]),
        ]
    }

    /// Rotate around an axis through the centre of the model space.
    ///
    /// Quarter turns are exact coordinate swaps; any other angle goes through
    /// a quaternion and is subject to float rounding.
    pub fn rotate(&self, axis: Axis, degrees: i32) -> Element {
        Element {
            from: rotate_point(self.from, axis, degrees),
            to: rotate_point(self.to, axis, degrees),
        }
    }

    /// Rotate around the X axis (up turns towards north).
    pub fn rotate_x(&self, degrees: i32) -> Element {
        self.rotate(Axis::X, degrees)
    }

    /// Rotate around the Y axis (north turns towards east).
    pub fn rotate_y(&self, degrees: i32) -> Element {
        self.rotate(Axis::Y, degrees)
    }

    /// Rotate around the Z axis (up turns towards east).
    pub fn rotate_z(&self, degrees: i32) -> Element {
        self.rotate(Axis::Z, degrees)
    }
}

fn rotate_point(point: [f32; 3], axis: Axis, degrees: i32) -> [f32; 3] {
    let degrees = degrees.rem_euclid(360);
    if degrees % 90 == 0 {
        let [mut x, mut y, mut z] = point;
        for _ in 0..quarter_turns(degrees) {
            (x, y, z) = match axis {
                Axis::X => (x, z, MODEL_UNITS - y),
                Axis::Y => (MODEL_UNITS - z, y, x),
                Axis::Z => (y, MODEL_UNITS - x, z),
            };
        }
        return [x, y, z];
    }

    // Same sense as the quarter turns above: clockwise looking down the axis.
    let rotation = Quat::from_axis_angle(Vec3::from(axis.unit_vector()), -(degrees as f32).to_radians());
    let centre = Vec3::splat(CENTRE);
    (rotation * (Vec3::from(point) - centre) + centre).to_array()
}
