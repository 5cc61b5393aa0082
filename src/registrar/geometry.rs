//! Geometry handed to the rendering sink.

use crate::model::Element;
use serde::Serialize;

/// An axis-aligned box in the unit cube (0-1), min corner first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cuboid {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Cuboid {
    pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    /// Scale an element from model units down to the unit cube and order its
    /// corners per axis.
    pub fn from_element(element: &Element, unit_scale: f32) -> Self {
        let (min, max) = (element.min(), element.max());
        Self {
            min: [min[0] / unit_scale, min[1] / unit_scale, min[2] / unit_scale],
            max: [max[0] / unit_scale, max[1] / unit_scale, max[2] / unit_scale],
        }
    }
}

/// Geometry for one block variant.
///
/// Everything except `Cuboids` is a fixed shape the renderer draws itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "cuboids", rename_all = "lowercase")]
pub enum BlockShape {
    Cuboids(Vec<Cuboid>),
    Door,
    Fence,
    Wall,
    Pane,
    Plant,
}
