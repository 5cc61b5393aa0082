//! Named texture slots mapped onto cube directions.

use super::Direction;
use serde::{Deserialize, Serialize};

/// A face, or group of faces, a texture assignment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// One canonical direction.
    Single(Direction),
    /// North, south, east and west.
    AllSides,
    /// All six directions.
    AllFaces,
}

static FACE_DIRECTIONS: [Direction; 6] = Direction::ALL;

static SIDE_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Side {
    /// Map a texture key from a model onto a side.
    ///
    /// Keys that name no face (`particle`, `texture`, `end`, ...) fall back to
    /// [`Side::AllFaces`].
    pub fn from_name(name: &str) -> Side {
        match name {
            "down" | "bottom" => Side::Single(Direction::Down),
            "up" | "top" => Side::Single(Direction::Up),
            "north" => Side::Single(Direction::North),
            "south" => Side::Single(Direction::South),
            "east" => Side::Single(Direction::East),
            "west" => Side::Single(Direction::West),
            "side" | "sides" => Side::AllSides,
            "all" => Side::AllFaces,
            _ => Side::AllFaces,
        }
    }

    /// Directions covered by this side, in ordinal order.
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            Side::Single(dir) => {
                let i = dir.ordinal();
                &FACE_DIRECTIONS[i..=i]
            }
            Side::AllSides => &SIDE_DIRECTIONS,
            Side::AllFaces => &FACE_DIRECTIONS,
        }
    }

    /// Bit mask of the covered directions.
    pub fn mask(&self) -> u8 {
        self.directions().iter().fold(0, |mask, dir| mask | dir.bit())
    }

    /// Fallback priority: the ordinal of the first direction the side covers.
    ///
    /// Groups therefore rank below the individual faces they include, so an
    /// explicit `up` texture outranks an earlier `all`.
    pub fn priority(&self) -> usize {
        self.directions()[0].ordinal()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Single(dir) => write!(f, "{}", dir),
            Side::AllSides => write!(f, "sides"),
            Side::AllFaces => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table() {
        assert_eq!(Side::from_name("bottom"), Side::Single(Direction::Down));
        assert_eq!(Side::from_name("down"), Side::Single(Direction::Down));
        assert_eq!(Side::from_name("top"), Side::Single(Direction::Up));
        assert_eq!(Side::from_name("west"), Side::Single(Direction::West));
        assert_eq!(Side::from_name("sides"), Side::AllSides);
        assert_eq!(Side::from_name("side"), Side::AllSides);
        assert_eq!(Side::from_name("all"), Side::AllFaces);
    }

    #[test]
    fn test_unknown_keyword_is_broadest_group() {
        assert_eq!(Side::from_name("particle"), Side::AllFaces);
        assert_eq!(Side::from_name("North"), Side::AllFaces);
    }

    #[test]
    fn test_masks() {
        assert_eq!(Side::AllFaces.mask(), 0b11_1111);
        assert_eq!(Side::AllSides.mask(), 0b11_1100);
        assert_eq!(Side::Single(Direction::Up).mask(), 0b10);
    }

    #[test]
    fn test_priority() {
        assert_eq!(Side::AllFaces.priority(), 0);
        assert_eq!(Side::AllSides.priority(), 2);
        assert_eq!(Side::Single(Direction::West).priority(), 5);
    }
}
