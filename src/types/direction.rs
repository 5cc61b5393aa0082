//! Direction and axis types for face and rotation handling.

use serde::{Deserialize, Serialize};

/// The six canonical cube faces, in priority order.
///
/// The discriminant doubles as the fallback priority used by
/// [`FaceCoverage`](crate::registrar::FaceCoverage): a later direction
/// outranks an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    East = 4,
    West = 5,
}

impl Direction {
    /// All six directions in ordinal order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Single-bit mask for this direction.
    pub fn bit(self) -> u8 {
        1 << self.ordinal()
    }
}

/// Number of whole clockwise quarter turns in `degrees`, in `0..4`.
pub(crate) fn quarter_turns(degrees: i32) -> i32 {
    (degrees / 90).rem_euclid(4)
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// The three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Get the unit vector for this axis.
    pub fn unit_vector(&self) -> [f32; 3] {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_priority_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.ordinal(), i);
            assert_eq!(dir.bit(), 1 << i);
        }
        assert!(Direction::West > Direction::Down);
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(quarter_turns(0), 0);
        assert_eq!(quarter_turns(90), 1);
        assert_eq!(quarter_turns(360), 0);
        assert_eq!(quarter_turns(-90), 3);
        assert_eq!(quarter_turns(-720), 0);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Direction::West.to_string(), "west");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
