//! Tracking which cube directions have received a texture.

use crate::types::{Direction, Side};

/// Coverage of the six cube directions during one registration pass.
///
/// Every recorded texture marks the directions of its side as covered and may
/// become the fallback: a texture replaces the current fallback when its
/// side's priority is at least the priority of the side that set it, so ties
/// go to the later entry.
#[derive(Debug, Clone)]
pub struct FaceCoverage<T> {
    covered: u8,
    fallback: Option<(usize, T)>,
}

impl<T> Default for FaceCoverage<T> {
    fn default() -> Self {
        Self {
            covered: 0,
            fallback: None,
        }
    }
}

impl<T: Clone> FaceCoverage<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `texture` was assigned to `side`.
    pub fn record(&mut self, side: Side, texture: T) -> &mut Self {
        self.covered |= side.mask();

        let priority = side.priority();
        let replaces = match &self.fallback {
            Some((current, _)) => priority >= *current,
            None => true,
        };
        if replaces {
            self.fallback = Some((priority, texture));
        }
        self
    }

    pub fn is_covered(&self, direction: Direction) -> bool {
        self.covered & direction.bit() != 0
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn fallback(&self) -> Option<&T> {
        self.fallback.as_ref().map(|(_, texture)| texture)
    }

    /// Directions no texture has been recorded for, in ordinal order.
    pub fn missing_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| !self.is_covered(*dir))
            .collect()
    }

    /// Assign the fallback to every missing direction.
    ///
    /// Returns the assignments made and marks those directions covered. With
    /// no fallback (nothing was recorded) this does nothing and the directions
    /// stay missing.
    pub fn apply_fallback(&mut self) -> Vec<(Direction, T)> {
        let Some(fallback) = self.fallback() else {
            return Vec::new();
        };

        let assignments: Vec<_> = self
            .missing_directions()
            .into_iter()
            .map(|dir| (dir, fallback.clone()))
            .collect();
        for (dir, _) in &assignments {
            self.covered |= dir.bit();
        }
        assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_coverage_has_no_fallback() {
        let mut coverage: FaceCoverage<&str> = FaceCoverage::new();

        assert_eq!(coverage.missing_directions(), Direction::ALL.to_vec());
        assert!(!coverage.has_fallback());
        assert!(coverage.apply_fallback().is_empty());
        assert_eq!(coverage.missing_directions().len(), 6);
    }

    #[test]
    fn test_explicit_face_outranks_earlier_group() {
        let mut coverage = FaceCoverage::new();
        coverage
            .record(Side::from_name("all"), "dirt")
            .record(Side::from_name("up"), "grass");

        assert_eq!(coverage.fallback(), Some(&"grass"));
        assert!(coverage.apply_fallback().is_empty());
        assert!(coverage.missing_directions().is_empty());
    }

    #[test]
    fn test_higher_direction_wins_regardless_of_order() {
        let mut coverage = FaceCoverage::new();
        coverage
            .record(Side::Single(Direction::West), "west")
            .record(Side::Single(Direction::Down), "down");

        assert_eq!(coverage.fallback(), Some(&"west"));
    }

    #[test]
    fn test_ties_favour_latest() {
        let mut coverage = FaceCoverage::new();
        coverage
            .record(Side::Single(Direction::Up), "first")
            .record(Side::from_name("top"), "second");

        assert_eq!(coverage.fallback(), Some(&"second"));
    }

    #[test]
    fn test_fallback_fills_missing_directions() {
        let mut coverage = FaceCoverage::new();
        coverage
            .record(Side::Single(Direction::Down), "bottom")
            .record(Side::Single(Direction::North), "front");

        assert_eq!(
            coverage.missing_directions(),
            vec![Direction::Up, Direction::South, Direction::East, Direction::West]
        );

        let filled = coverage.apply_fallback();
        assert_eq!(
            filled,
            vec![
                (Direction::Up, "front"),
                (Direction::South, "front"),
                (Direction::East, "front"),
                (Direction::West, "front"),
            ]
        );
        assert!(coverage.missing_directions().is_empty());
        assert!(coverage.apply_fallback().is_empty());
    }

    #[test]
    fn test_sides_group_covers_horizontal_faces() {
        let mut coverage = FaceCoverage::new();
        coverage.record(Side::AllSides, "log");

        assert!(coverage.is_covered(Direction::West));
        assert!(!coverage.is_covered(Direction::Up));
        assert_eq!(coverage.missing_directions(), vec![Direction::Down, Direction::Up]);
    }
}
