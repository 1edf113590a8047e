use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;

/// Enumeration index of a wafer unit (HICANN).
pub type UnitIndex = u32;

/// Position of a unit on the wafer grid. Row 0 is the northern edge and `x`
/// grows eastward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "east" | "e" => Ok(Direction::East),
            "south" | "s" => Ok(Direction::South),
            "west" | "w" => Ok(Direction::West),
            _ => Err(ParseNameError::new("direction", s)),
        }
    }
}

/// Rendering detail level. Exactly one tier is active at a time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DetailTier {
    /// Aggregate per-unit visuals for the whole wafer
    #[default]
    Overview,
    /// Sprite-based feature layers for the focused neighborhood
    DetailOne,
    /// Vector graphics feature layers for the focused neighborhood
    DetailTwo,
}

impl DetailTier {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailTier::Overview => "overview",
            DetailTier::DetailOne => "detail_one",
            DetailTier::DetailTwo => "detail_two",
        }
    }
}

impl fmt::Display for DetailTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_opposite() {
        let origin = GridPos::new(3, 3);
        for direction in Direction::ALL {
            assert_eq!(origin.step(direction).step(direction.opposite()), origin);
        }
        assert_eq!(origin.step(Direction::North), GridPos::new(3, 2));
        assert_eq!(origin.step(Direction::West), GridPos::new(2, 3));
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("w".parse::<Direction>().unwrap(), Direction::West);
        let err = "up".parse::<Direction>().unwrap_err();
        assert_eq!(err.to_string(), "unknown direction 'up'");
    }

    #[test]
    fn test_default_tier_is_overview() {
        assert_eq!(DetailTier::default(), DetailTier::Overview);
        assert_eq!(DetailTier::DetailTwo.to_string(), "detail_two");
    }
}
