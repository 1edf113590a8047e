//! Bounded 2-D index space of wafer units
//!
//! Units are addressed by their enumeration index. Neighbors are resolved by
//! grid coordinate, so layouts with ragged edges (a round wafer) work the
//! same way as plain rectangles: a missing coordinate is simply "none".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::GridError;
use crate::types::{Direction, GridPos, UnitIndex};

/// Inclusive range of valid unit indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub min: UnitIndex,
    pub max: UnitIndex,
}

impl IndexRange {
    pub fn contains(&self, index: UnitIndex) -> bool {
        index >= self.min && index <= self.max
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Neighbor lookups over a bounded grid.
///
/// Lookups on an index outside [`GridTopology::index_range`] answer `None`
/// rather than panicking.
pub trait GridTopology {
    /// The unit one step away in `direction`, or `None` at a grid edge.
    fn neighbor(&self, index: UnitIndex, direction: Direction) -> Option<UnitIndex>;

    fn index_range(&self) -> IndexRange;

    fn contains(&self, index: UnitIndex) -> bool {
        self.index_range().contains(index)
    }
}

/// Column extent of each row of the standard 384-unit wafer
const STANDARD_WAFER_ROWS: [(i32, i32); 16] = [
    (12, 23),
    (12, 23),
    (8, 27),
    (8, 27),
    (4, 31),
    (4, 31),
    (0, 35),
    (0, 35),
    (0, 35),
    (0, 35),
    (4, 31),
    (4, 31),
    (8, 27),
    (8, 27),
    (12, 23),
    (12, 23),
];

/// One row of a ragged wafer layout, `x_start..=x_end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpan {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

/// Unit layout of a wafer
#[derive(Debug, Clone)]
pub struct WaferGrid {
    positions: Vec<GridPos>,
    lookup: HashMap<GridPos, UnitIndex>,
}

impl WaferGrid {
    /// Row-major rectangle: `index = y * columns + x`.
    pub fn rectangular(columns: u32, rows: u32) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::ZeroDimension { columns, rows });
        }
        let width = i32::try_from(columns).map_err(|_| GridError::TooLarge)?;
        let height = i32::try_from(rows).map_err(|_| GridError::TooLarge)?;

        let positions = (0..height)
            .flat_map(|y| (0..width).map(move |x| GridPos::new(x, y)))
            .collect();
        Self::from_positions(positions)
    }

    /// The round 384-unit wafer on a 36x16 coordinate grid.
    pub fn standard_wafer() -> Result<Self, GridError> {
        let rows: Vec<RowSpan> = STANDARD_WAFER_ROWS
            .iter()
            .zip(0..)
            .map(|(&(x_start, x_end), y)| RowSpan { y, x_start, x_end })
            .collect();
        Self::from_rows(&rows)
    }

    /// Units enumerated row by row, west to east within each row.
    pub fn from_rows(rows: &[RowSpan]) -> Result<Self, GridError> {
        let mut positions = Vec::new();
        for row in rows {
            if row.x_start > row.x_end {
                return Err(GridError::InvalidRow {
                    y: row.y,
                    x_start: row.x_start,
                    x_end: row.x_end,
                });
            }
            positions.extend((row.x_start..=row.x_end).map(|x| GridPos::new(x, row.y)));
        }
        Self::from_positions(positions)
    }

    /// Unit `i` sits at `positions[i]`.
    pub fn from_positions(positions: Vec<GridPos>) -> Result<Self, GridError> {
        if positions.is_empty() {
            return Err(GridError::Empty);
        }
        UnitIndex::try_from(positions.len()).map_err(|_| GridError::TooLarge)?;

        let mut lookup = HashMap::with_capacity(positions.len());
        for (index, &pos) in positions.iter().enumerate() {
            if lookup.insert(pos, index as UnitIndex).is_some() {
                return Err(GridError::DuplicatePosition { x: pos.x, y: pos.y });
            }
        }

        log::debug!("Built wafer grid with {} units", positions.len());
        Ok(Self { positions, lookup })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: UnitIndex) -> Option<GridPos> {
        self.positions.get(index as usize).copied()
    }

    pub fn unit_at(&self, pos: GridPos) -> Option<UnitIndex> {
        self.lookup.get(&pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitIndex, GridPos)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(index, &pos)| (index as UnitIndex, pos))
    }
}

impl GridTopology for WaferGrid {
    fn neighbor(&self, index: UnitIndex, direction: Direction) -> Option<UnitIndex> {
        let pos = self.position(index)?;
        self.unit_at(pos.step(direction))
    }

    fn index_range(&self) -> IndexRange {
        IndexRange {
            min: 0,
            max: (self.positions.len() - 1) as UnitIndex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_neighbors() {
        let grid = WaferGrid::rectangular(4, 4).unwrap();
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.index_range(), IndexRange { min: 0, max: 15 });

        assert_eq!(grid.neighbor(5, Direction::North), Some(1));
        assert_eq!(grid.neighbor(5, Direction::East), Some(6));
        assert_eq!(grid.neighbor(5, Direction::South), Some(9));
        assert_eq!(grid.neighbor(5, Direction::West), Some(4));
    }

    #[test]
    fn test_edges_have_no_neighbor() {
        let grid = WaferGrid::rectangular(4, 4).unwrap();
        assert_eq!(grid.neighbor(0, Direction::North), None);
        assert_eq!(grid.neighbor(0, Direction::West), None);
        assert_eq!(grid.neighbor(3, Direction::East), None);
        assert_eq!(grid.neighbor(15, Direction::South), None);
        // no wrap-around from the end of one row to the next
        assert_eq!(grid.neighbor(4, Direction::West), None);
    }

    #[test]
    fn test_invalid_index_answers_none() {
        let grid = WaferGrid::rectangular(4, 4).unwrap();
        assert!(!grid.contains(16));
        assert_eq!(grid.position(16), None);
        for direction in Direction::ALL {
            assert_eq!(grid.neighbor(16, direction), None);
        }
    }

    #[test]
    fn test_ragged_rows() {
        // a small "round" wafer:
        //     . X X .
        //     X X X X
        //     . X X .
        let grid = WaferGrid::from_rows(&[
            RowSpan { y: 0, x_start: 1, x_end: 2 },
            RowSpan { y: 1, x_start: 0, x_end: 3 },
            RowSpan { y: 2, x_start: 1, x_end: 2 },
        ])
        .unwrap();

        assert_eq!(grid.len(), 8);
        assert_eq!(grid.position(0), Some(GridPos::new(1, 0)));
        assert_eq!(grid.position(2), Some(GridPos::new(0, 1)));
        // west end of the middle row has nothing to the north
        assert_eq!(grid.neighbor(2, Direction::North), None);
        assert_eq!(grid.neighbor(3, Direction::North), Some(0));
        assert_eq!(grid.neighbor(0, Direction::West), None);
    }

    #[test]
    fn test_standard_wafer() {
        let grid = WaferGrid::standard_wafer().unwrap();
        assert_eq!(grid.len(), 384);
        assert_eq!(grid.index_range(), IndexRange { min: 0, max: 383 });
        assert_eq!(grid.position(0), Some(GridPos::new(12, 0)));
        assert_eq!(grid.position(383), Some(GridPos::new(23, 15)));
        // first unit of the first full-width row
        assert_eq!(grid.unit_at(GridPos::new(0, 6)), Some(120));
        assert_eq!(grid.neighbor(120, Direction::North), None);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            WaferGrid::rectangular(0, 3).unwrap_err(),
            GridError::ZeroDimension { columns: 0, rows: 3 }
        );
        assert_eq!(WaferGrid::from_positions(vec![]).unwrap_err(), GridError::Empty);
        assert_eq!(
            WaferGrid::from_positions(vec![GridPos::new(1, 1), GridPos::new(1, 1)]).unwrap_err(),
            GridError::DuplicatePosition { x: 1, y: 1 }
        );
        assert!(matches!(
            WaferGrid::from_rows(&[RowSpan { y: 0, x_start: 3, x_end: 1 }]),
            Err(GridError::InvalidRow { .. })
        ));
    }
}
