//! Unit geometry on the stage: centers, closest unit and drag navigation

use serde::{Deserialize, Serialize};

use crate::topology::{GridTopology, WaferGrid};
use crate::types::{Direction, GridPos, UnitIndex};

/// Bias, in edges, a neighbor must win by before a horizontal drag moves
/// the focus. Edges count as screen pixels.
pub const HORIZONTAL_BIAS_EDGES: f64 = 4.0;
/// Same for vertical drags
pub const VERTICAL_BIAS_EDGES: f64 = 2.0;

/// Point in stage (world) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Size of one unit on the stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitGeometry {
    pub unit_width: f64,
    pub unit_height: f64,
    /// Gap between adjacent units
    pub margin: f64,
}

impl Default for UnitGeometry {
    fn default() -> Self {
        Self {
            unit_width: 100.0,
            unit_height: 200.0,
            margin: 0.0,
        }
    }
}

impl UnitGeometry {
    /// Margin kept around a unit when it fills the view.
    pub fn edge(&self) -> f64 {
        self.unit_width / 4.0
    }

    pub fn unit_center(&self, pos: GridPos) -> Point {
        Point::new(
            pos.x as f64 * (self.unit_width + self.margin) + self.unit_width / 2.0,
            pos.y as f64 * (self.unit_height + self.margin) + self.unit_height / 2.0,
        )
    }
}

/// The unit whose center is nearest to `point`. Ties go to the lower index.
pub fn closest_unit(grid: &WaferGrid, geometry: &UnitGeometry, point: Point) -> Option<UnitIndex> {
    let mut best: Option<(UnitIndex, f64)> = None;
    for (index, pos) in grid.iter() {
        let distance = geometry.unit_center(pos).distance_to(point);
        if best.map_or(true, |(_, min)| distance < min) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// The neighbor of `focus` in `direction`, if it exists and lies closer to
/// `center` than `focus` by more than the direction's bias.
///
/// Distances are compared on screen, i.e. multiplied by the stage `scale`,
/// while the bias stays fixed.
pub fn closer_neighbor(
    grid: &WaferGrid,
    geometry: &UnitGeometry,
    focus: UnitIndex,
    direction: Direction,
    center: Point,
    scale: f64,
) -> Option<UnitIndex> {
    let neighbor = grid.neighbor(focus, direction)?;
    let bias = match direction {
        Direction::East | Direction::West => HORIZONTAL_BIAS_EDGES,
        Direction::North | Direction::South => VERTICAL_BIAS_EDGES,
    } * geometry.edge();

    let focus_distance = geometry.unit_center(grid.position(focus)?).distance_to(center) * scale;
    let neighbor_distance = geometry
        .unit_center(grid.position(neighbor)?)
        .distance_to(center)
        * scale;

    (neighbor_distance + bias < focus_distance).then_some(neighbor)
}

/// Focus moves implied by a pointer drag of `drag` (screen delta) that left
/// the view centered on `center` at stage `scale`.
///
/// The horizontal axis is resolved before the vertical one, and the second
/// step starts from wherever the first one moved the focus. Dragging right
/// pulls in the western neighbor, dragging down the northern one.
pub fn drag_directions(
    grid: &WaferGrid,
    geometry: &UnitGeometry,
    focus: UnitIndex,
    center: Point,
    scale: f64,
    drag: (f64, f64),
) -> Vec<Direction> {
    let (dx, dy) = drag;
    let mut moves = Vec::new();
    if dx == 0.0 && dy == 0.0 {
        return moves;
    }

    let horizontal = if dx > 0.0 { Direction::West } else { Direction::East };
    let vertical = if dy > 0.0 { Direction::North } else { Direction::South };

    let mut focus = focus;
    for direction in [horizontal, vertical] {
        if let Some(next) = closer_neighbor(grid, geometry, focus, direction, center, scale) {
            moves.push(direction);
            focus = next;
        }
    }
    moves
}
