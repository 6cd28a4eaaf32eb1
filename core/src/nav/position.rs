use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nav::instruction::Turn;

/// Side length of the square navigation grid.
pub const GRID_SIZE: i32 = 10;
/// Default start coordinates, the grid center.
pub const START_X: i32 = 5;
pub const START_Y: i32 = 5;

/// Heading on the grid. North decreases y, south increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Unit step for one move in this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Heading after a quarter turn.
    pub fn turned(self, turn: Turn) -> Direction {
        match (self, turn) {
            (Direction::North, Turn::Right) | (Direction::South, Turn::Left) => Direction::East,
            (Direction::East, Turn::Right) | (Direction::West, Turn::Left) => Direction::South,
            (Direction::South, Turn::Right) | (Direction::North, Turn::Left) => Direction::West,
            (Direction::West, Turn::Right) | (Direction::East, Turn::Left) => Direction::North,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::North
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        write!(f, "{}", name)
    }
}

/// Grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid distance assuming axis-aligned unit moves.
    pub fn manhattan(from: Position, to: Position) -> u32 {
        ((to.x - from.x).abs() + (to.y - from.y).abs()) as u32
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(START_X, START_Y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_right_turns_return_to_start_heading() {
        let mut heading = Direction::North;
        for _ in 0..4 {
            heading = heading.turned(Turn::Right);
        }
        assert_eq!(heading, Direction::North);
    }

    #[test]
    fn left_turn_is_inverse_of_right_turn() {
        for heading in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert_eq!(heading.turned(Turn::Right).turned(Turn::Left), heading);
        }
    }

    #[test]
    fn manhattan_sums_axis_differences() {
        let from = Position::new(5, 5);
        let to = Position::new(6, 2);
        assert_eq!(Position::manhattan(from, to), 4);
        assert_eq!(Position::manhattan(to, from), 4);
        assert_eq!(Position::manhattan(from, from), 0);
    }

    #[test]
    fn default_position_is_grid_center() {
        assert_eq!(Position::default(), Position::new(5, 5));
    }
}
