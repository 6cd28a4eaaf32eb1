use crate::nav::instruction::Instruction;
use crate::nav::position::{Direction, Position, GRID_SIZE};

/// Grid robot that walks a turn-and-move route, clamping at the edges.
///
/// Keeps the full path history, start position included, so efficiency
/// metrics can compare actual steps against the straight-line grid
/// distance.
pub struct Robot {
    position: Position,
    direction: Direction,
    path_history: Vec<Position>,
}

impl Robot {
    pub fn new(start: Position, heading: Direction) -> Self {
        Self {
            position: start,
            direction: heading,
            path_history: vec![start],
        }
    }

    /// Turns, then advances one cell at a time, recording each step.
    /// Moves into a wall are clamped and still recorded.
    pub fn execute(&mut self, instruction: Instruction) {
        self.direction = self.direction.turned(instruction.turn);

        for _ in 0..instruction.steps {
            self.position = self.stepped();
            self.path_history.push(self.position);
        }
    }

    pub fn execute_route(&mut self, instructions: &[Instruction]) {
        for instruction in instructions {
            self.execute(*instruction);
        }
    }

    fn stepped(&self) -> Position {
        let (dx, dy) = self.direction.delta();
        Position::new(
            (self.position.x + dx).clamp(0, GRID_SIZE - 1),
            (self.position.y + dy).clamp(0, GRID_SIZE - 1),
        )
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn start_position(&self) -> Position {
        self.path_history[0]
    }

    pub fn path_history(&self) -> &[Position] {
        &self.path_history
    }

    /// Cells actually walked, clamped moves included.
    pub fn actual_steps(&self) -> u32 {
        (self.path_history.len() - 1) as u32
    }

    /// Straight-line grid distance from start to current position.
    pub fn manhattan_distance(&self) -> u32 {
        Position::manhattan(self.start_position(), self.position)
    }

    /// Manhattan distance over actual steps, as a percentage.
    ///
    /// The Manhattan distance is a lower bound that ignores turn
    /// constraints, so 100% is only reachable on straight runs.
    pub fn efficiency_percent(&self) -> f64 {
        let actual = self.actual_steps();
        let manhattan = self.manhattan_distance();

        if actual == 0 {
            return if manhattan == 0 { 100.0 } else { 0.0 };
        }
        f64::from(manhattan) / f64::from(actual) * 100.0
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(Position::default(), Direction::North)
    }
}
