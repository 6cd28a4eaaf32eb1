pub mod instruction;
pub mod position;
pub mod robot;

pub use instruction::{parse_route, Instruction, RouteParseError, Turn};
pub use position::{Direction, Position};
pub use robot::Robot;
