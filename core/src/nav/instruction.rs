use std::fmt;
use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

/// Quarter-turn direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

/// One route step: turn, then move forward `steps` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub turn: Turn,
    pub steps: u32,
}

impl Instruction {
    pub fn new(turn: Turn, steps: u32) -> Self {
        Self { turn, steps }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.turn {
            Turn::Left => 'L',
            Turn::Right => 'R',
        };
        write!(f, "{}{}", letter, self.steps)
    }
}

/// Route-string parse failure, carrying the offending token.
///
/// The legacy parser surfaced the platform's generic numeric-conversion
/// failure and lost the malformed token; these variants keep it.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RouteParseError {
    #[error("empty instruction token")]
    EmptyToken,
    #[error("unrecognized turn letter in token `{0}`")]
    UnknownTurn(String),
    #[error("invalid step count in token `{token}`")]
    InvalidSteps {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses a comma-separated route like `"R2,L3,L1"`.
///
/// Embedded spaces are ignored anywhere in the input; every token must be
/// a turn letter (`L` or `R`) followed by a non-negative integer step
/// count.
pub fn parse_route(input: &str) -> Result<Vec<Instruction>, RouteParseError> {
    input
        .split(',')
        .map(|raw| parse_token(&strip_spaces(raw)))
        .collect()
}

fn strip_spaces(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_token(token: &str) -> Result<Instruction, RouteParseError> {
    let mut chars = token.chars();
    let turn = match chars.next() {
        None => return Err(RouteParseError::EmptyToken),
        Some('L') => Turn::Left,
        Some('R') => Turn::Right,
        Some(_) => return Err(RouteParseError::UnknownTurn(token.to_string())),
    };

    let steps = chars
        .as_str()
        .parse::<u32>()
        .map_err(|source| RouteParseError::InvalidSteps {
            token: token.to_string(),
            source,
        })?;

    Ok(Instruction::new(turn, steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_route() {
        let route = parse_route("R2,L3,L1").unwrap();
        assert_eq!(
            route,
            vec![
                Instruction::new(Turn::Right, 2),
                Instruction::new(Turn::Left, 3),
                Instruction::new(Turn::Left, 1),
            ]
        );
    }

    #[test]
    fn embedded_spaces_are_ignored() {
        let route = parse_route(" R 2 , L3 ,L 1").unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route[0], Instruction::new(Turn::Right, 2));
        assert_eq!(route[2], Instruction::new(Turn::Left, 1));
    }

    #[test]
    fn empty_token_is_an_error() {
        assert_eq!(parse_route("R2,,L1"), Err(RouteParseError::EmptyToken));
        assert_eq!(parse_route("R2,L1,"), Err(RouteParseError::EmptyToken));
        assert_eq!(parse_route(""), Err(RouteParseError::EmptyToken));
    }

    #[test]
    fn unknown_turn_letter_carries_the_token() {
        assert_eq!(
            parse_route("R2,X3"),
            Err(RouteParseError::UnknownTurn("X3".to_string()))
        );
    }

    #[test]
    fn non_numeric_steps_carry_the_token() {
        match parse_route("R2,Labc") {
            Err(RouteParseError::InvalidSteps { token, .. }) => assert_eq!(token, "Labc"),
            other => panic!("expected InvalidSteps, got {:?}", other),
        }
    }

    #[test]
    fn missing_step_count_is_invalid() {
        assert!(matches!(
            parse_route("L"),
            Err(RouteParseError::InvalidSteps { .. })
        ));
    }

    #[test]
    fn negative_steps_are_rejected() {
        assert!(matches!(
            parse_route("R-2"),
            Err(RouteParseError::InvalidSteps { .. })
        ));
    }

    #[test]
    fn zero_steps_parse() {
        assert_eq!(parse_route("L0").unwrap(), vec![Instruction::new(Turn::Left, 0)]);
    }

    #[test]
    fn instruction_display_round_trips_token_form() {
        assert_eq!(Instruction::new(Turn::Right, 12).to_string(), "R12");
        assert_eq!(Instruction::new(Turn::Left, 0).to_string(), "L0");
    }
}
