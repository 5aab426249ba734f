use miette::Diagnostic;
use thiserror::Error;

pub const DIAL_SIZE: i64 = 100;
pub const START_POSITION: i64 = 50;

#[derive(Debug, Error, Diagnostic)]
pub enum DialError {
    #[error("malformed instruction line: {0:?}")]
    #[diagnostic(code(day01::malformed_instruction))]
    MalformedInstruction(String),
    #[error("unknown direction {0:?}")]
    #[diagnostic(code(day01::unknown_direction))]
    UnknownDirection(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = DialError;

    fn try_from(letter: char) -> Result<Self, DialError> {
        match letter {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(DialError::UnknownDirection(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub letter: char,
    pub magnitude: i64,
}

mod parser {
    use nom::{
        character::complete::{digit1, satisfy},
        combinator::{all_consuming, map_res},
        sequence::pair,
        IResult,
    };

    use super::{DialError, Instruction};

    // any letter parses here; direction legality is checked when the
    // rotation is applied
    fn instruction(input: &str) -> IResult<&str, Instruction> {
        let (rest, (letter, magnitude)) = all_consuming(pair(
            satisfy(|c: char| c.is_ascii_alphabetic()),
            map_res(digit1, str::parse),
        ))(input)?;

        Ok((rest, Instruction { letter, magnitude }))
    }

    pub fn parse_input(input: &str) -> Result<Vec<Instruction>, DialError> {
        input
            .lines()
            .map(|line| {
                instruction(line)
                    .map(|(_, instruction)| instruction)
                    .map_err(|_| DialError::MalformedInstruction(line.to_string()))
            })
            .collect()
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    let instructions = parser::parse_input(input)?;

    tracing::debug!(lines = instructions.len(), "parsed instructions");

    let mut position = START_POSITION;
    let mut stops_on_zero = 0u64;

    for instruction in &instructions {
        let offset = match Direction::try_from(instruction.letter)? {
            Direction::Left => -instruction.magnitude,
            Direction::Right => instruction.magnitude,
        };
        position = (position + offset).rem_euclid(DIAL_SIZE);
        if position == 0 {
            stops_on_zero += 1;
        }
    }

    Ok(stops_on_zero.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "\
L68
L30
R48
L5
R60
L55
L1
L99
R14
L82";
        assert_eq!("3", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("R50", "1")]
    #[case("L60\nR10", "1")] // only the second rotation rests on zero
    #[case("R49", "0")]
    #[case("R1000", "0")] // ten full turns back to 50
    fn test_counting_cases(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("L")]
    #[case("5L")]
    fn test_malformed_lines(#[case] line: &str) {
        assert!(matches!(
            parser::parse_input(line),
            Err(DialError::MalformedInstruction(_))
        ));
    }

    #[test]
    fn test_direction_checked_at_rotation_time() {
        assert!(parser::parse_input("U5").is_ok());
        assert!(process("U5").is_err());
    }
}
