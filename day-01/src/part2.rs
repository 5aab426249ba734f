use itertools::Itertools;
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

/// One input line: a direction letter and a rotation amount.
///
/// The letter stays raw here; it is resolved to a [`Direction`] when the
/// rotation is applied, so a line like `U5` parses fine and fails later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub letter: char,
    pub magnitude: i64,
}

/// The dial: current position plus a running count of 0/100 boundary
/// crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    pub position: i64,
    pub crossings: u64,
}

impl Dial {
    pub fn new() -> Self {
        Self {
            position: START_POSITION,
            crossings: 0,
        }
    }

    /// Rotates the dial and counts every boundary crossing.
    ///
    /// Magnitudes above 100 wrap more than once, so normalization loops
    /// until the position is back on the dial. Landing exactly on a
    /// multiple of 100 still counts as one crossing.
    pub fn apply(&mut self, instruction: &Instruction) -> Result<(), DialError> {
        let mut raw = match Direction::try_from(instruction.letter)? {
            Direction::Left => self.position - instruction.magnitude,
            Direction::Right => self.position + instruction.magnitude,
        };

        while raw >= DIAL_SIZE {
            raw -= DIAL_SIZE;
            self.crossings += 1;
        }
        while raw < 0 {
            raw += DIAL_SIZE;
            self.crossings += 1;
        }

        self.position = raw;
        Ok(())
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
    }
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

    tracing::debug!(
        lines = instructions.len(),
        sample = %instructions
            .iter()
            .take(3)
            .map(|i| format!("{}{}", i.letter, i.magnitude))
            .join(" "),
        "parsed instructions"
    );

    let mut dial = Dial::new();
    let mut zero_landings = 0u64;

    for instruction in &instructions {
        dial.apply(instruction)?;
        if dial.position == 0 {
            zero_landings += 1;
        }
    }

    Ok((dial.crossings + zero_landings).to_string())
}
