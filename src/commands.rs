use std::io::Read;

use log::debug;

use crate::error::InputError;
use crate::parser::{base10_numeric, read_and_parse};
use crate::rope::{expand, Command, Move};

/// Reads the whole puzzle input and flattens it into unit commands.
pub fn read_commands<R: Read>(reader: R) -> Result<Vec<Command>, InputError> {
    let moves = read_and_parse(reader, parser::parse_input)?;
    let commands = expand(&moves);

    debug!("parsed {} moves, {} steps", moves.len(), commands.len());

    Ok(commands)
}

pub mod parser {
    use super::*;

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::{line_ending, space1};
    use nom::combinator::{eof, verify};
    use nom::multi::{many0, separated_list1};
    use nom::sequence::{separated_pair, terminated, tuple};
    use nom::{IResult, Parser};

    fn direction(input: &str) -> IResult<&str, Command> {
        alt((
            tag("U").map(|_| Command::Up),
            tag("D").map(|_| Command::Down),
            tag("L").map(|_| Command::Left),
            tag("R").map(|_| Command::Right),
        ))
        .parse(input)
    }

    fn count(input: &str) -> IResult<&str, u64> {
        verify(base10_numeric, |n: &u64| *n > 0).parse(input)
    }

    fn a_move(input: &str) -> IResult<&str, Move> {
        separated_pair(direction, space1, count)
            .map(|(command, count)| Move { command, count })
            .parse(input)
    }

    pub fn parse_input(input: &str) -> IResult<&str, Vec<Move>> {
        terminated(
            separated_list1(line_ending, a_move),
            tuple((many0(line_ending), eof)),
        )
        .parse(input)
    }
}
