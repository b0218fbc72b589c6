use std::io::Read;
use std::iter::Sum;
use std::str::FromStr;

use nom::character::complete::digit1;
use nom::combinator::map_res;
use nom::{Finish, IResult, Parser};

use crate::error::InputError;

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: Sum<N> + FromStr,
{
    map_res(digit1, |s| N::from_str(s)).parse(input)
}

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

// Lifetime hacks to make the `?` operator usable with nom results.
pub fn nom_parse_to_owned<I, O, P>(
    mut parser: P,
    input: &I,
) -> Result<O, nom::error::Error<I::Owned>>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
    P: for<'i> Parser<&'i I, O, nom::error::Error<&'i I>>,
{
    match parser.parse(input).finish() {
        Ok((_i, o)) => Ok(o),
        Err(e) => Err(nom_error_to_owned(e)),
    }
}

/// Reads everything from `reader` and runs `parser` over it.
pub fn read_and_parse<R, O, P>(mut reader: R, parser: P) -> Result<O, InputError>
where
    R: Read,
    P: for<'i> Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    Ok(nom_parse_to_owned(parser, buffer.as_str())?)
}
