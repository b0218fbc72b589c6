use std::fmt;

use crate::rope::Point;

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Malformed(nom::error::Error<String>),
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> InputError {
        InputError::Io(e)
    }
}

impl From<nom::error::Error<String>> for InputError {
    fn from(e: nom::error::Error<String>) -> InputError {
        InputError::Malformed(e)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "unable to read input: {}", e),
            InputError::Malformed(e) => {
                // Only show the offending line, not the rest of the file.
                let line = e.input.lines().next().unwrap_or_default();
                write!(f, "malformed input at {:?} ({:?})", line, e.code)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Malformed(_) => None,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Input(InputError),

    /// A knot ended up further from its leader than a single head step can
    /// explain. This is a logic error in the follow rule, never bad input.
    InvariantViolation {
        knot: usize,
        leader: Point,
        follower: Point,
    },
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Error {
        Error::Input(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InvariantViolation {
                knot,
                leader,
                follower,
            } => write!(
                f,
                "knot {} at {} was left behind by its leader at {}",
                knot, follower, leader
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Input(e) => Some(e),
            Error::InvariantViolation { .. } => None,
        }
    }
}
