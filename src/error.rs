use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    Coding(CodingError<char>),
    InvalidBitCharacter(char, usize),
    MissingInput(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coding(error) => write!(f, "{}", error),
            Self::InvalidBitCharacter(character, position) => {
                write!(
                    f,
                    "Expected '0' or '1' but found '{}' at position {}",
                    character, position
                )
            }
            Self::MissingInput(mode) => {
                write!(f, "Mode '{}' requires an input argument", mode)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Coding(error) => Some(error),
            _ => None,
        }
    }
}

impl From<CodingError<char>> for Error {
    fn from(value: CodingError<char>) -> Self {
        Self::Coding(value)
    }
}
