use std::fmt::{self, Debug, Display};

/// Failures while building a tree or encoding symbols with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingError<S> {
    ArityMismatch { symbols: usize, frequencies: usize },
    TooFewSymbols(usize),
    FrequencyOverflow,
    UnknownSymbol(S),
}

impl<S: Debug> Display for CodingError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch {
                symbols,
                frequencies,
            } => {
                write!(
                    f,
                    "Got {} symbols but {} frequencies, both must be of equal size",
                    symbols, frequencies
                )
            }
            Self::TooFewSymbols(count) => {
                write!(
                    f,
                    "A huffman tree needs at least 2 symbols, but got {}",
                    count
                )
            }
            Self::FrequencyOverflow => {
                write!(f, "Sum of all frequencies exceeds {}", u64::MAX)
            }
            Self::UnknownSymbol(symbol) => {
                write!(
                    f,
                    "Tried to encode {:?} but that is not part of the tree",
                    symbol
                )
            }
        }
    }
}

impl<S: Debug> std::error::Error for CodingError<S> {}
