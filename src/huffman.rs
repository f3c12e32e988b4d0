//! Huffman prefix codes built from symbol frequency tables.
//!
//! A [`HuffmanTree`] is built once from parallel symbol and frequency
//! slices and then only read. [`HuffmanEncoder`] turns symbols into bits
//! by searching the tree, [`HuffmanDecoder`] walks it bit by bit.

mod coding_error;
mod decoder;
mod encoder;
mod node;
mod tree;

pub use coding_error::CodingError;
pub use decoder::{Decoded, HuffmanDecoder, INCOMPLETE_MARKER};
pub use encoder::{find_code, HuffmanEncoder};
pub use node::Node;
pub use tree::HuffmanTree;

pub type Frequency = u64;
pub type Bit = bool;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolFrequency<S> {
    pub symbol: S,
    pub frequency: Frequency,
}

impl<S> From<(S, Frequency)> for SymbolFrequency<S> {
    fn from(value: (S, Frequency)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}
