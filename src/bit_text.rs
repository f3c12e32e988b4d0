use crate::error::Error;
use crate::huffman::Bit;
use crate::Result;

/// Renders bits as a string of `0` and `1`.
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

/// Reads a string of `0` and `1`, any other character is rejected.
pub fn parse_bits(text: &str) -> Result<Vec<Bit>> {
    text.chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(Error::InvalidBitCharacter(other, position)),
        })
        .collect()
}
