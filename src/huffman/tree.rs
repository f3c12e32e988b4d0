use std::collections::VecDeque;
use std::fmt;

use super::coding_error::CodingError;
use super::decoder::{Decoded, HuffmanDecoder};
use super::encoder::HuffmanEncoder;
use super::node::Node;
use super::{Bit, Frequency, SymbolFrequency};

/// A huffman tree with at least two leaves, immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
    leaf_count: usize,
}

fn take_two_least_frequent<S>(queue: &mut VecDeque<Node<S>>) -> Option<(Node<S>, Node<S>)> {
    if queue.len() < 2 {
        return None;
    }
    Some((queue.pop_front()?, queue.pop_front()?))
}

// inserts behind every node with less or equal frequency
fn insert_sorted<S>(queue: &mut VecDeque<Node<S>>, node: Node<S>) {
    let position = queue.partition_point(|queued| queued.frequency() <= node.frequency());
    queue.insert(position, node);
}

impl<S: Clone> HuffmanTree<S> {
    /// Builds the tree from two parallel slices.
    ///
    /// Leaves are ordered by frequency with a stable sort, so equal
    /// frequencies keep their input order. The two front nodes are merged
    /// repeatedly, the first one becoming the zero side, and the merged node
    /// is queued behind all nodes of equal frequency. This tie-break decides
    /// the resulting codes whenever frequencies collide.
    pub fn new(symbols: &[S], frequencies: &[Frequency]) -> Result<Self, CodingError<S>> {
        Self::validate_input(symbols.len(), frequencies.len())?;
        let mut leaves: Vec<Node<S>> = symbols
            .iter()
            .cloned()
            .zip(frequencies.iter().copied())
            .map(|(symbol, frequency)| Node::leaf(symbol, frequency))
            .collect();
        leaves.sort_by_key(Node::frequency);

        let leaf_count = leaves.len();
        let root = Self::merge_nodes(VecDeque::from(leaves))?;
        log::debug!(
            "Built huffman tree with {} leaves, depth {} and total frequency {}",
            leaf_count,
            root.depth(),
            root.frequency()
        );
        Ok(HuffmanTree { root, leaf_count })
    }

    pub fn from_symbol_frequencies(
        symbols_and_frequencies: &[SymbolFrequency<S>],
    ) -> Result<Self, CodingError<S>> {
        let (symbols, frequencies): (Vec<S>, Vec<Frequency>) = symbols_and_frequencies
            .iter()
            .map(|sf| (sf.symbol.clone(), sf.frequency))
            .unzip();
        Self::new(&symbols, &frequencies)
    }

    fn validate_input(symbol_count: usize, frequency_count: usize) -> Result<(), CodingError<S>> {
        if symbol_count != frequency_count {
            return Err(CodingError::ArityMismatch {
                symbols: symbol_count,
                frequencies: frequency_count,
            });
        }
        if symbol_count < 2 {
            return Err(CodingError::TooFewSymbols(symbol_count));
        }
        Ok(())
    }

    fn merge_nodes(mut queue: VecDeque<Node<S>>) -> Result<Node<S>, CodingError<S>> {
        while let Some((zero, one)) = take_two_least_frequent(&mut queue) {
            log::trace!(
                "Merging nodes with frequencies {} and {}",
                zero.frequency(),
                one.frequency()
            );
            let merged = Node::merge(zero, one).ok_or(CodingError::FrequencyOverflow)?;
            insert_sorted(&mut queue, merged);
        }
        Ok(queue
            .pop_front()
            .expect("validated input holds at least two nodes"))
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Sum of all input frequencies.
    pub fn frequency(&self) -> Frequency {
        self.root.frequency()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Length of the longest code word.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaves(&self) -> Vec<(&S, Frequency)> {
        self.root.leaves()
    }
}

impl<S: Clone + PartialEq> HuffmanTree<S> {
    pub fn encode(&self, input: &[S]) -> Result<Vec<Bit>, CodingError<S>> {
        HuffmanEncoder::new(self).encode(input)
    }

    pub fn decode(&self, input: &[Bit]) -> Vec<Decoded<S>> {
        HuffmanDecoder::new(self).decode(input)
    }
}

impl HuffmanTree<char> {
    pub fn encode_str(&self, text: &str) -> Result<Vec<Bit>, CodingError<char>> {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols)
    }

    /// Decodes into text, an incomplete trailing code shows up as `?`.
    pub fn decode_to_string(&self, input: &[Bit]) -> String {
        self.decode(input)
            .into_iter()
            .map(|decoded| decoded.to_string())
            .collect()
    }
}

impl<S: fmt::Display> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.root.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
