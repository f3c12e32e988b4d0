use std::fmt;

use super::node::Node;
use super::tree::HuffmanTree;
use super::Bit;

/// Written in place of a code word that was cut off by the end of input.
pub const INCOMPLETE_MARKER: char = '?';

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded<S> {
    Symbol(S),
    /// The input ended in the middle of a code word.
    Incomplete,
}

impl<S: fmt::Display> fmt::Display for Decoded<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Symbol(symbol) => write!(f, "{}", symbol),
            Decoded::Incomplete => write!(f, "{}", INCOMPLETE_MARKER),
        }
    }
}

pub struct HuffmanDecoder<'a, S> {
    tree: &'a HuffmanTree<S>,
}

impl<'a, S: Clone> HuffmanDecoder<'a, S> {
    pub fn new(tree: &'a HuffmanTree<S>) -> Self {
        HuffmanDecoder { tree }
    }

    /// Walks the tree bit by bit and restarts at the root after each leaf.
    ///
    /// If the bits end somewhere below the root, a single
    /// [`Decoded::Incomplete`] is appended and the partial path is dropped.
    pub fn decode(&self, input: &[Bit]) -> Vec<Decoded<S>> {
        let root = self.tree.root();
        let mut current_node = root;
        let mut inside_code_word = false;
        let mut out = Vec::new();
        for &bit in input {
            current_node = Self::step(current_node, bit);
            match current_node {
                Node::Leaf { symbol, .. } => {
                    out.push(Decoded::Symbol(symbol.clone()));
                    current_node = root;
                    inside_code_word = false;
                }
                Node::Internal { .. } => inside_code_word = true,
            }
        }
        if inside_code_word {
            log::debug!("Input of {} bits ended inside a code word", input.len());
            out.push(Decoded::Incomplete);
        }
        out
    }

    /// Decodes the code word at the front of `input`.
    ///
    /// Returns the symbol and the number of bits it took, or `None` if
    /// `input` ends before a leaf is reached.
    pub fn find_symbol(&self, input: &[Bit]) -> Option<(&'a S, usize)> {
        let mut current_node = self.tree.root();
        for (index, &bit) in input.iter().enumerate() {
            current_node = Self::step(current_node, bit);
            if let Node::Leaf { symbol, .. } = current_node {
                return Some((symbol, index + 1));
            }
        }
        None
    }

    fn step(node: &'a Node<S>, bit: Bit) -> &'a Node<S> {
        match node.child(bit) {
            Some(child) => child,
            None => unreachable!("decoding never rests on a leaf, the root has two children"),
        }
    }
}
