use std::fmt::Display;

use super::{Bit, Frequency};

/// A node of a huffman tree.
///
/// Leaves carry the symbols, internal nodes own exactly two children and
/// cache the sum of their frequencies. The child reached with a `0` bit is
/// the zero side, the other one the one side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        frequency: Frequency,
    },
    Internal {
        frequency: Frequency,
        zero: Box<Node<S>>,
        one: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn leaf(symbol: S, frequency: Frequency) -> Self {
        Node::Leaf { symbol, frequency }
    }

    /// Joins two nodes under a new internal node.
    ///
    /// Returns `None` if the combined frequency does not fit into a
    /// [`Frequency`].
    pub fn merge(zero: Node<S>, one: Node<S>) -> Option<Self> {
        let frequency = zero.frequency().checked_add(one.frequency())?;
        Some(Node::Internal {
            frequency,
            zero: Box::new(zero),
            one: Box::new(one),
        })
    }

    pub fn frequency(&self) -> Frequency {
        match self {
            Node::Leaf { frequency, .. } => *frequency,
            Node::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// The child selected by `bit`, `None` for leaves.
    pub fn child(&self, bit: Bit) -> Option<&Node<S>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { zero, one, .. } => Some(if bit { one } else { zero }),
        }
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { zero, one, .. } => zero.depth().max(one.depth()) + 1,
        }
    }

    /// All leaves below this node, zero side first.
    pub fn leaves(&self) -> Vec<(&S, Frequency)> {
        let mut leaves = Vec::new();
        let mut node_stack = vec![self];
        while let Some(node) = node_stack.pop() {
            match node {
                Node::Leaf { symbol, frequency } => leaves.push((symbol, *frequency)),
                Node::Internal { zero, one, .. } => {
                    node_stack.push(one);
                    node_stack.push(zero);
                }
            }
        }
        leaves
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl<S: Display> Node<S> {
    /// Draws the subtree as lines of equal width.
    pub(crate) fn render(&self) -> Vec<String> {
        match self {
            Node::Leaf { symbol, frequency } => vec![format!("(s:{},f:{})", symbol, frequency)],
            Node::Internal { zero, one, .. } => {
                let left_box = zero.render();
                let right_box = one.render();
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = Self::center_of_first_line(&left_box);
                let right_pos = Self::center_of_first_line(&right_box);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..left_box.len().max(right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }

    fn center_of_first_line(lines: &[String]) -> usize {
        let first_line = &lines[0];
        let indentation = first_line.chars().position(|c| c != ' ').unwrap_or(0);
        (indentation * 2 + first_line.trim().chars().count()) / 2
    }
}
