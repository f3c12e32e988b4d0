use super::coding_error::CodingError;
use super::node::Node;
use super::tree::HuffmanTree;
use super::Bit;

/// Searches the code word of `symbol` below `node`, zero side first.
///
/// The first matching leaf wins if a symbol occurs more than once. A leaf
/// that matches by itself has the empty code.
pub fn find_code<S: PartialEq>(node: &Node<S>, symbol: &S) -> Option<Vec<Bit>> {
    let mut path = Vec::new();
    if find_path(node, symbol, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn find_path<S: PartialEq>(node: &Node<S>, symbol: &S, path: &mut Vec<Bit>) -> bool {
    match node {
        Node::Leaf {
            symbol: candidate, ..
        } => candidate == symbol,
        Node::Internal { zero, one, .. } => {
            path.push(false);
            if find_path(zero, symbol, path) {
                return true;
            }
            path.pop();
            path.push(true);
            if find_path(one, symbol, path) {
                return true;
            }
            path.pop();
            false
        }
    }
}

fn fill_table<S: Clone>(node: &Node<S>, path: &mut Vec<Bit>, table: &mut Vec<(S, Vec<Bit>)>) {
    match node {
        Node::Leaf { symbol, .. } => table.push((symbol.clone(), path.clone())),
        Node::Internal { zero, one, .. } => {
            path.push(false);
            fill_table(zero, path, table);
            path.pop();
            path.push(true);
            fill_table(one, path, table);
            path.pop();
        }
    }
}

pub struct HuffmanEncoder<'a, S> {
    tree: &'a HuffmanTree<S>,
}

impl<'a, S: Clone + PartialEq> HuffmanEncoder<'a, S> {
    pub fn new(tree: &'a HuffmanTree<S>) -> Self {
        HuffmanEncoder { tree }
    }

    /// Concatenates the code words of all symbols in `input`.
    ///
    /// Stops at the first symbol without a leaf and returns no bits at all
    /// in that case.
    pub fn encode(&self, input: &[S]) -> Result<Vec<Bit>, CodingError<S>> {
        let mut bits = Vec::new();
        for symbol in input {
            let code = self
                .code_of(symbol)
                .ok_or_else(|| CodingError::UnknownSymbol(symbol.clone()))?;
            bits.extend(code);
        }
        log::debug!("Encoded {} symbols into {} bits", input.len(), bits.len());
        Ok(bits)
    }

    pub fn code_of(&self, symbol: &S) -> Option<Vec<Bit>> {
        find_code(self.tree.root(), symbol)
    }

    /// Every leaf with its code word, zero side first.
    pub fn code_table(&self) -> Vec<(S, Vec<Bit>)> {
        let mut table = Vec::with_capacity(self.tree.leaf_count());
        fill_table(self.tree.root(), &mut Vec::new(), &mut table);
        table
    }
}

#[cfg(test)]
mod test {
    use super::{find_code, HuffmanEncoder};
    use crate::bit_text::parse_bits;
    use crate::huffman::{CodingError, HuffmanTree, Node};

    fn bits(text: &str) -> Vec<bool> {
        parse_bits(text).unwrap()
    }

    fn example_tree() -> HuffmanTree<char> {
        HuffmanTree::new(&['a', 'b', 'c', 'd', 'e', 'f'], &[12, 45, 5, 13, 9, 16]).unwrap()
    }

    #[test]
    fn test_code_of_each_symbol() {
        let tree = example_tree();
        let encoder = HuffmanEncoder::new(&tree);
        let expected_codes = [
            ('a', "100"),
            ('b', "0"),
            ('c', "1100"),
            ('d', "101"),
            ('e', "1101"),
            ('f', "111"),
        ];
        for (symbol, code) in expected_codes {
            assert_eq!(
                encoder.code_of(&symbol),
                Some(bits(code)),
                "Code of symbol {} does not match",
                symbol
            );
        }
    }

    #[test]
    fn test_encode_sequence() {
        let tree = example_tree();
        let encoder = HuffmanEncoder::new(&tree);
        assert_eq!(encoder.encode(&['a', 'b', 'c']), Ok(bits("10001100")));
        assert_eq!(encoder.encode(&['a', 'a', 'a']), Ok(bits("100100100")));
    }

    #[test]
    fn test_encode_long_sequence() {
        let tree = example_tree();
        let input: Vec<char> = "abcdefabcdef".chars().collect();
        assert_eq!(
            tree.encode(&input),
            Ok(bits("100011001011101111100011001011101111"))
        );
    }

    #[test]
    fn test_encode_empty_sequence() {
        let tree = example_tree();
        assert_eq!(tree.encode(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_unknown_symbol_aborts_encoding() {
        let tree = example_tree();
        assert_eq!(
            tree.encode(&['a', 'b', 'z']),
            Err(CodingError::UnknownSymbol('z'))
        );
        assert_eq!(HuffmanEncoder::new(&tree).code_of(&'z'), None);
    }

    #[test]
    fn test_duplicate_symbol_uses_first_leaf_found() {
        let tree =
            HuffmanTree::new(&['a', 'b', 'c', 'e', 'e', 'f'], &[45, 45, 5, 13, 9, 9]).unwrap();
        let encoder = HuffmanEncoder::new(&tree);
        assert_eq!(encoder.code_of(&'a'), Some(bits("11")));
        assert_eq!(encoder.code_of(&'b'), Some(bits("0")));
        assert_eq!(encoder.code_of(&'c'), Some(bits("1000")));
        assert_eq!(encoder.code_of(&'e'), Some(bits("1001")));
        assert_eq!(encoder.code_of(&'f'), Some(bits("1010")));
    }

    #[test]
    fn test_code_table_lists_leaves_zero_side_first() {
        let tree = example_tree();
        let table = HuffmanEncoder::new(&tree).code_table();
        let expected = vec![
            ('b', bits("0")),
            ('a', bits("100")),
            ('d', bits("101")),
            ('c', bits("1100")),
            ('e', bits("1101")),
            ('f', bits("111")),
        ];
        assert_eq!(table, expected);
    }

    #[test]
    fn test_matching_leaf_has_empty_code() {
        let leaf = Node::leaf('a', 1);
        assert_eq!(find_code(&leaf, &'a'), Some(Vec::new()));
        assert_eq!(find_code(&leaf, &'b'), None);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let tree = example_tree();
        let table = HuffmanEncoder::new(&tree).code_table();
        for (symbol, code) in &table {
            for (other_symbol, other_code) in &table {
                if symbol != other_symbol {
                    assert!(
                        !other_code.starts_with(code),
                        "Code of {} is a prefix of the code of {}",
                        symbol,
                        other_symbol
                    );
                }
            }
        }
    }
}
