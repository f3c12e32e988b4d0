use huffman_codec::bit_text::format_bits;
use huffman_codec::huffman::{CodingError, HuffmanEncoder, HuffmanTree};

fn main() -> Result<(), CodingError<char>> {
    // symbol-frequency pairs
    let symbols = ['a', 'b', 'c', 'd', 'e', 'f'];
    let frequencies = [12, 45, 5, 13, 9, 16];

    let tree = HuffmanTree::new(&symbols, &frequencies)?;
    println!("huffman tree\n{}", tree);

    let encoder = HuffmanEncoder::new(&tree);
    println!("code table");
    for (symbol, code) in encoder.code_table() {
        println!("{} {}", symbol, format_bits(&code));
    }

    let sequence_to_encode = "fadebcab";
    let encoded = tree.encode_str(sequence_to_encode)?;
    println!("sequence to encode\n{}", sequence_to_encode);
    println!("encoded sequence\n{}", format_bits(&encoded));

    let decoded = tree.decode_to_string(&encoded);
    println!("decoded sequence\n{}", decoded);

    let truncated = &encoded[..encoded.len() - 1];
    println!(
        "decoded sequence without its last bit\n{}",
        tree.decode_to_string(truncated)
    );
    Ok(())
}
