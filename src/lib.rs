use bit_text::{format_bits, parse_bits};
use clap::{builder::PossibleValue, ValueEnum};
pub use cli::CLIParser;
pub use error::Error;
use huffman::{Frequency, HuffmanEncoder, HuffmanTree};

pub mod bit_text;
mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Encode,
    Decode,
    Table,
}

impl ValueEnum for Mode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Encode, Self::Decode, Self::Table]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Encode => Some(PossibleValue::new("encode")),
            Self::Decode => Some(PossibleValue::new("decode")),
            Self::Table => Some(PossibleValue::new("table")),
        }
    }
}

pub struct Arguments {
    symbols: Vec<char>,
    frequencies: Vec<Frequency>,
    mode: Mode,
    input: Option<String>,
    show_tree: bool,
}

fn require_input<'a>(arguments: &'a Arguments, mode: &'static str) -> Result<&'a str> {
    arguments
        .input
        .as_deref()
        .ok_or(Error::MissingInput(mode))
}

/// Builds the tree described by `arguments` and runs the selected mode on
/// the input. Returns the text to print.
pub fn run_codec(arguments: &Arguments) -> Result<String> {
    let tree = HuffmanTree::new(&arguments.symbols, &arguments.frequencies)?;
    log::info!(
        "Built tree over {} symbols with total frequency {}",
        tree.leaf_count(),
        tree.frequency()
    );
    let encoder = HuffmanEncoder::new(&tree);
    let code_table = encoder.code_table();
    logger::log_code_table(&code_table);

    let mut output = String::new();
    if arguments.show_tree {
        output.push_str(&tree.to_string());
    }
    match arguments.mode {
        Mode::Encode => {
            let bits = tree.encode_str(require_input(arguments, "encode")?)?;
            output.push_str(&format_bits(&bits));
        }
        Mode::Decode => {
            let bits = parse_bits(require_input(arguments, "decode")?)?;
            output.push_str(&tree.decode_to_string(&bits));
        }
        Mode::Table => {
            let lines: Vec<String> = code_table
                .iter()
                .map(|(symbol, code)| format!("{} {}", symbol, format_bits(code)))
                .collect();
            output.push_str(&lines.join("\n"));
        }
    }
    Ok(output)
}
