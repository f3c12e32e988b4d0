use crate::huffman::Frequency;
use crate::{Arguments, Mode};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_symbols_argument(command);
        let command = Self::register_frequencies_argument(command);
        let command = Self::register_mode_argument(command);
        let command = Self::register_show_tree_argument(command);
        Self::register_input_argument(command)
    }

    fn register_symbols_argument(command: Command) -> Command {
        command.arg(Self::create_symbols_argument())
    }

    fn register_frequencies_argument(command: Command) -> Command {
        command.arg(Self::create_frequencies_argument())
    }

    fn register_mode_argument(command: Command) -> Command {
        command.arg(Self::create_mode_argument())
    }

    fn register_show_tree_argument(command: Command) -> Command {
        command.arg(Self::create_show_tree_argument())
    }

    fn register_input_argument(command: Command) -> Command {
        command.arg(Self::create_input_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_symbols_argument() -> Arg {
        arg!(symbols: -s --symbols <SYMBOLS> "Symbols of the code, one per character")
            .required(true)
    }

    fn create_frequencies_argument() -> Arg {
        arg!(frequencies: -f --frequencies <FREQUENCIES> "Comma separated frequency of each symbol")
            .required(true)
            .value_delimiter(',')
            .value_parser(value_parser!(Frequency))
    }

    fn create_mode_argument() -> Arg {
        arg!(mode: -m --mode <MODE> "What to do with the input")
            .default_value("encode")
            .value_parser(value_parser!(Mode))
    }

    fn create_show_tree_argument() -> Arg {
        arg!(show_tree: --show_tree "Print the huffman tree before the result")
    }

    fn create_input_argument() -> Arg {
        Arg::new("input")
            .help("Text to encode or string of 0 and 1 to decode")
            .required(false)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            symbols: Self::extract_symbols_argument(matches),
            frequencies: Self::extract_frequencies_argument(matches),
            mode: Self::extract_mode_argument(matches),
            input: Self::extract_input_argument(matches),
            show_tree: Self::extract_show_tree_argument(matches),
        }
    }

    fn extract_symbols_argument(matches: &ArgMatches) -> Vec<char> {
        matches
            .get_one::<String>("symbols")
            .expect("Required argument symbols not provided")
            .chars()
            .collect()
    }

    fn extract_frequencies_argument(matches: &ArgMatches) -> Vec<Frequency> {
        matches
            .get_many::<Frequency>("frequencies")
            .expect("Required argument frequencies not provided")
            .copied()
            .collect()
    }

    fn extract_mode_argument(matches: &ArgMatches) -> Mode {
        matches
            .get_one::<Mode>("mode")
            .expect("Mode must be provided, but was unset.")
            .to_owned()
    }

    fn extract_show_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_tree")
    }

    fn extract_input_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("input").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
