use std::fmt::Debug;

use crate::bit_text::format_bits;
use crate::huffman::Bit;

const LOG_CONFIGURATION_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(error) = log4rs::init_file(LOG_CONFIGURATION_FILE, Default::default()) {
        eprintln!(
            "Logging disabled, unable to load '{}': {}",
            LOG_CONFIGURATION_FILE, error
        );
    }
}

pub fn log_code_table<S: Debug>(table: &[(S, Vec<Bit>)]) {
    for (symbol, code) in table {
        log::debug!("{:?} {}", symbol, format_bits(code));
    }
}
