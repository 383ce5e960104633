#![no_main]
//! Fuzz target for the QIF parser.
//!
//! Arbitrary bytes go through the lossy line reader, so non-UTF-8 input is
//! exercised too. The parser may return errors but must never panic.

use libfuzzer_sys::fuzz_target;
use qifledger_parser::{parse_reader, ParserConfig};

fuzz_target!(|data: &[u8]| {
    let _ = parse_reader(data, &ParserConfig::default());
});
