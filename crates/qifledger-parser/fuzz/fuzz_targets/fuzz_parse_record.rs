#![no_main]
//! Fuzz target for structured QIF blocks.
//!
//! Generates inputs built from real headers and field tags so the fuzzer
//! spends its time in the recognizer and record readers rather than in
//! skipped lines.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use qifledger_parser::{parse, DateFormat, ParserConfig};

const HEADERS: [&str; 8] = [
    "!Option:AutoSwitch",
    "!Clear:AutoSwitch",
    "!Account",
    "!Type:Cat",
    "!Type:Class",
    "!Type:Bank",
    "!Type:CCard",
    "!Option:MDY",
];

const TAGS: [char; 14] = [
    'D', 'T', 'U', 'P', 'M', 'N', 'C', 'A', 'L', 'S', '$', 'E', '%', '^',
];

#[derive(Arbitrary, Debug)]
enum Line {
    Header(u8),
    Field(u8, String),
    Terminator,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    date_order: u8,
    lines: Vec<Line>,
}

impl FuzzInput {
    fn to_qif(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Header(i) => out.push_str(HEADERS[usize::from(*i) % HEADERS.len()]),
                Line::Field(tag, value) => {
                    out.push(TAGS[usize::from(*tag) % TAGS.len()]);
                    out.extend(value.chars().filter(|c| *c != '\n' && *c != '\r').take(40));
                }
                Line::Terminator => out.push('^'),
            }
            out.push('\n');
        }
        out
    }
}

fuzz_target!(|input: FuzzInput| {
    let date_format = match input.date_order % 3 {
        0 => DateFormat::Us,
        1 => DateFormat::Eu,
        _ => DateFormat::Ymd,
    };
    let config = ParserConfig::builder().date_format(date_format).build();
    let _ = parse(&input.to_qif(), &config);
});
