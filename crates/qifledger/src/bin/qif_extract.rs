//! qif-extract - Read a QIF export and print what it contains.

fn main() -> std::process::ExitCode {
    qifledger::cmd::extract_cmd::main()
}
