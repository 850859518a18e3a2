//! `nested_to_table <filename>`
//!
//! Reads a nested locale catalog (JSON) and prints it as a tab-separated table.

use std::process::ExitCode;

use i18n_tsv::cli;
use i18n_tsv::convert::nested_to_table;

fn main() -> ExitCode {
    cli::run(std::env::args_os(), nested_to_table)
}
