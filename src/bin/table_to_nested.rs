//! `table_to_nested <filename>`
//!
//! Reads a tab-separated table and prints it as a pretty-printed locale catalog
//! (JSON).

use std::process::ExitCode;

use i18n_tsv::cli;
use i18n_tsv::convert::table_to_nested;

fn main() -> ExitCode {
    cli::run(std::env::args_os(), |text| table_to_nested(text).map(|json| json + "\n"))
}
