//! Wordbook CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use wordbook::cli::args::*;
use wordbook::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = match WordbookArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(parse_error_exit_code(&e));
        }
    };

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Execute the command
    match execute_command(args) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_ERROR);
        }
    }
}
