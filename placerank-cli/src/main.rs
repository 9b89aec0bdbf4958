//! Entry point for the `placerank` command-line interface.
#![forbid(unsafe_code)]

use std::error::Error;

fn main() {
    if let Err(err) = placerank_cli::run() {
        eprintln!("placerank: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}
