// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use wpush::{interrupt, logging, Cli, Error};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    interrupt::install();
    if let Err(e) = wpush::run(cli.command) {
        match e {
            Error::Interrupted => eprintln!("\nAborted."),
            _ => eprintln!("error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}
