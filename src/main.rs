//! `lexis` CLI entrypoint.
//!
//! Loads a catalog configuration and resolves message keys against it. The
//! system locale is used when the configuration asks for detection.

use clap::Parser;
use lexis::cli::{Cli, run};
use lexis_common::i18n::SystemLocaleDetector;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let exit_code = match run(&cli, &SystemLocaleDetector, &mut stdout, &mut stderr) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            // Nothing sensible remains if stderr itself is gone.
            let _ = writeln!(stderr, "error: {error}");
            1
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
