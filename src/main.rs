//! stcat binary entry point.

use std::io;
use std::process::ExitCode;

use stcat::{cli, logging, Concatenator, Config, SourceList, StcatError};
use tracing::debug;

/// Exit status for argument and configuration errors.
const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("stcat: {}", e);
            eprintln!("Try 'stcat --help' for more information.");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("stcat: {}", StcatError::from(e));
            return ExitCode::from(USAGE_ERROR);
        }
    };

    logging::init(config.log_filter());
    debug!("stcat v{}", env!("CARGO_PKG_VERSION"));
    debug!("Sanitizer options: {:?}", config.sanitizer);

    let sources = SourceList::from_args(args.sources);
    debug!(
        "Reading {} source(s){}",
        sources.len(),
        if sources.reads_stdin() { ", including stdin" } else { "" }
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let concatenator = Concatenator::new(config.sanitizer_options());

    match concatenator.run(&sources, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(summary) => {
            debug!(
                "Done: {} source(s), {} bytes in, {} bytes out",
                summary.sources, summary.bytes_read, summary.bytes_written
            );
            ExitCode::SUCCESS
        }
        // The reader went away; nothing left to report.
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed: {}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("stcat: {}", e);
            ExitCode::FAILURE
        }
    }
}
