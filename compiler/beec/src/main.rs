//! Bee front-end driver.
//!
//! Parses one source file and prints the checked AST, or the first error.

mod options;

use std::process::ExitCode;
use std::sync::Once;

use bee_ir::AstDump;
use options::{Options, OptionsError};
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=bee_parse=debug` or `RUST_LOG=bee_parse=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn print_usage() {
    eprintln!("Usage: beec <file.bee> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --frames    Also print the definitions of every frame");
    eprintln!("  --quiet     Only report success or the first error");
}

fn main() -> ExitCode {
    init_tracing();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(OptionsError::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let source = match std::fs::read_to_string(&options.path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{}': {err}", options.path.display());
            return ExitCode::FAILURE;
        }
    };
    debug!(path = %options.path.display(), bytes = source.len(), "loaded source");

    let output = match bee_parse::parse_source(&source) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if options.quiet {
        println!("{}: ok", options.path.display());
        return ExitCode::SUCCESS;
    }
    print!("{}", AstDump::render(&output.ast));
    if options.frames {
        print!("{}", AstDump::render_frames(&output.ast));
    }
    ExitCode::SUCCESS
}
