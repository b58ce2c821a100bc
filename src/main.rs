use std::process;
use tracing_subscriber::EnvFilter;
use xdir::cli::{Args, Command};

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    init_logging(args.verbose, args.quiet);

    // Create command from arguments and run it
    let command = Command::from_args(args);
    let exit_code = command.run();

    process::exit(exit_code);
}

/// Log to stderr; RUST_LOG overrides the level picked from the flags
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("xdir={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
