//! Command implementations

use std::path::PathBuf;
use tracing::debug;

use super::Args;
use crate::config::{self, cli::CliArgs, file::DEFAULT_CONFIG_FILE};
use crate::core::Walker;
use crate::error::{ErrorSeverity, Result, XdirError};
use crate::models::{OutputTarget, RunReport};
use crate::output::{create_formatter, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Pack the source directory into a document
    Run(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Run(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Run(args) => {
                self.validate()?;

                let settings = config::load_config(CliArgs::from(args))?;
                debug!("Settings: {:?}", settings);

                let to_stdout = settings.output == OutputTarget::Stdout;
                let reporter = ProgressReporter::new(
                    settings.quiet,
                    settings.show_progress && !to_stdout,
                );

                let walker = Walker::new(settings.clone());
                let report = walker.run_with_progress(|files, path| reporter.update(files, path));
                reporter.clear();
                let report = report?;

                print_summary(&report, &settings, to_stdout)
            }
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

                if config_path.exists() {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                config::create_default_config(&config_path)?;

                println!("Created default configuration file at: {}", config_path.display());
                println!("Every option is commented out; uncomment the ones you want to change.");
                Ok(())
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Run(args) => {
                if let Some(path) = &args.source_dir {
                    if !path.exists() {
                        return Err(XdirError::invalid_path(path));
                    }
                }

                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(XdirError::ConfigNotFound {
                            path: config_path.clone(),
                            #[cfg(not(tarpaulin_include))]
                            backtrace: std::backtrace::Backtrace::capture(),
                        });
                    }
                }

                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and map the outcome to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                if std::env::var_os("RUST_BACKTRACE").is_some() {
                    eprintln!("{:?}", err);
                }
                exit_code(&err)
            }
        }
    }
}

/// Exit code for a failed run
pub fn exit_code(err: &XdirError) -> i32 {
    match err.severity() {
        ErrorSeverity::Warning => 0, // Warnings don't cause failure
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

/// Print the summary; it goes to stderr when the document is on stdout
fn print_summary(
    report: &RunReport,
    settings: &crate::models::Settings,
    to_stdout: bool,
) -> Result<()> {
    let formatter = create_formatter(
        settings.summary_format,
        settings.use_colors,
        settings.verbose,
        settings.quiet,
    );
    let summary = formatter.format(report)?;

    if to_stdout {
        eprint!("{}", summary);
    } else {
        print!("{}", summary);
    }
    Ok(())
}
