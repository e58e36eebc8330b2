//! Arguments and setup shared by the `shortpath` and `gitprompt` binaries.

use std::path::PathBuf;

use clap::Args;

/// Environment variable holding an `env_logger` filter, e.g. `debug`.
pub const LOG_ENV: &str = "PROMPTLINE_LOG";

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log to stderr: -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Default log filter for a verbosity count.
///
/// Quiet by default: the binaries run inside a prompt, where stray stderr
/// output would land in the user's terminal on every render.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "off",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the stderr logger. `PROMPTLINE_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let env = env_logger::Env::new().filter_or(LOG_ENV, log_filter(verbose));
    // try_init: a logger may already be installed (e.g. by tests)
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
