//! `shortpath`: print an abbreviated working directory for a shell prompt.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use promptline::cli::{GlobalArgs, init_logging};
use promptline::config::PromptConfig;
use promptline::path::{ShortenOptions, home_dir, shorten};

#[derive(Parser)]
#[command(name = "shortpath")]
#[command(about = "Print a shortened directory path for a shell prompt", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to shorten (defaults to the current directory)
    path: Option<PathBuf>,

    /// Number of trailing directories to keep full width
    #[arg(short = 'n', value_name = "FULL_PATHS")]
    full_segments: Option<usize>,

    /// Do not compress $HOME to '~'
    #[arg(long)]
    no_tilde: bool,

    /// Abbreviate to the first letter of every word instead of the first letter only
    #[arg(long)]
    per_word: bool,

    #[command(flatten)]
    global: GlobalArgs,
}

impl Cli {
    /// Config-file options with command-line flags applied on top.
    fn options(&self, mut options: ShortenOptions) -> ShortenOptions {
        if let Some(n) = self.full_segments {
            options.full_segments = n;
        }
        if self.no_tilde {
            options.tilde = false;
        }
        if self.per_word {
            options.per_word = true;
        }
        options
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    // Exit 0 regardless: a failing prompt helper corrupts the prompt.
    if let Err(e) = run(cli) {
        log::debug!("{:#}", e);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = PromptConfig::load(cli.global.config.as_deref());
    let options = cli.options(config.path);

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let path = path.to_string_lossy();
    log::debug!("Raw path: {}", path);

    let home = home_dir();
    let home = home.as_ref().map(|h| h.to_string_lossy());

    let line = shorten(&path, home.as_deref(), &options);
    writeln!(std::io::stdout().lock(), "{}", line).context("Failed to write to stdout")
}
