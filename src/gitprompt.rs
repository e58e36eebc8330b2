//! `gitprompt`: print a compact git status for the current repository.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use promptline::cli::{GlobalArgs, init_logging};
use promptline::config::PromptConfig;
use promptline::git::{GitCli, PorcelainVersion};
use promptline::statusline::decorate;

#[derive(Parser)]
#[command(name = "gitprompt")]
#[command(about = "Print a one-line git status decoration for a shell prompt", long_about = None)]
#[command(version)]
struct Cli {
    /// Run as if started in DIR
    #[arg(short = 'C', value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Porcelain format to request from git
    #[arg(long, value_enum)]
    porcelain: Option<PorcelainVersion>,

    #[command(flatten)]
    global: GlobalArgs,
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

    let porcelain = cli.porcelain.unwrap_or(config.git.porcelain);
    let mut source = GitCli::new(porcelain);
    if let Some(dir) = cli.directory {
        source = source.in_dir(dir);
    }

    let line = decorate(&source, &config.git.style);
    if line.is_empty() {
        return Ok(());
    }

    writeln!(std::io::stdout().lock(), "{}", line).context("Failed to write to stdout")
}
