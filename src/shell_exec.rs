//! Subprocess execution with timing and debug logging.
//!
//! The git decorator runs exactly one external command per render. It goes
//! through [`run`] so the command line, its duration and its outcome show up
//! in `-v` output without ever touching stdout.

use std::process::{Command, Output};
use std::time::Instant;

/// Execute a command with timing and debug logging.
///
/// ```text
/// $ git status --porcelain=v2 --branch [repo]
/// [promptline-trace] context=repo cmd="git status ..." dur=4.1ms ok=true
/// ```
///
/// The `context` parameter is typically the directory name the command runs
/// in, or `None` when it runs in the process's working directory.
pub fn run(cmd: &mut Command, context: Option<&str>) -> std::io::Result<Output> {
    let cmd_str = command_line(cmd);

    match context {
        Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
        None => log::debug!("$ {}", cmd_str),
    }

    let t0 = Instant::now();
    let result = cmd.output();
    let duration_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let ctx = context.map(|c| format!("context={} ", c)).unwrap_or_default();
    match &result {
        Ok(output) => log::debug!(
            "[promptline-trace] {}cmd=\"{}\" dur={:.1}ms ok={}",
            ctx,
            cmd_str,
            duration_ms,
            output.status.success()
        ),
        Err(e) => log::debug!(
            "[promptline-trace] {}cmd=\"{}\" dur={:.1}ms err=\"{}\"",
            ctx,
            cmd_str,
            duration_ms,
            e
        ),
    }

    result
}

/// Render a command as a single display string (`program arg1 arg2`).
fn command_line(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
