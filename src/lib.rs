//! Shell prompt helpers.
//!
//! Two independent filters, each shipped as a binary:
//!
//! - `shortpath` abbreviates a directory for display ([`path::shorten`]):
//!   `/home/user/code/promptline` becomes `~/c/promptline`.
//! - `gitprompt` asks git for the repository status exactly once and renders
//!   a compact summary ([`statusline::decorate`]): `main ↑2 ● ✚3 ?`.
//!
//! Both are built to sit inside a prompt: they never exit non-zero and print
//! nothing to stderr unless logging is requested.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod git;
pub mod path;
pub mod render;
pub mod shell_exec;
pub mod status;
pub mod statusline;
