//! Command-line surface for kitup.

pub mod cli;
pub mod handlers;

pub use cli::{Cli, Commands, InstallArgs};
