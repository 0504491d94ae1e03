//! CLI subcommands.

pub mod config;
pub mod init;
pub mod serve;
