// Fri Oct 16 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{normalize_legacy_flags, Args};
pub use handler::CommandHandler;

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse_from(normalize_legacy_flags(std::env::args_os()))
}

pub fn run() -> anyhow::Result<()> {
    let args = parse_args();
    let handler = CommandHandler::new();
    handler.execute(args)
}
