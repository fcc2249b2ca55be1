// Fri Oct 16 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::engine::{ArgumentSource, Pipeline, StreamSource};
use crate::symbol::SymbolHandler;
use crate::utils::LoggingUtils;
use anyhow::Context;
use std::io;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_terminal(&args);

        let config = self.resolve_config(&args)?;
        self.setup_logging(&config, args.verbose);

        let pipeline = Pipeline::from_config(&config);
        let mut handler = SymbolHandler::new();

        let stdout = io::stdout();
        let mut sink = stdout.lock();

        if args.symbols.is_empty() {
            if atty::is(atty::Stream::Stdin) {
                log::info!("Reading from terminal, end input with EOF");
            }
            let stdin = io::stdin();
            let mut source = StreamSource::new(stdin.lock());
            pipeline.run(&mut source, &mut handler, &mut sink)?;
        } else {
            log::debug!("Processing {} symbols from the command line", args.symbols.len());
            let mut source = ArgumentSource::new(args.symbols);
            pipeline.run(&mut source, &mut handler, &mut sink)?;
        }

        Ok(())
    }

    fn setup_terminal(&self, args: &Args) {
        if args.no_color || !atty::is(atty::Stream::Stderr) {
            colored::control::set_override(false);
        }
    }

    /// Config file first, then command line flags on top of it.
    pub fn resolve_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if args.keep {
            config.keep_original = true;
        }
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn setup_logging(&self, config: &Config, verbosity: u8) {
        let base = LoggingUtils::level_from_str(&config.log_level);
        LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(base, verbosity));
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
