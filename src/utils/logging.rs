// Fri Oct 16 2026 - Alex

use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Logs go to stderr so they never mix with the filtered stream on stdout.
    /// `RUST_LOG`, when set, overrides `level`.
    pub fn init_logger(level: LevelFilter) {
        let result = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .parse_default_env()
            .try_init();

        if result.is_err() {
            log::debug!("Logger already initialized");
        }
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Warn,
        }
    }

    /// Raises `base` by one level per `-v`.
    pub fn level_from_verbosity(base: LevelFilter, verbosity: u8) -> LevelFilter {
        let levels = [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
            LevelFilter::Trace,
        ];
        let start = levels.iter().position(|l| *l == base).unwrap_or(2);
        let index = (start + verbosity as usize).min(levels.len() - 1);
        levels[index]
    }
}
