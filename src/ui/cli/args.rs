// Fri Oct 16 2026 - Alex

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "msvcfilt")]
#[command(version)]
#[command(about = "Searches input stream for Microsoft Visual C++ decorated symbol names\nand replaces them with their undecorated equivalent.", long_about = None)]
#[command(after_help = "Uses STDIN rather than <SYMBOLS> if none are given.\n-keep and -help are accepted as well.")]
pub struct Args {
    /// Does not replace the original, decorated symbol name. Instead, the
    /// undecorated name will be inserted after it.
    #[arg(short, long)]
    pub keep: bool,

    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub no_color: bool,

    /// Decorated strings to process, one per line of output
    #[arg(value_name = "SYMBOLS")]
    pub symbols: Vec<String>,
}

/// Rewrites the single-dash long options `-keep` and `-help` to their
/// double-dash forms. Nothing after a `--` separator is touched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    after_separator = true;
                    arg
                }
                Some("-keep") => OsString::from("--keep"),
                Some("-help") => OsString::from("--help"),
                _ => arg,
            }
        })
        .collect()
}
