// Fri Oct 16 2026 - Alex

use super::error::EngineError;
use super::source::LineSource;
use crate::config::Config;
use crate::output::{LineFormatter, TransformStats};
use crate::pattern::SymbolScanner;
use crate::symbol::Undecorate;
use std::io::{self, ErrorKind, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub lines: usize,
    pub symbols: TransformStats,
}

/// Reads lines, undecorates the symbols in each and writes them out in order.
///
/// Strictly sequential: a line is fully written before the next one is read.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    scanner: SymbolScanner,
    formatter: LineFormatter,
}

impl Pipeline {
    pub fn new(scanner: SymbolScanner, formatter: LineFormatter) -> Self {
        Self { scanner, formatter }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(SymbolScanner::new(), LineFormatter::new(config.keep_original))
    }

    pub fn process_line<D>(&self, line: &[u8], demangler: &mut D) -> (Vec<u8>, TransformStats)
    where
        D: Undecorate + ?Sized,
    {
        self.formatter
            .transform_with_stats(line, self.scanner.scan(line), demangler)
    }

    /// Runs until `source` is exhausted or the reader of `sink` goes away.
    pub fn run<S, D, W>(
        &self,
        source: &mut S,
        demangler: &mut D,
        sink: &mut W,
    ) -> Result<PipelineStats, EngineError>
    where
        S: LineSource + ?Sized,
        D: Undecorate + ?Sized,
        W: Write + ?Sized,
    {
        let mut stats = PipelineStats::default();

        while let Some(line) = source.next_line().map_err(EngineError::Read)? {
            let (out, line_stats) = self.process_line(&line, demangler);
            stats.lines += 1;
            stats.symbols += line_stats;

            let written = sink.write_all(&out).and_then(|()| sink.write_all(b"\n"));
            if !write_or_closed(written)? {
                return Ok(stats);
            }
        }

        write_or_closed(sink.flush())?;

        log::debug!(
            "Processed {} lines, {} candidates ({} undecorated, {} rejected)",
            stats.lines,
            stats.symbols.candidates,
            stats.symbols.undecorated,
            stats.symbols.rejected
        );
        Ok(stats)
    }
}

/// `Ok(false)` when the downstream reader closed the pipe.
fn write_or_closed(result: io::Result<()>) -> Result<bool, EngineError> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            log::debug!("Output closed, stopping");
            Ok(false)
        }
        Err(e) => Err(EngineError::Write(e)),
    }
}
