// Fri Oct 16 2026 - Alex

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}
