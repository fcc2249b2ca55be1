// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolError {
    #[error("Symbol handler initialization failed: {0}")]
    InitFailed(String),
    #[error("Undecoration failed: {0}")]
    DecodeFailed(String),
    #[error("Symbol name too long: {len} bytes (max {max})")]
    TooLong { len: usize, max: usize },
    #[error("Invalid symbol name: {0}")]
    InvalidInput(String),
}
