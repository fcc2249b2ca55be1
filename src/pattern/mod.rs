// Fri Oct 16 2026 - Alex

pub mod error;
pub mod match_result;
pub mod scanner;

pub use error::PatternError;
pub use match_result::MatchSpan;
pub use scanner::{Matches, SymbolScanner, DECORATED_SYMBOL_PATTERN};
