// Fri Oct 16 2026 - Alex

//! Finds Microsoft Visual C++ decorated symbol names in text and replaces
//! them with their undecorated form.

pub mod config;
pub mod engine;
pub mod output;
pub mod pattern;
pub mod symbol;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use engine::{Pipeline, PipelineStats};
pub use output::LineFormatter;
pub use pattern::SymbolScanner;
pub use symbol::{SymbolHandler, Undecorate};
