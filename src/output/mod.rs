// Fri Oct 16 2026 - Alex

pub mod formatter;

pub use formatter::{LineFormatter, TransformStats};
