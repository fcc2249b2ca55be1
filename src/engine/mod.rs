// Fri Oct 16 2026 - Alex

pub mod error;
pub mod pipeline;
pub mod source;

pub use error::EngineError;
pub use pipeline::{Pipeline, PipelineStats};
pub use source::{ArgumentSource, LineSource, StreamSource};
