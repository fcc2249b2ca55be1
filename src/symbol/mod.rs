// Fri Oct 16 2026 - Alex

pub mod demangle;
pub mod error;
pub mod handler;

pub use demangle::{MsvcUndecorator, Undecorator};
pub use error::SymbolError;
pub use handler::{SymbolHandler, MAX_SYMBOL_NAME_LEN};

/// Looks up the readable form of a candidate symbol.
///
/// `None` means the candidate did not undecorate. That is an expected outcome,
/// not an error. The returned text may borrow internal state and is only
/// valid until the next call.
pub trait Undecorate {
    fn undecorate(&mut self, candidate: &str) -> Option<&str>;

    /// False when the decoder itself could not be brought up, as opposed to
    /// a single candidate failing.
    fn is_available(&self) -> bool {
        true
    }
}
