// Fri Oct 16 2026 - Alex

use super::demangle::{MsvcUndecorator, Undecorator};
use super::error::SymbolError;
use super::Undecorate;
use once_cell::unsync::OnceCell;

/// The maximum length of a symbol name in bytes (DbgHelp's `MAX_SYM_NAME`).
pub const MAX_SYMBOL_NAME_LEN: usize = 2000;

/// Owns the symbol decoder and the buffer it writes into.
///
/// The decoder is initialized on the first `undecorate` call and never again.
/// If initialization fails the handler stays usable but every lookup returns
/// `None`, so callers fall back to passing text through. The decoder is
/// released when the handler is dropped, and only if it was initialized.
///
/// The string returned by `undecorate` borrows the handler's buffer and is
/// only valid until the next call. Copy it out if it has to outlive that.
/// Because lookups need `&mut self`, sharing a handler between threads means
/// putting it behind a lock.
pub struct SymbolHandler<U: Undecorator = MsvcUndecorator> {
    decoder: OnceCell<Option<U>>,
    buffer: String,
}

impl SymbolHandler {
    pub fn new() -> Self {
        Self::lazy()
    }
}

impl<U: Undecorator> SymbolHandler<U> {
    pub fn lazy() -> Self {
        Self {
            decoder: OnceCell::new(),
            buffer: String::with_capacity(MAX_SYMBOL_NAME_LEN + 1),
        }
    }

    fn init(cell: &OnceCell<Option<U>>) -> Option<&U> {
        cell.get_or_init(|| match U::initialize() {
            Ok(decoder) => {
                log::debug!("Symbol handler initialized");
                Some(decoder)
            }
            Err(e) => {
                log::warn!("{}; decorated names will not be undecorated", e);
                None
            }
        })
        .as_ref()
    }

    /// Whether the decoder came up. Initializes it if that has not happened yet.
    pub fn is_available(&self) -> bool {
        Self::init(&self.decoder).is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.decoder.get().is_some()
    }

    pub fn undecorate(&mut self, candidate: &str) -> Option<&str> {
        match self.undecorate_into_buffer(candidate) {
            Ok(()) => Some(self.buffer.as_str()),
            Err(e) => {
                log::trace!("{}: {}", candidate, e);
                None
            }
        }
    }

    fn undecorate_into_buffer(&mut self, candidate: &str) -> Result<(), SymbolError> {
        if candidate.len() > MAX_SYMBOL_NAME_LEN {
            return Err(SymbolError::TooLong {
                len: candidate.len(),
                max: MAX_SYMBOL_NAME_LEN,
            });
        }
        if candidate.contains('\0') {
            return Err(SymbolError::InvalidInput("embedded NUL byte".to_string()));
        }

        let decoder = Self::init(&self.decoder)
            .ok_or_else(|| SymbolError::InitFailed("decoder unavailable".to_string()))?;
        decoder.undecorate(candidate, &mut self.buffer)?;

        truncate_at_boundary(&mut self.buffer, MAX_SYMBOL_NAME_LEN);
        Ok(())
    }
}

impl Default for SymbolHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Undecorator> Undecorate for SymbolHandler<U> {
    fn undecorate(&mut self, candidate: &str) -> Option<&str> {
        SymbolHandler::<U>::undecorate(self, candidate)
    }

    fn is_available(&self) -> bool {
        SymbolHandler::<U>::is_available(self)
    }
}

impl<U: Undecorator> Drop for SymbolHandler<U> {
    fn drop(&mut self) {
        if let Some(Some(decoder)) = self.decoder.take() {
            decoder.cleanup();
            log::debug!("Symbol handler cleaned up");
        }
    }
}

fn truncate_at_boundary(s: &mut String, max_len: usize) {
    if s.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
