// Fri Oct 16 2026 - Alex

use crate::symbol::{SymbolError, Undecorate, Undecorator, MAX_SYMBOL_NAME_LEN};
use std::cell::Cell;
use std::collections::HashMap;

/// Table-driven stand-in for the symbol handler.
pub struct MapUndecorator {
    symbols: HashMap<String, String>,
    available: bool,
    pub lookups: usize,
}

impl MapUndecorator {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            symbols: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            available: true,
            lookups: 0,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(&[])
        }
    }
}

impl Undecorate for MapUndecorator {
    fn undecorate(&mut self, candidate: &str) -> Option<&str> {
        self.lookups += 1;
        if !self.available {
            return None;
        }
        self.symbols.get(candidate).map(String::as_str)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

thread_local! {
    static INITS: Cell<usize> = Cell::new(0);
    static CLEANUPS: Cell<usize> = Cell::new(0);
}

/// Zeroes this thread's init and cleanup counters.
pub fn reset_counts() {
    INITS.with(|c| c.set(0));
    CLEANUPS.with(|c| c.set(0));
}

/// `(initializations, cleanups)` seen on this thread since the last reset.
pub fn counts() -> (usize, usize) {
    (INITS.with(Cell::get), CLEANUPS.with(Cell::get))
}

/// Decoder that knows two symbols and counts its lifecycle calls.
pub struct CountingUndecorator;

impl Undecorator for CountingUndecorator {
    fn initialize() -> Result<Self, SymbolError> {
        INITS.with(|c| c.set(c.get() + 1));
        Ok(Self)
    }

    fn undecorate(&self, symbol: &str, out: &mut String) -> Result<(), SymbolError> {
        out.clear();
        match symbol {
            "?foo@@YAXXZ" => out.push_str("void __cdecl foo(void)"),
            "?long@@YAXXZ" => out.push_str(&"x".repeat(MAX_SYMBOL_NAME_LEN + 10)),
            _ => return Err(SymbolError::DecodeFailed(symbol.to_string())),
        }
        Ok(())
    }

    fn cleanup(self) {
        CLEANUPS.with(|c| c.set(c.get() + 1));
    }
}

/// Decoder whose initialization always fails.
pub struct FailingUndecorator;

impl Undecorator for FailingUndecorator {
    fn initialize() -> Result<Self, SymbolError> {
        INITS.with(|c| c.set(c.get() + 1));
        Err(SymbolError::InitFailed("no symbol engine".to_string()))
    }

    fn undecorate(&self, _symbol: &str, _out: &mut String) -> Result<(), SymbolError> {
        unreachable!("never initialized")
    }

    fn cleanup(self) {
        CLEANUPS.with(|c| c.set(c.get() + 1));
    }
}
