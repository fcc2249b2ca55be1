// Fri Oct 16 2026 - Alex

use super::error::SymbolError;
use msvc_demangler::DemangleFlags;
use std::fmt;

/// Symbol used to check that a freshly initialized decoder actually works.
const SELF_TEST_SYMBOL: &str = "?foo@@YAXXZ";

/// A decoder that turns a decorated symbol name into its readable signature.
///
/// Implementations may hold an expensive resource. It is acquired by
/// `initialize` and handed back through `cleanup`, which consumes the decoder
/// so the resource can only be released once.
pub trait Undecorator: Sized {
    fn initialize() -> Result<Self, SymbolError>;

    /// Writes the complete undecorated form of `symbol` into `out`.
    ///
    /// `out` is cleared first. On error its contents are unspecified.
    fn undecorate(&self, symbol: &str, out: &mut String) -> Result<(), SymbolError>;

    fn cleanup(self) {}
}

/// Decoder for Microsoft Visual C++ decorated names.
pub struct MsvcUndecorator {
    flags: DemangleFlags,
}

impl fmt::Debug for MsvcUndecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MsvcUndecorator")
            .field("flags", &format_args!("{:#x}", self.flags.bits()))
            .finish()
    }
}

impl Undecorator for MsvcUndecorator {
    fn initialize() -> Result<Self, SymbolError> {
        let undecorator = Self {
            flags: DemangleFlags::COMPLETE,
        };

        let mut sample = String::new();
        undecorator
            .undecorate(SELF_TEST_SYMBOL, &mut sample)
            .map_err(|e| SymbolError::InitFailed(format!("self-test failed: {}", e)))?;

        log::debug!("MSVC undecorator ready, {} -> {}", SELF_TEST_SYMBOL, sample);
        Ok(undecorator)
    }

    fn undecorate(&self, symbol: &str, out: &mut String) -> Result<(), SymbolError> {
        out.clear();
        let demangled = msvc_demangler::demangle(symbol, self.flags)
            .map_err(|e| SymbolError::DecodeFailed(e.to_string()))?;
        out.push_str(&demangled);
        Ok(())
    }

    fn cleanup(self) {
        log::debug!("MSVC undecorator released");
    }
}
