//! In-process stand-in for the native library, used by the unit tests.
use crate::Raylib;
use crate::native::{RaylibApi, SymbolSource};
use std::collections::HashMap;
use std::ffi::c_void;

extern "C" fn unbound() {
    panic!("a test called a native symbol it did not bind");
}

/// Serves every symbol of [`RaylibApi`], each bound to a trap unless the test replaces it.
pub(crate) struct MockLibrary {
    symbols: HashMap<&'static str, *const c_void>,
}

impl MockLibrary {
    pub(crate) fn new() -> Self {
        let symbols = RaylibApi::SYMBOLS
            .iter()
            .map(|&name| (name, unbound as *const c_void))
            .collect();
        Self { symbols }
    }

    /// Binds `name` to `address`, which must have the declared C signature.
    pub(crate) fn with(mut self, name: &'static str, address: *const c_void) -> Self {
        self.symbols.insert(name, address);
        self
    }

    pub(crate) fn without(mut self, name: &'static str) -> Self {
        self.symbols.remove(name);
        self
    }

    pub(crate) fn raylib(&self) -> Raylib {
        unsafe { Raylib::from_source(self) }.expect("mock library resolves every symbol")
    }
}

impl SymbolSource for MockLibrary {
    fn lookup(&self, name: &[u8]) -> Option<*const c_void> {
        let name = std::str::from_utf8(name.strip_suffix(b"\0")?).ok()?;
        self.symbols.get(name).copied()
    }
}
