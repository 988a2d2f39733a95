use crate::config::LoaderConfig;
use crate::error::{WattleError, WattleResult};
use crate::native::{RaylibApi, SymbolSource};
use libloading::Library;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Set while a handle over a dynamically loaded library is alive.
static LIBRARY_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Exclusive right to the process' copy of raylib, released on drop.
///
/// The system loader hands out the same library for every `dlopen` of the same file, so two
/// handles would share the static `float buffer[]` behind the `*_to_float` views.
struct LibraryClaim(&'static AtomicBool);

impl LibraryClaim {
    fn acquire(flag: &'static AtomicBool) -> WattleResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| WattleError::AlreadyLoaded)?;
        Ok(Self(flag))
    }
}

impl Drop for LibraryClaim {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A loaded copy of the native library, and the only way to call into it.
///
/// Every native entry point is a method on this type (see the `window`, `drawing`, `camera`,
/// `timing`, `utils` and `input` modules). The methods forward straight to the library: no
/// validation, no retries, whatever the library returns is what you get.
///
/// The handle is neither [`Send`] nor [`Sync`]. raylib keeps its window, input and timing state
/// in globals tied to the thread that created the window, so the handle stays on the thread that
/// loaded it.
///
/// Only one handle made by [`Raylib::load`] or [`Raylib::open`] can be alive at a time, a second
/// attempt fails with [`WattleError::AlreadyLoaded`] until the first is dropped.
pub struct Raylib {
    pub(crate) api: RaylibApi,
    // kept after `api` so the code the table points into outlives it
    library: Option<Library>,
    // released after the library is unloaded
    _claim: Option<LibraryClaim>,
    origin: Option<PathBuf>,
    _thread_bound: PhantomData<*const ()>,
}

impl Raylib {
    /// Finds and loads the library using the search order of [`LoaderConfig::candidates`].
    ///
    /// Candidates that do not exist are skipped. A candidate that exists but cannot be loaded, or
    /// that lacks a symbol, stops the search with that error.
    pub fn load(config: &LoaderConfig) -> WattleResult<Self> {
        Self::load_from(config.candidates())
    }

    fn load_from(candidates: Vec<PathBuf>) -> WattleResult<Self> {
        let mut attempted = Vec::new();

        for candidate in candidates {
            let system_lookup = candidate
                .parent()
                .is_none_or(|parent| parent.as_os_str().is_empty());

            if !system_lookup && !candidate.exists() {
                log::debug!("No native library at '{}'", candidate.display());
                attempted.push(candidate);
                continue;
            }

            match unsafe { Library::new(&candidate) } {
                Ok(library) => return Self::from_library(library, candidate),
                Err(err) if system_lookup => {
                    log::debug!(
                        "System loader could not find '{}': {}",
                        candidate.display(),
                        err
                    );
                    attempted.push(candidate);
                }
                Err(source) => {
                    return Err(WattleError::LibraryLoad {
                        path: candidate,
                        source,
                    });
                }
            }
        }

        Err(WattleError::LibraryNotFound { attempted })
    }

    /// Loads the library from exactly `path`.
    pub fn open(path: impl AsRef<Path>) -> WattleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WattleError::LibraryNotFound {
                attempted: vec![path.to_path_buf()],
            });
        }

        let library = unsafe { Library::new(path) }.map_err(|source| WattleError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_library(library, path.to_path_buf())
    }

    /// Builds a handle over symbols that are not coming from a shared library file.
    ///
    /// # Safety
    /// Same contract as [`RaylibApi::resolve`]: every address `source` hands out must be a
    /// function with the declared C signature, and must stay callable for as long as the returned
    /// handle lives.
    ///
    /// No other handle over functions sharing the same static buffers may be used while a
    /// [`NativeArray`](crate::NativeArray) borrowed from this one is alive.
    pub unsafe fn from_source(source: &(impl SymbolSource + ?Sized)) -> WattleResult<Self> {
        let api = unsafe { RaylibApi::resolve(source) }?;
        log::debug!(
            "Resolved {} native symbols from a custom source",
            RaylibApi::SYMBOLS.len()
        );

        Ok(Self {
            api,
            library: None,
            _claim: None,
            origin: None,
            _thread_bound: PhantomData,
        })
    }

    fn from_library(library: Library, path: PathBuf) -> WattleResult<Self> {
        let claim = LibraryClaim::acquire(&LIBRARY_CLAIMED)?;
        let api = unsafe { RaylibApi::resolve(&library) }?;
        log::info!(
            "Loaded raylib from '{}' ({} symbols)",
            path.display(),
            RaylibApi::SYMBOLS.len()
        );

        Ok(Self {
            api,
            library: Some(library),
            _claim: Some(claim),
            origin: Some(path),
            _thread_bound: PhantomData,
        })
    }

    /// The file the library was loaded from, [`None`] for handles made with
    /// [`Raylib::from_source`].
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Whether this handle owns a dynamically loaded library.
    pub fn is_dynamic(&self) -> bool {
        self.library.is_some()
    }
}

impl Drop for Raylib {
    fn drop(&mut self) {
        if let Some(path) = &self.origin {
            log::debug!("Unloading raylib from '{}'", path.display());
        }
    }
}
