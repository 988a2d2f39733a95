//! Conversions applied to every value that crosses the native boundary.
//!
//! There are four of them and every wrapper in this crate is built out of these:
//! - structs are reinterpreted byte for byte ([`NativeLayout`])
//! - native booleans are compared against the native `true` sentinel ([`from_native_bool`])
//! - text goes out as a scoped [`CString`] and comes back as an owned [`String`]
//! - pointers to fixed size native buffers become a [`NativeArray`] with a call site length

use bytemuck::Pod;
use std::ffi::{CStr, CString, c_char};
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use wattle_sys as sys;

/// A host value type whose bytes are identical to a native struct.
///
/// Implemented through `#[derive(NativeLayout)]`, which also checks at compile time that size,
/// alignment and every field offset match the native mirror. Both sides are [`Pod`], so the
/// conversion is a plain cast of the same bytes and never a field by field copy.
pub trait NativeLayout: Pod {
    /// The `wattle-sys` mirror of this type.
    type Native: Pod;

    /// Reinterprets this value as its native struct.
    fn into_native(self) -> Self::Native {
        bytemuck::cast(self)
    }

    /// Reinterprets a native struct as this value.
    fn from_native(native: Self::Native) -> Self {
        bytemuck::cast(native)
    }
}

/// Converts a native boolean into a [`bool`].
///
/// Only the documented truthy value counts as `true`. Anything else the library may hand back,
/// including stray error codes, is `false`.
pub fn from_native_bool(value: sys::Bool) -> bool {
    value == sys::TRUE
}

/// Converts a [`bool`] into the native boolean sentinels.
pub fn to_native_bool(value: bool) -> sys::Bool {
    if value { sys::TRUE } else { sys::FALSE }
}

/// Builds the NUL terminated buffer handed to the library.
///
/// Text with an interior NUL byte is cut at the first NUL, as that is all the native side would
/// ever read of it.
pub fn to_native_text(text: &str) -> CString {
    match CString::new(text) {
        Ok(c_string) => c_string,
        Err(err) => {
            let nul = err.nul_position();
            log::warn!(
                "Text passed to the native library contains a NUL byte at {}, truncating to {} bytes",
                nul,
                nul
            );
            let mut bytes = err.into_vec();
            bytes.truncate(nul);
            CString::new(bytes).unwrap_or_default()
        }
    }
}

/// Runs `f` with a native copy of `text`.
///
/// The buffer lives exactly as long as `f` runs and is released on every way out of it,
/// unwinding included.
pub fn with_native_text<R>(text: &str, f: impl FnOnce(*const c_char) -> R) -> R {
    let c_string = to_native_text(text);
    f(c_string.as_ptr())
}

/// Copies native text into an owned [`String`].
///
/// A null pointer yields an empty string. Invalid UTF-8 is replaced rather than rejected.
///
/// # Safety
/// `ptr` must be null or point to a NUL terminated buffer that stays readable for the duration of
/// this call.
pub unsafe fn from_native_text(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}

/// A view over a fixed length buffer owned by the native library.
///
/// The length `N` always comes from the call site that knows the documented size of the buffer,
/// the pointer itself carries none. Methods of [`Raylib`](crate::Raylib) that return one borrow
/// the handle mutably, so no other native call (which could overwrite the buffer) can happen while
/// the view is alive. Use [`NativeArray::to_array`] to keep the values around.
pub struct NativeArray<'a, T, const N: usize> {
    items: &'a [T; N],
}

impl<'a, T: Copy, const N: usize> NativeArray<'a, T, N> {
    /// Wraps `ptr` as a view of exactly `N` elements. Returns [`None`] for a null pointer.
    ///
    /// # Safety
    /// A non-null `ptr` must be aligned and valid for reads of `N` consecutive `T` for all of
    /// `'a`, and nothing may write through it during `'a`.
    pub unsafe fn from_raw(ptr: *const T) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(Self {
            items: unsafe { &*ptr.cast::<[T; N]>() },
        })
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_slice(&self) -> &[T] {
        self.items
    }

    /// Copies the values out of native memory.
    pub fn to_array(&self) -> [T; N] {
        *self.items
    }
}

impl<T, const N: usize> Deref for NativeArray<'_, T, N> {
    type Target = [T; N];

    fn deref(&self) -> &Self::Target {
        self.items
    }
}

impl<T: Debug, const N: usize> Debug for NativeArray<'_, T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
