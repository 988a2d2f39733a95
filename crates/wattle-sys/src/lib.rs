//! C struct mirrors and function signatures of the raylib core module.
//!
//! Everything in here matches `raylib.h` of the 1.7 series field for field. Nothing in this crate
//! does any conversion, that is what `wattle` is for.
#![allow(non_camel_case_types)]

pub mod sig;

use bytemuck::{Pod, Zeroable};
use std::ffi::{c_float, c_int, c_uchar, c_uint, c_void};

/// The boolean type of the 1.7 headers.
///
/// When compiled as C, raylib declares `typedef enum { false, true } bool;`, which makes it an
/// `int` sized value on the wire and not a `_Bool`.
#[cfg(not(target_vendor = "apple"))]
pub type Bool = c_int;

/// The boolean type of the 1.7 headers.
///
/// On Apple targets raylib includes `<stdbool.h>` instead of declaring its own enum, so the value
/// is a one byte `_Bool`. Kept as an integer so a stray byte from the library is not undefined
/// behaviour on the Rust side.
#[cfg(target_vendor = "apple")]
pub type Bool = c_uchar;

/// `false` as defined by the native enum.
pub const FALSE: Bool = 0;
/// `true` as defined by the native enum.
pub const TRUE: Bool = 1;

/// `typedef struct Vector2 { float x; float y; } Vector2;`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector2 {
    pub x: c_float,
    pub y: c_float,
}

/// `typedef struct Vector3 { float x; float y; float z; } Vector3;`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
}

/// `typedef struct Quaternion { float x; float y; float z; float w; } Quaternion;` (raymath)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Quaternion {
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
    pub w: c_float,
}

/// OpenGL style 4x4 matrix, right handed, column major naming.
///
/// The declaration order is the row order of the names (m0, m4, m8, m12 first).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Matrix {
    pub m0: c_float,
    pub m4: c_float,
    pub m8: c_float,
    pub m12: c_float,
    pub m1: c_float,
    pub m5: c_float,
    pub m9: c_float,
    pub m13: c_float,
    pub m2: c_float,
    pub m6: c_float,
    pub m10: c_float,
    pub m14: c_float,
    pub m3: c_float,
    pub m7: c_float,
    pub m11: c_float,
    pub m15: c_float,
}

/// `typedef struct Color { unsigned char r, g, b, a; } Color;`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: c_uchar,
    pub g: c_uchar,
    pub b: c_uchar,
    pub a: c_uchar,
}

/// Integer rectangle, as used before raylib switched to float rectangles.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rectangle {
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

/// The 3d camera. Named `Camera` in the headers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Camera {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fovy: c_float,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Camera2D {
    pub offset: Vector2,
    pub target: Vector2,
    pub rotation: c_float,
    pub zoom: c_float,
}

/// Image data stored in CPU memory. `data` is owned by the native allocator.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Image {
    pub data: *mut c_void,
    pub width: c_int,
    pub height: c_int,
    pub mipmaps: c_int,
    pub format: c_int,
}

/// Texture parameters stored in GPU memory.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Texture2D {
    pub id: c_uint,
    pub width: c_int,
    pub height: c_int,
    pub mipmaps: c_int,
    pub format: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct RenderTexture2D {
    pub id: c_uint,
    pub texture: Texture2D,
    pub depth: Texture2D,
}
