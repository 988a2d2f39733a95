//! Math value types shared with the native library.
//!
//! Each type is laid out exactly like its C counterpart (checked at compile time by
//! `#[derive(NativeLayout)]`) and converts to and from `glam` for any actual maths.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec2, Vec3};
use wattle_macro::NativeLayout;
use wattle_sys as sys;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, NativeLayout)]
#[native(sys::Vector2)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, NativeLayout)]
#[native(sys::Vector3)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

/// A rotation. Expected to be unit length, nothing here enforces it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, NativeLayout)]
#[native(sys::Quaternion)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

/// OpenGL style 4x4 matrix (right handed, column major naming).
///
/// Fields are declared in the same order as the native struct, which lists the names row by row:
/// `m0, m4, m8, m12` come first. `m0..m3` is the first column.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, NativeLayout)]
#[native(sys::Matrix)]
pub struct Matrix {
    pub m0: f32,
    pub m4: f32,
    pub m8: f32,
    pub m12: f32,
    pub m1: f32,
    pub m5: f32,
    pub m9: f32,
    pub m13: f32,
    pub m2: f32,
    pub m6: f32,
    pub m10: f32,
    pub m14: f32,
    pub m3: f32,
    pub m7: f32,
    pub m11: f32,
    pub m15: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::from_float_array([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Builds a matrix from `m0..m15` in index order, i.e. column by column.
    pub const fn from_float_array(m: [f32; 16]) -> Self {
        Self {
            m0: m[0],
            m4: m[4],
            m8: m[8],
            m12: m[12],
            m1: m[1],
            m5: m[5],
            m9: m[9],
            m13: m[13],
            m2: m[2],
            m6: m[6],
            m10: m[10],
            m14: m[14],
            m3: m[3],
            m7: m[7],
            m11: m[11],
            m15: m[15],
        }
    }

    /// Returns `m0..m15` in index order, the same order `MatrixToFloat` produces.
    pub const fn to_float_array(&self) -> [f32; 16] {
        [
            self.m0, self.m1, self.m2, self.m3, //
            self.m4, self.m5, self.m6, self.m7, //
            self.m8, self.m9, self.m10, self.m11, //
            self.m12, self.m13, self.m14, self.m15,
        ]
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for Matrix {
    fn from(m: Mat4) -> Self {
        Self::from_float_array(m.to_cols_array())
    }
}

impl From<Matrix> for Mat4 {
    fn from(m: Matrix) -> Self {
        Mat4::from_cols_array(&m.to_float_array())
    }
}

/// Integer rectangle.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, NativeLayout)]
#[native(sys::Rectangle)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Axis aligned box. By convention `min <= max` componentwise, which is not checked.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, NativeLayout)]
#[native(sys::BoundingBox)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, NativeLayout)]
#[native(sys::Ray)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub const fn new(position: Vector3, direction: Vector3) -> Self {
        Self {
            position,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal::NativeLayout;
    use std::mem::{offset_of, size_of};

    #[test]
    fn sizes_match_c_structs() {
        assert_eq!(size_of::<Vector2>(), 8);
        assert_eq!(size_of::<Vector3>(), 12);
        assert_eq!(size_of::<Quaternion>(), 16);
        assert_eq!(size_of::<Matrix>(), 64);
        assert_eq!(size_of::<Rectangle>(), 16);
        assert_eq!(size_of::<BoundingBox>(), 24);
        assert_eq!(size_of::<Ray>(), 24);
    }

    #[test]
    fn matrix_fields_sit_in_native_order() {
        assert_eq!(offset_of!(Matrix, m0), 0);
        assert_eq!(offset_of!(Matrix, m4), 4);
        assert_eq!(offset_of!(Matrix, m12), 12);
        assert_eq!(offset_of!(Matrix, m1), 16);
        assert_eq!(offset_of!(Matrix, m15), 60);
    }

    #[test]
    fn rectangle_reads_back_unchanged() {
        let rect = Rectangle::new(0, 0, 100, 50);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
        assert_eq!(rect.width, 100);
        assert_eq!(rect.height, 50);

        let native = rect.into_native();
        assert_eq!(
            native,
            sys::Rectangle {
                x: 0,
                y: 0,
                width: 100,
                height: 50
            }
        );
        assert_eq!(Rectangle::from_native(native), rect);
    }

    #[test]
    fn bounding_box_keeps_corners() {
        let bounds = BoundingBox::new(Vector3::new(-1.0, -2.0, -3.0), Vector3::new(1.0, 2.0, 3.0));
        let native = bounds.into_native();
        assert_eq!(native.min.y, -2.0);
        assert_eq!(native.max.z, 3.0);
    }

    #[test]
    fn matrix_to_glam_is_column_major() {
        let translation = Mat4::from_translation(Vec3::new(4.0, 5.0, 6.0));
        let matrix = Matrix::from(translation);

        assert_eq!(matrix.m12, 4.0);
        assert_eq!(matrix.m13, 5.0);
        assert_eq!(matrix.m14, 6.0);
        assert_eq!(matrix.m15, 1.0);
        assert_eq!(Mat4::from(matrix), translation);
    }

    #[test]
    fn identity_matches_glam() {
        assert_eq!(Mat4::from(Matrix::IDENTITY), Mat4::IDENTITY);
        assert_eq!(Quat::from(Quaternion::IDENTITY), Quat::IDENTITY);
    }

    #[test]
    fn float_array_is_index_order() {
        let values: [f32; 16] = std::array::from_fn(|i| i as f32);
        let matrix = Matrix::from_float_array(values);
        assert_eq!(matrix.m7, 7.0);
        assert_eq!(matrix.to_float_array(), values);
    }
}
