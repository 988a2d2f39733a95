//! Cameras and the screen-space queries that take one.
use crate::Raylib;
use crate::marshal::NativeLayout;
use crate::math::{Matrix, Ray, Vector2, Vector3};
use bytemuck::{Pod, Zeroable};
use wattle_macro::NativeLayout;
use wattle_sys as sys;

/// Perspective camera for 3d mode. Named `Camera` in the native headers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, NativeLayout)]
#[native(sys::Camera)]
pub struct Camera3D {
    pub position: Vector3,
    pub target: Vector3,
    /// Rotation around the view axis.
    pub up: Vector3,
    /// Vertical field of view, in degrees.
    pub fovy: f32,
}

pub type Camera = Camera3D;

impl Camera3D {
    pub const fn new(position: Vector3, target: Vector3, up: Vector3, fovy: f32) -> Self {
        Self {
            position,
            target,
            up,
            fovy,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, NativeLayout)]
#[native(sys::Camera2D)]
pub struct Camera2D {
    /// Displacement from the target, in screen space.
    pub offset: Vector2,
    pub target: Vector2,
    /// In degrees.
    pub rotation: f32,
    pub zoom: f32,
}

impl Camera2D {
    pub const fn new(offset: Vector2, target: Vector2, rotation: f32, zoom: f32) -> Self {
        Self {
            offset,
            target,
            rotation,
            zoom,
        }
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Vector2::ZERO, Vector2::ZERO, 0.0, 1.0)
    }
}

impl Raylib {
    /// Returns a ray trace from the mouse position into the scene.
    pub fn get_mouse_ray(&self, mouse_position: Vector2, camera: Camera3D) -> Ray {
        let ray = unsafe {
            (self.api.get_mouse_ray)(mouse_position.into_native(), camera.into_native())
        };
        Ray::from_native(ray)
    }

    /// Returns the screen space position of a 3d world space position.
    pub fn get_world_to_screen(&self, position: Vector3, camera: Camera3D) -> Vector2 {
        let screen =
            unsafe { (self.api.get_world_to_screen)(position.into_native(), camera.into_native()) };
        Vector2::from_native(screen)
    }

    /// Returns the camera transform (view matrix).
    pub fn get_camera_matrix(&self, camera: Camera3D) -> Matrix {
        Matrix::from_native(unsafe { (self.api.get_camera_matrix)(camera.into_native()) })
    }
}
