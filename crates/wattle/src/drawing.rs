//! Frame and drawing mode bracketing.
//!
//! Every `begin_*` must be closed by its matching `end_*` in the same frame. The native library
//! does not check the pairing and neither does this module.
use crate::Raylib;
use crate::camera::{Camera2D, Camera3D};
use crate::color::Color;
use crate::marshal::NativeLayout;
use crate::texture::RenderTexture2D;

impl Raylib {
    /// Sets the background colour (framebuffer clear colour).
    pub fn clear_background(&self, color: Color) {
        unsafe { (self.api.clear_background)(color.into_native()) }
    }

    /// Sets up the canvas to start drawing.
    pub fn begin_drawing(&self) {
        unsafe { (self.api.begin_drawing)() }
    }

    /// Ends the canvas drawing and swaps buffers (double buffering).
    pub fn end_drawing(&self) {
        unsafe { (self.api.end_drawing)() }
    }

    /// Initializes 2d mode with a custom camera.
    pub fn begin_2d_mode(&self, camera: Camera2D) {
        unsafe { (self.api.begin_2d_mode)(camera.into_native()) }
    }

    pub fn end_2d_mode(&self) {
        unsafe { (self.api.end_2d_mode)() }
    }

    /// Initializes 3d mode for drawing, with a custom camera.
    pub fn begin_3d_mode(&self, camera: Camera3D) {
        unsafe { (self.api.begin_3d_mode)(camera.into_native()) }
    }

    /// Ends 3d mode and returns to the default 2d orthographic mode.
    pub fn end_3d_mode(&self) {
        unsafe { (self.api.end_3d_mode)() }
    }

    /// Redirects drawing to `target`.
    pub fn begin_texture_mode(&self, target: RenderTexture2D) {
        unsafe { (self.api.begin_texture_mode)(target.into_native()) }
    }

    pub fn end_texture_mode(&self) {
        unsafe { (self.api.end_texture_mode)() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vector2, Vector3};
    use crate::test_utils::MockLibrary;
    use crate::texture::Texture2D;
    use std::cell::{Cell, RefCell};
    use std::ffi::c_void;
    use wattle_sys as sys;

    thread_local! {
        static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
        static CLEAR: Cell<Option<sys::Color>> = const { Cell::new(None) };
        static CAMERA_2D: Cell<Option<sys::Camera2D>> = const { Cell::new(None) };
        static CAMERA_3D: Cell<Option<sys::Camera>> = const { Cell::new(None) };
        static TARGET: Cell<Option<sys::RenderTexture2D>> = const { Cell::new(None) };
    }

    fn record(call: &'static str) {
        CALLS.with_borrow_mut(|calls| calls.push(call));
    }

    extern "C" fn mock_begin_drawing() {
        record("BeginDrawing");
    }

    extern "C" fn mock_end_drawing() {
        record("EndDrawing");
    }

    extern "C" fn mock_clear_background(color: sys::Color) {
        record("ClearBackground");
        CLEAR.set(Some(color));
    }

    extern "C" fn mock_begin_2d_mode(camera: sys::Camera2D) {
        CAMERA_2D.set(Some(camera));
    }

    extern "C" fn mock_begin_3d_mode(camera: sys::Camera) {
        CAMERA_3D.set(Some(camera));
    }

    extern "C" fn mock_begin_texture_mode(target: sys::RenderTexture2D) {
        TARGET.set(Some(target));
    }

    #[test]
    fn frame_calls_arrive_in_order() {
        let rl = MockLibrary::new()
            .with("BeginDrawing", mock_begin_drawing as *const c_void)
            .with("ClearBackground", mock_clear_background as *const c_void)
            .with("EndDrawing", mock_end_drawing as *const c_void)
            .raylib();

        rl.begin_drawing();
        rl.clear_background(Color::RAYWHITE);
        rl.end_drawing();

        let calls = CALLS.with_borrow(Clone::clone);
        assert_eq!(calls, ["BeginDrawing", "ClearBackground", "EndDrawing"]);
        assert_eq!(
            CLEAR.get(),
            Some(sys::Color {
                r: 245,
                g: 245,
                b: 245,
                a: 255
            })
        );
    }

    #[test]
    fn cameras_are_passed_by_value() {
        let rl = MockLibrary::new()
            .with("Begin2dMode", mock_begin_2d_mode as *const c_void)
            .with("Begin3dMode", mock_begin_3d_mode as *const c_void)
            .raylib();

        rl.begin_2d_mode(Camera2D::new(
            Vector2::new(400.0, 225.0),
            Vector2::new(20.0, 20.0),
            15.0,
            2.0,
        ));
        rl.begin_3d_mode(Camera3D::new(
            Vector3::new(0.0, 10.0, 10.0),
            Vector3::ZERO,
            Vector3::UP,
            45.0,
        ));

        let camera_2d = CAMERA_2D.get().unwrap();
        assert_eq!((camera_2d.offset.x, camera_2d.rotation, camera_2d.zoom), (400.0, 15.0, 2.0));
        let camera_3d = CAMERA_3D.get().unwrap();
        assert_eq!((camera_3d.position.z, camera_3d.up.y, camera_3d.fovy), (10.0, 1.0, 45.0));
    }

    #[test]
    fn render_target_is_passed_by_value() {
        let rl = MockLibrary::new()
            .with("BeginTextureMode", mock_begin_texture_mode as *const c_void)
            .raylib();

        rl.begin_texture_mode(RenderTexture2D {
            id: 2,
            texture: Texture2D {
                id: 5,
                width: 256,
                height: 128,
                mipmaps: 1,
                format: 7,
            },
            depth: Texture2D::default(),
        });

        let target = TARGET.get().unwrap();
        assert_eq!((target.id, target.texture.id, target.texture.height), (2, 5, 128));
    }
}
