//! Image and texture handles accepted by the core module.
//!
//! Loading and unloading them belongs to the texture module of the native library, which is not
//! wrapped here. These types only carry values produced elsewhere back into core calls.
use bytemuck::{Pod, Zeroable};
use wattle_macro::NativeLayout;
use wattle_sys as sys;

/// Texture parameters stored in GPU memory.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable, NativeLayout)]
#[native(sys::Texture2D)]
pub struct Texture2D {
    /// OpenGL texture id.
    pub id: u32,
    pub width: i32,
    pub height: i32,
    pub mipmaps: i32,
    pub format: i32,
}

/// Render target, used by [`Raylib::begin_texture_mode`](crate::Raylib::begin_texture_mode).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable, NativeLayout)]
#[native(sys::RenderTexture2D)]
pub struct RenderTexture2D {
    /// OpenGL framebuffer id.
    pub id: u32,
    pub texture: Texture2D,
    pub depth: Texture2D,
}

/// Image data in CPU memory.
///
/// Unlike the other value types this one holds a pointer into memory owned by the native
/// allocator, so it is never reinterpreted as plain bytes. It wraps the native struct as is.
#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct Image(sys::Image);

impl Image {
    /// Wraps an image produced by the native library.
    ///
    /// # Safety
    /// `raw.data` must point to pixel data matching `width`, `height` and `format`, and stay
    /// allocated for as long as this value is passed to native calls.
    pub const unsafe fn from_raw(raw: sys::Image) -> Self {
        Self(raw)
    }

    pub const fn as_raw(&self) -> &sys::Image {
        &self.0
    }

    pub const fn width(&self) -> i32 {
        self.0.width
    }

    pub const fn height(&self) -> i32 {
        self.0.height
    }

    pub const fn mipmaps(&self) -> i32 {
        self.0.mipmaps
    }

    pub const fn format(&self) -> i32 {
        self.0.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal::NativeLayout;
    use std::mem::size_of;

    #[test]
    fn render_texture_nests_textures() {
        let target = RenderTexture2D {
            id: 3,
            texture: Texture2D {
                id: 7,
                width: 320,
                height: 240,
                mipmaps: 1,
                format: 7,
            },
            depth: Texture2D {
                id: 8,
                ..Default::default()
            },
        };

        let native = target.into_native();
        assert_eq!(native.id, 3);
        assert_eq!(native.texture.width, 320);
        assert_eq!(native.depth.id, 8);
        assert_eq!(size_of::<RenderTexture2D>(), 44);
    }

    #[test]
    fn image_is_transparent_over_native() {
        assert_eq!(size_of::<Image>(), size_of::<sys::Image>());

        let raw = sys::Image {
            data: std::ptr::null_mut(),
            width: 16,
            height: 8,
            mipmaps: 1,
            format: 7,
        };
        let image = unsafe { Image::from_raw(raw) };
        assert_eq!((image.width(), image.height()), (16, 8));
        assert!(image.as_raw().data.is_null());
    }
}
