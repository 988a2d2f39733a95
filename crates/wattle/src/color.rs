use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use wattle_macro::NativeLayout;
use wattle_sys as sys;

/// RGBA colour, 8 bits per channel.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, NativeLayout)]
#[native(sys::Color)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// raylib's own palette, tuned for a white background.
impl Color {
    pub const LIGHTGRAY: Color = Color::new(200, 200, 200, 255);
    pub const GRAY: Color = Color::new(130, 130, 130, 255);
    pub const DARKGRAY: Color = Color::new(80, 80, 80, 255);
    pub const YELLOW: Color = Color::new(253, 249, 0, 255);
    pub const GOLD: Color = Color::new(255, 203, 0, 255);
    pub const ORANGE: Color = Color::new(255, 161, 0, 255);
    pub const PINK: Color = Color::new(255, 109, 194, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const MAROON: Color = Color::new(190, 33, 55, 255);
    pub const GREEN: Color = Color::new(0, 228, 48, 255);
    pub const LIME: Color = Color::new(0, 158, 47, 255);
    pub const DARKGREEN: Color = Color::new(0, 117, 44, 255);
    pub const SKYBLUE: Color = Color::new(102, 191, 255, 255);
    pub const BLUE: Color = Color::new(0, 121, 241, 255);
    pub const DARKBLUE: Color = Color::new(0, 82, 172, 255);
    pub const PURPLE: Color = Color::new(200, 122, 255, 255);
    pub const VIOLET: Color = Color::new(135, 60, 190, 255);
    pub const DARKPURPLE: Color = Color::new(112, 31, 126, 255);
    pub const BEIGE: Color = Color::new(211, 176, 131, 255);
    pub const BROWN: Color = Color::new(127, 106, 79, 255);
    pub const DARKBROWN: Color = Color::new(76, 63, 47, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    /// Fully transparent.
    pub const BLANK: Color = Color::new(0, 0, 0, 0);
    pub const MAGENTA: Color = Color::new(255, 0, 255, 255);
    /// The white of the raylib logo.
    pub const RAYWHITE: Color = Color::new(245, 245, 245, 255);
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Each channel divided by 255, in `[r, g, b, a]` order.
    pub fn normalized(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn to_vec4(&self) -> Vec4 {
        Vec4::from_array(self.normalized())
    }
}

impl From<Vec4> for Color {
    /// Takes normalized channels, clamping anything outside `0.0..=1.0`.
    fn from(value: Vec4) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(
            channel(value.x),
            channel(value.y),
            channel(value.z),
            channel(value.w),
        )
    }
}
