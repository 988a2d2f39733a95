use crate::Raylib;
use crate::marshal::{NativeLayout, from_native_bool};
use crate::math::Vector2;

impl Raylib {
    pub fn is_mouse_button_pressed(&self, button: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_mouse_button_pressed)(button) })
    }

    pub fn is_mouse_button_down(&self, button: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_mouse_button_down)(button) })
    }

    pub fn is_mouse_button_released(&self, button: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_mouse_button_released)(button) })
    }

    pub fn is_mouse_button_up(&self, button: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_mouse_button_up)(button) })
    }

    pub fn get_mouse_x(&self) -> i32 {
        unsafe { (self.api.get_mouse_x)() }
    }

    pub fn get_mouse_y(&self) -> i32 {
        unsafe { (self.api.get_mouse_y)() }
    }

    /// Mouse position in window coordinates.
    pub fn get_mouse_position(&self) -> Vector2 {
        Vector2::from_native(unsafe { (self.api.get_mouse_position)() })
    }

    pub fn set_mouse_position(&self, position: Vector2) {
        unsafe { (self.api.set_mouse_position)(position.into_native()) }
    }

    /// Wheel movement since the last frame, positive away from the user.
    pub fn get_mouse_wheel_move(&self) -> i32 {
        unsafe { (self.api.get_mouse_wheel_move)() }
    }
}
