use crate::Raylib;
use crate::marshal::{from_native_bool, from_native_text, with_native_text};

impl Raylib {
    pub fn is_gamepad_available(&self, gamepad: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_gamepad_available)(gamepad) })
    }

    /// Whether the gamepad in slot `gamepad` reports itself as `name`.
    pub fn is_gamepad_name(&self, gamepad: i32, name: &str) -> bool {
        let matches =
            with_native_text(name, |name| unsafe { (self.api.is_gamepad_name)(gamepad, name) });
        from_native_bool(matches)
    }

    /// Returns the name the driver reports for `gamepad`, empty if there is none.
    pub fn get_gamepad_name(&self, gamepad: i32) -> String {
        unsafe { from_native_text((self.api.get_gamepad_name)(gamepad)) }
    }

    pub fn is_gamepad_button_pressed(&self, gamepad: i32, button: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_gamepad_button_pressed)(gamepad, button) })
    }

    pub fn is_gamepad_button_down(&self, gamepad: i32, button: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_gamepad_button_down)(gamepad, button) })
    }

    pub fn is_gamepad_button_released(&self, gamepad: i32, button: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_gamepad_button_released)(gamepad, button) })
    }

    pub fn is_gamepad_button_up(&self, gamepad: i32, button: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_gamepad_button_up)(gamepad, button) })
    }

    /// Returns the last gamepad button pressed, `-1` when there is none.
    pub fn get_gamepad_button_pressed(&self) -> i32 {
        unsafe { (self.api.get_gamepad_button_pressed)() }
    }

    pub fn get_gamepad_axis_count(&self, gamepad: i32) -> i32 {
        unsafe { (self.api.get_gamepad_axis_count)(gamepad) }
    }

    /// Returns the axis value, see the `GAMEPAD_*_AXIS_*` constants for ranges.
    pub fn get_gamepad_axis_movement(&self, gamepad: i32, axis: i32) -> f32 {
        unsafe { (self.api.get_gamepad_axis_movement)(gamepad, axis) }
    }
}
