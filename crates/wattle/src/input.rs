//! Keyboard and touch input. Mouse and gamepad live in the submodules.
//!
//! Input state is polled by the native library once per frame, inside
//! [`Raylib::end_drawing`]. "Pressed" and "released" are edge states of that frame, "down" and
//! "up" are levels.
pub mod gamepad;
pub mod mouse;

use crate::Raylib;
use crate::marshal::{NativeLayout, from_native_bool};
use crate::math::Vector2;

impl Raylib {
    /// Whether `key` went down this frame.
    pub fn is_key_pressed(&self, key: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_key_pressed)(key) })
    }

    pub fn is_key_down(&self, key: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_key_down)(key) })
    }

    /// Whether `key` went up this frame.
    pub fn is_key_released(&self, key: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_key_released)(key) })
    }

    pub fn is_key_up(&self, key: i32) -> bool {
        from_native_bool(unsafe { (self.api.is_key_up)(key) })
    }

    /// Returns the latest key pressed, `-1` when there is none.
    pub fn get_key_pressed(&self) -> i32 {
        unsafe { (self.api.get_key_pressed)() }
    }

    /// Sets the key that makes [`Raylib::window_should_close`] return `true`
    /// ([`KEY_ESCAPE`](crate::consts::KEY_ESCAPE) by default).
    pub fn set_exit_key(&self, key: i32) {
        unsafe { (self.api.set_exit_key)(key) }
    }

    pub fn get_touch_x(&self) -> i32 {
        unsafe { (self.api.get_touch_x)() }
    }

    pub fn get_touch_y(&self) -> i32 {
        unsafe { (self.api.get_touch_y)() }
    }

    /// Returns the position of touch point `index`, below
    /// [`MAX_TOUCH_POINTS`](crate::consts::MAX_TOUCH_POINTS).
    pub fn get_touch_position(&self, index: i32) -> Vector2 {
        Vector2::from_native(unsafe { (self.api.get_touch_position)(index) })
    }
}

#[cfg(test)]
mod tests {
    use crate::consts::{KEY_ESCAPE, KEY_SPACE, KEY_Q};
    use crate::math::Vector2;
    use crate::test_utils::MockLibrary;
    use std::cell::Cell;
    use std::ffi::{c_int, c_void};
    use wattle_sys as sys;

    thread_local! {
        static EXIT_KEY: Cell<c_int> = const { Cell::new(0) };
    }

    extern "C" fn space_is_down(key: c_int) -> sys::Bool {
        if key == KEY_SPACE { sys::TRUE } else { sys::FALSE }
    }

    extern "C" fn garbage_bool(_: c_int) -> sys::Bool {
        0xff
    }

    extern "C" fn mock_get_key_pressed() -> c_int {
        -1
    }

    extern "C" fn mock_set_exit_key(key: c_int) {
        EXIT_KEY.set(key);
    }

    extern "C" fn mock_get_touch_position(index: c_int) -> sys::Vector2 {
        sys::Vector2 {
            x: 100.0 * index as f32,
            y: 50.0,
        }
    }

    #[test]
    fn key_state_follows_native_sentinel() {
        let rl = MockLibrary::new()
            .with("IsKeyDown", space_is_down as *const c_void)
            .with("IsKeyPressed", garbage_bool as *const c_void)
            .raylib();

        assert!(rl.is_key_down(KEY_SPACE));
        assert!(!rl.is_key_down(KEY_ESCAPE));
        assert!(!rl.is_key_pressed(KEY_SPACE));
    }

    #[test]
    fn key_codes_are_forwarded() {
        let rl = MockLibrary::new()
            .with("GetKeyPressed", mock_get_key_pressed as *const c_void)
            .with("SetExitKey", mock_set_exit_key as *const c_void)
            .raylib();

        assert_eq!(rl.get_key_pressed(), -1);
        rl.set_exit_key(KEY_Q);
        assert_eq!(EXIT_KEY.get(), KEY_Q);
    }

    #[test]
    fn touch_position_is_reinterpreted() {
        let rl = MockLibrary::new()
            .with("GetTouchPosition", mock_get_touch_position as *const c_void)
            .raylib();

        assert_eq!(rl.get_touch_position(1), Vector2::new(100.0, 50.0));
    }
}
