//! Window and cursor management.
use crate::Raylib;
use crate::consts::ConfigFlags;
use crate::marshal::{from_native_bool, with_native_text};
use crate::texture::Image;
use std::ffi::c_char;

impl Raylib {
    /// Initializes the window and its OpenGL context.
    pub fn init_window(&self, width: i32, height: i32, title: &str) {
        log::trace!("Opening a {}x{} window titled '{}'", width, height, title);
        with_native_text(title, |title| unsafe {
            (self.api.init_window)(width, height, title)
        });
    }

    /// Closes the window and unloads the OpenGL context.
    pub fn close_window(&self) {
        unsafe { (self.api.close_window)() }
    }

    /// Whether `KEY_ESCAPE` was pressed or the close button was clicked.
    pub fn window_should_close(&self) -> bool {
        from_native_bool(unsafe { (self.api.window_should_close)() })
    }

    pub fn is_window_minimized(&self) -> bool {
        from_native_bool(unsafe { (self.api.is_window_minimized)() })
    }

    /// Fullscreen toggle, desktop only.
    pub fn toggle_fullscreen(&self) {
        unsafe { (self.api.toggle_fullscreen)() }
    }

    /// Sets the window icon, desktop only. The image should be in R8G8B8A8 format.
    pub fn set_window_icon(&self, image: &Image) {
        unsafe { (self.api.set_window_icon)(*image.as_raw()) }
    }

    pub fn get_screen_width(&self) -> i32 {
        unsafe { (self.api.get_screen_width)() }
    }

    pub fn get_screen_height(&self) -> i32 {
        unsafe { (self.api.get_screen_height)() }
    }

    pub fn show_cursor(&self) {
        unsafe { (self.api.show_cursor)() }
    }

    pub fn hide_cursor(&self) {
        unsafe { (self.api.hide_cursor)() }
    }

    pub fn is_cursor_hidden(&self) -> bool {
        from_native_bool(unsafe { (self.api.is_cursor_hidden)() })
    }

    /// Unlocks the cursor.
    pub fn enable_cursor(&self) {
        unsafe { (self.api.enable_cursor)() }
    }

    /// Locks the cursor to the window.
    pub fn disable_cursor(&self) {
        unsafe { (self.api.disable_cursor)() }
    }

    /// Sets the configuration flags used when the window is created.
    pub fn set_config_flags(&self, flags: ConfigFlags) {
        unsafe { (self.api.set_config_flags)(flags.bits() as c_char) }
    }

    /// Shows the raylib logo animation at startup.
    pub fn show_logo(&self) {
        unsafe { (self.api.show_logo)() }
    }
}
