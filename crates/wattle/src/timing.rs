//! Frame rate control.
use crate::Raylib;

impl Raylib {
    /// Sets the target frames per second.
    pub fn set_target_fps(&self, fps: i32) {
        unsafe { (self.api.set_target_fps)(fps) }
    }

    /// Returns the current frames per second.
    pub fn get_fps(&self) -> f32 {
        unsafe { (self.api.get_fps)() }
    }

    /// Returns the time in seconds of the last frame drawn.
    pub fn get_frame_time(&self) -> f32 {
        unsafe { (self.api.get_frame_time)() }
    }
}
