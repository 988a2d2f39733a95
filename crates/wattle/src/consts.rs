//! Numeric constants of the core module: flags, key codes, buttons and axes.
//!
//! Key, button and axis codes are plain `i32` so they go straight into the input methods of
//! [`Raylib`](crate::Raylib). The gamepad codes are the ones the native library reports for the
//! listed controllers on desktop platforms.
use bitflags::bitflags;

pub const PI: f32 = std::f32::consts::PI;
pub const DEG2RAD: f32 = PI / 180.0;
pub const RAD2DEG: f32 = 180.0 / PI;

bitflags! {
    /// Window configuration, applied by [`Raylib::set_config_flags`](crate::Raylib::set_config_flags)
    /// before the window is created.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct ConfigFlags: u8 {
        const FULLSCREEN_MODE = 1;
        const RESIZABLE_WINDOW = 2;
        /// Show the raylib logo at startup.
        const SHOW_LOGO = 4;
        const SHOW_MOUSE_CURSOR = 8;
        const CENTERED_MODE = 16;
        /// Ask for 4x multisample anti-aliasing.
        const MSAA_4X_HINT = 32;
        /// Ask for vertical sync.
        const VSYNC_HINT = 64;
    }
}

// keyboard: function keys
pub const KEY_SPACE: i32 = 32;
pub const KEY_ESCAPE: i32 = 256;
pub const KEY_ENTER: i32 = 257;
pub const KEY_BACKSPACE: i32 = 259;
pub const KEY_RIGHT: i32 = 262;
pub const KEY_LEFT: i32 = 263;
pub const KEY_DOWN: i32 = 264;
pub const KEY_UP: i32 = 265;
pub const KEY_F1: i32 = 290;
pub const KEY_F2: i32 = 291;
pub const KEY_F3: i32 = 292;
pub const KEY_F4: i32 = 293;
pub const KEY_F5: i32 = 294;
pub const KEY_F6: i32 = 295;
pub const KEY_F7: i32 = 296;
pub const KEY_F8: i32 = 297;
pub const KEY_F9: i32 = 298;
pub const KEY_F10: i32 = 299;
pub const KEY_F11: i32 = 300;
pub const KEY_F12: i32 = 301;
pub const KEY_LEFT_SHIFT: i32 = 340;
pub const KEY_LEFT_CONTROL: i32 = 341;
pub const KEY_LEFT_ALT: i32 = 342;
pub const KEY_RIGHT_SHIFT: i32 = 344;
pub const KEY_RIGHT_CONTROL: i32 = 345;
pub const KEY_RIGHT_ALT: i32 = 346;

// keyboard: alphanumeric keys
pub const KEY_ZERO: i32 = 48;
pub const KEY_ONE: i32 = 49;
pub const KEY_TWO: i32 = 50;
pub const KEY_THREE: i32 = 51;
pub const KEY_FOUR: i32 = 52;
pub const KEY_FIVE: i32 = 53;
pub const KEY_SIX: i32 = 54;
pub const KEY_SEVEN: i32 = 55;
pub const KEY_EIGHT: i32 = 56;
pub const KEY_NINE: i32 = 57;
pub const KEY_A: i32 = 65;
pub const KEY_B: i32 = 66;
pub const KEY_C: i32 = 67;
pub const KEY_D: i32 = 68;
pub const KEY_E: i32 = 69;
pub const KEY_F: i32 = 70;
pub const KEY_G: i32 = 71;
pub const KEY_H: i32 = 72;
pub const KEY_I: i32 = 73;
pub const KEY_J: i32 = 74;
pub const KEY_K: i32 = 75;
pub const KEY_L: i32 = 76;
pub const KEY_M: i32 = 77;
pub const KEY_N: i32 = 78;
pub const KEY_O: i32 = 79;
pub const KEY_P: i32 = 80;
pub const KEY_Q: i32 = 81;
pub const KEY_R: i32 = 82;
pub const KEY_S: i32 = 83;
pub const KEY_T: i32 = 84;
pub const KEY_U: i32 = 85;
pub const KEY_V: i32 = 86;
pub const KEY_W: i32 = 87;
pub const KEY_X: i32 = 88;
pub const KEY_Y: i32 = 89;
pub const KEY_Z: i32 = 90;

// android physical buttons, these overlap the desktop codes above
pub const KEY_BACK: i32 = 4;
pub const KEY_MENU: i32 = 82;
pub const KEY_VOLUME_UP: i32 = 24;
pub const KEY_VOLUME_DOWN: i32 = 25;

pub const MOUSE_LEFT_BUTTON: i32 = 0;
pub const MOUSE_RIGHT_BUTTON: i32 = 1;
pub const MOUSE_MIDDLE_BUTTON: i32 = 2;

/// Highest touch index accepted by [`Raylib::get_touch_position`](crate::Raylib::get_touch_position), plus one.
pub const MAX_TOUCH_POINTS: i32 = 2;

pub const GAMEPAD_PLAYER1: i32 = 0;
pub const GAMEPAD_PLAYER2: i32 = 1;
pub const GAMEPAD_PLAYER3: i32 = 2;
pub const GAMEPAD_PLAYER4: i32 = 3;

// PS3 USB controller
pub const GAMEPAD_PS3_BUTTON_TRIANGLE: i32 = 0;
pub const GAMEPAD_PS3_BUTTON_CIRCLE: i32 = 1;
pub const GAMEPAD_PS3_BUTTON_CROSS: i32 = 2;
pub const GAMEPAD_PS3_BUTTON_SQUARE: i32 = 3;
pub const GAMEPAD_PS3_BUTTON_L1: i32 = 6;
pub const GAMEPAD_PS3_BUTTON_R1: i32 = 7;
pub const GAMEPAD_PS3_BUTTON_L2: i32 = 4;
pub const GAMEPAD_PS3_BUTTON_R2: i32 = 5;
pub const GAMEPAD_PS3_BUTTON_START: i32 = 8;
pub const GAMEPAD_PS3_BUTTON_SELECT: i32 = 9;
pub const GAMEPAD_PS3_BUTTON_UP: i32 = 24;
pub const GAMEPAD_PS3_BUTTON_RIGHT: i32 = 25;
pub const GAMEPAD_PS3_BUTTON_DOWN: i32 = 26;
pub const GAMEPAD_PS3_BUTTON_LEFT: i32 = 27;
pub const GAMEPAD_PS3_BUTTON_PS: i32 = 12;

pub const GAMEPAD_PS3_AXIS_LEFT_X: i32 = 0;
pub const GAMEPAD_PS3_AXIS_LEFT_Y: i32 = 1;
pub const GAMEPAD_PS3_AXIS_RIGHT_X: i32 = 2;
pub const GAMEPAD_PS3_AXIS_RIGHT_Y: i32 = 5;
/// Range [1..-1] (pressure-level).
pub const GAMEPAD_PS3_AXIS_L2: i32 = 3;
/// Range [1..-1] (pressure-level).
pub const GAMEPAD_PS3_AXIS_R2: i32 = 4;

// Xbox360 USB controller
pub const GAMEPAD_XBOX_BUTTON_A: i32 = 0;
pub const GAMEPAD_XBOX_BUTTON_B: i32 = 1;
pub const GAMEPAD_XBOX_BUTTON_X: i32 = 2;
pub const GAMEPAD_XBOX_BUTTON_Y: i32 = 3;
pub const GAMEPAD_XBOX_BUTTON_LB: i32 = 4;
pub const GAMEPAD_XBOX_BUTTON_RB: i32 = 5;
pub const GAMEPAD_XBOX_BUTTON_SELECT: i32 = 6;
pub const GAMEPAD_XBOX_BUTTON_START: i32 = 7;
pub const GAMEPAD_XBOX_BUTTON_UP: i32 = 10;
pub const GAMEPAD_XBOX_BUTTON_RIGHT: i32 = 11;
pub const GAMEPAD_XBOX_BUTTON_DOWN: i32 = 12;
pub const GAMEPAD_XBOX_BUTTON_LEFT: i32 = 13;
pub const GAMEPAD_XBOX_BUTTON_HOME: i32 = 8;

/// Range [-1..1], left to right.
pub const GAMEPAD_XBOX_AXIS_LEFT_X: i32 = 0;
/// Range [1..-1], bottom to top.
pub const GAMEPAD_XBOX_AXIS_LEFT_Y: i32 = 1;
/// Range [-1..1], left to right.
pub const GAMEPAD_XBOX_AXIS_RIGHT_X: i32 = 2;
/// Range [1..-1], bottom to top.
pub const GAMEPAD_XBOX_AXIS_RIGHT_Y: i32 = 3;
/// Range [-1..1] (pressure-level).
pub const GAMEPAD_XBOX_AXIS_LT: i32 = 4;
/// Range [-1..1] (pressure-level).
pub const GAMEPAD_XBOX_AXIS_RT: i32 = 5;
