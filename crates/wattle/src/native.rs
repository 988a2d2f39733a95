//! Symbol resolution for the native library.
#![allow(clippy::missing_safety_doc)]

use crate::error::{WattleError, WattleResult};
use libloading::Library;
use std::ffi::c_void;
use wattle_sys as sys;

/// Something that can hand out the address of a C symbol.
///
/// Implemented for [`libloading::Library`]. Anything else (a statically linked copy of raylib, an
/// in-process table) can implement it too and go through
/// [`Raylib::from_source`](crate::Raylib::from_source).
pub trait SymbolSource {
    /// Looks up `name`, given as NUL terminated bytes (`b"InitWindow\0"`).
    ///
    /// Returns [`None`] when the symbol does not exist.
    fn lookup(&self, name: &[u8]) -> Option<*const c_void>;
}

impl SymbolSource for Library {
    fn lookup(&self, name: &[u8]) -> Option<*const c_void> {
        match unsafe { self.get::<*const c_void>(name) } {
            Ok(symbol) => Some(*symbol),
            Err(err) => {
                log::trace!(
                    "Symbol '{}' not found: {}",
                    format_symbol_name(name),
                    err
                );
                None
            }
        }
    }
}

pub(crate) fn format_symbol_name(bytes: &[u8]) -> String {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..len]).into_owned()
}

macro_rules! raylib_api {
    ($($field:ident: $sig:ident = $cname:literal;)*) => {
        /// Every entry point of the native core module, resolved up front.
        ///
        /// Only ever built by [`RaylibApi::resolve`], which fails if a single symbol is missing,
        /// so a call through any field never hits a dangling entry.
        #[derive(Clone, Copy)]
        pub struct RaylibApi {
            $(pub(crate) $field: sys::sig::$sig,)*
        }

        impl RaylibApi {
            /// C names of every symbol in the table.
            pub const SYMBOLS: &'static [&'static str] = &[$($cname),*];

            /// Resolves the whole table from `source`.
            ///
            /// # Safety
            /// Every address `source` returns must be a function with the C signature declared
            /// for that name in [`wattle_sys::sig`].
            pub unsafe fn resolve(source: &(impl SymbolSource + ?Sized)) -> WattleResult<Self> {
                Ok(Self {
                    $($field: {
                        let address = source
                            .lookup(concat!($cname, "\0").as_bytes())
                            .filter(|address| !address.is_null())
                            .ok_or(WattleError::MissingSymbol($cname))?;
                        unsafe { std::mem::transmute::<*const c_void, sys::sig::$sig>(address) }
                    },)*
                })
            }
        }
    };
}

raylib_api! {
    init_window: InitWindow = "InitWindow";
    close_window: CloseWindow = "CloseWindow";
    window_should_close: WindowShouldClose = "WindowShouldClose";
    is_window_minimized: IsWindowMinimized = "IsWindowMinimized";
    toggle_fullscreen: ToggleFullscreen = "ToggleFullscreen";
    set_window_icon: SetWindowIcon = "SetWindowIcon";
    get_screen_width: GetScreenWidth = "GetScreenWidth";
    get_screen_height: GetScreenHeight = "GetScreenHeight";

    show_cursor: ShowCursor = "ShowCursor";
    hide_cursor: HideCursor = "HideCursor";
    is_cursor_hidden: IsCursorHidden = "IsCursorHidden";
    enable_cursor: EnableCursor = "EnableCursor";
    disable_cursor: DisableCursor = "DisableCursor";

    clear_background: ClearBackground = "ClearBackground";
    begin_drawing: BeginDrawing = "BeginDrawing";
    end_drawing: EndDrawing = "EndDrawing";
    begin_2d_mode: Begin2dMode = "Begin2dMode";
    end_2d_mode: End2dMode = "End2dMode";
    begin_3d_mode: Begin3dMode = "Begin3dMode";
    end_3d_mode: End3dMode = "End3dMode";
    begin_texture_mode: BeginTextureMode = "BeginTextureMode";
    end_texture_mode: EndTextureMode = "EndTextureMode";

    get_mouse_ray: GetMouseRay = "GetMouseRay";
    get_world_to_screen: GetWorldToScreen = "GetWorldToScreen";
    get_camera_matrix: GetCameraMatrix = "GetCameraMatrix";

    set_target_fps: SetTargetFPS = "SetTargetFPS";
    get_fps: GetFPS = "GetFPS";
    get_frame_time: GetFrameTime = "GetFrameTime";

    get_color: GetColor = "GetColor";
    get_hex_value: GetHexValue = "GetHexValue";
    color_to_float: ColorToFloat = "ColorToFloat";
    vector_to_float: VectorToFloat = "VectorToFloat";
    matrix_to_float: MatrixToFloat = "MatrixToFloat";
    get_random_value: GetRandomValue = "GetRandomValue";
    fade: Fade = "Fade";

    set_config_flags: SetConfigFlags = "SetConfigFlags";
    show_logo: ShowLogo = "ShowLogo";
    storage_save_value: StorageSaveValue = "StorageSaveValue";
    storage_load_value: StorageLoadValue = "StorageLoadValue";

    is_key_pressed: IsKeyPressed = "IsKeyPressed";
    is_key_down: IsKeyDown = "IsKeyDown";
    is_key_released: IsKeyReleased = "IsKeyReleased";
    is_key_up: IsKeyUp = "IsKeyUp";
    get_key_pressed: GetKeyPressed = "GetKeyPressed";
    set_exit_key: SetExitKey = "SetExitKey";

    is_gamepad_available: IsGamepadAvailable = "IsGamepadAvailable";
    is_gamepad_name: IsGamepadName = "IsGamepadName";
    get_gamepad_name: GetGamepadName = "GetGamepadName";
    is_gamepad_button_pressed: IsGamepadButtonPressed = "IsGamepadButtonPressed";
    is_gamepad_button_down: IsGamepadButtonDown = "IsGamepadButtonDown";
    is_gamepad_button_released: IsGamepadButtonReleased = "IsGamepadButtonReleased";
    is_gamepad_button_up: IsGamepadButtonUp = "IsGamepadButtonUp";
    get_gamepad_button_pressed: GetGamepadButtonPressed = "GetGamepadButtonPressed";
    get_gamepad_axis_count: GetGamepadAxisCount = "GetGamepadAxisCount";
    get_gamepad_axis_movement: GetGamepadAxisMovement = "GetGamepadAxisMovement";

    is_mouse_button_pressed: IsMouseButtonPressed = "IsMouseButtonPressed";
    is_mouse_button_down: IsMouseButtonDown = "IsMouseButtonDown";
    is_mouse_button_released: IsMouseButtonReleased = "IsMouseButtonReleased";
    is_mouse_button_up: IsMouseButtonUp = "IsMouseButtonUp";
    get_mouse_x: GetMouseX = "GetMouseX";
    get_mouse_y: GetMouseY = "GetMouseY";
    get_mouse_position: GetMousePosition = "GetMousePosition";
    set_mouse_position: SetMousePosition = "SetMousePosition";
    get_mouse_wheel_move: GetMouseWheelMove = "GetMouseWheelMove";

    get_touch_x: GetTouchX = "GetTouchX";
    get_touch_y: GetTouchY = "GetTouchY";
    get_touch_position: GetTouchPosition = "GetTouchPosition";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockLibrary;

    #[test]
    fn resolves_full_table() {
        let mock = MockLibrary::new();
        assert!(unsafe { RaylibApi::resolve(&mock) }.is_ok());
    }

    #[test]
    fn missing_symbol_is_named() {
        let mock = MockLibrary::new().without("GetTouchPosition");
        let err = unsafe { RaylibApi::resolve(&mock) }.err().unwrap();
        assert!(matches!(err, WattleError::MissingSymbol("GetTouchPosition")));
    }

    #[test]
    fn null_address_counts_as_missing() {
        let mock = MockLibrary::new().with("EndDrawing", std::ptr::null());
        let err = unsafe { RaylibApi::resolve(&mock) }.err().unwrap();
        assert!(matches!(err, WattleError::MissingSymbol("EndDrawing")));
    }

    #[test]
    fn symbol_names_are_unique() {
        let mut names = RaylibApi::SYMBOLS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RaylibApi::SYMBOLS.len());
    }

    #[test]
    fn format_symbol_name_stops_at_nul() {
        assert_eq!(format_symbol_name(b"InitWindow\0"), "InitWindow");
        assert_eq!(format_symbol_name(b"NoTerminator"), "NoTerminator");
    }
}
