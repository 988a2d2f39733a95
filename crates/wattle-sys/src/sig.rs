//! Signatures of every core entry point, one alias per C symbol.
use crate::{
    Bool, Camera, Camera2D, Color, Image, Matrix, Ray, RenderTexture2D, Vector2, Vector3,
};
use std::ffi::{c_char, c_float, c_int};

// window

/// CName: `InitWindow`
pub type InitWindow = unsafe extern "C" fn(width: c_int, height: c_int, title: *const c_char);
/// CName: `CloseWindow`
pub type CloseWindow = unsafe extern "C" fn();
/// CName: `WindowShouldClose`
pub type WindowShouldClose = unsafe extern "C" fn() -> Bool;
/// CName: `IsWindowMinimized`
pub type IsWindowMinimized = unsafe extern "C" fn() -> Bool;
/// CName: `ToggleFullscreen`
pub type ToggleFullscreen = unsafe extern "C" fn();
/// CName: `SetWindowIcon`
pub type SetWindowIcon = unsafe extern "C" fn(image: Image);
/// CName: `GetScreenWidth`
pub type GetScreenWidth = unsafe extern "C" fn() -> c_int;
/// CName: `GetScreenHeight`
pub type GetScreenHeight = unsafe extern "C" fn() -> c_int;

// cursor

/// CName: `ShowCursor`
pub type ShowCursor = unsafe extern "C" fn();
/// CName: `HideCursor`
pub type HideCursor = unsafe extern "C" fn();
/// CName: `IsCursorHidden`
pub type IsCursorHidden = unsafe extern "C" fn() -> Bool;
/// CName: `EnableCursor`
pub type EnableCursor = unsafe extern "C" fn();
/// CName: `DisableCursor`
pub type DisableCursor = unsafe extern "C" fn();

// drawing

/// CName: `ClearBackground`
pub type ClearBackground = unsafe extern "C" fn(color: Color);
/// CName: `BeginDrawing`
pub type BeginDrawing = unsafe extern "C" fn();
/// CName: `EndDrawing`
pub type EndDrawing = unsafe extern "C" fn();
/// CName: `Begin2dMode`
pub type Begin2dMode = unsafe extern "C" fn(camera: Camera2D);
/// CName: `End2dMode`
pub type End2dMode = unsafe extern "C" fn();
/// CName: `Begin3dMode`
pub type Begin3dMode = unsafe extern "C" fn(camera: Camera);
/// CName: `End3dMode`
pub type End3dMode = unsafe extern "C" fn();
/// CName: `BeginTextureMode`
pub type BeginTextureMode = unsafe extern "C" fn(target: RenderTexture2D);
/// CName: `EndTextureMode`
pub type EndTextureMode = unsafe extern "C" fn();

// screen space

/// CName: `GetMouseRay`
pub type GetMouseRay = unsafe extern "C" fn(mouse_position: Vector2, camera: Camera) -> Ray;
/// CName: `GetWorldToScreen`
pub type GetWorldToScreen = unsafe extern "C" fn(position: Vector3, camera: Camera) -> Vector2;
/// CName: `GetCameraMatrix`
pub type GetCameraMatrix = unsafe extern "C" fn(camera: Camera) -> Matrix;

// timing

/// CName: `SetTargetFPS`
pub type SetTargetFPS = unsafe extern "C" fn(fps: c_int);
/// CName: `GetFPS`
pub type GetFPS = unsafe extern "C" fn() -> c_float;
/// CName: `GetFrameTime`
pub type GetFrameTime = unsafe extern "C" fn() -> c_float;

// colour and math utilities

/// CName: `GetColor`
pub type GetColor = unsafe extern "C" fn(hex_value: c_int) -> Color;
/// CName: `GetHexValue`
pub type GetHexValue = unsafe extern "C" fn(color: Color) -> c_int;
/// CName: `ColorToFloat`. Returns a pointer to a static 4 element buffer.
pub type ColorToFloat = unsafe extern "C" fn(color: Color) -> *mut c_float;
/// CName: `VectorToFloat`. Returns a pointer to a static 3 element buffer.
pub type VectorToFloat = unsafe extern "C" fn(vec: Vector3) -> *mut c_float;
/// CName: `MatrixToFloat`. Returns a pointer to a static 16 element buffer.
pub type MatrixToFloat = unsafe extern "C" fn(mat: Matrix) -> *mut c_float;
/// CName: `GetRandomValue`
pub type GetRandomValue = unsafe extern "C" fn(min: c_int, max: c_int) -> c_int;
/// CName: `Fade`
pub type Fade = unsafe extern "C" fn(color: Color, alpha: c_float) -> Color;

// misc

/// CName: `SetConfigFlags`
pub type SetConfigFlags = unsafe extern "C" fn(flags: c_char);
/// CName: `ShowLogo`
pub type ShowLogo = unsafe extern "C" fn();
/// CName: `StorageSaveValue`
pub type StorageSaveValue = unsafe extern "C" fn(position: c_int, value: c_int);
/// CName: `StorageLoadValue`
pub type StorageLoadValue = unsafe extern "C" fn(position: c_int) -> c_int;

// keyboard

/// CName: `IsKeyPressed`
pub type IsKeyPressed = unsafe extern "C" fn(key: c_int) -> Bool;
/// CName: `IsKeyDown`
pub type IsKeyDown = unsafe extern "C" fn(key: c_int) -> Bool;
/// CName: `IsKeyReleased`
pub type IsKeyReleased = unsafe extern "C" fn(key: c_int) -> Bool;
/// CName: `IsKeyUp`
pub type IsKeyUp = unsafe extern "C" fn(key: c_int) -> Bool;
/// CName: `GetKeyPressed`
pub type GetKeyPressed = unsafe extern "C" fn() -> c_int;
/// CName: `SetExitKey`
pub type SetExitKey = unsafe extern "C" fn(key: c_int);

// gamepad

/// CName: `IsGamepadAvailable`
pub type IsGamepadAvailable = unsafe extern "C" fn(gamepad: c_int) -> Bool;
/// CName: `IsGamepadName`
pub type IsGamepadName = unsafe extern "C" fn(gamepad: c_int, name: *const c_char) -> Bool;
/// CName: `GetGamepadName`
pub type GetGamepadName = unsafe extern "C" fn(gamepad: c_int) -> *const c_char;
/// CName: `IsGamepadButtonPressed`
pub type IsGamepadButtonPressed = unsafe extern "C" fn(gamepad: c_int, button: c_int) -> Bool;
/// CName: `IsGamepadButtonDown`
pub type IsGamepadButtonDown = unsafe extern "C" fn(gamepad: c_int, button: c_int) -> Bool;
/// CName: `IsGamepadButtonReleased`
pub type IsGamepadButtonReleased = unsafe extern "C" fn(gamepad: c_int, button: c_int) -> Bool;
/// CName: `IsGamepadButtonUp`
pub type IsGamepadButtonUp = unsafe extern "C" fn(gamepad: c_int, button: c_int) -> Bool;
/// CName: `GetGamepadButtonPressed`
pub type GetGamepadButtonPressed = unsafe extern "C" fn() -> c_int;
/// CName: `GetGamepadAxisCount`
pub type GetGamepadAxisCount = unsafe extern "C" fn(gamepad: c_int) -> c_int;
/// CName: `GetGamepadAxisMovement`
pub type GetGamepadAxisMovement = unsafe extern "C" fn(gamepad: c_int, axis: c_int) -> c_float;

// mouse

/// CName: `IsMouseButtonPressed`
pub type IsMouseButtonPressed = unsafe extern "C" fn(button: c_int) -> Bool;
/// CName: `IsMouseButtonDown`
pub type IsMouseButtonDown = unsafe extern "C" fn(button: c_int) -> Bool;
/// CName: `IsMouseButtonReleased`
pub type IsMouseButtonReleased = unsafe extern "C" fn(button: c_int) -> Bool;
/// CName: `IsMouseButtonUp`
pub type IsMouseButtonUp = unsafe extern "C" fn(button: c_int) -> Bool;
/// CName: `GetMouseX`
pub type GetMouseX = unsafe extern "C" fn() -> c_int;
/// CName: `GetMouseY`
pub type GetMouseY = unsafe extern "C" fn() -> c_int;
/// CName: `GetMousePosition`
pub type GetMousePosition = unsafe extern "C" fn() -> Vector2;
/// CName: `SetMousePosition`
pub type SetMousePosition = unsafe extern "C" fn(position: Vector2);
/// CName: `GetMouseWheelMove`
pub type GetMouseWheelMove = unsafe extern "C" fn() -> c_int;

// touch

/// CName: `GetTouchX`
pub type GetTouchX = unsafe extern "C" fn() -> c_int;
/// CName: `GetTouchY`
pub type GetTouchY = unsafe extern "C" fn() -> c_int;
/// CName: `GetTouchPosition`
pub type GetTouchPosition = unsafe extern "C" fn(index: c_int) -> Vector2;
