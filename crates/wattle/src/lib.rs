//! Bindings to the core module of raylib 1.7: window, drawing modes, cameras, timing, input and a
//! handful of colour and math utilities.
//!
//! The native library is loaded at runtime. Everything goes through a [`Raylib`] handle:
//!
//! ```no_run
//! use wattle::{Color, LoaderConfig, Raylib};
//!
//! let rl = Raylib::load(&LoaderConfig::default())?;
//! rl.init_window(800, 450, "wattle");
//! rl.set_target_fps(60);
//! while !rl.window_should_close() {
//!     rl.begin_drawing();
//!     rl.clear_background(Color::RAYWHITE);
//!     rl.end_drawing();
//! }
//! rl.close_window();
//! # Ok::<(), wattle::WattleError>(())
//! ```
//!
//! Values crossing into the library are converted by [`marshal`].

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod drawing;
pub mod error;
pub mod input;
pub mod logging;
pub mod marshal;
pub mod math;
pub mod native;
pub mod raylib;
pub mod texture;
pub mod timing;
pub mod utils;
pub mod window;

#[cfg(test)]
pub(crate) mod test_utils;

pub use wattle_sys as sys;

pub use camera::{Camera, Camera2D, Camera3D};
pub use color::Color;
pub use config::LoaderConfig;
pub use consts::ConfigFlags;
pub use error::{WattleError, WattleResult};
pub use marshal::{NativeArray, NativeLayout};
pub use math::{BoundingBox, Matrix, Quaternion, Ray, Rectangle, Vector2, Vector3};
pub use native::SymbolSource;
pub use raylib::Raylib;
pub use texture::{Image, RenderTexture2D, Texture2D};

/// The appdata directory wattle writes into (log files).
///
/// Its items are located in [`app_dirs2::AppDataType::UserData`].
pub const APP_INFO: app_dirs2::AppInfo = app_dirs2::AppInfo {
    name: "wattle",
    author: "tirbofish",
};
