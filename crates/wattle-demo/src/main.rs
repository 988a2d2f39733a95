mod panic;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use wattle::consts::{KEY_F11, KEY_R, MOUSE_LEFT_BUTTON, MOUSE_RIGHT_BUTTON};
use wattle::logging::{self, LoggingOptions};
use wattle::{Color, ConfigFlags, LoaderConfig, Raylib};

/// Storage slot holding the number of clicks across runs.
const CLICKS_SLOT: i32 = 0;

const BACKGROUNDS: [Color; 6] = [
    Color::RAYWHITE,
    Color::SKYBLUE,
    Color::BEIGE,
    Color::LIGHTGRAY,
    Color::PINK,
    Color::LIME,
];

#[derive(Parser)]
#[command(name = "wattle-demo")]
#[command(about = "Opens a raylib window through wattle and reacts to mouse and keyboard input")]
struct Cli {
    #[arg(short, long, help = "Path of the raylib shared library, skips the search")]
    library: Option<PathBuf>,

    #[arg(short, long, help = "Loader configuration file (RON)")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: i32,

    #[arg(long, default_value_t = 450)]
    height: i32,

    #[arg(long, default_value = "wattle demo")]
    title: String,

    #[arg(long, default_value_t = 60, help = "Target frames per second")]
    fps: i32,

    #[arg(long, help = "Mirror the log into the user data directory")]
    log_file: bool,

    #[arg(long, help = "Write the effective loader configuration to --config and exit")]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&LoggingOptions {
        app_target: Some(env!("CARGO_CRATE_NAME").to_string()),
        log_to_file: cli.log_file,
        ..Default::default()
    })?;

    panic::set_hook();
    log::debug!("Set panic hook");

    let mut config = match &cli.config {
        Some(path) => LoaderConfig::read_from(path)
            .with_context(|| format!("Unable to read loader config {}", path.display()))?,
        None => LoaderConfig::default(),
    };
    if let Some(library) = &cli.library {
        config.library_path = Some(library.clone());
    }

    if cli.save_config {
        let path = cli
            .config
            .as_ref()
            .ok_or(anyhow::anyhow!("--save-config needs --config <file>"))?;
        config.write_to(path)?;
        log::info!("Wrote loader config to {}", path.display());
        return Ok(());
    }

    let rl = Raylib::load(&config).context("Unable to load raylib")?;
    run(&rl, &cli)
}

fn run(rl: &Raylib, cli: &Cli) -> anyhow::Result<()> {
    rl.set_config_flags(ConfigFlags::MSAA_4X_HINT | ConfigFlags::VSYNC_HINT);
    rl.init_window(cli.width, cli.height, &cli.title);
    rl.set_target_fps(cli.fps);

    let mut clicks = rl.storage_load_value(CLICKS_SLOT);
    log::info!(
        "Window ready: {}x{}, {} clicks so far",
        rl.get_screen_width(),
        rl.get_screen_height(),
        clicks
    );

    let mut background = 0;
    let mut alpha = 1.0;

    while !rl.window_should_close() {
        if rl.is_key_pressed(KEY_F11) {
            rl.toggle_fullscreen();
        }
        if rl.is_key_pressed(KEY_R) {
            background = rl.get_random_value(0, BACKGROUNDS.len() as i32 - 1) as usize;
            log::debug!("Random background {}", background);
        }
        if rl.is_mouse_button_pressed(MOUSE_LEFT_BUTTON) {
            clicks += 1;
            background = (background + 1) % BACKGROUNDS.len();
            let position = rl.get_mouse_position();
            log::debug!("Click #{} at ({}, {})", clicks, position.x, position.y);
        }
        if rl.is_mouse_button_pressed(MOUSE_RIGHT_BUTTON) {
            let color = BACKGROUNDS[background];
            log::info!(
                "Background is #{:08X}, {:.2} fps",
                rl.get_hex_value(color) as u32,
                rl.get_fps()
            );
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0 {
            alpha = (alpha + wheel as f32 * 0.05).clamp(0.1, 1.0);
        }

        rl.begin_drawing();
        rl.clear_background(rl.fade(BACKGROUNDS[background], alpha));
        rl.end_drawing();
    }

    rl.storage_save_value(CLICKS_SLOT, clicks);
    rl.close_window();
    log::info!("Closed window after {} clicks", clicks);
    Ok(())
}
