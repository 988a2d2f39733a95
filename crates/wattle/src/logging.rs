//! Console (and optionally file) logging for applications built on wattle.
//!
//! wattle itself only talks to the [`log`] facade. Call [`init`] once at startup to get the
//! coloured console output, with every line mirrored into a timestamped file under the user data
//! directory when asked for.

use crate::error::{WattleError, WattleResult};
use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Level for the `wattle` target and [`LoggingOptions::app_target`]. Everything else logs
    /// warnings and up.
    ///
    /// Target filters match by prefix, so the `wattle` filter already covers `wattle_sys` and
    /// any application crate whose name starts with `wattle`.
    pub level: LevelFilter,
    /// Module path of the application, e.g. `"my_game"`. Dashes are turned into underscores.
    ///
    /// Only needed when the crate name does not start with `wattle`. Also names the log file.
    pub app_target: Option<String>,
    /// Mirror every line into `<user data>/logs/<app>.<timestamp>.log`.
    pub log_to_file: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: LevelFilter::Debug,
            app_target: None,
            log_to_file: false,
        }
    }
}

/// Installs the global logger. `RUST_LOG` still overrides the filters set here.
///
/// Returns the path of the log file, if one was opened. Calling this twice keeps the first logger
/// and opens no file.
pub fn init(options: &LoggingOptions) -> WattleResult<Option<PathBuf>> {
    // filled once the logger is installed
    let file: Arc<Mutex<Option<File>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&file);

    let mut builder = Builder::new();
    builder
        .format(move |buf, record| {
            let ts = chrono::offset::Local::now().format("%Y-%m-%dT%H:%M:%S");

            let colored_level = match record.level() {
                log::Level::Error => record.level().to_string().red().bold(),
                log::Level::Warn => record.level().to_string().yellow().bold(),
                log::Level::Info => record.level().to_string().green().bold(),
                log::Level::Debug => record.level().to_string().blue().bold(),
                log::Level::Trace => record.level().to_string().cyan().bold(),
            };

            let file_info = format!(
                "{}:{}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0)
            )
            .bright_black();

            writeln!(
                buf,
                "{} {} [{}] - {}",
                file_info,
                ts.to_string().bright_black(),
                colored_level,
                record.args()
            )?;

            if let Some(file) = sink.lock().as_mut() {
                let file_line = format!(
                    "{}:{} {} [{}] - {}\n",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    ts,
                    record.level(),
                    record.args()
                );
                let _ = file.write_all(file_line.as_bytes());
            }

            Ok(())
        })
        .filter_level(LevelFilter::Warn)
        .filter(Some("wattle"), options.level);

    if let Some(target) = &options.app_target {
        builder.filter(Some(target.replace('-', "_").as_str()), options.level);
    }

    builder.parse_env("RUST_LOG");

    if builder.try_init().is_err() {
        log::debug!("A logger was already installed, keeping it");
        return Ok(None);
    }

    log::info!("Initialised logger");
    if !options.log_to_file {
        return Ok(None);
    }

    let (log_file, log_path) = open_log_file(options.app_target.as_deref().unwrap_or("wattle"))?;
    *file.lock() = Some(log_file);
    log::info!("Logging to '{}'", log_path.display());
    Ok(Some(log_path))
}

fn open_log_file(app_name: &str) -> WattleResult<(File, PathBuf)> {
    let log_dir = app_dirs2::app_root(app_dirs2::AppDataType::UserData, &crate::APP_INFO)?
        .join("logs");
    fs::create_dir_all(&log_dir).map_err(|source| WattleError::LogFile {
        path: log_dir.clone(),
        source,
    })?;

    let datetime_str = chrono::offset::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let log_path = log_dir.join(format!("{}.{}.log", app_name, datetime_str));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|source| WattleError::LogFile {
            path: log_path.clone(),
            source,
        })?;

    Ok((file, log_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_opens_no_log_file() {
        let _ = init(&LoggingOptions::default());

        let options = LoggingOptions {
            app_target: Some("wattle_second_init".to_string()),
            log_to_file: true,
            ..Default::default()
        };
        assert_eq!(init(&options).unwrap(), None);

        let root = app_dirs2::get_app_root(app_dirs2::AppDataType::UserData, &crate::APP_INFO);
        if let Ok(root) = root {
            let leftovers = fs::read_dir(root.join("logs"))
                .into_iter()
                .flatten()
                .flatten()
                .filter(|entry| {
                    entry
                        .file_name()
                        .to_string_lossy()
                        .starts_with("wattle_second_init.")
                })
                .count();
            assert_eq!(leftovers, 0);
        }
    }
}
