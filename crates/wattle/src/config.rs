//! Where to find the native library.
use crate::error::{WattleError, WattleResult};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points straight at a raylib shared library.
///
/// When set, it is tried before anything in the [`LoaderConfig`].
pub const LIBRARY_PATH_ENV: &str = "WATTLE_RAYLIB_PATH";

/// Platform file name of the library, e.g. `libraylib.so`, `libraylib.dylib` or `raylib.dll`.
pub fn library_file_name() -> OsString {
    libloading::library_filename("raylib")
}

/// Settings used by [`Raylib::load`](crate::Raylib::load) to locate the native library.
///
/// # Location
/// Usually kept as a `.ron` file next to the application, for example
/// ```ron
/// (
///     library_path: Some("vendor/libraylib.so"),
///     search_dirs: ["/opt/raylib/lib"],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// An exact path to the library. Tried first, after the environment override.
    #[serde(default)]
    pub library_path: Option<PathBuf>,
    /// Directories searched for [`library_file_name`].
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,
}

impl LoaderConfig {
    /// Reads a config from a RON file. A missing file gives the default config.
    pub fn read_from(path: impl AsRef<Path>) -> WattleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!(
                "No loader config at '{}', using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| WattleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::from_str(&contents).map_err(|source| WattleError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read loader config from '{}'", path.display());
        Ok(config)
    }

    /// Writes this config as pretty RON.
    pub fn write_to(&self, path: impl AsRef<Path>) -> WattleResult<()> {
        let path = path.as_ref();
        let ron_str = ron::ser::to_string_pretty(self, PrettyConfig::default())?;
        fs::write(path, ron_str).map_err(|source| WattleError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Wrote loader config to '{}'", path.display());
        Ok(())
    }

    /// Every path [`Raylib::load`](crate::Raylib::load) tries, in order.
    ///
    /// 1. [`LIBRARY_PATH_ENV`], if set
    /// 2. [`LoaderConfig::library_path`]
    /// 3. each of [`LoaderConfig::search_dirs`]
    /// 4. next to the current executable, then its `libs` directory
    /// 5. the bare file name, left to the system loader
    pub fn candidates(&self) -> Vec<PathBuf> {
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        self.candidates_with(env::var_os(LIBRARY_PATH_ENV), exe_dir)
    }

    fn candidates_with(&self, env_path: Option<OsString>, exe_dir: Option<PathBuf>) -> Vec<PathBuf> {
        let file_name = library_file_name();
        let mut candidates = Vec::new();

        if let Some(env_path) = env_path.filter(|p| !p.is_empty()) {
            candidates.push(PathBuf::from(env_path));
        }
        if let Some(path) = &self.library_path {
            candidates.push(path.clone());
        }
        for dir in &self.search_dirs {
            candidates.push(dir.join(&file_name));
        }
        if let Some(exe_dir) = exe_dir {
            candidates.push(exe_dir.join(&file_name));
            candidates.push(exe_dir.join("libs").join(&file_name));
        }
        candidates.push(PathBuf::from(&file_name));

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_priority() {
        let config = LoaderConfig {
            library_path: Some(PathBuf::from("vendor/custom.so")),
            search_dirs: vec![PathBuf::from("/opt/raylib/lib")],
        };
        let file_name = library_file_name();

        let candidates = config.candidates_with(
            Some(OsString::from("/env/raylib.so")),
            Some(PathBuf::from("/app")),
        );

        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/env/raylib.so"),
                PathBuf::from("vendor/custom.so"),
                PathBuf::from("/opt/raylib/lib").join(&file_name),
                PathBuf::from("/app").join(&file_name),
                PathBuf::from("/app").join("libs").join(&file_name),
                PathBuf::from(&file_name),
            ]
        );
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let candidates = LoaderConfig::default().candidates_with(Some(OsString::new()), None);
        assert_eq!(candidates, vec![PathBuf::from(library_file_name())]);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoaderConfig::read_from(dir.path().join("nope.ron")).unwrap();
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn written_config_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loader.ron");
        let config = LoaderConfig {
            library_path: Some(PathBuf::from("lib/libraylib.so")),
            search_dirs: vec![PathBuf::from("a"), PathBuf::from("b")],
        };

        config.write_to(&path).unwrap();
        assert_eq!(LoaderConfig::read_from(&path).unwrap(), config);
    }

    #[test]
    fn partial_config_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loader.ron");
        fs::write(&path, "(search_dirs: [\"x\"])").unwrap();

        let config = LoaderConfig::read_from(&path).unwrap();
        assert_eq!(config.library_path, None);
        assert_eq!(config.search_dirs, vec![PathBuf::from("x")]);
    }

    #[test]
    fn broken_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loader.ron");
        fs::write(&path, "(library_path: ").unwrap();

        let err = LoaderConfig::read_from(&path).unwrap_err();
        assert!(matches!(err, WattleError::ConfigParse { .. }));
        assert!(err.to_string().contains("loader.ron"));
    }
}
