use std::path::PathBuf;

/// Resolved platform directories used by the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Application data root, e.g. `~/.local/share/gallery-saver`
    pub app_data_root: PathBuf,
    /// User pictures directory, e.g. `~/Pictures`
    pub pictures_root: PathBuf,
}

impl AppDirs {
    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }

    pub fn config_file(&self) -> PathBuf {
        self.app_data_root.join("config.toml")
    }

    /// Default gallery directory for the given album name.
    pub fn gallery_dir(&self, album: &str) -> PathBuf {
        self.pictures_root.join(album)
    }
}
