use std::path::PathBuf;

use gs_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "gallery-saver";

fn resolved_app_dir_name() -> String {
    match std::env::var("GS_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Creates a new DirsAppDirsAdapter resolving directories from the system.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs_platform::app_dirs::DirsAppDirsAdapter;
    /// let _ = DirsAppDirsAdapter::new();
    /// ```
    pub fn new() -> Self {
        Self {
            base_override: None,
        }
    }

    /// Creates an adapter rooted at `base` for both data and pictures.
    ///
    /// Data goes to `<base>/<app>` and pictures to `<base>/Pictures`.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    /// Pictures directory, falling back to `~/Pictures` where the platform
    /// does not publish one (e.g. Linux without XDG user dirs).
    fn base_pictures_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_override {
            return Some(base.join("Pictures"));
        }
        dirs::picture_dir().or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let pictures_root = self
            .base_pictures_dir()
            .ok_or(AppDirsError::PicturesDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
            pictures_root,
        })
    }
}
