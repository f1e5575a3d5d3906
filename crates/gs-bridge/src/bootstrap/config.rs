//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Layer file values over system defaults / 将文件配置叠加在系统默认值上
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! Unknown backends or locales are rejected later, in wiring.

use anyhow::Context;
use std::path::{Path, PathBuf};

use gs_core::app_dirs::AppDirs;
use gs_core::config::AppConfig;

/// Album (sub-directory of the pictures dir) used by default.
pub const DEFAULT_ALBUM: &str = "Mercadea";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Pure data loading: missing keys come back empty.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Resolve the effective configuration.
///
/// - An explicit `config_path` must be readable.
/// - Without one, `<app data>/config.toml` is used if it exists.
/// - Empty values are filled from system defaults.
pub fn resolve_config(config_path: Option<PathBuf>, dirs: &AppDirs) -> anyhow::Result<AppConfig> {
    let from_file = match config_path {
        Some(path) => load_config(&path)?,
        None => {
            let default_path = dirs.config_file();
            if default_path.exists() {
                load_config(&default_path)?
            } else {
                AppConfig::empty()
            }
        }
    };

    Ok(from_file.or_defaults(AppConfig::with_system_defaults(
        dirs.gallery_dir(DEFAULT_ALBUM),
    )))
}
