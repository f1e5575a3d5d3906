//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No business rules / 禁止业务规则**
//!
//! Empty values mean "not configured"; layering them over system defaults
//! happens in the bootstrap layer.

use std::path::PathBuf;

use crate::gallery::DEFAULT_CHANNEL_NAME;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Logical channel name registered on the message bus
    pub channel_name: String,

    /// Language tag for user-facing error messages (may be empty)
    pub locale: String,

    /// Storage backend name: `filesystem` or `unavailable` (may be empty)
    pub storage_backend: String,

    /// Directory saved images land in (path info only, no existence check)
    /// 图片保存目录（仅路径信息，不检查是否存在）
    pub gallery_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys become empty values. Wrongly typed keys are treated as missing.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            channel_name: str_at("channel", "name"),
            locale: str_at("channel", "locale"),
            storage_backend: str_at("storage", "backend"),
            gallery_dir: PathBuf::from(str_at("storage", "gallery_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            channel_name: String::new(),
            locale: String::new(),
            storage_backend: String::new(),
            gallery_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default values for production use
    /// 生产环境使用：创建具有系统默认值的 AppConfig
    ///
    /// `gallery_dir` is computed by the caller from platform directories.
    pub fn with_system_defaults(gallery_dir: PathBuf) -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            locale: "es".to_string(),
            storage_backend: "filesystem".to_string(),
            gallery_dir,
        }
    }

    /// Fill every empty field from `defaults`.
    pub fn or_defaults(self, defaults: AppConfig) -> Self {
        fn pick(value: String, fallback: String) -> String {
            if value.is_empty() {
                fallback
            } else {
                value
            }
        }

        Self {
            channel_name: pick(self.channel_name, defaults.channel_name),
            locale: pick(self.locale, defaults.locale),
            storage_backend: pick(self.storage_backend, defaults.storage_backend),
            gallery_dir: if self.gallery_dir.as_os_str().is_empty() {
                defaults.gallery_dir
            } else {
                self.gallery_dir
            },
        }
    }
}
