//! 应用配置
//!
//! 查找顺序：
//! 1. 环境变量 `SHAPECALC_CONFIG` 指定的文件（必须存在）
//! 2. 当前目录下的 `shapecalc.toml`（可选）
//! 3. 默认值

use serde::Deserialize;
use shapecalc_core::shape::ShapeKind;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "SHAPECALC_CONFIG";

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "shapecalc.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// 初始主题
    pub dark_mode: bool,
    /// 通知存活时间（秒）
    pub toast_seconds: f64,
    /// 初始窗口大小
    pub window_width: f32,
    pub window_height: f32,
    /// 启动时选中的图形
    pub initial_shape: ShapeKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            toast_seconds: 3.0,
            window_width: 960.0,
            window_height: 640.0,
            initial_shape: ShapeKind::Circle,
        }
    }
}

/// 配置来源
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("defaults"),
        }
    }
}

impl AppConfig {
    /// 按默认查找顺序加载
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// 从显式路径或默认路径加载
    ///
    /// 显式路径不存在时报错；默认路径不存在时使用默认值。
    pub fn load_from(
        explicit: Option<&Path>,
        default_path: &Path,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        let path = match explicit {
            Some(path) => path,
            None if default_path.exists() => default_path,
            None => return Ok((Self::default(), ConfigSource::Defaults)),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.toast_seconds.is_finite() && self.toast_seconds > 0.0) {
            return Err(ConfigError::Invalid {
                key: "toast_seconds",
                reason: format!("must be positive, got {}", self.toast_seconds),
            });
        }
        for (key, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ] {
            if !(value.is_finite() && value >= 200.0) {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("must be at least 200, got {}", value),
                });
            }
        }
        Ok(())
    }
}
