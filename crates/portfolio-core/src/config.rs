//! Build-time site configuration.
//!
//! The only knob is the build mode, which decides whether the static-export
//! base path is applied to site-relative URLs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const PRODUCTION_BASE_PATH: &str = "/stephaneniyonizigiye";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown build mode `{0}` (expected `development` or `production`)")]
    UnknownBuildMode(String),
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            _ => Err(ConfigError::UnknownBuildMode(s.to_string())),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub build_mode: BuildMode,
}

impl SiteConfig {
    /// Mode used when the flag is absent or invalid.
    pub fn fallback_mode(debug_build: bool) -> BuildMode {
        if debug_build {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn from_flag(flag: Option<&str>, debug_build: bool) -> Result<Self, ConfigError> {
        let build_mode = match flag {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => Self::fallback_mode(debug_build),
        };
        Ok(Self { build_mode })
    }

    /// Like [`SiteConfig::from_flag`] but logs and falls back on bad input.
    pub fn load(flag: Option<&str>, debug_build: bool) -> Self {
        Self::from_flag(flag, debug_build).unwrap_or_else(|e| {
            let build_mode = Self::fallback_mode(debug_build);
            log::warn!("[config] {}; using {}", e, build_mode);
            Self { build_mode }
        })
    }

    pub fn from_compile_env() -> Self {
        Self::load(option_env!("PORTFOLIO_BUILD_MODE"), cfg!(debug_assertions))
    }

    #[inline]
    pub fn base_path(&self) -> &'static str {
        match self.build_mode {
            BuildMode::Production => PRODUCTION_BASE_PATH,
            BuildMode::Development => "",
        }
    }

    /// Prefix a site-relative path with the base path.
    pub fn site_path(&self, path: &str) -> String {
        format!("{}/{}", self.base_path(), path.trim_start_matches('/'))
    }
}
