//! # cxxmeta-config
//!
//! Layered configuration loading for cxxmeta using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CXXMETA_*` prefix, `__` as separator)
//! 2. An explicit config file, or project-level `./cxxmeta.toml`
//! 3. User-level `~/.config/cxxmeta/config.toml`
//! 4. Built-in defaults
//!
//! Command-line values are applied by the binary on top of the loaded config.
//!
//! # Example
//!
//! ```toml
//! include_dirs = ["third_party/include"]
//! macros = ["VECTORVM_API"]
//!
//! [predefined]
//! PLATFORM_WINDOWS = "1"
//!
//! [[headers]]
//! directory = "Source/Runtime/VectorVM/Public"
//! discover = true
//! ```

mod error;
mod headers;

pub use error::ConfigError;
pub use headers::{HeaderGroup, discover_headers};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default file name of the synthesized translation unit.
fn default_input_name() -> String {
    "input.h".to_string()
}

/// Default front-end arguments: parse headers as C++17, silence warnings.
fn default_clang_args() -> Vec<String> {
    ["-x", "c++", "-std=c++17", "-Wno-everything"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CxxMetaConfig {
    /// Header groups, included in order.
    #[serde(default)]
    pub headers: Vec<HeaderGroup>,

    /// Extra include search paths, searched before the group directories.
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,

    /// Macro definitions as `NAME` or `NAME=VALUE`, in order.
    #[serde(default)]
    pub macros: Vec<String>,

    /// Platform, build, and linkage macros as a `NAME = "VALUE"` table.
    #[serde(default)]
    pub predefined: BTreeMap<String, String>,

    /// Arguments passed to the front end ahead of the generated `-I`/`-D` flags.
    #[serde(default = "default_clang_args")]
    pub clang_args: Vec<String>,

    /// File name given to the synthesized translation unit.
    #[serde(default = "default_input_name")]
    pub input_name: String,

    /// Populate the per-kind symbol index during extraction.
    #[serde(default)]
    pub index_symbols: bool,
}

impl Default for CxxMetaConfig {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            include_dirs: Vec::new(),
            macros: Vec::new(),
            predefined: BTreeMap::new(),
            clang_args: default_clang_args(),
            input_name: default_input_name(),
            index_symbols: false,
        }
    }
}

impl CxxMetaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `explicit` replaces the project-level `./cxxmeta.toml` when given.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    /// Same as [`CxxMetaConfig::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Explicit or project-local config
        match explicit {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from("cxxmeta.toml");
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CXXMETA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cxxmeta").join("config.toml"))
    }

    /// Check values figment cannot check by type alone.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "input_name".into(),
                reason: "must not be empty".into(),
            });
        }
        if let Some(bad) = self
            .macros
            .iter()
            .find(|m| m.split('=').next().is_none_or(|name| name.trim().is_empty()))
        {
            return Err(ConfigError::InvalidValue {
                field: "macros".into(),
                reason: format!("'{bad}' has no macro name"),
            });
        }
        if self.predefined.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "predefined".into(),
                reason: "macro names must not be empty".into(),
            });
        }
        for group in &self.headers {
            if group.headers.iter().any(|h| h.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: "headers".into(),
                    reason: format!(
                        "empty header path in group '{}'",
                        group.directory.display()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Header groups with discovery applied.
    ///
    /// # Errors
    /// Returns [`ConfigError::Discovery`] if a discovering group cannot be walked.
    pub fn resolved_headers(&self) -> Result<Vec<HeaderGroup>, ConfigError> {
        self.headers.iter().map(HeaderGroup::resolve).collect()
    }

    /// Every macro definition in front-end order: the `macros` list as given,
    /// then the `predefined` table as `NAME=VALUE`, sorted by name.
    #[must_use]
    pub fn macro_definitions(&self) -> Vec<String> {
        self.macros
            .iter()
            .cloned()
            .chain(
                self.predefined
                    .iter()
                    .map(|(name, value)| format!("{name}={value}")),
            )
            .collect()
    }
}
