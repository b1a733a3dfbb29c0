use abacus_calculator::EngineConfig;
use abacus_calculator::config::MAX_PRECISION;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "ABACUS_CONFIG_PATH";
/// Configuration file used when `ABACUS_CONFIG_PATH` is unset
pub const DEFAULT_CONFIG_PATH: &str = "abacus.toml";

/// `[logging]` section
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes precedence
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter(), json: false }
    }
}

/// Top-level configuration file layout
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AbacusConfig {
    /// `[engine]` section, handed to the calculator engine
    #[serde(default)]
    pub engine: EngineConfig,
    /// `[logging]` section
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the configuration was read from; `None` when defaults are in use
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl AbacusConfig {
    /// Load from `ABACUS_CONFIG_PATH`, falling back to `abacus.toml`.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load from `path`. A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let mut config = Self::from_toml_str(&contents).with_context(|| {
                    format!("Failed to parse configuration file '{}'", path.display())
                })?;
                config.source = Some(path.to_path_buf());
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read configuration file '{}'", path.display())),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ABACUS_PRECISION` and `ABACUS_LOG` from the process environment.
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup("ABACUS_PRECISION") {
            let Ok(precision) = value.parse::<u32>() else {
                bail!("ABACUS_PRECISION must be a whole number, got '{value}'");
            };
            info!(precision, "Overriding arithmetic precision from environment");
            self.engine.precision = precision;
        }
        if let Some(filter) = lookup("ABACUS_LOG") {
            self.logging.filter = filter;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.engine.precision > MAX_PRECISION {
            bail!(
                "engine.precision must be at most {MAX_PRECISION}, got {}",
                self.engine.precision
            );
        }
        Ok(())
    }
}

fn default_filter() -> String {
    "abacus=info,warn".to_string()
}
