//! Application configuration.
//!
//! Layered the same way for every invocation:
//! 1) defaults -> 2) YAML (if provided) -> 3) env (`APP__*`) -> 4) CLI overrides

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides. Nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "APP__";

/// Top-level sections read from the environment. Other `APP__*` variables are ignored.
const ENV_SECTIONS: [&str; 2] = ["logging", "calculator"];

/// Top-level configuration for `calculator-cli`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn` or `calculator=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub numeric_mode: NumericMode,
}

/// How operands given on the command line are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericMode {
    /// `i64` with truncating division and overflow errors.
    #[default]
    Integer,
    /// `f64` with IEEE-754 semantics.
    Float,
}

impl fmt::Display for NumericMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Float => "float",
        })
    }
}

/// Command-line values that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub verbose: u8,
    pub float: bool,
}

impl AppConfig {
    /// Load defaults, then the YAML file at `path` (if any), then `APP__*` env vars.
    ///
    /// # Errors
    /// Returns an error if `path` does not point to a file or the merged
    /// configuration cannot be deserialized.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path
            && !path.is_file()
        {
            bail!("config file does not exist: {}", path.display());
        }

        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .filter(|key| is_known_section(key.as_str())),
        )
    }

    /// Apply CLI flags on top of the loaded configuration.
    ///
    /// `-v` raises the log level to info, `-vv` to debug, `-vvv` to trace.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let level = match args.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
        if args.float {
            self.calculator.numeric_mode = NumericMode::Float;
        }
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

fn is_known_section(key: &str) -> bool {
    let section = key.split('.').next().unwrap_or_default();
    ENV_SECTIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(section))
}
