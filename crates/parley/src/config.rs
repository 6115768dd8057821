//! CLI configuration.
//!
//! This module provides TOML-based configuration. Sources, later ones taking
//! precedence:
//! - Bundled defaults (include_str! from parley.toml)
//! - `~/.config/parley/parley.toml`
//! - `./parley.toml`

use config::{Config, File, FileFormat};
use parley_error::{ConfigError, ConfigErrorKind, ParleyResult};
use parley_lexer::PatternKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../parley.toml");

/// How results are printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    #[default]
    Human,
    /// JSON format
    Json,
}

/// Defaults for `parley scan`.
///
/// # Example
///
/// ```toml
/// [scan]
/// kinds = ["MENTION_USER", "TEXT_URL"]
/// first_only = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Kinds scanned when none are requested explicitly
    #[serde(default = "default_kinds")]
    pub kinds: Vec<PatternKind>,

    /// Stop after the first match of each kind
    #[serde(default)]
    pub first_only: bool,
}

fn default_kinds() -> Vec<PatternKind> {
    vec![
        PatternKind::Emoji,
        PatternKind::MentionChannel,
        PatternKind::MentionRole,
        PatternKind::MentionUser,
        PatternKind::TextUrl,
    ]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            kinds: default_kinds(),
            first_only: false,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Result format
    #[serde(default)]
    pub format: OutputFormat,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

/// Top-level Parley configuration.
///
/// # Example
///
/// ```no_run
/// use parley::ParleyConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ParleyConfig::load()?;
/// println!("Default kinds: {:?}", config.scan.kinds);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParleyConfig {
    /// Scan defaults
    #[serde(default)]
    pub scan: ScanConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl ParleyConfig {
    /// Load configuration from a specific file path.
    ///
    /// Sections missing from the file take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, including unknown
    /// kind names under `[scan]`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ParleyResult<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Read {
                    origin: path.as_ref().display().to_string(),
                    reason: e.to_string(),
                })
            })?;
        Self::deserialize_from(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse.
    #[instrument]
    pub fn load() -> ParleyResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/parley/parley.toml");
            debug!(path = %home_config.display(), "Adding home config source");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("parley").required(false));

        let config = builder.build().map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read {
                origin: "default search path".to_string(),
                reason: e.to_string(),
            })
        })?;
        Self::deserialize_from(config)
    }

    fn deserialize_from(config: Config) -> ParleyResult<Self> {
        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        debug!(kinds = parsed.scan.kinds.len(), "Configuration loaded");
        Ok(parsed)
    }
}
