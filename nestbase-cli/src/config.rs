//! Configuration management for the CLI.
//!
//! Generator options are layered: the config map of the input document,
//! then the `[generator]` table of `nestbase.toml`, then command-line flags.
//! Later layers win.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use nestbase::config::{ConfigMap, ConfigValue};
use nestbase::error::ConfigError;

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "nestbase.toml";

/// Contents of a configuration file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generator options, keyed as in the schema's generator block.
    pub generator: ConfigMap,
}

impl Config {
    /// The `output` option, when set to a path.
    pub fn output(&self) -> Option<PathBuf> {
        match self.generator.get("output") {
            Some(ConfigValue::Text(path)) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => None,
        }
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Dry-run override.
    pub dry_run: Option<bool>,
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no configuration file");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        tracing::debug!(
            path = %config_path.display(),
            options = config.generator.len(),
            "loaded configuration file"
        );
        Ok(config)
    }

    /// Layer the file's options over the document's.
    pub fn merge_file(mut map: ConfigMap, file: &Config) -> ConfigMap {
        map.extend(file.generator.clone());
        map
    }

    /// Merge CLI arguments into a configuration map.
    ///
    /// CLI arguments take precedence over every other layer.
    pub fn merge_cli_args(mut map: ConfigMap, args: &CliArgs) -> ConfigMap {
        if let Some(dry_run) = args.dry_run {
            map.insert("dryRun".to_string(), ConfigValue::Bool(dry_run));
        }

        if let Some(ref output) = args.output {
            map.insert(
                "output".to_string(),
                ConfigValue::Text(output.to_string_lossy().into_owned()),
            );
        }

        map
    }

    /// Output directory requested outside the input document, if any.
    ///
    /// Such a request replaces the generator block's own `output`.
    pub fn output_override(file: &Config, args: &CliArgs) -> Option<PathBuf> {
        args.output.clone().or_else(|| file.output())
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# nestbase configuration file
#
# Options set here override the generator block of the schema;
# command-line flags override this file.

[generator]
# Output directory; replaces the generator block's output
# output = "./base"

# Compute everything but write nothing
dryRun = false

# Emit an aggregating index.ts
makeIndexFile = true

# Split every model into a <Model>Relations class and a plain class
separateRelationFields = false

# Attach @nestjs/swagger decorators
useSwagger = true
"#
    }
}
