//! Generator configuration.
//!
//! Options arrive as the generator block's key/value pairs. Every recognized
//! option is listed in [`OPTIONS`], which drives both coercion and the usage
//! text printed when the configuration is malformed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "./base";

/// A raw configuration value.
///
/// Generator blocks supply strings or string lists; TOML files may also
/// supply native booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Text(s) => write!(f, "{}", s),
            ConfigValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

/// Raw configuration map keyed by option name.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// Default value of a recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Bool(bool),
    Path(&'static str),
}

impl fmt::Display for OptionDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionDefault::Bool(b) => write!(f, "{}", b),
            OptionDefault::Path(p) => write!(f, "{}", p),
        }
    }
}

/// A recognized generator option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub key: &'static str,
    pub desc: &'static str,
    pub default: OptionDefault,
}

/// Every option the generator understands, in usage order.
pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        key: "makeIndexFile",
        desc: "make index file",
        default: OptionDefault::Bool(true),
    },
    OptionSpec {
        key: "dryRun",
        desc: "dry run",
        default: OptionDefault::Bool(true),
    },
    OptionSpec {
        key: "separateRelationFields",
        desc: "separate relation fields",
        default: OptionDefault::Bool(false),
    },
    OptionSpec {
        key: "useSwagger",
        desc: "use swagger decorator",
        default: OptionDefault::Bool(true),
    },
    OptionSpec {
        key: "output",
        desc: "output path",
        default: OptionDefault::Path(DEFAULT_OUTPUT),
    },
];

/// Resolved generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Emit an aggregating `index.ts`.
    pub make_index_file: bool,

    /// Compute everything but write nothing.
    pub dry_run: bool,

    /// Split every model into a `Relations` class and a plain class.
    pub separate_relation_fields: bool,

    /// Attach `@nestjs/swagger` decorators.
    pub use_swagger: bool,

    /// Destination directory.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            make_index_file: true,
            dry_run: true,
            separate_relation_fields: false,
            use_swagger: true,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    /// Coerce a raw configuration map.
    ///
    /// Absent options keep their defaults. A present value that cannot be
    /// coerced to its option's kind is a [`ConfigError::InvalidValue`].
    pub fn from_map(map: &ConfigMap) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (key, value) in map {
            match key.as_str() {
                "makeIndexFile" => config.make_index_file = coerce_bool(key, value, map)?,
                "dryRun" => config.dry_run = coerce_bool(key, value, map)?,
                "separateRelationFields" => {
                    config.separate_relation_fields = coerce_bool(key, value, map)?
                }
                "useSwagger" => config.use_swagger = coerce_bool(key, value, map)?,
                "output" => config.output = PathBuf::from(coerce_text(key, value, map)?),
                _ => tracing::debug!(option = %key, "ignoring unknown generator option"),
            }
        }

        Ok(config)
    }
}

fn coerce_bool(key: &str, value: &ConfigValue, map: &ConfigMap) -> Result<bool, ConfigError> {
    match value {
        ConfigValue::Bool(b) => Ok(*b),
        ConfigValue::Text(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        ConfigValue::Text(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(invalid(key, value, "a boolean", map)),
    }
}

fn coerce_text(key: &str, value: &ConfigValue, map: &ConfigMap) -> Result<String, ConfigError> {
    match value {
        ConfigValue::Text(s) if !s.is_empty() => Ok(s.clone()),
        _ => Err(invalid(key, value, "a path string", map)),
    }
}

fn invalid(key: &str, value: &ConfigValue, expected: &'static str, map: &ConfigMap) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
        input: map.clone(),
    }
}

/// Usage text listing every option with its default and description.
pub fn usage() -> String {
    let mut lines = vec![
        String::new(),
        "Usage : ".to_string(),
        "generator nestbase {".to_string(),
        "\tprovider = \"nestbase\"".to_string(),
        "\toutput = (string)".to_string(),
    ];
    lines.extend(
        OPTIONS
            .iter()
            .map(|opt| format!("\t{} = ({}) <- [{}]", opt.key, opt.default, opt.desc)),
    );
    lines.push("}".to_string());
    lines.join("\n")
}
