//! Input types for the Document Model Meta Format.
//!
//! The schema is parsed by an external toolchain; this module only decodes
//! the JSON document that toolchain hands to generators. Unknown keys are
//! ignored so newer documents keep decoding.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::ConfigMap;
use crate::error::InputError;

/// Provider identifier of the schema-client generator.
pub const CLIENT_PROVIDER: &str = "prisma-client-js";

/// Options handed to a generator: its own block, its siblings and the schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// This generator's block from the schema file.
    pub generator: GeneratorBlock,

    /// The other generator blocks declared next to this one.
    #[serde(default)]
    pub other_generators: Vec<GeneratorBlock>,

    /// Absolute path of the schema file.
    #[serde(default)]
    pub schema_path: Option<PathBuf>,

    /// The parsed schema.
    pub dmmf: Document,
}

impl GeneratorOptions {
    /// Decode options from a JSON string.
    pub fn from_json(content: &str, origin: &Path) -> Result<Self, InputError> {
        serde_json::from_str(content).map_err(|source| InputError::Json {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and decode options from a JSON file.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, path)
    }

    /// Find a sibling generator by provider.
    pub fn sibling(&self, provider: &str) -> Option<&GeneratorBlock> {
        self.other_generators
            .iter()
            .find(|g| g.provider.resolve().as_deref() == Some(provider))
    }
}

/// One `generator` block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorBlock {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub provider: EnvValue,

    #[serde(default)]
    pub output: Option<EnvValue>,

    /// Free-form key/value configuration.
    #[serde(default)]
    pub config: ConfigMap,
}

/// A value that may be read from an environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvValue {
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub from_env_var: Option<String>,
}

impl EnvValue {
    /// A literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            from_env_var: None,
        }
    }

    /// The environment variable's value when one is named and set,
    /// otherwise the literal value.
    pub fn resolve(&self) -> Option<String> {
        self.from_env_var
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .or_else(|| self.value.clone())
    }
}

/// Root of the parsed schema.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub datamodel: Datamodel,
}

/// Models and enums of the schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<Model>,

    #[serde(default)]
    pub enums: Vec<DatamodelEnum>,
}

/// One schema model.
#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Object,
    Enum,
    Unsupported,
}

/// One schema field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,

    pub kind: FieldKind,

    /// Declared type name: a scalar, an enum or a model.
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub is_list: bool,

    #[serde(default)]
    pub relation_name: Option<String>,

    #[serde(default)]
    pub default: Option<FieldDefault>,
}

impl Field {
    /// Whether the field references another model.
    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some()
    }
}

/// Default value of a field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldDefault {
    /// A list default. Tried first: a derived struct also accepts a sequence.
    List(Vec<serde_json::Value>),
    /// A generated default such as `autoincrement()` or `now()`.
    Function(DefaultFunction),
    /// A literal default.
    Literal(DefaultLiteral),
}

/// A function-call default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefaultFunction {
    pub name: String,

    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

/// A literal default value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultLiteral {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl std::fmt::Display for DefaultLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultLiteral::Bool(b) => write!(f, "{}", b),
            DefaultLiteral::Number(n) => write!(f, "{}", n),
            DefaultLiteral::String(s) => write!(f, "{}", s),
        }
    }
}

/// One schema enum. Members are not needed: enum fields import the type
/// from the schema client.
#[derive(Debug, Clone, Deserialize)]
pub struct DatamodelEnum {
    pub name: String,
}
