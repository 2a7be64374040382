//! Location of the schema-client module.
//!
//! Enum imports point at the module the schema client is generated into.
//! It is derived from the sibling `prisma-client-js` generator block, or
//! from the conventional `node_modules/@prisma/client` location next to the
//! project root.

use std::path::{Path, PathBuf};

use crate::dmmf::{EnvValue, GeneratorOptions, CLIENT_PROVIDER};
use crate::error::PathError;
use crate::paths;

/// Schema file location relative to the project root.
const SCHEMA_SUFFIX: &[&str] = &["prisma", "schema.prisma"];

/// Module specifier of the schema client, or why it is unknown.
///
/// An unknown location is only an error once an import needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientModule {
    Known(String),
    Unknown(String),
}

impl ClientModule {
    /// Derive the client module from the generator options.
    pub fn locate(options: &GeneratorOptions) -> Self {
        let Some(schema_path) = options.schema_path.as_deref() else {
            return ClientModule::Unknown("no schema path was provided".to_string());
        };
        let root = project_root(schema_path);

        let client_path = options
            .sibling(CLIENT_PROVIDER)
            .and_then(|g| g.output.as_ref())
            .and_then(EnvValue::resolve)
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("node_modules").join("@prisma").join("client"));

        let relative = paths::to_slash(&paths::relative_path(&client_path, &root));
        let module = relative.replacen("node_modules/", "", 1);
        if module.is_empty() {
            return ClientModule::Unknown(format!(
                "client output {} is the project root",
                client_path.display()
            ));
        }
        ClientModule::Known(module)
    }

    /// The module specifier, or a path error when it is unknown.
    pub fn require(&self) -> Result<&str, PathError> {
        match self {
            ClientModule::Known(module) => Ok(module),
            ClientModule::Unknown(reason) => Err(PathError::client_not_found(reason.clone())),
        }
    }
}

/// Project root: the schema path without a trailing `prisma/schema.prisma`,
/// else the schema file's directory.
pub fn project_root(schema_path: &Path) -> PathBuf {
    let parts: Vec<_> = schema_path.components().collect();
    let n = SCHEMA_SUFFIX.len();
    let has_suffix = parts.len() > n
        && parts[parts.len() - n..]
            .iter()
            .zip(SCHEMA_SUFFIX)
            .all(|(part, expected)| part.as_os_str() == *expected);

    if has_suffix {
        parts[..parts.len() - n].iter().collect()
    } else {
        schema_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}
