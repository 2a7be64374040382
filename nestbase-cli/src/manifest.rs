//! Generator manifest.
//!
//! Describes the generator to the host toolchain: its version, where its
//! output goes by default and which generators must run alongside it.

use serde::Serialize;

use nestbase::dmmf::CLIENT_PROVIDER;

/// Display name of the generator.
pub const GENERATOR_NAME: &str = "nestbase";

/// Output directory relative to the schema file when none is configured.
pub const DEFAULT_OUTPUT: &str = "../generated/base";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    pub default_output: String,
    pub pretty_name: String,
    pub requires_generators: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            default_output: DEFAULT_OUTPUT.to_string(),
            pretty_name: GENERATOR_NAME.to_string(),
            requires_generators: vec![CLIENT_PROVIDER.to_string()],
        }
    }
}

impl Manifest {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
