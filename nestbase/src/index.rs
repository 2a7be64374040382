//! Aggregating `index.ts`.
//!
//! Every generated class is imported under an underscore alias and
//! re-exported from a namespace as an empty subclass, so consumers get one
//! entry point with classes distinct from, but shaped like, the generated
//! ones.

use std::path::{Path, PathBuf};

use crate::file::ResolvedFile;
use crate::ir::ImportDescriptor;
use crate::paths::relative_module_path;

pub const INDEX_FILENAME: &str = "index.ts";

/// Alias prefix of the imported classes.
pub const ALIAS_PREFIX: &str = "_";

/// Namespace holding the re-exported classes.
pub const NAMESPACE: &str = "PrismaModel";

/// Path of the index file inside `output_dir`.
pub fn index_path(output_dir: &Path) -> PathBuf {
    output_dir.join(INDEX_FILENAME)
}

/// Render the index file located at `index_path`.
pub fn render_index(index_path: &Path, files: &[ResolvedFile]) -> String {
    let imports = files
        .iter()
        .map(|file| {
            ImportDescriptor::new(
                relative_module_path(index_path, &file.path()),
                file.model().name.clone(),
            )
            .render_aliased(ALIAS_PREFIX)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let re_exports = files
        .iter()
        .map(|file| format!("  {}", file.model().re_export_prefixed(ALIAS_PREFIX)))
        .collect::<Vec<_>>()
        .join("\n");

    let classes = files
        .iter()
        .map(|file| file.model().name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n\nexport namespace {} {{\n{}\n\n  export const extraModels = [{}];\n}}\n",
        imports, NAMESPACE, re_exports, classes
    )
}
