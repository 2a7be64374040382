//! Output file units and their two-pass import resolution.
//!
//! A [`DraftFile`] is built from one model. It registers every import its
//! class needs; imports of other generated classes get placeholder origins
//! because sibling files have no final location yet. Once every draft
//! exists, [`DraftFile::resolve`] rewrites those placeholders into paths
//! relative to the importing file and yields a renderable [`ResolvedFile`].

use convert_case::{Case, Casing};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::client::ClientModule;
use crate::convert::type_mapper::capitalize_first;
use crate::error::{PathError, RenderError, ResolveError};
use crate::ir::import::ImportSet;
use crate::ir::{ImportOrigin, ModelDescriptor, Render};
use crate::paths::relative_module_path;

/// Module providing enum registration.
pub const GRAPHQL_MODULE: &str = "@nestjs/graphql";

/// Enum registration function.
pub const REGISTER_ENUM_TYPE: &str = "registerEnumType";

/// Final path of every generated class, keyed by class name.
pub type PathMap = HashMap<String, PathBuf>;

/// Output filename of a class: `snake_case(name).ts`.
pub fn filename_for(model_name: &str) -> String {
    format!("{}.ts", model_name.to_case(Case::Snake))
}

/// A file whose imports may still point at placeholder origins.
#[derive(Debug, Clone)]
pub struct DraftFile {
    dir: PathBuf,
    filename: String,
    model: ModelDescriptor,
    imports: ImportSet<ImportOrigin>,
}

impl DraftFile {
    /// Wrap a model and register its imports.
    ///
    /// Fails only when the model references an enum and the client module
    /// location is unknown.
    pub fn new(
        model: ModelDescriptor,
        dir: impl Into<PathBuf>,
        client: &ClientModule,
    ) -> Result<Self, PathError> {
        let mut file = Self {
            dir: dir.into(),
            filename: filename_for(&model.name),
            model,
            imports: ImportSet::new(),
        };
        file.resolve_imports(client)?;
        Ok(file)
    }

    fn resolve_imports(&mut self, client: &ClientModule) -> Result<(), PathError> {
        let mut imports = ImportSet::new();

        for relation in &self.model.relation_types {
            imports.register(
                capitalize_first(relation),
                ImportOrigin::Model(relation.clone()),
            );
        }

        if !self.model.enum_types.is_empty() {
            let client_module = client.require()?;
            for enum_type in &self.model.enum_types {
                imports.register(
                    enum_type.clone(),
                    ImportOrigin::Module(client_module.to_string()),
                );
            }
            imports.register(
                REGISTER_ENUM_TYPE,
                ImportOrigin::Module(GRAPHQL_MODULE.to_string()),
            );
        }

        for decorator in self.model.all_decorators() {
            imports.register(
                decorator.name.clone(),
                ImportOrigin::Module(decorator.import_from.clone()),
            );
        }

        self.imports = imports;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Full output path.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    pub fn model(&self) -> &ModelDescriptor {
        &self.model
    }

    pub fn imports(&self) -> &ImportSet<ImportOrigin> {
        &self.imports
    }

    /// Rewrite placeholder origins into paths relative to this file.
    pub fn resolve(self, paths: &PathMap) -> Result<ResolvedFile, ResolveError> {
        let own_path = self.path();
        let mut resolved = ImportSet::new();

        for import in self.imports {
            let from = match &import.from {
                ImportOrigin::Module(module) => module.clone(),
                ImportOrigin::Model(model) => {
                    let target = paths.get(model).ok_or_else(|| ResolveError::UnknownModel {
                        file: own_path.clone(),
                        model: model.clone(),
                    })?;
                    relative_module_path(&own_path, target)
                }
            };
            resolved.merge(import.into_resolved(from));
        }

        tracing::debug!(
            file = %own_path.display(),
            imports = resolved.len(),
            "resolved imports"
        );

        Ok(ResolvedFile {
            dir: self.dir,
            filename: self.filename,
            model: self.model,
            imports: resolved,
        })
    }
}

/// Build the class-name → path map over every draft.
pub fn path_map<'a>(files: impl IntoIterator<Item = &'a DraftFile>) -> PathMap {
    files
        .into_iter()
        .map(|file| (file.model.name.clone(), file.path()))
        .collect()
}

/// A file whose imports are all concrete module specifiers.
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    dir: PathBuf,
    filename: String,
    model: ModelDescriptor,
    imports: ImportSet<String>,
}

impl ResolvedFile {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    pub fn model(&self) -> &ModelDescriptor {
        &self.model
    }

    pub fn imports(&self) -> &ImportSet<String> {
        &self.imports
    }

    /// Render the import block followed by the class.
    pub fn render(&self) -> Result<String, RenderError> {
        let body = self.model.render()?;
        if self.imports.is_empty() {
            return Ok(body);
        }

        let imports = self
            .imports
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join("\n");
        Ok(format!("{}\n\n{}", imports, body))
    }
}
