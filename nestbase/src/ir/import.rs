//! Import descriptors.
//!
//! An import brings one or more symbols into scope from a single module.
//! While files are still drafts, an import of another generated class
//! carries a placeholder origin naming the model; the real relative path is
//! substituted once every file's location is known.

use indexmap::IndexSet;
use std::fmt;

use super::Render;

/// Key prefix of placeholder origins. Never a valid module path.
pub const PLACEHOLDER_PREFIX: &str = "__TEMPORARY_MODEL_PATH__";

/// Origin of a draft import.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportOrigin {
    /// A concrete module specifier (`@nestjs/swagger`, `./user`).
    Module(String),
    /// The generated file of the named model, not yet placed.
    Model(String),
}

impl ImportOrigin {
    /// The model name when this origin is a placeholder.
    pub fn placeholder_model(&self) -> Option<&str> {
        match self {
            ImportOrigin::Module(_) => None,
            ImportOrigin::Model(name) => Some(name),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImportOrigin::Model(_))
    }
}

impl fmt::Display for ImportOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportOrigin::Module(module) => f.write_str(module),
            ImportOrigin::Model(name) => write!(f, "{}{}", PLACEHOLDER_PREFIX, name),
        }
    }
}

/// One import statement.
///
/// `O` is the origin type: [`ImportOrigin`] for drafts, `String` once
/// resolved. Only resolved imports render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDescriptor<O = String> {
    pub from: O,

    /// Imported symbols in first-registered order.
    pub names: IndexSet<String>,
}

impl<O> ImportDescriptor<O> {
    pub fn new(from: O, name: impl Into<String>) -> Self {
        let mut names = IndexSet::new();
        names.insert(name.into());
        Self { from, names }
    }

    /// Add a symbol. Already-present symbols are ignored.
    pub fn add(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }
}

impl ImportDescriptor<ImportOrigin> {
    /// Replace the origin with a concrete module specifier.
    pub fn into_resolved(self, from: String) -> ImportDescriptor<String> {
        ImportDescriptor {
            from,
            names: self.names,
        }
    }
}

impl ImportDescriptor<String> {
    /// Render with every symbol aliased as `<prefix><name>`.
    pub fn render_aliased(&self, prefix: &str) -> String {
        let names = self
            .names
            .iter()
            .map(|name| format!("{} as {}{}", name, prefix, name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("import {{ {} }} from '{}';", names, self.from)
    }
}

impl Render for ImportDescriptor<String> {
    fn render(&self) -> String {
        let names = self.names.iter().cloned().collect::<Vec<_>>().join(", ");
        format!("import {{ {} }} from '{}';", names, self.from)
    }
}

/// The imports of one file, at most one descriptor per origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSet<O> {
    items: Vec<ImportDescriptor<O>>,
}

impl<O> Default for ImportSet<O> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<O: PartialEq> ImportSet<O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` from `from`.
    ///
    /// An existing descriptor for the same origin receives the symbol;
    /// otherwise a new descriptor is appended.
    pub fn register(&mut self, name: impl Into<String>, from: O) {
        match self.items.iter_mut().find(|item| item.from == from) {
            Some(existing) => existing.add(name),
            None => self.items.push(ImportDescriptor::new(from, name)),
        }
    }

    /// Merge a whole descriptor, keeping one descriptor per origin.
    pub fn merge(&mut self, import: ImportDescriptor<O>) {
        match self.items.iter_mut().find(|item| item.from == import.from) {
            Some(existing) => existing.names.extend(import.names),
            None => self.items.push(import),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImportDescriptor<O>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, from: &O) -> Option<&ImportDescriptor<O>> {
        self.items.iter().find(|item| &item.from == from)
    }
}

impl<O> IntoIterator for ImportSet<O> {
    type Item = ImportDescriptor<O>;
    type IntoIter = std::vec::IntoIter<ImportDescriptor<O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<O: PartialEq> FromIterator<ImportDescriptor<O>> for ImportSet<O> {
    /// Collect descriptors, merging those that share an origin.
    fn from_iter<T: IntoIterator<Item = ImportDescriptor<O>>>(iter: T) -> Self {
        let mut set = ImportSet::new();
        for import in iter {
            set.merge(import);
        }
        set
    }
}
