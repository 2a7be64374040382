//! Model descriptors.

use indexmap::IndexSet;

use super::{DecoratorDescriptor, FieldDescriptor, Render};
use crate::error::RenderError;

/// One generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Class name.
    pub name: String,

    pub fields: Vec<FieldDescriptor>,

    /// Other generated classes referenced by relation fields.
    pub relation_types: IndexSet<String>,

    /// Enums referenced by fields; each gets a registration statement.
    pub enum_types: IndexSet<String>,

    /// Class-level decorators.
    pub decorators: Vec<DecoratorDescriptor>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            relation_types: IndexSet::new(),
            enum_types: IndexSet::new(),
            decorators: Vec::new(),
        }
    }

    /// Every decorator on the class and its fields, class decorators first.
    pub fn all_decorators(&self) -> impl Iterator<Item = &DecoratorDescriptor> {
        self.decorators
            .iter()
            .chain(self.fields.iter().flat_map(|f| f.decorators.iter()))
    }

    /// Render the class body, followed by one enum registration per enum type.
    pub fn render(&self) -> Result<String, RenderError> {
        if self.fields.is_empty() {
            return Err(RenderError::NoFields {
                model: self.name.clone(),
            });
        }

        let mut out = String::new();
        for decorator in &self.decorators {
            out.push_str(&decorator.render());
            out.push('\n');
        }

        let fields = self
            .fields
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push_str(&format!("export class {} {{\n{}\n}}\n", self.name, fields));

        for enum_type in &self.enum_types {
            out.push_str(&format!(
                "\nregisterEnumType({}, {{\n  name: '{}',\n}});\n",
                enum_type, enum_type
            ));
        }

        Ok(out)
    }

    /// `export class Name extends <prefix>Name {}`.
    pub fn re_export_prefixed(&self, prefix: &str) -> String {
        format!("export class {} extends {}{} {{}}", self.name, prefix, self.name)
    }
}
