//! Field descriptors.

use super::{DecoratorDescriptor, Render};

/// One class property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,

    /// Resolved TypeScript type expression.
    pub ty: String,

    /// Emitted as an optional property (`name?: T`).
    pub nullable: bool,

    /// Initializer expression. `undefined` is emitted when unset.
    pub default: Option<String>,

    pub decorators: Vec<DecoratorDescriptor>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: false,
            default: None,
            decorators: Vec::new(),
        }
    }
}

impl Render for FieldDescriptor {
    fn render(&self) -> String {
        let mut out = String::new();
        for decorator in &self.decorators {
            out.push_str(&format!("  {}\n", decorator.render()));
        }
        out.push_str(&format!(
            "  {}{}: {} = {};",
            self.name,
            if self.nullable { "?" } else { "" },
            self.ty,
            self.default.as_deref().unwrap_or("undefined")
        ));
        out
    }
}
