//! Generation-time descriptors.
//!
//! These structures describe what ends up in a generated file: classes,
//! fields, decorators and import statements. They are produced by the
//! [`crate::convert`] pipeline and rendered to TypeScript source.

pub mod decorator;
pub mod field;
pub mod import;
pub mod model;

pub use decorator::{DecoratorDescriptor, DecoratorParams, ParamValue};
pub use field::FieldDescriptor;
pub use import::{ImportDescriptor, ImportOrigin, PLACEHOLDER_PREFIX};
pub use model::ModelDescriptor;

/// Renders a descriptor to TypeScript source text.
///
/// Each entity renders itself, so the text templating can be swapped for a
/// structured builder without touching conversion or resolution.
pub trait Render {
    fn render(&self) -> String;
}
