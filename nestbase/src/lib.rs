//! # nestbase
//!
//! Generate NestJS/Swagger-annotated TypeScript base classes from a Prisma
//! DMMF document.
//!
//! ## Architecture
//!
//! - [`dmmf`] - Decoding of the generator options and the schema document
//! - [`config`] - Generator options, coercion and usage text
//! - [`convert`] - Schema models to class descriptors
//! - [`ir`] - Class, field, decorator and import descriptors
//! - [`file`] - Output files and two-pass import resolution
//! - [`client`] - Location of the schema-client module
//! - [`index`] - Aggregating `index.ts`
//! - [`generator`] - The generation run, file output and dry-run support
//! - [`format`] - External source formatting
//! - [`paths`] - Lexical path helpers
//! - [`error`] - Error types

pub mod client;
pub mod config;
pub mod convert;
pub mod dmmf;
pub mod error;
pub mod file;
pub mod format;
pub mod generator;
pub mod index;
pub mod ir;
pub mod paths;

// Re-export main types for convenience
pub use config::{ConfigMap, ConfigValue, GeneratorConfig};
pub use dmmf::GeneratorOptions;
pub use error::{GeneratorError, GeneratorResult};
pub use format::{Formatter, Passthrough, Prettier};
pub use generator::{GeneratedFile, GenerationContext, GenerationReport, Generator};
