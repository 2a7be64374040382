//! Schema to TypeScript type mappings.
//!
//! # Type Mappings
//!
//! | Schema scalar | TypeScript | Swagger `type` |
//! |---------------|------------|----------------|
//! | `BigInt`      | `BigInt`   | `BigInt`       |
//! | `Boolean`     | `boolean`  | `Boolean`      |
//! | `Bytes`       | `Buffer`   | `Buffer`       |
//! | `DateTime`    | `Date`     | `Date`         |
//! | `Decimal`     | `number`   | `Number`       |
//! | `Float`       | `number`   | `Number`       |
//! | `Int`         | `number`   | `Number`       |
//! | `Json`        | `object`   | `Object`       |
//! | `String`      | `string`   | `String`       |
//! | enum / model  | declared name                |
//!
//! List fields wrap the mapped type as `T[]`.

use std::str::FromStr;

use crate::dmmf::{Field, FieldKind};

/// The primitive scalar kinds of the schema language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    BigInt,
    Boolean,
    Bytes,
    DateTime,
    Decimal,
    Float,
    Int,
    Json,
    String,
}

impl ScalarType {
    pub const ALL: [ScalarType; 9] = [
        ScalarType::BigInt,
        ScalarType::Boolean,
        ScalarType::Bytes,
        ScalarType::DateTime,
        ScalarType::Decimal,
        ScalarType::Float,
        ScalarType::Int,
        ScalarType::Json,
        ScalarType::String,
    ];

    /// TypeScript type of the scalar.
    pub fn ts_type(self) -> &'static str {
        match self {
            ScalarType::BigInt => "BigInt",
            ScalarType::Boolean => "boolean",
            ScalarType::Bytes => "Buffer",
            ScalarType::DateTime => "Date",
            ScalarType::Decimal | ScalarType::Float | ScalarType::Int => "number",
            ScalarType::Json => "object",
            ScalarType::String => "string",
        }
    }

    /// Runtime constructor naming the type, used in documentation decorators.
    pub fn constructor(self) -> String {
        capitalize_first(self.ts_type())
    }

    /// Name of the scalar in the schema language.
    pub fn schema_name(self) -> &'static str {
        match self {
            ScalarType::BigInt => "BigInt",
            ScalarType::Boolean => "Boolean",
            ScalarType::Bytes => "Bytes",
            ScalarType::DateTime => "DateTime",
            ScalarType::Decimal => "Decimal",
            ScalarType::Float => "Float",
            ScalarType::Int => "Int",
            ScalarType::Json => "Json",
            ScalarType::String => "String",
        }
    }
}

impl FromStr for ScalarType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarType::ALL
            .into_iter()
            .find(|scalar| scalar.schema_name() == s)
            .ok_or(())
    }
}

/// What a field holds, as far as generation is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// A known primitive.
    Scalar(ScalarType),
    /// A schema enum.
    Enum(String),
    /// Another model, through a relation.
    Relation(String),
    /// Anything else; the declared type name passes through.
    Other(String),
}

impl FieldShape {
    /// Classify a schema field.
    pub fn of(field: &Field) -> Self {
        if field.is_relation() {
            return FieldShape::Relation(field.ty.clone());
        }
        match field.kind {
            FieldKind::Enum => FieldShape::Enum(field.ty.clone()),
            FieldKind::Object => FieldShape::Relation(field.ty.clone()),
            FieldKind::Scalar => match field.ty.parse::<ScalarType>() {
                Ok(scalar) => FieldShape::Scalar(scalar),
                Err(()) => FieldShape::Other(field.ty.clone()),
            },
            FieldKind::Unsupported => FieldShape::Other(field.ty.clone()),
        }
    }

    /// TypeScript type of a single value of this shape.
    pub fn ts_type(&self) -> String {
        match self {
            FieldShape::Scalar(scalar) => scalar.ts_type().to_string(),
            FieldShape::Enum(name) | FieldShape::Relation(name) | FieldShape::Other(name) => {
                name.clone()
            }
        }
    }
}

/// Full TypeScript type of a field, array-wrapped for lists.
pub fn field_ts_type(field: &Field) -> String {
    let ty = FieldShape::of(field).ts_type();
    if field.is_list {
        arrayify(&ty)
    } else {
        ty
    }
}

/// `T` → `T[]`.
pub fn arrayify(ty: &str) -> String {
    format!("{}[]", ty)
}

/// Upper-case the first character.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
