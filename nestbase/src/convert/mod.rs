//! Conversion from schema models to generation descriptors.
//!
//! The [`Convertor`] maps every schema field to a [`FieldDescriptor`]
//! (type, nullability, default, decorators) and groups them into
//! [`ModelDescriptor`]s, optionally splitting relation fields into a
//! separate `Relations` class.

pub mod swagger;
pub mod type_mapper;

pub use type_mapper::{FieldShape, ScalarType};

use indexmap::IndexSet;

use crate::config::GeneratorConfig;
use crate::dmmf::{Datamodel, Field, FieldDefault, FieldKind, Model};
use crate::ir::decorator::quote;
use crate::ir::{FieldDescriptor, ModelDescriptor};

/// Suffix of the class holding a model's relation fields in split mode.
pub const RELATIONS_POSTFIX: &str = "Relations";

/// Which of a model's fields a descriptor receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSelection {
    #[default]
    All,
    RelationsOnly,
    NonRelationsOnly,
}

impl FieldSelection {
    fn accepts(self, field: &Field) -> bool {
        match self {
            FieldSelection::All => true,
            FieldSelection::RelationsOnly => field.is_relation(),
            FieldSelection::NonRelationsOnly => !field.is_relation(),
        }
    }
}

/// Per-model conversion options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertModelInput<'a> {
    pub selection: FieldSelection,

    /// Appended to the model name to form the class name.
    pub postfix: Option<&'a str>,
}

/// Converts schema models into descriptors.
#[derive(Debug, Clone)]
pub struct Convertor {
    use_swagger: bool,
    separate_relation_fields: bool,
}

impl Convertor {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            use_swagger: config.use_swagger,
            separate_relation_fields: config.separate_relation_fields,
        }
    }

    /// Convert every model of the datamodel.
    ///
    /// In split mode all `Relations` classes come first, followed by the
    /// plain classes, both in schema order.
    pub fn convert_models(&self, datamodel: &Datamodel) -> Vec<ModelDescriptor> {
        if !self.separate_relation_fields {
            return datamodel
                .models
                .iter()
                .map(|model| self.convert_model(model, ConvertModelInput::default()))
                .collect();
        }

        let relations = datamodel.models.iter().map(|model| {
            self.convert_model(
                model,
                ConvertModelInput {
                    selection: FieldSelection::RelationsOnly,
                    postfix: Some(RELATIONS_POSTFIX),
                },
            )
        });
        let plain = datamodel.models.iter().map(|model| {
            self.convert_model(
                model,
                ConvertModelInput {
                    selection: FieldSelection::NonRelationsOnly,
                    postfix: None,
                },
            )
        });
        relations.chain(plain).collect()
    }

    /// Convert one model.
    pub fn convert_model(&self, model: &Model, input: ConvertModelInput<'_>) -> ModelDescriptor {
        let class_name = format!("{}{}", model.name, input.postfix.unwrap_or_default());
        let mut descriptor = ModelDescriptor::new(class_name);

        // A class never imports itself.
        let relation_types: IndexSet<String> = model
            .fields
            .iter()
            .filter(|f| f.is_relation() && f.ty != descriptor.name)
            .map(|f| f.ty.clone())
            .collect();
        let enum_types: IndexSet<String> = model
            .fields
            .iter()
            .filter(|f| f.kind == FieldKind::Enum)
            .map(|f| f.ty.clone())
            .collect();

        descriptor.fields = model
            .fields
            .iter()
            .filter(|f| input.selection.accepts(f))
            .map(|f| self.convert_field(f))
            .collect();

        if input.selection != FieldSelection::NonRelationsOnly {
            descriptor.relation_types = relation_types;
        }
        if input.selection != FieldSelection::RelationsOnly {
            descriptor.enum_types = enum_types;
        }

        tracing::debug!(
            model = %model.name,
            class = %descriptor.name,
            fields = descriptor.fields.len(),
            relations = descriptor.relation_types.len(),
            enums = descriptor.enum_types.len(),
            "converted model"
        );

        descriptor
    }

    /// Convert one field.
    pub fn convert_field(&self, field: &Field) -> FieldDescriptor {
        let mut descriptor =
            FieldDescriptor::new(field.name.clone(), type_mapper::field_ts_type(field));

        if self.use_swagger {
            descriptor
                .decorators
                .push(swagger::property_decorator(field));
        }

        descriptor.nullable = !field.is_required;
        descriptor.default = format_default(field);

        descriptor
    }
}

/// Render a literal default as a TypeScript initializer.
///
/// Function-call and list defaults have no literal form and yield `None`.
fn format_default(field: &Field) -> Option<String> {
    let literal = match field.default.as_ref()? {
        FieldDefault::Literal(literal) => literal.to_string(),
        FieldDefault::Function(_) | FieldDefault::List(_) => return None,
    };

    let rendered = match FieldShape::of(field) {
        FieldShape::Enum(ty) => format!("{}.{}", ty, literal),
        FieldShape::Scalar(ScalarType::BigInt) => format!("BigInt({})", literal),
        FieldShape::Scalar(ScalarType::String) => quote(&literal),
        _ => literal,
    };
    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::ir::Render;
    use serde_json::json;

    fn model(value: serde_json::Value) -> Model {
        serde_json::from_value(value).unwrap()
    }

    fn user() -> Model {
        model(json!({
            "name": "User",
            "fields": [
                {"name": "id", "kind": "scalar", "type": "Int", "isRequired": true,
                 "default": {"name": "autoincrement", "args": []}},
                {"name": "email", "kind": "scalar", "type": "String", "isRequired": true},
                {"name": "name", "kind": "scalar", "type": "String", "isRequired": false},
                {"name": "role", "kind": "enum", "type": "Role", "isRequired": true, "default": "USER"},
                {"name": "posts", "kind": "object", "type": "Post", "isRequired": true,
                 "isList": true, "relationName": "PostToUser"},
                {"name": "manager", "kind": "object", "type": "User", "isRequired": false,
                 "relationName": "Management"}
            ]
        }))
    }

    fn convertor(split: bool, swagger: bool) -> Convertor {
        Convertor::new(&GeneratorConfig {
            separate_relation_fields: split,
            use_swagger: swagger,
            ..GeneratorConfig::default()
        })
    }

    #[test]
    fn test_convert_model_collects_relations_and_enums() {
        let descriptor = convertor(false, true).convert_model(&user(), ConvertModelInput::default());

        assert_eq!(descriptor.name, "User");
        assert_eq!(descriptor.fields.len(), 6);
        assert_eq!(descriptor.relation_types.iter().collect::<Vec<_>>(), vec!["Post"]);
        assert_eq!(descriptor.enum_types.iter().collect::<Vec<_>>(), vec!["Role"]);
    }

    #[test]
    fn test_convert_field_defaults() {
        let descriptor = convertor(false, false).convert_model(&user(), ConvertModelInput::default());
        let by_name = |name: &str| descriptor.fields.iter().find(|f| f.name == name).unwrap();

        assert_eq!(by_name("id").default, None);
        assert_eq!(by_name("role").default.as_deref(), Some("Role.USER"));
        assert!(by_name("name").nullable);
        assert!(!by_name("email").nullable);
        assert_eq!(by_name("posts").ty, "Post[]");
        assert!(by_name("posts").decorators.is_empty());
    }

    #[test]
    fn test_literal_default_formatting() {
        let conv = convertor(false, false);
        let field = |ty: &str, default: serde_json::Value| -> Field {
            serde_json::from_value(json!({
                "name": "f", "kind": "scalar", "type": ty, "isRequired": true, "default": default
            }))
            .unwrap()
        };

        assert_eq!(
            conv.convert_field(&field("BigInt", json!(42))).default.as_deref(),
            Some("BigInt(42)")
        );
        assert_eq!(
            conv.convert_field(&field("String", json!("hello"))).default.as_deref(),
            Some("'hello'")
        );
        assert_eq!(
            conv.convert_field(&field("String", json!("a\nb"))).default.as_deref(),
            Some(r"'a\nb'")
        );
        assert_eq!(
            conv.convert_field(&field("Boolean", json!(false))).default.as_deref(),
            Some("false")
        );
        assert_eq!(
            conv.convert_field(&field("Float", json!(1.5))).default.as_deref(),
            Some("1.5")
        );
        assert_eq!(
            conv.convert_field(&field("DateTime", json!({"name": "now", "args": []})))
                .default,
            None
        );
    }

    #[test]
    fn test_swagger_decorators_attached() {
        let descriptor = convertor(false, true).convert_model(&user(), ConvertModelInput::default());
        let rendered: Vec<String> = descriptor
            .fields
            .iter()
            .map(|f| f.decorators[0].render())
            .collect();

        assert_eq!(rendered[0], "@ApiProperty({ type: Number })");
        assert_eq!(rendered[2], "@ApiPropertyOptional({ type: String })");
        assert_eq!(rendered[3], "@ApiProperty({ enum: Role, enumName: 'Role' })");
        assert_eq!(rendered[4], "@ApiProperty({ type: () => Post, isArray: true })");
        assert_eq!(rendered[5], "@ApiPropertyOptional({ type: () => User })");
    }

    #[test]
    fn test_split_mode_partitions_fields() {
        let datamodel = Datamodel {
            models: vec![user()],
            enums: Vec::new(),
        };
        let descriptors = convertor(true, true).convert_models(&datamodel);

        assert_eq!(descriptors.len(), 2);
        let relations = &descriptors[0];
        let plain = &descriptors[1];

        assert_eq!(relations.name, "UserRelations");
        assert_eq!(
            relations.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["posts", "manager"]
        );
        // The plain class is a different file, so the self-relation is imported.
        assert_eq!(
            relations.relation_types.iter().collect::<Vec<_>>(),
            vec!["Post", "User"]
        );
        assert!(relations.enum_types.is_empty());

        assert_eq!(plain.name, "User");
        assert_eq!(
            plain.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["id", "email", "name", "role"]
        );
        assert!(plain.relation_types.is_empty());
        assert_eq!(plain.enum_types.len(), 1);
    }

    #[test]
    fn test_split_mode_orders_relations_first() {
        let post = model(json!({
            "name": "Post",
            "fields": [{"name": "id", "kind": "scalar", "type": "Int", "isRequired": true}]
        }));
        let datamodel = Datamodel {
            models: vec![user(), post],
            enums: Vec::new(),
        };
        let names: Vec<String> = convertor(true, false)
            .convert_models(&datamodel)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["UserRelations", "PostRelations", "User", "Post"]);
    }

    #[test]
    fn test_enum_types_are_deduplicated() {
        let m = model(json!({
            "name": "Account",
            "fields": [
                {"name": "role", "kind": "enum", "type": "Role", "isRequired": true},
                {"name": "previousRole", "kind": "enum", "type": "Role", "isRequired": false}
            ]
        }));
        let descriptor = convertor(false, true).convert_model(&m, ConvertModelInput::default());
        assert_eq!(descriptor.enum_types.len(), 1);
    }
}
