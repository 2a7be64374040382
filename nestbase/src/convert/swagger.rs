//! `@nestjs/swagger` decorator synthesis.

use super::type_mapper::FieldShape;
use crate::dmmf::Field;
use crate::ir::{DecoratorDescriptor, DecoratorParams, ParamValue};

/// Module the documentation decorators are imported from.
pub const SWAGGER_MODULE: &str = "@nestjs/swagger";

pub const API_PROPERTY: &str = "ApiProperty";
pub const API_PROPERTY_OPTIONAL: &str = "ApiPropertyOptional";

/// Build the documentation decorator for a field.
pub fn property_decorator(field: &Field) -> DecoratorDescriptor {
    let name = if field.is_required {
        API_PROPERTY
    } else {
        API_PROPERTY_OPTIONAL
    };
    let mut decorator = DecoratorDescriptor::new(name, SWAGGER_MODULE);

    let mut params = DecoratorParams::new();
    match FieldShape::of(field) {
        FieldShape::Scalar(scalar) => {
            params.set("type", ParamValue::Expr(scalar.constructor()));
        }
        FieldShape::Relation(ty) => {
            params.set("type", ParamValue::Thunk(ty));
        }
        FieldShape::Enum(ty) => {
            params.set("enum", ParamValue::Expr(ty.clone()));
            params.set("enumName", ParamValue::Str(ty));
        }
        FieldShape::Other(_) => {}
    }
    if field.is_list {
        params.set("isArray", ParamValue::Bool(true));
    }

    decorator.push_params(params);
    decorator
}
