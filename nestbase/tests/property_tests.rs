//! Property-based tests for conversion, import registration and path
//! resolution.

use proptest::prelude::*;
use std::path::{Path, PathBuf};

use nestbase::client::ClientModule;
use nestbase::config::GeneratorConfig;
use nestbase::convert::type_mapper::field_ts_type;
use nestbase::convert::{ConvertModelInput, Convertor, FieldSelection, ScalarType};
use nestbase::dmmf::{Datamodel, Field, FieldKind, Model};
use nestbase::file::{path_map, DraftFile};
use nestbase::generator::render_all;
use nestbase::ir::import::ImportSet;
use nestbase::ir::{ImportOrigin, PLACEHOLDER_PREFIX};
use nestbase::paths::relative_module_path;

fn scalar_type() -> impl Strategy<Value = ScalarType> {
    proptest::sample::select(ScalarType::ALL.to_vec())
}

fn type_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}"
}

fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z]{0,8}"
}

fn scalar_field(name: String, scalar: ScalarType, is_list: bool, is_required: bool) -> Field {
    Field {
        name,
        kind: FieldKind::Scalar,
        ty: scalar.schema_name().to_string(),
        is_required,
        is_list,
        relation_name: None,
        default: None,
    }
}

fn relation_field(name: String, target: String, is_list: bool) -> Field {
    Field {
        relation_name: Some(format!("{}Relation", target)),
        kind: FieldKind::Object,
        ty: target,
        is_required: true,
        is_list,
        name,
        default: None,
    }
}

/// A model with a scalar id plus arbitrary scalar and relation fields.
fn model(name: String, scalars: Vec<(String, ScalarType)>, relations: Vec<(String, String)>) -> Model {
    let mut fields = vec![scalar_field("id".to_string(), ScalarType::Int, false, true)];
    fields.extend(
        scalars
            .into_iter()
            .map(|(n, s)| scalar_field(format!("s{}", n), s, false, true)),
    );
    fields.extend(
        relations
            .into_iter()
            .map(|(n, t)| relation_field(format!("r{}", n), t, false)),
    );
    Model { name, fields }
}

fn convertor(split: bool) -> Convertor {
    Convertor::new(&GeneratorConfig {
        separate_relation_fields: split,
        ..GeneratorConfig::default()
    })
}

proptest! {
    #[test]
    fn scalar_fields_map_to_their_typescript_type(
        scalar in scalar_type(),
        is_list in any::<bool>(),
        is_required in any::<bool>(),
    ) {
        let field = scalar_field("value".to_string(), scalar, is_list, is_required);
        let expected = if is_list {
            format!("{}[]", scalar.ts_type())
        } else {
            scalar.ts_type().to_string()
        };
        prop_assert_eq!(field_ts_type(&field), expected);
    }

    #[test]
    fn non_scalar_fields_keep_their_type_name(target in type_name(), is_list in any::<bool>()) {
        let field = relation_field("rel".to_string(), target.clone(), is_list);
        let ts = field_ts_type(&field);
        if is_list {
            prop_assert_eq!(ts, format!("{}[]", target));
        } else {
            prop_assert_eq!(ts, target);
        }
    }

    #[test]
    fn relation_types_never_contain_the_class_itself(
        name in type_name(),
        targets in proptest::collection::vec(type_name(), 0..6),
        self_refs in 0usize..3,
        split in any::<bool>(),
    ) {
        let mut relations: Vec<(String, String)> = targets
            .into_iter()
            .enumerate()
            .map(|(i, t)| (i.to_string(), t))
            .collect();
        for i in 0..self_refs {
            relations.push((format!("self{}", i), name.clone()));
        }

        let model = model(name, Vec::new(), relations);
        let datamodel = Datamodel { models: vec![model], enums: Vec::new() };
        for descriptor in convertor(split).convert_models(&datamodel) {
            prop_assert!(!descriptor.relation_types.contains(&descriptor.name));
        }
    }

    #[test]
    fn import_registration_is_idempotent(
        entries in proptest::collection::vec((type_name(), 0usize..3), 1..12),
        repeats in 1usize..4,
    ) {
        let origins = ["@nestjs/swagger", "@prisma/client", "./user"];

        let mut once: ImportSet<String> = ImportSet::new();
        for (name, origin) in &entries {
            once.register(name.clone(), origins[*origin].to_string());
        }

        let mut repeated: ImportSet<String> = ImportSet::new();
        for _ in 0..repeats {
            for (name, origin) in &entries {
                repeated.register(name.clone(), origins[*origin].to_string());
            }
        }

        prop_assert_eq!(&once, &repeated);
        let distinct: std::collections::HashSet<_> = entries.iter().map(|(_, o)| *o).collect();
        prop_assert_eq!(once.len(), distinct.len());
    }

    #[test]
    fn same_directory_paths_get_dot_prefix(dir in "[a-z]{1,6}", from in "[a-z_]{1,8}", to in "[a-z_]{1,8}") {
        let base = PathBuf::from("/").join(&dir);
        let resolved = relative_module_path(&base.join(format!("{}.ts", from)), &base.join(format!("{}.ts", to)));
        prop_assert_eq!(resolved, format!("./{}", to));
    }

    #[test]
    fn nested_paths_climb_with_forward_slashes(
        depth in 1usize..4,
        to in "[a-z_]{1,8}",
    ) {
        let mut from_dir = PathBuf::from("/out");
        for i in 0..depth {
            from_dir = from_dir.join(format!("d{}", i));
        }
        let resolved = relative_module_path(&from_dir.join("a.ts"), Path::new("/out").join(format!("{}.ts", to)).as_path());

        let expected = format!("{}{}", "../".repeat(depth), to);
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn split_mode_partitions_fields_exactly(
        scalars in proptest::collection::vec((field_name(), scalar_type()), 0..5),
        relations in proptest::collection::vec((field_name(), type_name()), 0..5),
    ) {
        let model = model("Owner".to_string(), scalars, relations);
        let total = model.fields.len();
        let conv = convertor(true);

        let related = conv.convert_model(&model, ConvertModelInput {
            selection: FieldSelection::RelationsOnly,
            postfix: Some("Relations"),
        });
        let plain = conv.convert_model(&model, ConvertModelInput {
            selection: FieldSelection::NonRelationsOnly,
            postfix: None,
        });

        prop_assert_eq!(related.fields.len() + plain.fields.len(), total);
        prop_assert!(plain.relation_types.is_empty());
        prop_assert!(related.enum_types.is_empty());
        prop_assert_eq!(related.name.as_str(), "OwnerRelations");
    }

    #[test]
    fn resolution_leaves_no_placeholders_and_renders_identically(
        names in proptest::collection::hash_set(type_name(), 1..5),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        // Every model relates to the next one, the last to the first.
        let models: Vec<Model> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let target = names[(i + 1) % names.len()].clone();
                model(name.clone(), Vec::new(), vec![("0".to_string(), target)])
            })
            .collect();
        let datamodel = Datamodel { models, enums: Vec::new() };
        let client = ClientModule::Known("@prisma/client".to_string());

        let render = || {
            let drafts: Vec<DraftFile> = convertor(false)
                .convert_models(&datamodel)
                .into_iter()
                .map(|m| DraftFile::new(m, "/out", &client).unwrap())
                .collect();
            let paths = path_map(&drafts);
            let resolved: Vec<_> = drafts.into_iter().map(|d| d.resolve(&paths).unwrap()).collect();
            for file in &resolved {
                for import in file.imports().iter() {
                    assert!(!import.from.starts_with(PLACEHOLDER_PREFIX));
                }
            }
            render_all(&resolved).unwrap()
        };

        prop_assert_eq!(render(), render());
    }

    #[test]
    fn placeholders_are_registered_per_related_model(targets in proptest::collection::vec(type_name(), 1..5)) {
        let relations = targets.iter().enumerate().map(|(i, t)| (i.to_string(), t.clone())).collect();
        let descriptor = convertor(false).convert_model(&model("Hub9".to_string(), Vec::new(), relations), ConvertModelInput::default());
        let client = ClientModule::Known("@prisma/client".to_string());
        let draft = DraftFile::new(descriptor, "/out", &client).unwrap();

        let placeholders = draft.imports().iter().filter(|i| i.from.is_placeholder()).count();
        let distinct: std::collections::HashSet<_> = targets.iter().collect();
        prop_assert_eq!(placeholders, distinct.len());
        for target in distinct {
            prop_assert!(draft.imports().find(&ImportOrigin::Model(target.clone())).is_some());
        }
    }
}
