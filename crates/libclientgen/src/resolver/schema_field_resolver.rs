use crate::naming::IdentifierTransform;
use crate::naming::PascalCaseIdentifiers;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::resolver::Argument;
use crate::resolver::FieldResolutionError;
use crate::resolver::FieldResolver;
use crate::resolver::ResponseField;
use crate::resolver::ResponseFieldKind;
use crate::resolver::ResponseFields;
use crate::resolver::TypeRepr;
use crate::schema::ObjectLikeType;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use indexmap::IndexMap;

/// The [`FieldResolver`] used by [`generate`](crate::generate): resolves
/// against a [`Schema`], spelling leaf types as Rust types.
///
/// Built-in scalars map to `String`, `i64`, `f64` and `bool` (`ID` is a
/// `String`). Any GraphQL type listed in `bindings` resolves to its bound
/// target type; remaining named types resolve to their identifier.
pub struct SchemaFieldResolver<'schema> {
    bindings: IndexMap<String, String>,
    identifiers: Box<dyn IdentifierTransform>,
    schema: &'schema Schema,
}
impl<'schema> SchemaFieldResolver<'schema> {
    pub fn new(schema: &'schema Schema, bindings: IndexMap<String, String>) -> Self {
        Self {
            bindings,
            identifiers: Box::new(PascalCaseIdentifiers),
            schema,
        }
    }

    pub fn with_identifier_transform(
        mut self,
        identifiers: impl IdentifierTransform + 'static,
    ) -> Self {
        self.identifiers = Box::new(identifiers);
        self
    }

    fn leaf_type(&self, type_name: &str) -> TypeRepr {
        if let Some(bound) = self.bindings.get(type_name) {
            return TypeRepr::named(bound.as_str());
        }

        match type_name {
            "Boolean" => TypeRepr::named("bool"),
            "Float" => TypeRepr::named("f64"),
            "ID" | "String" => TypeRepr::named("String"),
            "Int" => TypeRepr::named("i64"),
            other => TypeRepr::named(self.identifiers.to_identifier(other)),
        }
    }

    fn resolve_field_type(
        &self,
        selected_name: &str,
        type_annotation: &TypeAnnotation,
        selection_set: &SelectionSet,
        name_prefix: &str,
    ) -> TypeRepr {
        let base_type = match selection_set.selections() {
            [] => self.leaf_type(type_annotation.innermost_type_name()),

            [Selection::FragmentSpread(spread)] =>
                TypeRepr::named(self.identifiers.to_identifier(spread.fragment_name())),

            _ => TypeRepr::named(format!(
                "{name_prefix}{}",
                self.identifiers.to_identifier(selected_name),
            )),
        };
        wrap_type(type_annotation, base_type)
    }
}
impl FieldResolver for SchemaFieldResolver<'_> {
    fn resolve(&self, selection_set: &SelectionSet, name_prefix: &str) -> ResponseFields {
        let mut fields = vec![];
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    let selected_name = field.selected_name();
                    fields.push(ResponseField {
                        json_name: selected_name.to_string(),
                        kind: ResponseFieldKind::Field,
                        name: self.identifiers.to_identifier(selected_name),
                        type_repr: self.resolve_field_type(
                            selected_name,
                            field.type_annotation(),
                            field.selection_set(),
                            name_prefix,
                        ),
                    });
                },

                Selection::FragmentSpread(spread) => {
                    let fragment_ident =
                        self.identifiers.to_identifier(spread.fragment_name());
                    fields.push(ResponseField {
                        json_name: spread.fragment_name().to_string(),
                        kind: ResponseFieldKind::FragmentSpread,
                        name: fragment_ident.to_string(),
                        type_repr: TypeRepr::named(fragment_ident),
                    });
                },

                Selection::InlineFragment(inline) => match inline.type_condition() {
                    Some(type_condition) => {
                        let condition_ident =
                            self.identifiers.to_identifier(type_condition);
                        let nested = self.resolve(
                            inline.selection_set(),
                            format!("{name_prefix}{condition_ident}").as_str(),
                        );
                        fields.push(ResponseField {
                            json_name: format!("... on {type_condition}"),
                            kind: ResponseFieldKind::InlineFragment,
                            name: condition_ident,
                            type_repr: nested.struct_type(),
                        });
                    },

                    // Without a type condition the fragment applies to the
                    // enclosing type, so its fields belong to this level.
                    None => fields.extend(
                        self.resolve(inline.selection_set(), name_prefix).fields,
                    ),
                },
            }
        }
        ResponseFields { fields }
    }

    fn resolve_by_definition(
        &self,
        definition: &ObjectLikeType,
    ) -> Result<ResponseFields, FieldResolutionError> {
        let mut fields = vec![];
        for field_def in definition.fields().values() {
            let type_annotation = field_def.type_annotation();
            let type_name = type_annotation.innermost_type_name();
            let base_type = match self.schema.lookup_type(type_name) {
                Some(graphql_type) if graphql_type.is_composite() =>
                    TypeRepr::named(self.identifiers.to_identifier(type_name)),
                Some(_) => self.leaf_type(type_name),
                None => return Err(FieldResolutionError::UndefinedType {
                    field_name: field_def.name().to_string(),
                    type_name: definition.name().to_string(),
                    undefined_type: type_name.to_string(),
                }),
            };

            fields.push(ResponseField {
                json_name: field_def.name().to_string(),
                kind: ResponseFieldKind::Field,
                name: self.identifiers.to_identifier(field_def.name()),
                type_repr: wrap_type(type_annotation, base_type),
            });
        }
        Ok(ResponseFields { fields })
    }

    fn operation_arguments(&self, variables: &[Variable]) -> Vec<Argument> {
        variables.iter()
            .map(|var| Argument {
                type_repr: wrap_type(
                    var.type_annotation(),
                    self.leaf_type(var.type_annotation().innermost_type_name()),
                ),
                variable: var.name().to_string(),
            })
            .collect()
    }
}

/// Apply the list and nullability wrappers of `type_annotation` around
/// `base_type`.
fn wrap_type(type_annotation: &TypeAnnotation, base_type: TypeRepr) -> TypeRepr {
    let inner = match type_annotation {
        TypeAnnotation::List { inner, .. } => TypeRepr::list(wrap_type(inner, base_type)),
        TypeAnnotation::Named { .. } => base_type,
    };
    if type_annotation.nullable() {
        TypeRepr::optional(inner)
    } else {
        inner
    }
}
