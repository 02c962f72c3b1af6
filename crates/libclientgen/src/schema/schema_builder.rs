use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::FieldDef;
use crate::schema::GraphQLType;
use crate::schema::InputFieldDef;
use crate::schema::ObjectLikeType;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Utility for building a [`Schema`].
///
/// Type extensions are held aside until [`SchemaBuilder::build`] so that an
/// extension may appear before (or in a different file than) the type it
/// extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<RootTypeDef>,
    query_type: Option<RootTypeDef>,
    subscription_type: Option<RootTypeDef>,
    type_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        let types =
            BUILTIN_SCALAR_NAMES.iter()
                .map(|name| (name.to_string(), GraphQLType::Scalar {
                    def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
                    name: name.to_string(),
                }))
                .collect();

        Self {
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            type_extensions: vec![],
            types,
        }
    }

    pub fn build(mut self) -> Result<Schema> {
        self.merge_type_extensions()?;

        let query_type =
            self.resolve_root_type(OperationKind::Query)?
                .ok_or(SchemaBuildError::NoQueryTypeDefined)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type =
            self.resolve_root_type(OperationKind::Subscription)?;

        log::debug!(
            "Built schema with {} types (query root: `{query_type}`, \
            mutation root: {mutation_type:?}).",
            self.types.len(),
        );

        Ok(Schema {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Arc::new(err),
                ))?;
            self = self.load_str(Some(file_path), file_content.as_str())?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let file_path = file_path.map(Path::to_path_buf);
        let doc =
            ast::schema::parse(content)
                .map_err(|err| SchemaBuildError::SchemaParseError {
                    file: file_path.to_owned(),
                    err: Arc::new(err),
                })?;

        for def in doc.definitions {
            self.visit_definition(&file_path, def)?;
        }

        Ok(self)
    }

    fn check_for_conflicting_type(
        &self,
        def_location: &loc::FilePosition,
        name: &str,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name.to_string(),
                def1: conflicting_type.def_location(),
                def2: loc::SchemaDefLocation::Schema(def_location.clone()),
            });
        }
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: &Option<PathBuf>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_string(), ext.position),
        };
        let extension_loc = loc::FilePosition::from_pos(file_path.as_ref(), position);

        let Some(target_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_loc,
            });
        };

        match (target_type, ext) {
            (GraphQLType::Enum { values, .. }, TypeExtension::Enum(ext)) => {
                for ext_val in ext.values {
                    if values.contains(&ext_val.name) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: type_name,
                            value_name: ext_val.name,
                        });
                    }
                    values.push(ext_val.name);
                }
                Ok(())
            },

            (
                GraphQLType::InputObject { fields, .. },
                TypeExtension::InputObject(ext),
            ) => {
                for (field_name, field) in inputobj_fields_from_ast(file_path, &type_name, &ext.fields)? {
                    if fields.contains_key(&field_name) {
                        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                            type_name,
                            field_name,
                            field_def: field.def_location,
                        });
                    }
                    fields.insert(field_name, field);
                }
                Ok(())
            },

            (GraphQLType::Interface(obj), TypeExtension::Interface(ext)) => {
                obj.interfaces.extend(ext.implements_interfaces);
                merge_object_fields(obj, object_fields_from_ast(file_path, &type_name, &ext.fields)?)
            },

            (GraphQLType::Object(obj), TypeExtension::Object(ext)) => {
                obj.interfaces.extend(ext.implements_interfaces);
                merge_object_fields(obj, object_fields_from_ast(file_path, &type_name, &ext.fields)?)
            },

            (GraphQLType::Scalar { .. }, TypeExtension::Scalar(_)) => Ok(()),

            (GraphQLType::Union { members, .. }, TypeExtension::Union(ext)) => {
                for member in ext.types {
                    if members.contains(&member) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name,
                            member_name: member,
                        });
                    }
                    members.push(member);
                }
                Ok(())
            },

            (target_type, _) => Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                schema_type_kind: target_type.kind_name(),
                extension_loc,
            }),
        }
    }

    fn merge_type_extensions(&mut self) -> Result<()> {
        let type_extensions = std::mem::take(&mut self.type_extensions);
        for (file_path, type_ext) in type_extensions {
            self.merge_type_extension(&file_path, type_ext)?;
        }
        Ok(())
    }

    fn resolve_root_type(&self, kind: OperationKind) -> Result<Option<String>> {
        let (explicit_def, default_name) = match kind {
            OperationKind::Mutation => (&self.mutation_type, "Mutation"),
            OperationKind::Query => (&self.query_type, "Query"),
            OperationKind::Subscription => (&self.subscription_type, "Subscription"),
        };

        match explicit_def {
            Some(root_def) => match self.types.get(root_def.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(root_def.type_name.clone())),
                Some(other_type) => Err(SchemaBuildError::RootTypeNotAnObject {
                    operation: kind,
                    type_name: root_def.type_name.clone(),
                    type_kind: other_type.kind_name(),
                }),
                None => Err(SchemaBuildError::UndefinedRootType {
                    operation: kind,
                    type_name: root_def.type_name.clone(),
                    location: root_def.def_location.clone(),
                }),
            },

            None => match self.types.get(default_name) {
                Some(GraphQLType::Object(_)) => Ok(Some(default_name.to_string())),
                _ => Ok(None),
            },
        }
    }

    fn visit_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_schemablock_definition(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_type_definition(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.type_extensions.push((file_path.to_owned(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) => {
                log::trace!(
                    "Ignoring directive definition `@{}`.",
                    directive_def.name,
                );
                Ok(())
            },
        }
    }

    fn visit_schemablock_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(
            file_path.as_ref(),
            schema_def.position,
        );

        let roots = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];
        for (kind, type_name) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_def) = slot.as_ref() {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing_def.def_location.clone(),
                    location2: def_location,
                });
            }
            *slot = Some(RootTypeDef {
                def_location: def_location.clone(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_type_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (name, position) = match &type_def {
            TypeDefinition::Enum(def) => (def.name.to_string(), def.position),
            TypeDefinition::InputObject(def) => (def.name.to_string(), def.position),
            TypeDefinition::Interface(def) => (def.name.to_string(), def.position),
            TypeDefinition::Object(def) => (def.name.to_string(), def.position),
            TypeDefinition::Scalar(def) => (def.name.to_string(), def.position),
            TypeDefinition::Union(def) => (def.name.to_string(), def.position),
        };
        let def_location = loc::FilePosition::from_pos(file_path.as_ref(), position);
        self.check_for_conflicting_type(&def_location, name.as_str())?;

        let graphql_type = match type_def {
            TypeDefinition::Enum(def) => GraphQLType::Enum {
                def_location,
                name: name.to_string(),
                values: def.values.into_iter().map(|val| val.name).collect(),
            },

            TypeDefinition::InputObject(def) => GraphQLType::InputObject {
                def_location,
                fields: inputobj_fields_from_ast(file_path, &name, &def.fields)?,
                name: name.to_string(),
            },

            TypeDefinition::Interface(def) => GraphQLType::Interface(ObjectLikeType {
                def_location,
                fields: object_fields_from_ast(file_path, &name, &def.fields)?,
                interfaces: def.implements_interfaces,
                name: name.to_string(),
            }),

            TypeDefinition::Object(def) => GraphQLType::Object(ObjectLikeType {
                def_location,
                fields: object_fields_from_ast(file_path, &name, &def.fields)?,
                interfaces: def.implements_interfaces,
                name: name.to_string(),
            }),

            TypeDefinition::Scalar(_) => GraphQLType::Scalar {
                def_location: loc::SchemaDefLocation::Schema(def_location),
                name: name.to_string(),
            },

            TypeDefinition::Union(def) => GraphQLType::Union {
                def_location,
                members: def.types,
                name: name.to_string(),
            },
        };

        self.types.insert(name, graphql_type);
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error)]
pub enum SchemaBuildError {
    #[error("Duplicate {operation:?} root operation type definition at {location2} (first defined at {location1})")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("Enum `{enum_name}` defines the value `{value_name}` more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
    },

    #[error("Field `{type_name}.{field_name}` is defined more than once (again at {field_def})")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def: loc::FilePosition,
    },

    #[error("Type `{type_name}` is defined more than once ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Union `{type_name}` lists the member `{member_name}` more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
    },

    #[error("Extension at {extension_loc} targets undefined type `{type_name}`")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::FilePosition,
    },

    #[error("Extension at {extension_loc} does not match the kind of `{type_name}` ({schema_type_kind})")]
    InvalidExtensionType {
        type_name: String,
        schema_type_kind: &'static str,
        extension_loc: loc::FilePosition,
    },

    #[error("No query root operation type is defined")]
    NoQueryTypeDefined,

    #[error("The {operation:?} root operation type `{type_name}` is a {type_kind}, not an object type")]
    RootTypeNotAnObject {
        operation: OperationKind,
        type_name: String,
        type_kind: &'static str,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Arc<file_reader::ReadContentError>),

    #[error("Error parsing schema document {file:?}: {err}")]
    SchemaParseError {
        file: Option<PathBuf>,
        err: Arc<ast::schema::ParseError>,
    },

    #[error("The {operation:?} root operation type `{type_name}` declared at {location} is not defined")]
    UndefinedRootType {
        operation: OperationKind,
        type_name: String,
        location: loc::FilePosition,
    },
}

/// The `schema { ... }` declaration of one root operation type.
#[derive(Clone, Debug)]
struct RootTypeDef {
    def_location: loc::FilePosition,
    type_name: String,
}

fn inputobj_fields_from_ast(
    file_path: &Option<PathBuf>,
    type_name: &str,
    input_fields: &[ast::schema::InputValue],
) -> Result<IndexMap<String, InputFieldDef>> {
    let mut fields = IndexMap::new();
    for input_field in input_fields {
        let def_location = loc::FilePosition::from_pos(
            file_path.as_ref(),
            input_field.position,
        );
        if fields.contains_key(&input_field.name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name: input_field.name.to_string(),
                field_def: def_location,
            });
        }
        fields.insert(input_field.name.to_string(), InputFieldDef {
            def_location,
            name: input_field.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&input_field.value_type),
        });
    }
    Ok(fields)
}

fn merge_object_fields(
    obj: &mut ObjectLikeType,
    ext_fields: IndexMap<String, FieldDef>,
) -> Result<()> {
    for (field_name, field) in ext_fields {
        if obj.fields.contains_key(&field_name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: obj.name.to_string(),
                field_name,
                field_def: field.def_location,
            });
        }
        obj.fields.insert(field_name, field);
    }
    Ok(())
}

fn object_fields_from_ast(
    file_path: &Option<PathBuf>,
    type_name: &str,
    ast_fields: &[ast::schema::Field],
) -> Result<IndexMap<String, FieldDef>> {
    let mut fields = IndexMap::new();
    for field in ast_fields {
        let def_location = loc::FilePosition::from_pos(
            file_path.as_ref(),
            field.position,
        );
        if fields.contains_key(&field.name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name: field.name.to_string(),
                field_def: def_location,
            });
        }
        fields.insert(field.name.to_string(), FieldDef {
            def_location,
            name: field.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        });
    }
    Ok(fields)
}
