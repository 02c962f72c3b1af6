use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::ExecutableDocument;
use crate::operation::FieldSelection;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::OperationDefinition;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::schema::GraphQLType;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<DocumentBuildError>>;

/// Binds a parsed executable document against a [`Schema`], producing an
/// [`ExecutableDocument`] in which every field selection knows the type its
/// schema definition declares.
///
/// Binding does not validate the document beyond what is needed to look
/// each field up; all errors found are returned together.
pub struct ExecutableDocumentBuilder<'schema> {
    file_path: Option<PathBuf>,
    schema: &'schema Schema,
}

impl<'schema> ExecutableDocumentBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            file_path: None,
            schema,
        }
    }

    pub fn build_from_ast(
        &self,
        ast: &ast::query::Document,
    ) -> Result<ExecutableDocument> {
        let mut errors = vec![];
        let mut fragments = vec![];
        let mut operations = vec![];

        for def in &ast.definitions {
            use ast::query::Definition as Def;
            match def {
                Def::Fragment(frag_def) => {
                    if let Some(fragment) = self.bind_fragment(frag_def, &mut errors) {
                        fragments.push(fragment);
                    }
                },

                Def::Operation(op_def) => {
                    if let Some(operation) = self.bind_operation(op_def, &mut errors) {
                        operations.push(operation);
                    }
                },
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!(
            "Bound {} operations and {} fragments{}.",
            operations.len(),
            fragments.len(),
            self.file_path.as_ref()
                .map(|path| format!(" from {path:?}"))
                .unwrap_or_default(),
        );

        Ok(ExecutableDocument {
            fragments,
            operations,
        })
    }

    pub fn build_from_file(
        mut self,
        file_path: impl AsRef<Path>,
    ) -> Result<ExecutableDocument> {
        let file_path = file_path.as_ref();
        let file_content = file_reader::read_content(file_path)
            .map_err(|e| vec![DocumentBuildError::DocumentFileReadError(
                Arc::new(e),
            )])?;
        self.file_path = Some(file_path.to_path_buf());
        self.build_from_str(file_content)
    }

    pub fn build_from_str(
        &self,
        content: impl AsRef<str>,
    ) -> Result<ExecutableDocument> {
        let ast_doc =
            ast::query::parse(content.as_ref())
                .map_err(|e| vec![DocumentBuildError::ParseError(Arc::new(e))])?;
        self.build_from_ast(&ast_doc)
    }

    /// Attribute the positions recorded while binding to the given file.
    pub fn with_file_path(mut self, file_path: impl AsRef<Path>) -> Self {
        self.file_path = Some(file_path.as_ref().to_path_buf());
        self
    }

    fn bind_fragment(
        &self,
        frag_def: &ast::query::FragmentDefinition,
        errors: &mut Vec<DocumentBuildError>,
    ) -> Option<FragmentDefinition> {
        let def_location = self.position(frag_def.position);
        let ast::query::TypeCondition::On(type_condition) = &frag_def.type_condition;

        if !self.is_composite_type(type_condition) {
            errors.push(DocumentBuildError::InvalidTypeCondition {
                location: def_location,
                type_name: type_condition.to_string(),
            });
            return None;
        }

        let selection_set = self.bind_selection_set(
            type_condition,
            &frag_def.selection_set,
            errors,
        );

        Some(FragmentDefinition {
            def_location,
            name: frag_def.name.to_string(),
            selection_set,
            type_condition: type_condition.to_string(),
        })
    }

    fn bind_operation(
        &self,
        op_def: &ast::query::OperationDefinition,
        errors: &mut Vec<DocumentBuildError>,
    ) -> Option<OperationDefinition> {
        use ast::query::OperationDefinition as OpDef;
        let (kind, position, name, var_defs, ast_selection_set): (
            OperationKind,
            graphql_parser::Pos,
            Option<&str>,
            &[ast::query::VariableDefinition],
            &ast::query::SelectionSet,
        ) = match op_def {
            OpDef::Mutation(op) => (
                OperationKind::Mutation,
                op.position,
                op.name.as_deref(),
                &op.variable_definitions,
                &op.selection_set,
            ),
            OpDef::Query(op) => (
                OperationKind::Query,
                op.position,
                op.name.as_deref(),
                &op.variable_definitions,
                &op.selection_set,
            ),
            OpDef::SelectionSet(selection_set) => (
                OperationKind::Query,
                selection_set.span.0,
                None,
                &[],
                selection_set,
            ),
            OpDef::Subscription(op) => (
                OperationKind::Subscription,
                op.position,
                op.name.as_deref(),
                &op.variable_definitions,
                &op.selection_set,
            ),
        };
        let def_location = self.position(position);
        let name = name.map(str::to_string).unwrap_or_default();

        let Some(root_type) = self.schema.root_type(&kind) else {
            errors.push(DocumentBuildError::UndefinedOperationRoot {
                kind,
                location: def_location,
                operation_name: name,
            });
            return None;
        };

        let variables =
            var_defs.iter()
                .map(|var_def| Variable {
                    def_location: self.position(var_def.position),
                    default_value: var_def.default_value.clone(),
                    name: var_def.name.to_string(),
                    type_annotation: TypeAnnotation::from_ast_type(&var_def.var_type),
                })
                .collect();

        let selection_set = self.bind_selection_set(
            root_type.name(),
            ast_selection_set,
            errors,
        );

        Some(OperationDefinition {
            def_location,
            kind,
            name,
            selection_set,
            variables,
        })
    }

    fn bind_field(
        &self,
        parent_type: &str,
        field: &ast::query::Field,
        errors: &mut Vec<DocumentBuildError>,
    ) -> Option<FieldSelection> {
        let def_location = self.position(field.position);

        let type_annotation =
            if field.name == "__typename" {
                TypeAnnotation::Named {
                    name: "String".to_string(),
                    nullable: false,
                }
            } else {
                let field_def =
                    self.schema.lookup_type(parent_type)
                        .and_then(GraphQLType::as_object_like)
                        .and_then(|obj| obj.field(field.name.as_str()));
                match field_def {
                    Some(field_def) => field_def.type_annotation().clone(),
                    None => {
                        errors.push(DocumentBuildError::UndefinedField {
                            field_name: field.name.to_string(),
                            location: def_location,
                            parent_type: parent_type.to_string(),
                        });
                        return None;
                    },
                }
            };

        let field_type_name = type_annotation.innermost_type_name();
        let selection_set =
            if field.selection_set.items.is_empty() {
                SelectionSet::default()
            } else if self.is_composite_type(field_type_name) {
                self.bind_selection_set(field_type_name, &field.selection_set, errors)
            } else {
                errors.push(DocumentBuildError::SelectionOnLeafType {
                    field_name: field.name.to_string(),
                    location: def_location,
                    type_name: field_type_name.to_string(),
                });
                return None;
            };

        Some(FieldSelection {
            alias: field.alias.to_owned(),
            def_location,
            name: field.name.to_string(),
            selection_set,
            type_annotation,
        })
    }

    fn bind_selection_set(
        &self,
        parent_type: &str,
        ast_selection_set: &ast::query::SelectionSet,
        errors: &mut Vec<DocumentBuildError>,
    ) -> SelectionSet {
        let mut selections = vec![];
        for selection in &ast_selection_set.items {
            use ast::query::Selection as Sel;
            match selection {
                Sel::Field(field) => {
                    if let Some(field) = self.bind_field(parent_type, field, errors) {
                        selections.push(Selection::Field(field));
                    }
                },

                Sel::FragmentSpread(spread) => {
                    selections.push(Selection::FragmentSpread(FragmentSpread {
                        def_location: self.position(spread.position),
                        fragment_name: spread.fragment_name.to_string(),
                    }));
                },

                Sel::InlineFragment(inline) => {
                    let def_location = self.position(inline.position);
                    let type_condition = inline.type_condition.as_ref().map(
                        |ast::query::TypeCondition::On(type_name)| type_name.to_string(),
                    );
                    let bound_type = type_condition.as_deref().unwrap_or(parent_type);
                    if !self.is_composite_type(bound_type) {
                        errors.push(DocumentBuildError::InvalidTypeCondition {
                            location: def_location,
                            type_name: bound_type.to_string(),
                        });
                        continue;
                    }

                    let selection_set = self.bind_selection_set(
                        bound_type,
                        &inline.selection_set,
                        errors,
                    );
                    selections.push(Selection::InlineFragment(InlineFragment {
                        def_location,
                        selection_set,
                        type_condition,
                    }));
                },
            }
        }

        SelectionSet { selections }
    }

    fn is_composite_type(&self, type_name: &str) -> bool {
        self.schema.lookup_type(type_name)
            .is_some_and(GraphQLType::is_composite)
    }

    fn position(&self, pos: graphql_parser::Pos) -> loc::FilePosition {
        loc::FilePosition::from_pos(self.file_path.as_ref(), pos)
    }
}

#[derive(Clone, Debug, Error)]
pub enum DocumentBuildError {
    #[error("Failure while trying to read an executable document file from disk: {0}")]
    DocumentFileReadError(Arc<file_reader::ReadContentError>),

    #[error("`{type_name}` at {location} is not an object, interface or union type")]
    InvalidTypeCondition {
        location: loc::FilePosition,
        type_name: String,
    },

    #[error("Error parsing executable document: {0}")]
    ParseError(Arc<ast::query::ParseError>),

    #[error(
        "Field `{field_name}` at {location} selects sub-fields on the leaf \
        type `{type_name}`"
    )]
    SelectionOnLeafType {
        field_name: String,
        location: loc::FilePosition,
        type_name: String,
    },

    #[error("Type `{parent_type}` has no field `{field_name}` (selected at {location})")]
    UndefinedField {
        field_name: String,
        location: loc::FilePosition,
        parent_type: String,
    },

    #[error(
        "The {kind} operation `{operation_name}` at {location} has no root \
        type in the schema"
    )]
    UndefinedOperationRoot {
        kind: OperationKind,
        location: loc::FilePosition,
        operation_name: String,
    },
}
