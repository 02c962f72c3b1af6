use crate::ast;
use crate::config::GenerateConfig;
use crate::naming;
use crate::naming::IdentifierTransform;
use crate::naming::PascalCaseIdentifiers;
use crate::operation;
use crate::operation::ExecutableDocument;
use crate::operation::OperationDefinition;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::query_formatter::CanonicalQueryFormatter;
use crate::query_formatter::QueryFormatter;
use crate::resolver::FieldResolutionError;
use crate::resolver::FieldResolver;
use crate::schema::ObjectLikeType;
use crate::schema::Schema;
use crate::source::Diagnostic;
use crate::source::DiagnosticKind;
use crate::source::Fragment;
use crate::source::GenerateError;
use crate::source::GenerationContext;
use crate::source::Mutation;
use crate::source::Operation;
use crate::source::OperationResponse;
use crate::source::Query;
use crate::source::RootType;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, GenerateError>;

/// One bound document plus the collaborators needed to turn it into
/// catalogue entries.
///
/// The phases read and write the [`GenerationContext`] they are given and
/// must run in order: [`fragments`](Source::fragments),
/// [`operations`](Source::operations),
/// [`operation_responses`](Source::operation_responses), then
/// [`query`](Source::query) and [`mutation`](Source::mutation). Later phases
/// see the models registered by earlier ones.
pub struct Source<'a> {
    config: &'a GenerateConfig,
    document: &'a ExecutableDocument,
    formatter: &'a dyn QueryFormatter,
    identifiers: &'a dyn IdentifierTransform,
    resolver: &'a dyn FieldResolver,
    schema: &'a Schema,
}

impl<'a> Source<'a> {
    pub fn new(
        schema: &'a Schema,
        document: &'a ExecutableDocument,
        resolver: &'a dyn FieldResolver,
        config: &'a GenerateConfig,
    ) -> Self {
        Self {
            config,
            document,
            formatter: &CanonicalQueryFormatter,
            identifiers: &PascalCaseIdentifiers,
            resolver,
            schema,
        }
    }

    pub fn with_identifier_transform(
        mut self,
        identifiers: &'a dyn IdentifierTransform,
    ) -> Self {
        self.identifiers = identifiers;
        self
    }

    pub fn with_query_formatter(mut self, formatter: &'a dyn QueryFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Resolve every fragment definition into a [`Fragment`], then register
    /// each fragment name.
    ///
    /// Only models registered before this call are checked for collisions.
    /// Two fragments of the same name in this document both pass unless
    /// [`Strictness::check_fragment_batch_duplicates`](crate::config::Strictness)
    /// is set.
    pub fn fragments(&self, ctx: &mut GenerationContext) -> Result<Vec<Fragment>> {
        let check_batch = self.config.strictness.check_fragment_batch_duplicates;
        let mut seen_in_batch = HashSet::new();
        let mut fragments = Vec::with_capacity(self.document.fragments().len());

        for frag_def in self.document.fragments() {
            let response_fields = self.resolver.resolve(frag_def.selection_set(), "");
            let name = frag_def.name();
            if ctx.registry().exists(name) {
                return Err(GenerateError::DuplicateDefinition {
                    name: name.to_string(),
                });
            }
            if check_batch && !seen_in_batch.insert(name) {
                return Err(GenerateError::DuplicateFragmentInBatch {
                    name: name.to_string(),
                });
            }

            fragments.push(Fragment {
                name: name.to_string(),
                type_repr: response_fields.struct_type(),
            });
        }

        for fragment in &fragments {
            let identifier = self.identifiers.to_identifier(&fragment.name);
            ctx.register(&fragment.name, &identifier);
        }

        log::debug!("Extracted {} fragments.", fragments.len());
        Ok(fragments)
    }

    /// Build an [`Operation`] record for every operation definition.
    ///
    /// `query_documents` holds one document per operation (see
    /// [`split_by_operation`](crate::operation::split_by_operation)); each
    /// is matched to an operation by the name of its first operation and
    /// supplies the canonical query text.
    pub fn operations(
        &self,
        query_documents: &[ast::query::Document],
        ctx: &mut GenerationContext,
    ) -> Result<Vec<Operation>> {
        let documents_by_name: HashMap<&str, &ast::query::Document> =
            query_documents.iter()
                .map(|doc| (operation::first_operation_name(doc).unwrap_or_default(), doc))
                .collect();

        let mut diagnostics = vec![];
        let mut seen_names = HashSet::new();
        let mut operations = Vec::with_capacity(self.document.operations().len());
        for op_def in self.document.operations() {
            let name = op_def.name();
            if !seen_names.insert(self.identifiers.to_identifier(name)) {
                return Err(GenerateError::DuplicateOperation {
                    name: name.to_string(),
                });
            }

            let query_text = match documents_by_name.get(name) {
                Some(query_document) => self.formatter.format(query_document),
                None if self.config.strictness.require_operation_documents =>
                    return Err(GenerateError::MissingOperationDocument {
                        operation_name: name.to_string(),
                    }),
                None => {
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::MissingOperationDocument,
                        location: Some(op_def.def_location().to_owned()),
                        message: format!(
                            "No single-operation query document was supplied for \
                            `{name}`; its query text is left empty.",
                        ),
                    });
                    String::new()
                },
            };

            operations.push(Operation {
                args: self.resolver.operation_arguments(op_def.variables()),
                name: name.to_string(),
                operation: query_text,
                response_struct_name: self.response_struct_name(op_def),
                variable_definitions: op_def.variables().to_vec(),
            });
        }

        for diagnostic in diagnostics {
            ctx.report(diagnostic);
        }

        log::debug!("Extracted {} operations.", operations.len());
        Ok(operations)
    }

    /// Build the response types of every operation: for each one, the nested
    /// struct types its selections call for (pre-order) followed by its root
    /// response type. All of them are registered once every operation has
    /// been processed.
    ///
    /// Root names are checked against the registry. Nested names are not,
    /// unless [`Strictness::check_nested_response_names`](crate::config::Strictness)
    /// is set, in which case every name collected in this phase must be
    /// unique and absent from the registry.
    pub fn operation_responses(
        &self,
        ctx: &mut GenerationContext,
    ) -> Result<Vec<OperationResponse>> {
        let check_nested = self.config.strictness.check_nested_response_names;
        let mut collected_names = HashSet::new();
        let mut diagnostics = vec![];
        let mut responses = vec![];
        for op_def in self.document.operations() {
            let root_name = self.response_struct_name(op_def);
            let root_fields = self.resolver.resolve(op_def.selection_set(), &root_name);

            let nested =
                self.nested_types(op_def.selection_set(), &root_name, &mut diagnostics)?;
            for nested_response in nested {
                let nested_name = nested_response.name.as_str();
                if check_nested
                    && (ctx.registry().exists(nested_name)
                        || collected_names.contains(nested_name)) {
                    return Err(GenerateError::DuplicateNestedResponse {
                        name: nested_name.to_string(),
                    });
                }
                collected_names.insert(nested_name.to_string());
                responses.push(nested_response);
            }

            if ctx.registry().exists(&root_name) {
                return Err(GenerateError::DuplicateDefinition { name: root_name });
            }
            if check_nested && collected_names.contains(&root_name) {
                return Err(GenerateError::DuplicateNestedResponse { name: root_name });
            }
            collected_names.insert(root_name.to_string());
            responses.push(OperationResponse {
                name: root_name,
                type_repr: root_fields.struct_type(),
            });
        }

        for response in &responses {
            let identifier = self.identifiers.to_identifier(&response.name);
            ctx.register(&response.name, &identifier);
        }

        for diagnostic in diagnostics {
            ctx.report(diagnostic);
        }

        log::debug!("Extracted {} operation response types.", responses.len());
        Ok(responses)
    }

    /// Resolve the schema's query root type and register it.
    pub fn query(&self, ctx: &mut GenerationContext) -> Result<Query> {
        self.root_type(self.schema.query_type(), ctx)
            .map_err(GenerateError::QueryTypeResolution)
    }

    /// Resolve the schema's mutation root type and register it. `None` if
    /// the schema defines no mutation root.
    pub fn mutation(&self, ctx: &mut GenerationContext) -> Result<Option<Mutation>> {
        let Some(mutation_type) = self.schema.mutation_type() else {
            return Ok(None);
        };
        self.root_type(mutation_type, ctx)
            .map(Some)
            .map_err(GenerateError::MutationTypeResolution)
    }

    /// Depth-first, pre-order walk of `selection_set` emitting one
    /// [`OperationResponse`] per field whose selection is a struct type.
    fn nested_types(
        &self,
        selection_set: &SelectionSet,
        parent_name: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<OperationResponse>> {
        let mut results = vec![];
        for selection in selection_set.selections() {
            let selection_kind = match selection {
                Selection::Field(field) => {
                    let child_name = format!(
                        "{parent_name}{}",
                        self.identifiers.to_identifier(field.selected_name()),
                    );
                    let response_fields =
                        self.resolver.resolve(field.selection_set(), &child_name);
                    if response_fields.is_struct_type() {
                        results.push(OperationResponse {
                            name: child_name.to_string(),
                            type_repr: response_fields.struct_type(),
                        });
                        results.extend(
                            self.nested_types(field.selection_set(), &child_name, diagnostics)?,
                        );
                    }
                    continue;
                },

                Selection::FragmentSpread(spread) =>
                    format!("Fragment spread `...{}`", spread.fragment_name()),

                Selection::InlineFragment(inline) => match inline.type_condition() {
                    Some(type_condition) =>
                        format!("Inline fragment `... on {type_condition}`"),
                    None => "Inline fragment".to_string(),
                },
            };

            if self.config.strictness.reject_unsupported_selections {
                return Err(GenerateError::UnsupportedSelection {
                    location: selection.def_location().to_owned(),
                    parent_name: parent_name.to_string(),
                    selection_kind,
                });
            }
            diagnostics.push(Diagnostic {
                kind: DiagnosticKind::UnsupportedSelection,
                location: Some(selection.def_location().to_owned()),
                message: format!(
                    "{selection_kind} under `{parent_name}` was skipped while \
                    collecting nested response types.",
                ),
            });
        }
        Ok(results)
    }

    fn response_struct_name(&self, op_def: &OperationDefinition) -> String {
        naming::response_struct_name(
            op_def.name(),
            op_def.kind(),
            self.config.naming.as_ref(),
        )
    }

    fn root_type(
        &self,
        definition: &ObjectLikeType,
        ctx: &mut GenerationContext,
    ) -> std::result::Result<RootType, FieldResolutionError> {
        let fields = self.resolver.resolve_by_definition(definition)?;
        let name = definition.name();
        ctx.register(name, &self.identifiers.to_identifier(name));
        Ok(RootType {
            name: name.to_string(),
            type_repr: fields.struct_type(),
        })
    }
}
