use crate::ast;
use crate::config::GenerateConfig;
use crate::operation::ExecutableDocument;
use crate::registry::ModelRegistry;
use crate::resolver::SchemaFieldResolver;
use crate::schema::Schema;
use crate::source::Diagnostic;
use crate::source::Fragment;
use crate::source::GenerateError;
use crate::source::GenerationContext;
use crate::source::Mutation;
use crate::source::Operation;
use crate::source::OperationResponse;
use crate::source::Query;
use crate::source::Source;

/// Everything one generation run produces, ready for an emitter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Catalogue {
    pub diagnostics: Vec<Diagnostic>,
    pub fragments: Vec<Fragment>,
    pub models: ModelRegistry,
    pub mutation: Option<Mutation>,
    pub operation_responses: Vec<OperationResponse>,
    pub operations: Vec<Operation>,
    pub query: Query,
}

/// Run every phase over `document` in order, using a
/// [`SchemaFieldResolver`] configured with `config.bindings`.
///
/// `query_documents` are the single-operation documents that supply each
/// operation's query text.
pub fn generate(
    schema: &Schema,
    document: &ExecutableDocument,
    query_documents: &[ast::query::Document],
    config: &GenerateConfig,
) -> Result<Catalogue, GenerateError> {
    let resolver = SchemaFieldResolver::new(schema, config.bindings.to_owned());
    let source = Source::new(schema, document, &resolver, config);
    let mut ctx = GenerationContext::from_config(config);

    let fragments = source.fragments(&mut ctx)?;
    let operations = source.operations(query_documents, &mut ctx)?;
    let operation_responses = source.operation_responses(&mut ctx)?;
    let query = source.query(&mut ctx)?;
    let mutation = source.mutation(&mut ctx)?;

    let (models, diagnostics) = ctx.into_parts();
    log::info!(
        "Generated {} fragments, {} operations and {} response types ({} models).",
        fragments.len(),
        operations.len(),
        operation_responses.len(),
        models.len(),
    );

    Ok(Catalogue {
        diagnostics,
        fragments,
        models,
        mutation,
        operation_responses,
        operations,
        query,
    })
}
