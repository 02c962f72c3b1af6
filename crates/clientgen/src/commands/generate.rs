use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libclientgen::ast;
use libclientgen::config::GenerateConfig;
use libclientgen::config::NamingConfig;
use libclientgen::config::OperationAffixes;
use libclientgen::config::Strictness;
use libclientgen::operation::ExecutableDocument;
use libclientgen::operation::ExecutableDocumentBuilder;
use libclientgen::operation::split_by_operation;
use libclientgen::schema::Schema;
use libclientgen::schema::SchemaBuilder;
use libclientgen::Catalogue;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Bind a GraphQL type to a target type, e.g. \
             `--bind DateTime=chrono::DateTime<chrono::Utc>`. May be repeated.",
        long="bind",
        value_name="NAME=TYPE",
        value_parser=parse_binding,
    )]
    bindings: Vec<(String, String)>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(help="Prefix for mutation response type names.", long)]
    mutation_prefix: Option<String>,

    #[arg(help="Suffix for mutation response type names.", long)]
    mutation_suffix: Option<String>,

    #[arg(
        help="Write the catalogue to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        default_value="generated",
        help="Module path that qualifies every registered model.",
        long,
    )]
    package: String,

    #[arg(help="Prefix for query response type names.", long)]
    query_prefix: Option<String>,

    #[arg(help="Suffix for query response type names.", long)]
    query_suffix: Option<String>,

    #[arg(
        help="Paths to one or more GraphQL operation files or directories \
             containing them.",
        name="QUERY_PATHS",
        required=true,
    )]
    query_paths: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing them.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Turn every tolerated condition (unwalked fragments, unchecked \
             nested names, same-named fragments, missing query text) into an \
             error.",
        long,
    )]
    strict: bool,
}
impl GenerateCmd {
    fn generate_config(&self) -> GenerateConfig {
        let any_affix =
            self.mutation_prefix.is_some()
                || self.mutation_suffix.is_some()
                || self.query_prefix.is_some()
                || self.query_suffix.is_some();
        let naming = any_affix.then(|| NamingConfig {
            prefix: affixes(&self.query_prefix, &self.mutation_prefix),
            suffix: affixes(&self.query_suffix, &self.mutation_suffix),
        });

        GenerateConfig {
            bindings: self.bindings.iter().cloned().collect(),
            naming,
            package: self.package.to_string(),
            strictness: if self.strict {
                Strictness::all()
            } else {
                Strictness::default()
            },
        }
    }

    fn load_operations(
        &self,
        schema: &Schema,
        file_exts: &HashSet<String>,
    ) -> anyhow::Result<(ExecutableDocument, ast::query::Document)> {
        let file_paths = find_graphql_files(&self.query_paths, file_exts)?;
        log::debug!("Found {} operation files.", file_paths.len());

        let mut document = ExecutableDocument::default();
        let mut merged_ast = ast::query::Document { definitions: vec![] };
        for file_path in &file_paths {
            let content = libclientgen::read_content(file_path)?;
            let ast_doc = ast::query::parse(content.as_str())
                .with_context(|| format!("Failed to parse {file_path:?}"))?;

            let file_document = ExecutableDocumentBuilder::new(schema)
                .with_file_path(file_path)
                .build_from_ast(&ast_doc)
                .map_err(|errors| anyhow::anyhow!(
                    "{} errors binding {file_path:?} to the schema:\n{}",
                    errors.len(),
                    errors.iter()
                        .map(|err| format!("  * {err}"))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ))?;

            document.extend(file_document);
            merged_ast.definitions.extend(ast_doc.definitions);
        }

        Ok((document, merged_ast))
    }

    fn load_schema(&self, file_exts: &HashSet<String>) -> anyhow::Result<Schema> {
        let file_paths = find_graphql_files(&self.schema, file_exts)?;
        log::debug!("Found {} schema files.", file_paths.len());

        let schema = SchemaBuilder::new()
            .load_files(file_paths)?
            .build()?;
        Ok(schema)
    }

    fn run_generate(&self) -> anyhow::Result<Catalogue> {
        // Normalize the set of file extensions to filter with
        let file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        let schema = self.load_schema(&file_exts)?;
        let (document, merged_ast) = self.load_operations(&schema, &file_exts)?;
        let query_documents = split_by_operation(&merged_ast);

        let catalogue = libclientgen::generate(
            &schema,
            &document,
            &query_documents,
            &self.generate_config(),
        )?;
        Ok(catalogue)
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let catalogue = match self.run_generate() {
            Ok(catalogue) => catalogue,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Generation failed: {err:#}",
                output_utils::RED_X,
            )),
        };

        let json = match serde_json::to_string_pretty(&catalogue) {
            Ok(json) => json,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to serialize the catalogue: {err}",
                output_utils::RED_X,
            )),
        };

        let Some(output_path) = &self.output else {
            return CommandResult::stdout(format_args!("{json}"));
        };

        if let Err(err) = std::fs::write(output_path, json) {
            return CommandResult::stderr(format_args!(
                "{} Failed to write {output_path:?}: {err}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} Wrote {output_path:?}:\n",
                "  * {} fragments.\n",
                "  * {} operations.\n",
                "  * {} operation response types.\n",
                "  * {} diagnostics.",
            ),
            output_utils::GREEN_CHECK,
            catalogue.fragments.len(),
            catalogue.operations.len(),
            catalogue.operation_responses.len(),
            catalogue.diagnostics.len(),
            output_path = output_path,
        ))
    }
}

/// `Option<String>` affix flags for both kinds, or `None` if neither is set.
fn affixes(query: &Option<String>, mutation: &Option<String>) -> Option<OperationAffixes> {
    if query.is_none() && mutation.is_none() {
        return None;
    }
    Some(OperationAffixes {
        mutation: mutation.to_owned().unwrap_or_default(),
        query: query.to_owned().unwrap_or_default(),
    })
}

/// Find all files recursively located at or under each of `paths` whose
/// extension is in `file_exts`. A path that names a file directly is always
/// included.
fn find_graphql_files(
    paths: &[PathBuf],
    file_exts: &HashSet<String>,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut file_paths = vec![];
    for path in paths {
        if path.is_file() {
            file_paths.push(path.to_path_buf());
            continue;
        }

        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!(
                "Failed to scan files at/under {path:?}",
            ))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if has_graphql_ext(entry_path, file_exts) {
                log::trace!("Found file at {entry_path:#?}.");
                file_paths.push(entry_path.to_path_buf());
            }
        }
    }

    if file_paths.is_empty() {
        anyhow::bail!("No GraphQL files found under {paths:?}");
    }
    Ok(file_paths)
}

fn has_graphql_ext(path: &Path, file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| file_exts.contains(ext.as_ref()))
}

fn parse_binding(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, target)) if !name.trim().is_empty() && !target.trim().is_empty() =>
            Ok((name.trim().to_string(), target.trim().to_string())),
        _ => Err(format!("expected NAME=TYPE, got `{arg}`")),
    }
}
