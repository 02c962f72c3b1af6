use crate::ast;

/// Re-serializes a single-operation document into the query text a
/// generated client sends.
pub trait QueryFormatter {
    fn format(&self, document: &ast::query::Document) -> String;
}

/// Formats with `graphql_parser`'s printer. Output depends only on the AST,
/// so whitespace and comments from the source text do not survive.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalQueryFormatter;
impl QueryFormatter for CanonicalQueryFormatter {
    fn format(&self, document: &ast::query::Document) -> String {
        document.to_string()
    }
}
