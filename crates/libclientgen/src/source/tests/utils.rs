use crate::ast;
use crate::config::GenerateConfig;
use crate::operation::ExecutableDocument;
use crate::operation::ExecutableDocumentBuilder;
use crate::operation::split_by_operation;
use crate::resolver::SchemaFieldResolver;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::source::Source;

pub const SCHEMA_SRC: &str = r#"
    type Query {
        user(id: ID!): User
        users: [User!]!
    }

    type Mutation {
        renameUser(id: ID!, name: String!): User
    }

    type User {
        id: ID!
        name: String!
        profile: Profile
        friends: [User!]!
    }

    type Profile {
        bio: String
        avatar: Image
    }

    type Image {
        url: String!
    }
"#;

/// A schema, a bound executable document and the single-operation documents
/// split from it.
pub struct Fixture {
    pub document: ExecutableDocument,
    pub query_documents: Vec<ast::query::Document>,
    pub schema: Schema,
}
impl Fixture {
    pub fn new(query_src: &str) -> Self {
        Self::with_schema(SCHEMA_SRC, query_src)
    }

    pub fn with_schema(schema_src: &str, query_src: &str) -> Self {
        let schema = SchemaBuilder::new()
            .load_str(None, schema_src)
            .unwrap()
            .build()
            .unwrap();
        let ast_doc = ast::query::parse(query_src).unwrap();
        let document = ExecutableDocumentBuilder::new(&schema)
            .build_from_ast(&ast_doc)
            .unwrap();

        Self {
            document,
            query_documents: split_by_operation(&ast_doc),
            schema,
        }
    }

    /// Run `phase` against a [`Source`] over this fixture.
    pub fn run<T>(
        &self,
        config: &GenerateConfig,
        phase: impl FnOnce(Source<'_>) -> T,
    ) -> T {
        let resolver = SchemaFieldResolver::new(&self.schema, config.bindings.to_owned());
        let source = Source::new(&self.schema, &self.document, &resolver, config);
        phase(source)
    }
}
