use crate::loc;
use crate::operation::OperationKind;
use crate::schema::GraphQLType;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaBuildError>;

// =============================================================================
// Root operation types
// =============================================================================

#[test]
fn build_without_load() {
    let schema = SchemaBuilder::new().build();

    assert!(matches!(schema, Err(SchemaBuildError::NoQueryTypeDefined)));
}

#[test]
fn load_query_type_only() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { me: String }")?
        .build()?;

    assert_eq!(schema.query_type().name(), "Query");
    assert!(schema.mutation_type().is_none());
    assert!(schema.subscription_type().is_none());

    // 5 built-in scalars + Query
    assert_eq!(schema.defined_types().len(), 6);
    assert_eq!(
        schema.lookup_type("Int").map(GraphQLType::def_location),
        Some(loc::SchemaDefLocation::GraphQLBuiltIn),
    );

    Ok(())
}

#[test]
fn default_root_type_names() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Mutation { noop: Boolean }\n",
            "type Query { me: String }\n",
            "type Subscription { tick: Int }\n",
        ))?
        .build()?;

    assert_eq!(schema.query_type().name(), "Query");
    assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
    assert_eq!(schema.subscription_type().map(|t| t.name()), Some("Subscription"));
    assert_eq!(
        schema.root_type(&OperationKind::Mutation).map(|t| t.name()),
        Some("Mutation"),
    );

    Ok(())
}

#[test]
fn schema_block_renames_root_types() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "schema { query: RootQuery mutation: RootMutation }\n",
            "type RootQuery { me: String }\n",
            "type RootMutation { noop: Boolean }\n",
            "type Query { ignored: String }\n",
        ))?
        .build()?;

    assert_eq!(schema.query_type().name(), "RootQuery");
    assert_eq!(schema.mutation_type().map(|t| t.name()), Some("RootMutation"));

    Ok(())
}

#[test]
fn schema_block_referencing_undefined_type() -> Result<()> {
    let result = SchemaBuilder::new()
        .load_str(None, "schema { query: Missing }\ntype Query { me: String }")?
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::UndefinedRootType {
            operation: OperationKind::Query,
            type_name,
            ..
        }) if type_name == "Missing",
    ));

    Ok(())
}

#[test]
fn root_type_must_be_an_object() -> Result<()> {
    let result = SchemaBuilder::new()
        .load_str(None, "schema { query: Q }\nscalar Q")?
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::RootTypeNotAnObject { type_kind: "scalar", .. }),
    ));

    Ok(())
}

#[test]
fn duplicate_root_operation_definition() {
    let result = SchemaBuilder::new()
        .load_str(None, "schema { query: Query }\nschema { query: Query }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateOperationDefinition {
            operation: OperationKind::Query,
            ..
        }),
    ));
}

// =============================================================================
// Type definitions
// =============================================================================

#[test]
fn object_fields_keep_definition_order() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { user(id: ID!): User }\n",
            "type User { name: String! id: ID! friends: [User!] }\n",
        ))?
        .build()?;

    let user = schema.lookup_type("User")
        .and_then(GraphQLType::as_object_like)
        .expect("User is an object type");
    assert_eq!(
        user.fields().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["name", "id", "friends"],
    );

    let friends = user.field("friends").expect("friends is defined");
    assert_eq!(friends.type_annotation().to_string(), "[User!]");
    assert_eq!(friends.type_annotation().innermost_type_name(), "User");

    Ok(())
}

#[test]
fn every_type_kind_is_collected() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID! }\n",
            "type User implements Node { id: ID! }\n",
            "union SearchResult = User\n",
            "enum Role { ADMIN MEMBER }\n",
            "scalar DateTime\n",
            "input UserFilter { role: Role }\n",
        ))?
        .build()?;

    let kinds: Vec<_> =
        ["Node", "User", "SearchResult", "Role", "DateTime", "UserFilter"]
            .into_iter()
            .map(|name| schema.lookup_type(name).map(GraphQLType::kind_name))
            .collect();
    assert_eq!(kinds, vec![
        Some("interface"),
        Some("object"),
        Some("union"),
        Some("enum"),
        Some("scalar"),
        Some("input object"),
    ]);

    let user = schema.lookup_type("User").and_then(GraphQLType::as_object_like);
    assert_eq!(user.map(|u| u.interfaces()), Some(&["Node".to_string()][..]));

    Ok(())
}

#[test]
fn duplicate_type_definition() {
    let result = SchemaBuilder::new()
        .load_str(None, "type Query { a: String }\ntype Query { b: String }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
            if type_name == "Query",
    ));
}

#[test]
fn redefining_builtin_scalar_is_a_duplicate() {
    let result = SchemaBuilder::new().load_str(None, "scalar String");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateTypeDefinition {
            def1: loc::SchemaDefLocation::GraphQLBuiltIn,
            ..
        }),
    ));
}

#[test]
fn duplicate_field_definition() {
    let result = SchemaBuilder::new()
        .load_str(None, "type Query { a: String a: Int }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateFieldNameDefinition {
            type_name,
            field_name,
            ..
        }) if type_name == "Query" && field_name == "a",
    ));
}

#[test]
fn load_invalid_schema_syntax() {
    let result = SchemaBuilder::new().load_str(None, "this is not valid syntax");

    assert!(matches!(
        result,
        Err(SchemaBuildError::SchemaParseError { file: None, .. }),
    ));
}

#[test]
fn load_missing_file() {
    let result = SchemaBuilder::new().load_file("/this/path/does/not/exist.graphql");

    assert!(matches!(result, Err(SchemaBuildError::SchemaFileReadError(_))));
}

// =============================================================================
// Type extensions
// =============================================================================

#[test]
fn extension_before_definition_is_merged() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "extend type Query { extra: Int }")?
        .load_str(None, "type Query { me: String }")?
        .build()?;

    assert_eq!(
        schema.query_type().fields().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["me", "extra"],
    );

    Ok(())
}

#[test]
fn enum_and_union_extensions() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { me: String }\n",
            "type A { a: Int }\n",
            "type B { b: Int }\n",
            "union U = A\n",
            "extend union U = B\n",
            "enum E { ONE }\n",
            "extend enum E { TWO }\n",
        ))?
        .build()?;

    assert!(matches!(
        schema.lookup_type("U"),
        Some(GraphQLType::Union { members, .. }) if members == &["A", "B"],
    ));
    assert!(matches!(
        schema.lookup_type("E"),
        Some(GraphQLType::Enum { values, .. }) if values == &["ONE", "TWO"],
    ));

    Ok(())
}

#[test]
fn extension_of_undefined_type() -> Result<()> {
    let result = SchemaBuilder::new()
        .load_str(None, "type Query { me: String }\nextend type Missing { a: Int }")?
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
            if type_name == "Missing",
    ));

    Ok(())
}

#[test]
fn extension_of_wrong_kind() -> Result<()> {
    let result = SchemaBuilder::new()
        .load_str(None, "type Query { me: String }\nenum E { A }\nextend type E { a: Int }")?
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidExtensionType { schema_type_kind: "enum", .. }),
    ));

    Ok(())
}

#[test]
fn extension_redefining_field() -> Result<()> {
    let result = SchemaBuilder::new()
        .load_str(None, "type Query { me: String }\nextend type Query { me: Int }")?
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
            if field_name == "me",
    ));

    Ok(())
}

#[test]
fn field_annotations_are_nullable_unless_marked() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { a: String b: [Int!]! }")?
        .build()?;

    let query = schema.query_type();
    assert_eq!(
        query.field("a").map(|f| f.type_annotation()),
        Some(&TypeAnnotation::Named { name: "String".to_string(), nullable: true }),
    );
    assert_eq!(
        query.field("b").map(|f| f.type_annotation()),
        Some(&TypeAnnotation::List {
            inner: Box::new(TypeAnnotation::Named {
                name: "Int".to_string(),
                nullable: false,
            }),
            nullable: false,
        }),
    );

    Ok(())
}
