use crate::operation::ExecutableDocument;
use crate::operation::ExecutableDocumentBuilder;
use crate::resolver::FieldResolutionError;
use crate::resolver::FieldResolver;
use crate::resolver::ResponseFieldKind;
use crate::resolver::SchemaFieldResolver;
use crate::resolver::TypeRepr;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use indexmap::IndexMap;

fn setup_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(
            None,
            r#"
            scalar DateTime
            enum Role { ADMIN MEMBER }

            type Query {
                user(id: ID!): User
                users: [User!]!
                node: Node
            }

            type Mutation {
                setRole(id: ID!, role: Role!): User!
            }

            interface Node {
                id: ID!
            }

            type User implements Node {
                id: ID!
                name: String!
                age: Int
                score: Float!
                active: Boolean
                role: Role!
                createdAt: DateTime
                friends: [User]
            }
            "#,
        )
        .unwrap()
        .build()
        .unwrap()
}

fn bind(schema: &Schema, document: &str) -> ExecutableDocument {
    ExecutableDocumentBuilder::new(schema)
        .build_from_str(document)
        .unwrap()
}

fn named(name: &str) -> TypeRepr {
    TypeRepr::named(name)
}

// =============================================================================
// Selection resolution
// =============================================================================

#[test]
fn leaf_fields_map_to_rust_types() {
    let schema = setup_schema();
    let doc = bind(&schema, "fragment F on User { id name age score active role createdAt }");
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let fields = resolver.resolve(doc.fragments()[0].selection_set(), "");

    let types: Vec<_> =
        fields.fields().iter()
            .map(|field| (field.name(), field.type_repr().to_string()))
            .collect();
    assert_eq!(types, vec![
        ("Id", "String".to_string()),
        ("Name", "String".to_string()),
        ("Age", "Option<i64>".to_string()),
        ("Score", "f64".to_string()),
        ("Active", "Option<bool>".to_string()),
        ("Role", "Role".to_string()),
        ("CreatedAt", "Option<DateTime>".to_string()),
    ]);
    assert!(fields.is_struct_type());
    assert!(!fields.is_fragment());
}

#[test]
fn bindings_take_precedence() {
    let schema = setup_schema();
    let doc = bind(&schema, "fragment F on User { id createdAt }");
    let bindings = IndexMap::from([
        ("DateTime".to_string(), "chrono::DateTime<chrono::Utc>".to_string()),
        ("ID".to_string(), "uuid::Uuid".to_string()),
    ]);
    let resolver = SchemaFieldResolver::new(&schema, bindings);

    let fields = resolver.resolve(doc.fragments()[0].selection_set(), "");

    assert_eq!(fields.fields()[0].type_repr(), &named("uuid::Uuid"));
    assert_eq!(
        fields.fields()[1].type_repr(),
        &TypeRepr::optional(named("chrono::DateTime<chrono::Utc>")),
    );
}

#[test]
fn sub_selections_reference_prefixed_names() {
    let schema = setup_schema();
    let doc = bind(&schema, "query GetUser { me: user(id: 1) { friends { name } } }");
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let fields = resolver.resolve(doc.operations()[0].selection_set(), "GetUser");

    let me = &fields.fields()[0];
    assert_eq!(me.name(), "Me");
    assert_eq!(me.json_name(), "me");
    assert_eq!(me.kind(), ResponseFieldKind::Field);
    assert_eq!(me.type_repr(), &TypeRepr::optional(named("GetUserMe")));
}

#[test]
fn lists_wrap_element_nullability() {
    let schema = setup_schema();
    let doc = bind(&schema, "query Q { users { friends { id } } }");
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let root = resolver.resolve(doc.operations()[0].selection_set(), "Q");
    assert_eq!(root.fields()[0].type_repr().to_string(), "Vec<QUsers>");

    let crate::operation::Selection::Field(users) =
        &doc.operations()[0].selection_set().selections()[0]
    else {
        panic!("expected a field selection");
    };
    let nested = resolver.resolve(users.selection_set(), "QUsers");
    assert_eq!(
        nested.fields()[0].type_repr().to_string(),
        "Option<Vec<Option<QUsersFriends>>>",
    );
}

#[test]
fn lone_fragment_spread_references_the_fragment() {
    let schema = setup_schema();
    let doc = bind(&schema, concat!(
        "query Q { user(id: 1) { ...UserParts } }\n",
        "fragment UserParts on User { id }\n",
    ));
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let root = resolver.resolve(doc.operations()[0].selection_set(), "Q");
    assert_eq!(root.fields()[0].type_repr(), &TypeRepr::optional(named("UserParts")));

    let crate::operation::Selection::Field(user) =
        &doc.operations()[0].selection_set().selections()[0]
    else {
        panic!("expected a field selection");
    };
    let nested = resolver.resolve(user.selection_set(), "QUser");
    assert!(nested.is_fragment());
    assert!(!nested.is_struct_type());
}

#[test]
fn fragment_spreads_are_embedded() {
    let schema = setup_schema();
    let doc = bind(&schema, concat!(
        "fragment Full on User { id ...user_parts }\n",
        "fragment user_parts on User { name }\n",
    ));
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let fields = resolver.resolve(doc.fragments()[0].selection_set(), "");
    assert_eq!(fields.fields()[1].kind(), ResponseFieldKind::FragmentSpread);

    let struct_type = fields.struct_type();
    assert_eq!(struct_type.to_string(), "struct { Id: String, ..UserParts }");
    let embedded = struct_type.as_struct()
        .and_then(|s| s.field("UserParts"))
        .expect("spread is a struct field");
    assert!(embedded.embedded());
    assert_eq!(embedded.json_name(), "user_parts");
}

#[test]
fn inline_fragments_become_nested_structs() {
    let schema = setup_schema();
    let doc = bind(&schema, "query Q { node { id ... on User { name friends { id } } } }");
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let crate::operation::Selection::Field(node) =
        &doc.operations()[0].selection_set().selections()[0]
    else {
        panic!("expected a field selection");
    };
    let fields = resolver.resolve(node.selection_set(), "QNode");

    let on_user = &fields.fields()[1];
    assert_eq!(on_user.kind(), ResponseFieldKind::InlineFragment);
    assert_eq!(on_user.name(), "User");
    assert_eq!(on_user.json_name(), "... on User");
    assert_eq!(
        on_user.type_repr().to_string(),
        "struct { Name: String, Friends: Option<Vec<Option<QNodeUserFriends>>> }",
    );
}

#[test]
fn inline_fragments_without_condition_are_flattened() {
    let schema = setup_schema();
    let doc = bind(&schema, "fragment F on User { id ... { name } }");
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let fields = resolver.resolve(doc.fragments()[0].selection_set(), "");

    assert_eq!(
        fields.fields().iter().map(|f| f.name()).collect::<Vec<_>>(),
        vec!["Id", "Name"],
    );
}

#[test]
fn empty_selection_is_not_a_struct() {
    let schema = setup_schema();
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let fields = resolver.resolve(&Default::default(), "Anything");

    assert!(fields.fields().is_empty());
    assert!(!fields.is_struct_type());
}

// =============================================================================
// Definitions and arguments
// =============================================================================

#[test]
fn resolve_root_definition() -> Result<(), FieldResolutionError> {
    let schema = setup_schema();
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let fields = resolver.resolve_by_definition(schema.query_type())?;

    assert_eq!(
        fields.struct_type().to_string(),
        "struct { User: Option<User>, Users: Vec<User>, Node: Option<Node> }",
    );

    Ok(())
}

#[test]
fn resolve_definition_with_undefined_field_type() {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { thing: Missing }")
        .unwrap()
        .build()
        .unwrap();
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let result = resolver.resolve_by_definition(schema.query_type());

    assert_eq!(result, Err(FieldResolutionError::UndefinedType {
        field_name: "thing".to_string(),
        type_name: "Query".to_string(),
        undefined_type: "Missing".to_string(),
    }));
}

#[test]
fn operation_arguments_follow_variable_order() {
    let schema = setup_schema();
    let doc = bind(
        &schema,
        "mutation SetRole($id: ID!, $role: Role!, $tags: [String!]) { setRole(id: $id, role: $role) { id } }",
    );
    let resolver = SchemaFieldResolver::new(&schema, IndexMap::new());

    let args = resolver.operation_arguments(doc.operations()[0].variables());

    let rendered: Vec<_> =
        args.iter()
            .map(|arg| (arg.variable(), arg.type_repr().to_string()))
            .collect();
    assert_eq!(rendered, vec![
        ("id", "String".to_string()),
        ("role", "Role".to_string()),
        ("tags", "Option<Vec<String>>".to_string()),
    ]);
}
