use crate::ast;
use crate::schema::TypeAnnotation;

fn parse_var_type(type_str: &str) -> TypeAnnotation {
    let doc = ast::query::parse(format!("query Q($v: {type_str}) {{ a }}").as_str())
        .expect("valid query document");
    let ast::query::Definition::Operation(ast::query::OperationDefinition::Query(query)) =
        &doc.definitions[0]
    else {
        panic!("expected a query operation");
    };
    TypeAnnotation::from_ast_type(&query.variable_definitions[0].var_type)
}

#[test]
fn display_round_trips_annotation_syntax() {
    for type_str in ["Int", "Int!", "[Int]", "[Int!]", "[Int]!", "[[String!]!]"] {
        assert_eq!(parse_var_type(type_str).to_string(), type_str);
    }
}

#[test]
fn innermost_type_name_unwraps_lists() {
    assert_eq!(parse_var_type("[[User!]]!").innermost_type_name(), "User");
}

#[test]
fn nullability_of_outer_type() {
    assert!(parse_var_type("[Int!]").nullable());
    assert!(!parse_var_type("[Int]!").nullable());
    assert!(!parse_var_type("ID!").nullable());
}
