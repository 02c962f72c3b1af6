use crate::ast;
use crate::operation::first_operation_name;
use crate::operation::split_by_operation;

fn definition_names(document: &ast::query::Document) -> Vec<String> {
    document.definitions.iter()
        .map(|def| match def {
            ast::query::Definition::Fragment(frag) => format!("fragment {}", frag.name),
            ast::query::Definition::Operation(ast::query::OperationDefinition::Query(query)) =>
                format!("operation {}", query.name.as_deref().unwrap_or("<anonymous>")),
            ast::query::Definition::Operation(_) => "operation".to_string(),
        })
        .collect()
}

#[test]
fn one_document_per_operation() {
    let doc = ast::query::parse(concat!(
        "query A { a }\n",
        "mutation B { b }\n",
        "subscription C { c }\n",
    )).unwrap();

    let split = split_by_operation(&doc);

    assert_eq!(
        split.iter().map(first_operation_name).collect::<Vec<_>>(),
        vec![Some("A"), Some("B"), Some("C")],
    );
    assert!(split.iter().all(|doc| doc.definitions.len() == 1));
}

#[test]
fn fragments_follow_their_operation_transitively() {
    let doc = ast::query::parse(concat!(
        "fragment Unused on User { id }\n",
        "query A { user { ...Outer } }\n",
        "fragment Inner on User { name }\n",
        "query B { user { id } }\n",
        "fragment Outer on User { ... on User { ...Inner } }\n",
    )).unwrap();

    let split = split_by_operation(&doc);

    assert_eq!(split.len(), 2);
    assert_eq!(definition_names(&split[0]), vec![
        "operation A",
        "fragment Inner",
        "fragment Outer",
    ]);
    assert_eq!(definition_names(&split[1]), vec!["operation B"]);
}

#[test]
fn fragment_cycles_terminate() {
    let doc = ast::query::parse(concat!(
        "query A { user { ...F1 } }\n",
        "fragment F1 on User { ...F2 }\n",
        "fragment F2 on User { ...F1 }\n",
    )).unwrap();

    let split = split_by_operation(&doc);

    assert_eq!(definition_names(&split[0]), vec![
        "operation A",
        "fragment F1",
        "fragment F2",
    ]);
}

#[test]
fn anonymous_operations_have_no_name() {
    let doc = ast::query::parse("{ a }").unwrap();

    assert_eq!(first_operation_name(&doc), None);
    assert_eq!(split_by_operation(&doc).len(), 1);
}
