use crate::ast;
use std::collections::HashMap;
use std::collections::HashSet;

/// Split a document holding many operations into one document per
/// operation.
///
/// Each resulting document holds its operation followed by every fragment
/// that operation spreads (directly or through other fragments), in the
/// order those fragments appear in `document`. Spreads of fragments the
/// document does not define are ignored.
pub fn split_by_operation(document: &ast::query::Document) -> Vec<ast::query::Document> {
    let fragments: HashMap<&str, &ast::query::FragmentDefinition> =
        document.definitions.iter()
            .filter_map(|def| match def {
                ast::query::Definition::Fragment(frag) => Some((frag.name.as_str(), frag)),
                ast::query::Definition::Operation(_) => None,
            })
            .collect();

    document.definitions.iter()
        .filter_map(|def| match def {
            ast::query::Definition::Operation(op) => Some(op),
            ast::query::Definition::Fragment(_) => None,
        })
        .map(|op| {
            let mut used = HashSet::new();
            collect_fragment_spreads(
                operation_selection_set(op),
                &fragments,
                &mut used,
            );

            let mut definitions = vec![ast::query::Definition::Operation(op.clone())];
            definitions.extend(
                document.definitions.iter()
                    .filter(|def| matches!(
                        def,
                        ast::query::Definition::Fragment(frag)
                            if used.contains(frag.name.as_str()),
                    ))
                    .cloned(),
            );
            ast::query::Document { definitions }
        })
        .collect()
}

/// The name of a document's first operation, if it has a named one.
pub fn first_operation_name(document: &ast::query::Document) -> Option<&str> {
    use ast::query::OperationDefinition as OpDef;
    document.definitions.iter().find_map(|def| match def {
        ast::query::Definition::Operation(op) => Some(match op {
            OpDef::Mutation(op) => op.name.as_deref(),
            OpDef::Query(op) => op.name.as_deref(),
            OpDef::SelectionSet(_) => None,
            OpDef::Subscription(op) => op.name.as_deref(),
        }),
        ast::query::Definition::Fragment(_) => None,
    }).flatten()
}

fn collect_fragment_spreads<'doc>(
    selection_set: &'doc ast::query::SelectionSet,
    fragments: &HashMap<&'doc str, &'doc ast::query::FragmentDefinition>,
    used: &mut HashSet<&'doc str>,
) {
    for selection in &selection_set.items {
        match selection {
            ast::query::Selection::Field(field) =>
                collect_fragment_spreads(&field.selection_set, fragments, used),

            ast::query::Selection::FragmentSpread(spread) => {
                let name = spread.fragment_name.as_str();
                // Already-visited fragments terminate spread cycles.
                if let Some(&frag) = fragments.get(name)
                    && used.insert(frag.name.as_str()) {
                    collect_fragment_spreads(&frag.selection_set, fragments, used);
                }
            },

            ast::query::Selection::InlineFragment(inline) =>
                collect_fragment_spreads(&inline.selection_set, fragments, used),
        }
    }
}

fn operation_selection_set(
    op: &ast::query::OperationDefinition,
) -> &ast::query::SelectionSet {
    use ast::query::OperationDefinition as OpDef;
    match op {
        OpDef::Mutation(op) => &op.selection_set,
        OpDef::Query(op) => &op.selection_set,
        OpDef::SelectionSet(selection_set) => selection_set,
        OpDef::Subscription(op) => &op.selection_set,
    }
}
