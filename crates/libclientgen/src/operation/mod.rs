mod executable_document;
mod executable_document_builder;
mod operation_kind;
mod query_documents;
mod selection;
mod variable;

pub use executable_document::ExecutableDocument;
pub use executable_document::FragmentDefinition;
pub use executable_document::OperationDefinition;
pub use executable_document_builder::DocumentBuildError;
pub use executable_document_builder::ExecutableDocumentBuilder;
pub use operation_kind::OperationKind;
pub use query_documents::first_operation_name;
pub use query_documents::split_by_operation;
pub use selection::FieldSelection;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use variable::Variable;

#[cfg(test)]
mod tests;
