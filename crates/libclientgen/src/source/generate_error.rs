use crate::loc;
use crate::resolver::FieldResolutionError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("{name} is duplicated")]
    DuplicateDefinition {
        name: String,
    },

    #[error("Fragment `{name}` is defined more than once in the same document")]
    DuplicateFragmentInBatch {
        name: String,
    },

    #[error("Nested response type `{name}` collides with an existing model")]
    DuplicateNestedResponse {
        name: String,
    },

    #[error("duplicate operation: {name}")]
    DuplicateOperation {
        name: String,
    },

    #[error("No single-operation query document was supplied for `{operation_name}`")]
    MissingOperationDocument {
        operation_name: String,
    },

    #[error("generate failed for mutation struct type: {0}")]
    MutationTypeResolution(#[source] FieldResolutionError),

    #[error("generate failed for query struct type: {0}")]
    QueryTypeResolution(#[source] FieldResolutionError),

    #[error(
        "{selection_kind} at {location} (under `{parent_name}`) is not walked \
        for nested response types"
    )]
    UnsupportedSelection {
        location: loc::FilePosition,
        parent_name: String,
        selection_kind: String,
    },
}
