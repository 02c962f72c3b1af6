//! The generation phases: fragments, operations, operation responses and the
//! schema's root types, each run against one bound document and an explicit
//! [`GenerationContext`].

mod generate_error;
mod generation_context;
mod records;
#[allow(clippy::module_inception)]
mod source;

pub use generate_error::GenerateError;
pub use generation_context::Diagnostic;
pub use generation_context::DiagnosticKind;
pub use generation_context::GenerationContext;
pub use records::Fragment;
pub use records::Mutation;
pub use records::Operation;
pub use records::OperationResponse;
pub use records::Query;
pub use records::RootType;
pub use source::Source;

#[cfg(test)]
mod tests;
