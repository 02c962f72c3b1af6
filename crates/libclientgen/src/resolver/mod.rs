//! Field resolution: turning bound selection sets and schema types into the
//! target-language type shapes the catalogue is made of.

mod argument;
mod response_fields;
mod schema_field_resolver;
mod type_repr;

pub use argument::Argument;
pub use response_fields::ResponseField;
pub use response_fields::ResponseFieldKind;
pub use response_fields::ResponseFields;
pub use schema_field_resolver::SchemaFieldResolver;
pub use type_repr::StructField;
pub use type_repr::StructType;
pub use type_repr::TypeRepr;

use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::schema::ObjectLikeType;
use thiserror::Error;

/// Maps GraphQL selections and definitions onto target-language types.
pub trait FieldResolver {
    /// Resolve one level of a selection set. `name_prefix` is the name the
    /// struct for this level is registered under; nested structs are named
    /// by appending to it.
    fn resolve(&self, selection_set: &SelectionSet, name_prefix: &str) -> ResponseFields;

    /// Resolve every field a schema type defines, as used for the root
    /// query and mutation types.
    fn resolve_by_definition(
        &self,
        definition: &ObjectLikeType,
    ) -> Result<ResponseFields, FieldResolutionError>;

    fn operation_arguments(&self, variables: &[Variable]) -> Vec<Argument>;
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldResolutionError {
    #[error("Field `{type_name}.{field_name}` refers to the undefined type `{undefined_type}`")]
    UndefinedType {
        field_name: String,
        type_name: String,
        undefined_type: String,
    },
}

#[cfg(test)]
mod tests;
