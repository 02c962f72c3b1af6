mod graphql_type;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod type_annotation;

pub use graphql_type::FieldDef;
pub use graphql_type::GraphQLType;
pub use graphql_type::InputFieldDef;
pub use graphql_type::ObjectLikeType;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_annotation::TypeAnnotation;

#[cfg(test)]
mod tests;
