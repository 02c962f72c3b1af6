use crate::operation::OperationKind;
use crate::schema::GraphQLType;
use crate::schema::ObjectLikeType;
use crate::schema::SchemaBuilder;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema.
///
/// A [`Schema`] always has a query root. Mutation and subscription roots are
/// optional.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn defined_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn mutation_type(&self) -> Option<&ObjectLikeType> {
        self.mutation_type.as_deref().map(|name| self.root_object(name))
    }

    pub fn query_type(&self) -> &ObjectLikeType {
        self.root_object(self.query_type.as_str())
    }

    /// The root object type an operation of the given kind selects against.
    pub fn root_type(&self, kind: &OperationKind) -> Option<&ObjectLikeType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    pub fn subscription_type(&self) -> Option<&ObjectLikeType> {
        self.subscription_type.as_deref().map(|name| self.root_object(name))
    }

    fn root_object(&self, name: &str) -> &ObjectLikeType {
        match self.types.get(name) {
            Some(GraphQLType::Object(obj)) => obj,
            _ => unreachable!(
                "SchemaBuilder only records root operation types that are \
                defined object types (`{name}`)",
            ),
        }
    }
}
