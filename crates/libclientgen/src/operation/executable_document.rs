use crate::loc;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;

/// An operation (or fragment) document whose selections have all been bound
/// against a [`Schema`](crate::schema::Schema). Definitions keep their
/// document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutableDocument {
    pub(crate) fragments: Vec<FragmentDefinition>,
    pub(crate) operations: Vec<OperationDefinition>,
}
impl ExecutableDocument {
    /// Append the definitions of `other`, as when binding a set of files one
    /// at a time.
    pub fn extend(&mut self, other: ExecutableDocument) {
        self.fragments.extend(other.fragments);
        self.operations.extend(other.operations);
    }

    pub fn fragments(&self) -> &[FragmentDefinition] {
        self.fragments.as_slice()
    }

    pub fn operations(&self) -> &[OperationDefinition] {
        self.operations.as_slice()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variables: Vec<Variable>,
}
impl OperationDefinition {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The empty string for anonymous operations.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variables(&self) -> &[Variable] {
        self.variables.as_slice()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: String,
}
impl FragmentDefinition {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
