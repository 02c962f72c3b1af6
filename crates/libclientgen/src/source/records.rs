use crate::operation::Variable;
use crate::resolver::Argument;
use crate::resolver::TypeRepr;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Fragment {
    pub(crate) name: String,
    pub(crate) type_repr: TypeRepr,
}
impl Fragment {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_repr(&self) -> &TypeRepr {
        &self.type_repr
    }
}

/// Everything a generated client needs to send one operation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Operation {
    pub(crate) args: Vec<Argument>,
    pub(crate) name: String,
    /// Canonical query text, empty if no single-operation document was
    /// supplied for this operation.
    pub(crate) operation: String,
    pub(crate) response_struct_name: String,
    pub(crate) variable_definitions: Vec<Variable>,
}
impl Operation {
    pub fn args(&self) -> &[Argument] {
        self.args.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn operation(&self) -> &str {
        self.operation.as_str()
    }

    pub fn response_struct_name(&self) -> &str {
        self.response_struct_name.as_str()
    }

    pub fn variable_definitions(&self) -> &[Variable] {
        self.variable_definitions.as_slice()
    }
}

/// A named struct describing (part of) an operation's response.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationResponse {
    pub(crate) name: String,
    pub(crate) type_repr: TypeRepr,
}
impl OperationResponse {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_repr(&self) -> &TypeRepr {
        &self.type_repr
    }
}

/// A schema root type resolved in full.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RootType {
    pub(crate) name: String,
    pub(crate) type_repr: TypeRepr,
}
impl RootType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_repr(&self) -> &TypeRepr {
        &self.type_repr
    }
}

pub type Mutation = RootType;
pub type Query = RootType;
