use crate::ast;
use crate::loc;
use crate::schema::TypeAnnotation;

/// A variable declared by an operation, e.g. `$id: ID!` in
/// `query User($id: ID!) { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) default_value: Option<ast::query::Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::query::Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
impl serde::Serialize for Variable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Variable", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", &self.type_annotation.to_string())?;
        state.serialize_field(
            "default_value",
            &self.default_value.as_ref().map(|value| value.to_string()),
        )?;
        state.end()
    }
}
