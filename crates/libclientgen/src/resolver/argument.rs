use crate::resolver::TypeRepr;

/// An operation variable as the generated client method receives it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Argument {
    pub(crate) type_repr: TypeRepr,
    pub(crate) variable: String,
}
impl Argument {
    pub fn type_repr(&self) -> &TypeRepr {
        &self.type_repr
    }

    pub fn variable(&self) -> &str {
        self.variable.as_str()
    }
}
