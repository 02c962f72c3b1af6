use crate::ast;

/// Represents the annotated type of a schema field, an input field or an
/// operation variable.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(ast_type: &ast::query::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::query::Type, nullable: bool) -> Self {
        match ast_type {
            ast::query::Type::ListType(inner) => Self::List {
                inner: Box::new(Self::from_ast_type_impl(inner, true)),
                nullable,
            },

            ast::query::Type::NamedType(name) => Self::Named {
                name: name.to_string(),
                nullable,
            },

            ast::query::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap list wrappers and return the name of the innermost
    /// named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_type_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { name, nullable } => write!(
                f,
                "{name}{}",
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
