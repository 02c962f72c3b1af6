/// The target-language shape a GraphQL type is emitted as.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRepr {
    List { of: Box<TypeRepr> },
    Named { name: String },
    Optional { of: Box<TypeRepr> },
    Struct(StructType),
}
impl TypeRepr {
    pub fn list(of: TypeRepr) -> Self {
        Self::List { of: Box::new(of) }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named { name: name.into() }
    }

    pub fn optional(of: TypeRepr) -> Self {
        Self::Optional { of: Box::new(of) }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        if let Self::Struct(struct_type) = self {
            Some(struct_type)
        } else {
            None
        }
    }
}
impl std::fmt::Display for TypeRepr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { of } => write!(f, "Vec<{of}>"),
            Self::Named { name } => f.write_str(name),
            Self::Optional { of } => write!(f, "Option<{of}>"),
            Self::Struct(struct_type) => write!(f, "{struct_type}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct StructType {
    pub(crate) fields: Vec<StructField>,
}
impl StructType {
    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields(&self) -> &[StructField] {
        self.fields.as_slice()
    }
}
impl std::fmt::Display for StructType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("struct {")?;
        for (idx, field) in self.fields.iter().enumerate() {
            let sep = if idx == 0 { " " } else { ", " };
            if field.embedded {
                write!(f, "{sep}..{}", field.type_repr)?;
            } else {
                write!(f, "{sep}{}: {}", field.name, field.type_repr)?;
            }
        }
        f.write_str(" }")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StructField {
    /// `true` for fragment spreads, whose fields are flattened into the
    /// containing struct.
    pub(crate) embedded: bool,
    /// The key the field is found under in a response payload.
    pub(crate) json_name: String,
    pub(crate) name: String,
    pub(crate) type_repr: TypeRepr,
}
impl StructField {
    pub fn embedded(&self) -> bool {
        self.embedded
    }

    pub fn json_name(&self) -> &str {
        self.json_name.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_repr(&self) -> &TypeRepr {
        &self.type_repr
    }
}
