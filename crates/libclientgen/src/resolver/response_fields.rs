use crate::resolver::StructField;
use crate::resolver::StructType;
use crate::resolver::TypeRepr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseFieldKind {
    Field,
    FragmentSpread,
    InlineFragment,
}

/// One resolved member of a selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseField {
    pub(crate) json_name: String,
    pub(crate) kind: ResponseFieldKind,
    pub(crate) name: String,
    pub(crate) type_repr: TypeRepr,
}
impl ResponseField {
    pub fn json_name(&self) -> &str {
        self.json_name.as_str()
    }

    pub fn kind(&self) -> ResponseFieldKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_repr(&self) -> &TypeRepr {
        &self.type_repr
    }
}

/// The result of resolving a selection set (or a schema type's full field
/// list) into target-language fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseFields {
    pub(crate) fields: Vec<ResponseField>,
}
impl ResponseFields {
    pub fn fields(&self) -> &[ResponseField] {
        self.fields.as_slice()
    }

    /// A selection that is nothing but a single fragment spread.
    pub fn is_fragment(&self) -> bool {
        matches!(
            self.fields.as_slice(),
            [field] if field.kind == ResponseFieldKind::FragmentSpread,
        )
    }

    /// Whether these fields call for a named struct of their own. Leaf
    /// selections and lone fragment spreads do not.
    pub fn is_struct_type(&self) -> bool {
        !self.fields.is_empty() && !self.is_fragment()
    }

    pub fn struct_type(&self) -> TypeRepr {
        TypeRepr::Struct(StructType {
            fields: self.fields.iter()
                .map(|field| StructField {
                    embedded: field.kind == ResponseFieldKind::FragmentSpread,
                    json_name: field.json_name.to_string(),
                    name: field.name.to_string(),
                    type_repr: field.type_repr.clone(),
                })
                .collect(),
        })
    }
}
