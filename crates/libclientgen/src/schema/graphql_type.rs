use crate::loc;
use crate::schema::TypeAnnotation;
use indexmap::IndexMap;

/// A field defined on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldDef {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// The shared shape of object and interface types: a name plus an ordered
/// set of fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLikeType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fields: IndexMap<String, FieldDef>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectLikeType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDef> {
        &self.fields
    }

    pub fn interfaces(&self) -> &[String] {
        self.interfaces.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldDef {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputFieldDef {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum {
        def_location: loc::FilePosition,
        name: String,
        values: Vec<String>,
    },
    InputObject {
        def_location: loc::FilePosition,
        fields: IndexMap<String, InputFieldDef>,
        name: String,
    },
    Interface(ObjectLikeType),
    Object(ObjectLikeType),
    Scalar {
        def_location: loc::SchemaDefLocation,
        name: String,
    },
    Union {
        def_location: loc::FilePosition,
        members: Vec<String>,
        name: String,
    },
}
impl GraphQLType {
    /// Object and interface types expose fields; every other kind does not.
    pub fn as_object_like(&self) -> Option<&ObjectLikeType> {
        match self {
            Self::Interface(obj) | Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            Self::Scalar { def_location, .. } => def_location.clone(),
            Self::Enum { def_location, .. }
                | Self::InputObject { def_location, .. }
                | Self::Union { def_location, .. } =>
                loc::SchemaDefLocation::Schema(def_location.clone()),
            Self::Interface(obj) | Self::Object(obj) =>
                loc::SchemaDefLocation::Schema(obj.def_location.clone()),
        }
    }

    /// Composite types are the ones a selection set may be applied to.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union { .. })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Enum { .. } => "enum",
            Self::InputObject { .. } => "input object",
            Self::Interface(_) => "interface",
            Self::Object(_) => "object",
            Self::Scalar { .. } => "scalar",
            Self::Union { .. } => "union",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum { name, .. }
                | Self::InputObject { name, .. }
                | Self::Scalar { name, .. }
                | Self::Union { name, .. } => name.as_str(),
            Self::Interface(obj) | Self::Object(obj) => obj.name(),
        }
    }
}
