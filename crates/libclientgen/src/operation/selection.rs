use crate::loc;
use crate::schema::TypeAnnotation;

/// An ordered set of [`Selection`]s bound against a schema type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub(crate) selections: Vec<Selection>,
}
impl SelectionSet {
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}

/// One member of a [`SelectionSet`].
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn def_location(&self) -> &loc::FilePosition {
        match self {
            Self::Field(field) => &field.def_location,
            Self::FragmentSpread(spread) => &spread.def_location,
            Self::InlineFragment(inline) => &inline.def_location,
        }
    }
}

/// A field selection whose schema definition has already been looked up.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    /// Empty for leaf fields.
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The type the schema declares for this field.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// `...FragmentName`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fragment_name: String,
}
impl FragmentSpread {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}

/// `... on TypeName { ... }` (or `... { ... }` without a type condition).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragment {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
