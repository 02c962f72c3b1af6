use indexmap::IndexMap;

/// Maps every model (type) name known to a generation run to the
/// fully-qualified target type it is emitted as.
///
/// The registry is append-only and does not itself reject duplicates:
/// callers check [`ModelRegistry::exists`] before they [`ModelRegistry::add`]
/// wherever a collision matters.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ModelRegistry {
    models: IndexMap<String, String>,
}
impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a registry from externally bound models.
    pub fn from_bindings<'a>(
        bindings: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Self {
        Self {
            models: bindings.into_iter()
                .map(|(name, reference)| (name.to_owned(), reference.to_owned()))
                .collect(),
        }
    }

    /// A later `add` for an existing name replaces its reference but keeps
    /// its original position.
    pub fn add(&mut self, name: impl Into<String>, reference: impl Into<String>) {
        let name = name.into();
        let reference = reference.into();
        log::trace!("Registering model `{name}` as `{reference}`.");
        self.models.insert(name, reference);
    }

    pub fn exists(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.models.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.models.iter().map(|(name, reference)| (name.as_str(), reference.as_str()))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }
}
