use crate::config::GenerateConfig;
use crate::loc;
use crate::registry::ModelRegistry;

/// The mutable state shared by the phases of one generation run.
///
/// Phases only write to the registry and report diagnostics once their own
/// validation pass has succeeded, so a phase that returns an error leaves the
/// context as it found it.
#[derive(Clone, Debug)]
pub struct GenerationContext {
    diagnostics: Vec<Diagnostic>,
    package: String,
    registry: ModelRegistry,
}
impl GenerationContext {
    pub fn new(package: impl Into<String>, registry: ModelRegistry) -> Self {
        Self {
            diagnostics: vec![],
            package: package.into(),
            registry,
        }
    }

    /// A context for `config.package` whose registry is seeded with
    /// `config.bindings`.
    pub fn from_config(config: &GenerateConfig) -> Self {
        Self::new(
            config.package.as_str(),
            ModelRegistry::from_bindings(&config.bindings),
        )
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    pub fn into_parts(self) -> (ModelRegistry, Vec<Diagnostic>) {
        (self.registry, self.diagnostics)
    }

    pub fn package(&self) -> &str {
        self.package.as_str()
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub(crate) fn register(&mut self, name: &str, identifier: &str) {
        let reference = format!("{}::{identifier}", self.package);
        self.registry.add(name, reference);
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic.message);
        self.diagnostics.push(diagnostic);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingOperationDocument,
    UnsupportedSelection,
}

/// A condition a run tolerates but reports.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: Option<loc::FilePosition>,
    pub message: String,
}
