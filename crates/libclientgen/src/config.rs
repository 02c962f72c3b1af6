use indexmap::IndexMap;

const DEFAULT_PACKAGE: &str = "generated";

/// Everything a generation run is configured with.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// GraphQL type name -> fully-qualified target type. Seeds the model
    /// registry and tells the field resolver how to spell custom scalars and
    /// enums.
    pub bindings: IndexMap<String, String>,

    pub naming: Option<NamingConfig>,

    /// Module path that qualifies every registered model name.
    pub package: String,

    pub strictness: Strictness,
}
impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            bindings: IndexMap::new(),
            naming: None,
            package: DEFAULT_PACKAGE.to_string(),
            strictness: Strictness::default(),
        }
    }
}

/// Prefixes and suffixes applied to operation response type names.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct NamingConfig {
    pub prefix: Option<OperationAffixes>,
    pub suffix: Option<OperationAffixes>,
}

/// One affix per operation kind. Subscriptions never receive one.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct OperationAffixes {
    pub mutation: String,
    pub query: String,
}

/// Opt-in checks layered over the permissive default behavior.
///
/// With every flag off, a run reports unsupported selections as
/// diagnostics, registers nested response names unchecked, only checks
/// fragment names against models registered before the run, and tolerates
/// operations with no matching single-operation document.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Strictness {
    pub check_fragment_batch_duplicates: bool,
    pub check_nested_response_names: bool,
    pub reject_unsupported_selections: bool,
    pub require_operation_documents: bool,
}
impl Strictness {
    pub fn all() -> Self {
        Self {
            check_fragment_batch_duplicates: true,
            check_nested_response_names: true,
            reject_unsupported_selections: true,
            require_operation_documents: true,
        }
    }
}
