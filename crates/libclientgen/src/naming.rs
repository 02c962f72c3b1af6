use crate::config::NamingConfig;
use crate::operation::OperationKind;
use convert_case::Case;
use convert_case::Casing;

/// Turns a raw GraphQL name into an identifier that is safe to use as a
/// type name in the generated client.
pub trait IdentifierTransform {
    fn to_identifier(&self, raw_name: &str) -> String;
}

/// `user_profile`, `userProfile` and `UserProfile` all become
/// `UserProfile`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PascalCaseIdentifiers;
impl IdentifierTransform for PascalCaseIdentifiers {
    fn to_identifier(&self, raw_name: &str) -> String {
        raw_name.to_case(Case::Pascal)
    }
}

/// Derive the name of an operation's root response type.
///
/// With no naming config the operation name is returned as-is. Otherwise the
/// configured prefix and suffix for the operation's own kind are applied;
/// affixes configured for the other kind are not.
pub fn response_struct_name(
    operation_name: &str,
    kind: OperationKind,
    naming: Option<&NamingConfig>,
) -> String {
    let mut name = operation_name.to_string();
    let Some(naming) = naming else {
        return name;
    };

    if let Some(prefix) = &naming.prefix {
        match kind {
            OperationKind::Mutation => name.insert_str(0, prefix.mutation.as_str()),
            OperationKind::Query => name.insert_str(0, prefix.query.as_str()),
            OperationKind::Subscription => (),
        }
    }

    if let Some(suffix) = &naming.suffix {
        match kind {
            OperationKind::Mutation => name.push_str(suffix.mutation.as_str()),
            OperationKind::Query => name.push_str(suffix.query.as_str()),
            OperationKind::Subscription => (),
        }
    }

    name
}
