use thiserror::Error;

/// Represents errors that can occur when inserting a new route.
///
/// Insertion is not transactional: nodes created for the segments before
/// the failing one stay in the trie.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum InsertError {
    /// The same parameter name appears more than once in a single route.
    #[error("cannot use parameter `{name}` more than once in a route")]
    DuplicateParam {
        /// The repeated parameter name.
        name: String,
    },
    /// The route binds a parameter name at a position where a parameter
    /// with a different name is already registered.
    #[error("invalid route `{route}`: parameter `{name}` conflicts with existing parameter `{existing}`")]
    ConflictingParam {
        /// The route that failed to insert.
        route: String,
        /// The name already bound at the conflicting position.
        existing: String,
        /// The name the route attempted to bind.
        name: String,
    },
}

impl InsertError {
    pub(crate) fn duplicate(name: &str) -> Self {
        InsertError::DuplicateParam { name: name.into() }
    }

    pub(crate) fn conflict(route: &str, existing: &str, name: &str) -> Self {
        InsertError::ConflictingParam {
            route: route.into(),
            existing: existing.into(),
            name: name.into(),
        }
    }
}
