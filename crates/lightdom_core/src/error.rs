use thiserror::Error;

/// Errors which can happen while constructing a node tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Element was given an empty tag name
    #[error("element tag name must not be empty")]
    EmptyTagName,
}
