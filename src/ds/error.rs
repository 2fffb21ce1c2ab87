use thiserror::Error;

/// Errors raised synchronously by the shim operations.
///
/// Declining to delete a non-configurable property is not an error; those
/// operations return `Ok(false)` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShimError {
    /// An object (ordinary, function or array) was required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A descriptor mixes accessor and data attributes.
    #[error("conflicting descriptor: {0}")]
    ConflictingDescriptor(String),

    /// The host has no hook to install getters or setters.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// A new property was added to a sealed or non-extensible object.
    #[error("cannot add property '{0}', object is not extensible")]
    NotExtensible(String),

    /// The attributes of an existing property forbid the requested change.
    #[error("cannot redefine property: {0}")]
    Redefinition(String),

    /// The per-thread default registry is already borrowed further up the
    /// stack.
    #[error("default registry is already in use")]
    RegistryInUse,
}

impl ShimError {
    pub(crate) fn not_an_object(op: &str) -> Self {
        ShimError::InvalidArgument(format!("{} called on non-object", op))
    }
}
