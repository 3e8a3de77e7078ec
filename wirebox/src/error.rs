use thiserror::Error;

use crate::ServiceId;

/// Error returned when a service cannot be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The service, or one of its transitive dependencies, is not registered.
    #[error("service `{0}` is not registered")]
    ServiceNotRegistered(ServiceId),

    /// Resolving the service requires resolving itself first.
    #[error("circular dependency detected for service `{id}`: {}", render_chain(.chain))]
    CircularDependency {
        /// The service that was re-entered.
        id: ServiceId,
        /// The in-progress services, outermost first, ending with `id`.
        chain: Vec<ServiceId>,
    },

    /// A constructor parameter of the service is not a registrable service.
    #[error("unable to resolve parameter #{index} of type `{ty}` for service `{service}`")]
    UnresolvableDependency {
        /// The service whose constructor declares the parameter.
        service: ServiceId,
        /// The zero-based position of the parameter.
        index: usize,
        /// The declared type of the parameter.
        ty: &'static str,
    },

    /// A resolved instance is not of the requested type.
    #[error("service `{id}` produced a `{found}`, expected a `{expected}`")]
    TypeMismatch {
        /// The service that was resolved.
        id: ServiceId,
        /// The requested type.
        expected: &'static str,
        /// The type that was actually produced.
        found: &'static str,
    },
}

impl ResolveError {
    /// Returns the service identifier the error is about.
    pub fn id(&self) -> &ServiceId {
        match self {
            ResolveError::ServiceNotRegistered(id) => id,
            ResolveError::CircularDependency { id, .. } => id,
            ResolveError::UnresolvableDependency { service, .. } => service,
            ResolveError::TypeMismatch { id, .. } => id,
        }
    }
}

fn render_chain(chain: &[ServiceId]) -> String {
    chain
        .iter()
        .map(ServiceId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
