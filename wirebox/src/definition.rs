use std::{any, borrow::Cow, fmt};

use crate::Scope;

/// Represents a unique identifier of a registered service.
///
/// Identifiers are opaque strings. The canonical identifier of a type is its
/// [`type_name`](std::any::type_name), see [`ServiceId::of`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceId(Cow<'static, str>);

impl ServiceId {
    /// Creates an identifier from any string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the canonical identifier of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Cow::Borrowed(any::type_name::<T>()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ServiceId {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for ServiceId {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for ServiceId {
    fn from(value: Cow<'static, str>) -> Self {
        Self(value)
    }
}

impl From<&ServiceId> for ServiceId {
    fn from(value: &ServiceId) -> Self {
        value.clone()
    }
}

/// Represents how the instance of a service is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProducerKind {
    /// the constructor parameters are resolved by the container, then the type is constructed.
    Class,
    /// a user supplied closure builds the value by itself.
    Factory,
}

/// Represents a definition of a registered service.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Definition {
    /// The unique identifier of the service.
    pub id: ServiceId,
    /// The scope of the service.
    pub scope: Scope,
    /// How the instance is produced.
    pub kind: ProducerKind,
    /// The name of the produced Rust type.
    pub ty: &'static str,
}

impl Definition {
    pub(crate) fn new<T: 'static>(id: ServiceId, scope: Scope, kind: ProducerKind) -> Self {
        Self {
            id,
            scope,
            kind,
            ty: any::type_name::<T>(),
        }
    }
}
