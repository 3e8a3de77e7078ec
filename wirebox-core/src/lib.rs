//! Types shared by `wirebox` and `wirebox-macro`.

/// Represents the lifetime of a registered service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// singleton scope.
    ///
    /// 1. the producer runs only once per container.
    /// 2. every resolution returns the same instance.
    #[default]
    Singleton,
    /// transient scope.
    ///
    /// 1. the producer runs every time.
    /// 2. every resolution returns a new instance.
    Transient,
}

impl Scope {
    /// Returns `true` for [`Scope::Transient`].
    pub fn is_transient(self) -> bool {
        matches!(self, Scope::Transient)
    }
}
