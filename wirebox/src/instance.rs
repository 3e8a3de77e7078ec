use std::{any::Any, fmt, rc::Rc};

/// Represents a produced service instance that erased its type.
///
/// Cloning an `Instance` clones the handle, not the value, so two handles
/// taken from the same singleton are [`ptr_eq`](Instance::ptr_eq).
#[derive(Clone)]
pub struct Instance {
    origin: Rc<dyn Any>,
    ty: &'static str,
}

impl Instance {
    /// Wraps a value.
    pub fn new<T: 'static>(value: T) -> Self {
        Self::from_rc(Rc::new(value))
    }

    /// Wraps an already shared value without another allocation.
    pub fn from_rc<T: 'static>(value: Rc<T>) -> Self {
        Self {
            origin: value,
            ty: std::any::type_name::<T>(),
        }
    }

    /// Returns the origin value if it is a `T`.
    pub fn downcast<T: 'static>(&self) -> Option<Rc<T>> {
        Rc::clone(&self.origin).downcast::<T>().ok()
    }

    /// Returns a reference to the origin value if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.origin.downcast_ref::<T>()
    }

    /// Returns `true` if the origin value is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.origin.is::<T>()
    }

    /// Returns `true` if both handles point to the same value.
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Rc::ptr_eq(&self.origin, &other.origin)
    }

    /// Returns the name of the origin type.
    pub fn type_name(&self) -> &'static str {
        self.ty
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance").field("ty", &self.ty).finish()
    }
}

impl<T: 'static> From<Rc<T>> for Instance {
    fn from(value: Rc<T>) -> Self {
        Self::from_rc(value)
    }
}
