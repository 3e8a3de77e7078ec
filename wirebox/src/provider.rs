use std::rc::Rc;

use crate::{
    Arguments, Component, Definition, Instance, Parameter, ProducerKind, ResolveError, Scope,
    ServiceId,
};

type ConstructFn = Rc<dyn Fn(&mut Arguments) -> Result<Instance, ResolveError>>;
type FactoryFn = Rc<dyn Fn() -> Instance>;

pub(crate) enum Producer {
    Class {
        parameters: fn() -> Vec<Parameter>,
        construct: ConstructFn,
    },
    Factory(FactoryFn),
}

impl Clone for Producer {
    fn clone(&self) -> Self {
        match self {
            Self::Class {
                parameters,
                construct,
            } => Self::Class {
                parameters: *parameters,
                construct: Rc::clone(construct),
            },
            Self::Factory(f) => Self::Factory(Rc::clone(f)),
        }
    }
}

/// Represents how a service is registered: its [`Definition`] and its producer.
///
/// Use the following functions to create a `Provider`:
/// - [`singleton`], [`transient`] for [`Component`]s,
/// - [`singleton_factory`], [`transient_factory`] for closures,
/// - or [`Provider::class`] and [`Provider::factory`] with an explicit [`Scope`].
pub struct Provider {
    definition: Definition,
    producer: Producer,
}

impl Provider {
    /// Creates a provider that resolves the [`parameters`](Component::parameters) of `T`
    /// and then [`construct`](Component::construct)s it.
    ///
    /// The provider is registered under [`ServiceId::of::<T>()`](ServiceId::of),
    /// use [`Provider::name`] to change it.
    pub fn class<T: Component>(scope: Scope) -> Self {
        let construct = |args: &mut Arguments| T::construct(args).map(Instance::new);

        Provider {
            definition: Definition::new::<T>(ServiceId::of::<T>(), scope, ProducerKind::Class),
            producer: Producer::Class {
                parameters: T::parameters,
                construct: Rc::new(construct),
            },
        }
    }

    /// Creates a provider whose instances are built by `factory` alone.
    ///
    /// No dependency is resolved for a factory, it is responsible for building its own value.
    pub fn factory<T, F>(id: impl Into<ServiceId>, factory: F, scope: Scope) -> Self
    where
        T: 'static,
        F: Fn() -> T + 'static,
    {
        Provider {
            definition: Definition::new::<T>(id.into(), scope, ProducerKind::Factory),
            producer: Producer::Factory(Rc::new(move || Instance::new(factory()))),
        }
    }

    pub(crate) fn shared<T: 'static>(id: ServiceId, value: Rc<T>) -> Self {
        Provider {
            definition: Definition::new::<T>(id, Scope::Singleton, ProducerKind::Factory),
            producer: Producer::Factory(Rc::new(move || Instance::from_rc(Rc::clone(&value)))),
        }
    }

    /// Sets the identifier the provider is registered under.
    pub fn name(mut self, id: impl Into<ServiceId>) -> Self {
        self.definition.id = id.into();
        self
    }

    /// Returns the [`Definition`] of the provider.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Returns the identifier the provider is registered under.
    pub fn id(&self) -> &ServiceId {
        &self.definition.id
    }

    /// Returns the declared constructor parameters, `None` for a factory.
    pub fn parameters(&self) -> Option<Vec<Parameter>> {
        match &self.producer {
            Producer::Class { parameters, .. } => Some(parameters()),
            Producer::Factory(_) => None,
        }
    }

    pub(crate) fn producer(&self) -> Producer {
        self.producer.clone()
    }
}

/// Create a singleton [`Provider`] for a [`Component`].
///
/// # Example
///
/// ```rust
/// use wirebox::{singleton, Container, Singleton};
///
/// #[Singleton(auto_register = false)]
/// struct A;
///
/// # fn main() {
/// let mut cx = Container::new();
/// cx.register_provider(singleton::<A>());
/// assert!(cx.resolve::<A>().is_ok());
/// # }
/// ```
pub fn singleton<T: Component>() -> Provider {
    Provider::class::<T>(Scope::Singleton)
}

/// Create a transient [`Provider`] for a [`Component`].
pub fn transient<T: Component>() -> Provider {
    Provider::class::<T>(Scope::Transient)
}

/// Create a singleton [`Provider`] from a factory.
///
/// # Example
///
/// ```rust
/// use wirebox::{singleton_factory, Container};
///
/// # fn main() {
/// let mut cx = Container::new();
/// cx.register_provider(singleton_factory("answer", || 42));
/// assert_eq!(*cx.resolve_with_name::<i32>("answer").unwrap(), 42);
/// # }
/// ```
pub fn singleton_factory<T, F>(id: impl Into<ServiceId>, factory: F) -> Provider
where
    T: 'static,
    F: Fn() -> T + 'static,
{
    Provider::factory(id, factory, Scope::Singleton)
}

/// Create a transient [`Provider`] from a factory.
pub fn transient_factory<T, F>(id: impl Into<ServiceId>, factory: F) -> Provider
where
    T: 'static,
    F: Fn() -> T + 'static,
{
    Provider::factory(id, factory, Scope::Transient)
}
