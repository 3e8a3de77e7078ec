use std::{any, rc::Rc, vec};

use crate::{Instance, Provider, ResolveError, ServiceId};

/// Represents one declared constructor parameter of a [`Component`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// A parameter that is resolved through the container.
    Service(ServiceId),
    /// A parameter whose type is not a registrable service,
    /// e.g. a primitive or an owned value.
    ///
    /// Resolving a component that declares such a parameter fails with
    /// [`ResolveError::UnresolvableDependency`].
    Unresolvable {
        /// The declared type of the parameter.
        ty: &'static str,
    },
}

impl Parameter {
    /// A parameter resolved by the canonical identifier of `T`.
    pub fn service<T: ?Sized + 'static>() -> Self {
        Parameter::Service(ServiceId::of::<T>())
    }

    /// A parameter resolved by an explicit identifier.
    pub fn named(id: impl Into<ServiceId>) -> Self {
        Parameter::Service(id.into())
    }

    /// A parameter of type `T` that the container cannot provide.
    pub fn unresolvable<T: ?Sized>() -> Self {
        Parameter::Unresolvable {
            ty: any::type_name::<T>(),
        }
    }
}

/// A type that can be constructed by the container.
///
/// A component declares its constructor parameters in order, and builds itself
/// from the instances the container resolved for them. Define this trait by hand,
/// or use the `#[Singleton]` or `#[Transient]` attribute macros to generate it.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
///
/// use wirebox::{Arguments, Component, Container, Parameter, ResolveError, Scope};
///
/// struct Logger;
///
/// impl Component for Logger {
///     fn parameters() -> Vec<Parameter> {
///         Vec::new()
///     }
///
///     fn construct(_: &mut Arguments) -> Result<Self, ResolveError> {
///         Ok(Logger)
///     }
/// }
///
/// struct Service {
///     logger: Rc<Logger>,
/// }
///
/// impl Component for Service {
///     fn parameters() -> Vec<Parameter> {
///         vec![Parameter::service::<Logger>()]
///     }
///
///     fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
///         Ok(Service {
///             logger: args.take()?,
///         })
///     }
/// }
///
/// # fn main() {
/// let mut cx = Container::new();
/// cx.register::<Logger>(Scope::Singleton)
///     .register::<Service>(Scope::Transient);
///
/// let service = cx.resolve::<Service>().unwrap();
/// assert!(Rc::ptr_eq(&service.logger, &cx.resolve::<Logger>().unwrap()));
/// # }
/// ```
pub trait Component: Sized + 'static {
    /// Returns the constructor parameters, in the order [`construct`](Component::construct) takes them.
    fn parameters() -> Vec<Parameter>;

    /// Builds the instance from the resolved parameters.
    fn construct(args: &mut Arguments) -> Result<Self, ResolveError>;
}

/// A trait for giving a type a default [`Provider`].
///
/// Define this trait so that the purpose is not to be implemented manually,
/// but to use the `#[Singleton]` or `#[Transient]` attribute macros to generate the implementation.
///
/// # Example
///
/// ```rust
/// use wirebox::{DefaultProvider, Provider, Scope, Transient};
///
/// #[Transient]
/// struct A;
///
/// fn main() {
///     let provider: Provider = <A as DefaultProvider>::provider();
///     assert_eq!(provider.definition().scope, Scope::Transient);
/// }
/// ```
pub trait DefaultProvider {
    /// Returns a default [`Provider`] for the implementation.
    fn provider() -> Provider;
}

/// The resolved constructor parameters of a [`Component`], in declaration order.
pub struct Arguments {
    service: ServiceId,
    index: usize,
    values: vec::IntoIter<(ServiceId, Instance)>,
}

impl Arguments {
    pub(crate) fn new(service: ServiceId, values: Vec<(ServiceId, Instance)>) -> Self {
        Self {
            service,
            index: 0,
            values: values.into_iter(),
        }
    }

    /// Takes the next parameter as a `T`.
    ///
    /// Fails with [`ResolveError::TypeMismatch`] if the resolved instance is not a `T`,
    /// and with [`ResolveError::UnresolvableDependency`] if all parameters are taken.
    pub fn take<T: 'static>(&mut self) -> Result<Rc<T>, ResolveError> {
        let index = self.index;
        self.index += 1;

        let Some((id, instance)) = self.values.next() else {
            return Err(ResolveError::UnresolvableDependency {
                service: self.service.clone(),
                index,
                ty: any::type_name::<T>(),
            });
        };

        instance
            .downcast::<T>()
            .ok_or_else(|| ResolveError::TypeMismatch {
                id,
                expected: any::type_name::<T>(),
                found: instance.type_name(),
            })
    }

    /// Takes the next parameter without checking its type.
    pub fn take_instance(&mut self) -> Option<Instance> {
        self.index += 1;
        self.values.next().map(|(_, instance)| instance)
    }

    /// Returns the service being constructed.
    pub fn service(&self) -> &ServiceId {
        &self.service
    }

    /// Returns the number of parameters not yet taken.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}
