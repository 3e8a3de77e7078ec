use std::{any, collections::HashSet, rc::Rc};

use crate::{
    dependency_chain::DependencyChain, Arguments, Component, Definition, Instance, Parameter,
    Producer, Provider, ProviderRegistry, ResolveError, ResolveModule, Scope, ServiceId,
    SingletonRegistry,
};

/// A container is a registry for all the providers and singletons.
///
/// It is the main entry point for the dependency injection: services are
/// registered with [`register`](Container::register) or
/// [`register_factory`](Container::register_factory), optionally checked with
/// [`compile`](Container::compile), and taken out with [`get`](Container::get)
/// or [`resolve`](Container::resolve).
///
/// When creating a `Container` from modules, you can use options to change the
/// default creation behavior, see [`ContainerOptions`] for details.
///
/// A container is single-threaded: producers and instances are reference
/// counted with [`Rc`], so it is neither `Send` nor `Sync`.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
///
/// use wirebox::{Container, Scope, Singleton, Transient};
///
/// #[Singleton(auto_register = false)]
/// struct Logger;
///
/// #[Transient(auto_register = false)]
/// struct Service {
///     logger: Rc<Logger>,
/// }
///
/// # fn main() {
/// let mut cx = Container::new();
/// cx.register::<Logger>(Scope::Singleton)
///     .register::<Service>(Scope::Transient);
///
/// cx.compile().unwrap();
///
/// let a = cx.resolve::<Service>().unwrap();
/// let b = cx.resolve::<Service>().unwrap();
///
/// assert!(!Rc::ptr_eq(&a, &b));
/// assert!(Rc::ptr_eq(&a.logger, &b.logger));
/// # }
/// ```
///
/// With the `auto-register` feature enabled (which is enabled by default),
/// it is also possible to create containers in a simpler way:
///
/// ```rust
/// use wirebox::{Container, Singleton};
///
/// #[Singleton]
/// struct A;
///
/// # fn main() {
/// let mut cx = Container::auto_register().unwrap();
/// // This is a simplified version of the following
/// // let mut cx = Container::create(modules![AutoRegisterModule]).unwrap();
///
/// assert!(cx.resolve::<A>().is_ok());
/// # }
/// ```
pub struct Container {
    allow_override: bool,

    singleton_registry: SingletonRegistry,
    provider_registry: ProviderRegistry,
    transients: HashSet<ServiceId>,

    loaded_modules: Vec<&'static str>,

    dependency_chain: DependencyChain,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            allow_override: true,
            singleton_registry: Default::default(),
            provider_registry: Default::default(),
            transients: Default::default(),
            loaded_modules: Default::default(),
            dependency_chain: Default::default(),
        }
    }
}

impl Container {
    /// Creates an empty container with the default options.
    pub fn new() -> Container {
        Container::default()
    }

    /// Creates a new container with the given modules.
    ///
    /// The container is compiled if one of the modules asks for it,
    /// see [`Module::compile`](crate::Module::compile).
    ///
    /// # Panics
    ///
    /// - Panics if there are multiple providers with the same id and the container's [`allow_override`](Container::allow_override) is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wirebox::{components, modules, Container, Module, Transient};
    ///
    /// #[Transient]
    /// struct A;
    ///
    /// struct MyModule;
    ///
    /// impl Module for MyModule {
    ///     fn providers() -> Vec<wirebox::Provider> {
    ///         components![A]
    ///     }
    /// }
    ///
    /// # fn main() {
    /// let mut cx = Container::create(modules![MyModule]).unwrap();
    /// assert!(cx.resolve::<A>().is_ok());
    /// # }
    /// ```
    #[track_caller]
    pub fn create(modules: Vec<ResolveModule>) -> Result<Container, ResolveError> {
        ContainerOptions::default().create(modules)
    }

    /// Creates a new container with the [`AutoRegisterModule`].
    ///
    /// Same as `Container::create(modules![AutoRegisterModule])`.
    ///
    /// See [`Container::create`] for more details.
    ///
    /// [`AutoRegisterModule`]: crate::AutoRegisterModule
    #[cfg_attr(docsrs, doc(cfg(feature = "auto-register")))]
    #[cfg(feature = "auto-register")]
    #[track_caller]
    pub fn auto_register() -> Result<Container, ResolveError> {
        ContainerOptions::default().auto_register()
    }

    /// Returns a new ContainerOptions object.
    ///
    /// It is equivalent to `ContainerOptions::default()`, but allows you to write more readable code.
    /// Instead of `ContainerOptions::default().compile(true).auto_register()`,
    /// you can write `Container::options().compile(true).auto_register()`.
    /// This also avoids the need to import `ContainerOptions`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wirebox::{Container, Singleton};
    ///
    /// #[Singleton]
    /// struct A;
    ///
    /// # fn main() {
    /// let cx = Container::options().compile(true).auto_register().unwrap();
    ///
    /// assert!(cx.contains_singleton(wirebox::ServiceId::of::<A>()));
    /// # }
    /// ```
    pub fn options() -> ContainerOptions {
        ContainerOptions::default()
    }

    /// Returns whether the container should allow overriding existing providers.
    pub fn allow_override(&self) -> bool {
        self.allow_override
    }

    /// Returns the names of the loaded modules, in load order.
    pub fn loaded_modules(&self) -> &[&'static str] {
        &self.loaded_modules
    }

    /// Returns the services currently being resolved, outermost first.
    ///
    /// Outside of a producer this is always empty, also after a failed resolution.
    pub fn dependency_chain(&self) -> Vec<ServiceId> {
        self.dependency_chain.snapshot()
    }

    /// Registers `T` under [`ServiceId::of::<T>()`](ServiceId::of).
    ///
    /// When resolved, the [`parameters`](Component::parameters) of `T` are resolved
    /// in order and handed to [`construct`](Component::construct).
    /// Nothing is validated at registration, an unresolvable parameter only fails
    /// when `T` is first resolved.
    ///
    /// Registering an id again replaces its provider. A singleton that was already
    /// cached for the id is kept and still returned by [`get`](Container::get).
    /// Once registered as [`Scope::Transient`], an id stays transient.
    ///
    /// # Panics
    ///
    /// - Panics if the id is already registered and the container's [`allow_override`](Container::allow_override) is false.
    #[track_caller]
    pub fn register<T: Component>(&mut self, scope: Scope) -> &mut Self {
        self.register_provider(Provider::class::<T>(scope))
    }

    /// Registers `T` under the given id.
    ///
    /// See [`Container::register`] for more details.
    ///
    /// # Panics
    ///
    /// - Panics if the id is already registered and the container's [`allow_override`](Container::allow_override) is false.
    #[track_caller]
    pub fn register_with_name<T: Component>(
        &mut self,
        id: impl Into<ServiceId>,
        scope: Scope,
    ) -> &mut Self {
        self.register_provider(Provider::class::<T>(scope).name(id))
    }

    /// Registers a factory under the given id.
    ///
    /// The factory is the producer itself, no dependency is resolved for it.
    ///
    /// # Panics
    ///
    /// - Panics if the id is already registered and the container's [`allow_override`](Container::allow_override) is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use wirebox::{Container, Scope};
    ///
    /// # fn main() {
    /// let calls = Rc::new(Cell::new(0));
    ///
    /// let mut cx = Container::new();
    /// cx.register_factory(
    ///     "answer",
    ///     {
    ///         let calls = Rc::clone(&calls);
    ///         move || {
    ///             calls.set(calls.get() + 1);
    ///             42
    ///         }
    ///     },
    ///     Scope::Singleton,
    /// );
    ///
    /// let a = cx.get("answer").unwrap();
    /// let b = cx.get("answer").unwrap();
    ///
    /// assert!(a.ptr_eq(&b));
    /// assert_eq!(calls.get(), 1);
    /// # }
    /// ```
    #[track_caller]
    pub fn register_factory<T, F>(
        &mut self,
        id: impl Into<ServiceId>,
        factory: F,
        scope: Scope,
    ) -> &mut Self
    where
        T: 'static,
        F: Fn() -> T + 'static,
    {
        self.register_provider(Provider::factory(id, factory, scope))
    }

    /// Registers a [`Provider`].
    ///
    /// # Panics
    ///
    /// - Panics if the id is already registered and the container's [`allow_override`](Container::allow_override) is false.
    #[track_caller]
    pub fn register_provider(&mut self, provider: Provider) -> &mut Self {
        let definition = provider.definition();

        if definition.scope.is_transient() {
            self.transients.insert(definition.id.clone());
        }

        self.provider_registry.insert(provider, self.allow_override);
        self
    }

    /// Load the given modules.
    ///
    /// This method first flattens all the given modules together with their submodules
    /// into a collection of modules without submodules, then registers the providers of
    /// each module one by one. If one of the modules asks for it, the container is
    /// [`compile`](Container::compile)d afterwards.
    ///
    /// # Panics
    ///
    /// - Panics if there are multiple providers with the same id and the container's [`allow_override`](Container::allow_override) is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wirebox::{modules, AutoRegisterModule, Container, ServiceId, Singleton};
    ///
    /// #[Singleton]
    /// struct A;
    ///
    /// # fn main() {
    /// let mut cx = Container::new();
    /// assert!(!cx.contains_provider(ServiceId::of::<A>()));
    ///
    /// cx.load_modules(modules![AutoRegisterModule]).unwrap();
    /// assert!(cx.contains_provider(ServiceId::of::<A>()));
    /// # }
    /// ```
    #[track_caller]
    pub fn load_modules(&mut self, modules: Vec<ResolveModule>) -> Result<(), ResolveError> {
        if self.load(modules) {
            self.compile()
        } else {
            Ok(())
        }
    }

    /// Eagerly resolves every registered service, in registration order.
    ///
    /// This surfaces configuration errors (missing dependencies, cycles, unresolvable
    /// parameters) before any service is used. Every singleton touched is cached.
    /// The first error is returned as is, the remaining services are not resolved,
    /// and the singletons cached so far are kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use wirebox::{Container, ResolveError, Scope, ServiceId, Singleton};
    ///
    /// #[Singleton(auto_register = false)]
    /// struct A(Rc<B>);
    ///
    /// #[Singleton(auto_register = false)]
    /// struct B(Rc<A>);
    ///
    /// # fn main() {
    /// let mut cx = Container::new();
    /// cx.register::<A>(Scope::Singleton)
    ///     .register::<B>(Scope::Singleton);
    ///
    /// let error = cx.compile().unwrap_err();
    /// assert!(matches!(error, ResolveError::CircularDependency { id, .. } if id == ServiceId::of::<A>()));
    /// # }
    /// ```
    pub fn compile(&mut self) -> Result<(), ResolveError> {
        let ids = self.provider_registry.ids().to_vec();

        for id in ids {
            self.inner_get(&id)?;
        }

        Ok(())
    }

    /// Returns the instance registered under the given id.
    ///
    /// 1. A cached singleton is returned without running any producer.
    /// 2. An unregistered id fails with [`ResolveError::ServiceNotRegistered`].
    /// 3. An id that is already being resolved fails with [`ResolveError::CircularDependency`].
    /// 4. Otherwise the producer runs, constructor parameters are resolved left to right,
    ///    and the instance is cached unless the id is transient.
    ///
    /// Whatever the outcome, the id is no longer marked as in progress when this returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wirebox::{Container, ResolveError};
    ///
    /// # fn main() {
    /// let mut cx = Container::new();
    /// assert_eq!(
    ///     cx.get("NonExistentService").unwrap_err(),
    ///     ResolveError::ServiceNotRegistered("NonExistentService".into())
    /// );
    /// # }
    /// ```
    pub fn get(&mut self, id: impl Into<ServiceId>) -> Result<Instance, ResolveError> {
        self.inner_get(&id.into())
    }

    /// Returns the instance registered under [`ServiceId::of::<T>()`](ServiceId::of).
    ///
    /// Fails with [`ResolveError::TypeMismatch`] if the producer did not produce a `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use wirebox::{Container, Scope, Singleton};
    ///
    /// #[Singleton(auto_register = false)]
    /// struct A;
    ///
    /// # fn main() {
    /// let mut cx = Container::new();
    /// cx.register::<A>(Scope::Singleton);
    ///
    /// let a: Rc<A> = cx.resolve().unwrap();
    /// assert!(Rc::ptr_eq(&a, &cx.resolve::<A>().unwrap()));
    /// # }
    /// ```
    pub fn resolve<T: 'static>(&mut self) -> Result<Rc<T>, ResolveError> {
        self.resolve_with_name(ServiceId::of::<T>())
    }

    /// Returns the instance registered under the given id as a `T`.
    ///
    /// Fails with [`ResolveError::TypeMismatch`] if the producer did not produce a `T`.
    pub fn resolve_with_name<T: 'static>(
        &mut self,
        id: impl Into<ServiceId>,
    ) -> Result<Rc<T>, ResolveError> {
        let id = id.into();
        let instance = self.inner_get(&id)?;

        instance
            .downcast::<T>()
            .ok_or_else(|| ResolveError::TypeMismatch {
                id,
                expected: any::type_name::<T>(),
                found: instance.type_name(),
            })
    }

    /// Returns true if a provider is registered under the given id.
    pub fn contains_provider(&self, id: impl Into<ServiceId>) -> bool {
        self.provider_registry.contains(&id.into())
    }

    /// Returns true if a singleton is cached under the given id.
    pub fn contains_singleton(&self, id: impl Into<ServiceId>) -> bool {
        self.singleton_registry.contains(&id.into())
    }

    /// Returns true if the given id was ever registered as [`Scope::Transient`].
    pub fn is_transient(&self, id: impl Into<ServiceId>) -> bool {
        self.transients.contains(&id.into())
    }

    /// Returns the [`Definition`] of the provider registered under the given id.
    pub fn get_definition(&self, id: impl Into<ServiceId>) -> Option<&Definition> {
        self.provider_registry
            .get(&id.into())
            .map(Provider::definition)
    }

    /// Returns the definitions of all registered providers, in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.provider_registry.definitions()
    }

    /// Returns the number of registered providers.
    pub fn len(&self) -> usize {
        self.provider_registry.len()
    }

    /// Returns true if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of cached singletons.
    pub fn singleton_count(&self) -> usize {
        self.singleton_registry.len()
    }
}

impl Container {
    /// Registers the providers of the flattened modules and returns whether
    /// one of the modules asked for compilation.
    #[track_caller]
    fn load(&mut self, modules: Vec<ResolveModule>) -> bool {
        let Some(modules) = flatten(modules, ResolveModule::submodules) else {
            return false;
        };

        let mut compile = false;

        modules.into_iter().for_each(|module| {
            compile |= module.compile();
            self.loaded_modules.push(module.name());

            module.providers().into_iter().for_each(|provider| {
                self.register_provider(provider);
            });
        });

        compile
    }

    fn inner_get(&mut self, id: &ServiceId) -> Result<Instance, ResolveError> {
        let transient = self.transients.contains(id);

        if !transient {
            if let Some(instance) = self.singleton_registry.get(id) {
                #[cfg(feature = "tracing")]
                tracing::trace!("(=) cached singleton: {}", id);

                return Ok(instance);
            }
        }

        let Some(provider) = self.provider_registry.get(id) else {
            return Err(ResolveError::ServiceNotRegistered(id.clone()));
        };

        let producer = provider.producer();

        let instance = {
            let _guard = self.dependency_chain.enter(id)?;
            self.produce(id, producer)?
        };

        if !transient {
            self.singleton_registry.insert(id.clone(), instance.clone());
        }

        Ok(instance)
    }

    fn produce(&mut self, id: &ServiceId, producer: Producer) -> Result<Instance, ResolveError> {
        let (parameters, construct) = match producer {
            Producer::Factory(factory) => return Ok(factory()),
            Producer::Class {
                parameters,
                construct,
            } => (parameters(), construct),
        };

        let mut values = Vec::with_capacity(parameters.len());

        for (index, parameter) in parameters.into_iter().enumerate() {
            let dependency = match parameter {
                Parameter::Service(dependency) => dependency,
                Parameter::Unresolvable { ty } => {
                    return Err(ResolveError::UnresolvableDependency {
                        service: id.clone(),
                        index,
                        ty,
                    })
                }
            };

            #[cfg(feature = "tracing")]
            tracing::debug!("(>) resolve parameter #{} of {}: {}", index, id, dependency);

            let instance = self.inner_get(&dependency)?;
            values.push((dependency, instance));
        }

        construct(&mut Arguments::new(id.clone(), values))
    }
}

fn flatten<T, F>(mut unresolved: Vec<T>, get_sublist: F) -> Option<Vec<T>>
where
    F: Fn(&mut T) -> Option<Vec<T>>,
{
    if unresolved.is_empty() {
        return None;
    }

    let mut resolved = Vec::with_capacity(unresolved.len());

    unresolved.reverse();

    while let Some(mut element) = unresolved.pop() {
        match get_sublist(&mut element) {
            Some(mut sublist) if !sublist.is_empty() => {
                sublist.reverse();
                unresolved.append(&mut sublist);
            }
            _ => {}
        }

        resolved.push(element);
    }

    Some(resolved)
}

/// Options and flags which can be used to configure how a container is created.
///
/// This builder expose the ability to configure how a [`Container`] is created.
/// The [`Container::create`] and [`Container::auto_register`] methods are aliases
/// for commonly used options using this builder.
///
/// Generally speaking, when using `ContainerOptions`, you'll first call [`ContainerOptions::default`],
/// then chain calls to methods to set each option, then call [`ContainerOptions::create`], passing the modules you've built,
/// or call [`ContainerOptions::auto_register`]. This will give you a [`Result<Container, ResolveError>`].
///
/// # Example
///
/// ```rust
/// use wirebox::{Container, ContainerOptions};
///
/// # fn main() {
/// let mut cx: Container = ContainerOptions::default()
///     .allow_override(false)
///     .compile(true)
///     .instance(42_i32)
///     .instance_with_name(true, "flag")
///     .create(Vec::new())
///     .unwrap();
///
/// assert_eq!(*cx.resolve::<i32>().unwrap(), 42);
/// assert!(*cx.resolve_with_name::<bool>("flag").unwrap());
/// # }
/// ```
pub struct ContainerOptions {
    allow_override: bool,
    compile: bool,
    instances: Vec<(Provider, Instance)>,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            allow_override: true,
            compile: false,
            instances: Default::default(),
        }
    }
}

impl ContainerOptions {
    /// Sets the option for whether the container should allow overriding existing providers.
    ///
    /// This option, when true, allows a provider to be overridden by another provider with the same id.
    ///
    /// Default to true.
    pub fn allow_override(mut self, allow_override: bool) -> Self {
        self.allow_override = allow_override;
        self
    }

    /// Sets the option for whether the container should be compiled once created.
    ///
    /// This option, when true, will resolve every registered service before the
    /// container is returned, and return the first resolution error instead of the container.
    ///
    /// Default to false.
    pub fn compile(mut self, compile: bool) -> Self {
        self.compile = compile;
        self
    }

    /// Appends an already built singleton, registered under [`ServiceId::of::<T>()`](ServiceId::of).
    pub fn instance<T: 'static>(self, instance: T) -> Self {
        self.instance_with_name(instance, ServiceId::of::<T>())
    }

    /// Appends an already built singleton, registered under the given id.
    pub fn instance_with_name<T: 'static>(mut self, instance: T, id: impl Into<ServiceId>) -> Self {
        let instance = Rc::new(instance);

        let provider = Provider::shared(id.into(), Rc::clone(&instance));
        self.instances.push((provider, Instance::from_rc(instance)));

        self
    }

    #[track_caller]
    fn inner_create<F>(self, init: F) -> Result<Container, ResolveError>
    where
        F: FnOnce(&mut Container) -> bool,
    {
        let ContainerOptions {
            allow_override,
            compile,
            instances,
        } = self;

        let mut cx = Container {
            allow_override,
            ..Default::default()
        };

        instances.into_iter().for_each(|(provider, instance)| {
            let id = provider.id().clone();
            cx.provider_registry.insert(provider, allow_override);
            cx.singleton_registry.insert(id, instance);
        });

        if init(&mut cx) || compile {
            cx.compile()?;
        }

        Ok(cx)
    }

    /// Creates a new container with the given modules.
    ///
    /// # Panics
    ///
    /// - Panics if there are multiple providers with the same id and the container's [`allow_override`](Container::allow_override) is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wirebox::{components, modules, Container, ContainerOptions, Module, Transient};
    ///
    /// #[Transient]
    /// struct A;
    ///
    /// struct MyModule;
    ///
    /// impl Module for MyModule {
    ///     fn providers() -> Vec<wirebox::Provider> {
    ///         components![A]
    ///     }
    /// }
    ///
    /// # fn main() {
    /// let mut cx: Container = ContainerOptions::default().create(modules![MyModule]).unwrap();
    /// assert!(cx.resolve::<A>().is_ok());
    /// # }
    /// ```
    #[track_caller]
    pub fn create(self, modules: Vec<ResolveModule>) -> Result<Container, ResolveError> {
        self.inner_create(|cx| cx.load(modules))
    }

    /// Creates a new container with the [`AutoRegisterModule`].
    ///
    /// Same as `ContainerOptions::default().create(modules![AutoRegisterModule])`.
    ///
    /// See [`ContainerOptions::create`] for more details.
    ///
    /// [`AutoRegisterModule`]: crate::AutoRegisterModule
    #[cfg_attr(docsrs, doc(cfg(feature = "auto-register")))]
    #[cfg(feature = "auto-register")]
    #[track_caller]
    pub fn auto_register(self) -> Result<Container, ResolveError> {
        use crate::AutoRegisterModule;

        self.inner_create(|cx| cx.load(vec![ResolveModule::new::<AutoRegisterModule>()]))
    }
}
