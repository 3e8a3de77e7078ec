use std::any::{self, TypeId};

use crate::Provider;

/// A named bundle of providers, loaded into a [`Container`](crate::Container) as a unit.
///
/// Modules can nest: [`submodules`](Module::submodules) are loaded right after
/// the module that declares them, before its next sibling.
///
/// # Example
///
/// ```rust
/// use wirebox::{modules, providers, singleton_factory, transient_factory, Container, Module};
///
/// struct Settings;
///
/// impl Module for Settings {
///     // resolve everything as soon as the container is created
///     fn compile() -> bool {
///         true
///     }
///
///     fn providers() -> Vec<wirebox::Provider> {
///         providers![singleton_factory("database_url", || "sqlite::memory:")]
///     }
/// }
///
/// struct App;
///
/// impl Module for App {
///     fn submodules() -> Option<Vec<wirebox::ResolveModule>> {
///         Some(modules![Settings])
///     }
///
///     fn providers() -> Vec<wirebox::Provider> {
///         providers![transient_factory("request_id", || 7_u64)]
///     }
/// }
///
/// # fn main() {
/// let mut cx = Container::create(modules![App]).unwrap();
/// assert!(cx.contains_singleton("database_url"));
/// assert_eq!(*cx.resolve_with_name::<u64>("request_id").unwrap(), 7);
/// # }
/// ```
pub trait Module {
    /// Asks the container to [`compile`](crate::Container::compile) once every
    /// module of the same load is registered.
    fn compile() -> bool {
        false
    }

    /// Modules loaded together with this one.
    fn submodules() -> Option<Vec<ResolveModule>> {
        None
    }

    /// The providers this module registers, in order.
    fn providers() -> Vec<Provider>;
}

/// A [`Module`] captured as a value, ready to be loaded.
///
/// Built with [`ResolveModule::new`] or, for several at once, the [`modules!`](crate::modules) macro.
pub struct ResolveModule {
    id: TypeId,
    name: &'static str,
    compile: bool,
    submodules: Option<Vec<ResolveModule>>,
    providers: Vec<Provider>,
}

impl ResolveModule {
    /// Captures `T`: its flags, submodules and providers are evaluated now.
    pub fn new<T: Module + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
            compile: T::compile(),
            submodules: T::submodules(),
            providers: T::providers(),
        }
    }

    /// The [`TypeId`] of the module type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The module's type name, as listed by [`Container::loaded_modules`](crate::Container::loaded_modules).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// See [`Module::compile`].
    pub fn compile(&self) -> bool {
        self.compile
    }

    pub(crate) fn submodules(&mut self) -> Option<Vec<ResolveModule>> {
        self.submodules.take()
    }

    pub(crate) fn providers(self) -> Vec<Provider> {
        self.providers
    }
}
