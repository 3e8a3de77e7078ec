/// Captures module types as a `Vec<ResolveModule>`.
///
/// `modules![A, B]` is `vec![ResolveModule::new::<A>(), ResolveModule::new::<B>()]`.
///
/// # Example
///
/// ```rust
/// use wirebox::{modules, Container, Module, Provider};
///
/// struct Empty;
///
/// impl Module for Empty {
///     fn providers() -> Vec<Provider> {
///         Vec::new()
///     }
/// }
///
/// # fn main() {
/// let cx = Container::create(modules![Empty]).unwrap();
/// assert_eq!(cx.loaded_modules(), &[std::any::type_name::<Empty>()]);
/// # }
/// ```
///
/// [`Module`]: crate::Module
#[macro_export]
macro_rules! modules {
    () => {
        vec![]
    };
    ($($module:ty),+ $(,)?) => {
        vec![$(
            $crate::ResolveModule::new::<$module>()
        ),+]
    };
}

/// Collects provider expressions into a `Vec<Provider>`.
///
/// Each expression goes through `Into<Provider>`.
///
/// # Example
///
/// ```rust
/// use wirebox::{providers, singleton_factory, transient_factory, Provider};
///
/// # fn main() {
/// let list: Vec<Provider> = providers![
///     singleton_factory("pool_size", || 8_usize),
///     transient_factory("nonce", || 0_u64),
/// ];
/// assert_eq!(list.len(), 2);
/// # }
/// ```
#[macro_export]
macro_rules! providers {
    () => {
        vec![]
    };
    ($($provider:expr),+ $(,)?) => {
        vec![$(
            <$crate::Provider as ::core::convert::From<_>>::from($provider)
        ),+]
    };
}

/// Collects the [`DefaultProvider`] of each listed type into a `Vec<Provider>`.
///
/// Types defined with `#[Singleton]` or `#[Transient]` have one.
///
/// # Example
///
/// ```rust
/// use wirebox::{components, Provider, Scope, Singleton, Transient};
///
/// #[Singleton(auto_register = false)]
/// struct Pool;
///
/// #[Transient(auto_register = false)]
/// struct Session;
///
/// # fn main() {
/// let list: Vec<Provider> = components![Pool, Session];
/// assert_eq!(list[1].definition().scope, Scope::Transient);
/// # }
/// ```
///
/// [`DefaultProvider`]: crate::DefaultProvider
#[macro_export]
macro_rules! components {
    () => {
        vec![]
    };
    ($($component:ty),+ $(,)?) => {
        vec![$(
            <$component as $crate::DefaultProvider>::provider()
        ),+]
    };
}
