#[doc(hidden)]
pub use inventory::submit;

use crate::{module::Module, provider::Provider};

#[doc(hidden)]
pub struct ProviderRegister {
    pub register: fn() -> Provider,
}

inventory::collect!(ProviderRegister);

/// Returns an iterator over all auto-registered providers.
///
/// [`AutoRegisterModule`] uses this function to collect all auto-registered [`Provider`]s.
/// If you don't want to use `AutoRegisterModule`, you can use this function to customize your own module.
///
/// # Example
///
/// ```rust
/// use wirebox::{auto_registered_providers, Module};
///
/// struct MyAutoRegisterModule;
///
/// impl Module for MyAutoRegisterModule {
///     fn compile() -> bool {
///         true
///     }
///
///     fn providers() -> Vec<wirebox::Provider> {
///         auto_registered_providers().collect()
///     }
/// }
/// ```
pub fn auto_registered_providers() -> impl Iterator<Item = Provider> {
    inventory::iter::<ProviderRegister>
        .into_iter()
        .map(|register| (register.register)())
}

/// A module that auto-registers all providers.
///
/// This module is enabled by the `auto-register` feature.
/// Because auto-registration relies on [`inventory`] crate, auto-registration
/// is not available on platforms where `inventory` is not supported.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
///
/// use wirebox::{Container, Singleton, Transient};
///
/// #[Singleton]
/// struct A;
///
/// #[Transient]
/// struct B(Rc<A>);
///
/// # fn main() {
/// let mut cx = Container::auto_register().unwrap();
/// assert!(cx.resolve::<B>().is_ok());
/// # }
/// ```
pub struct AutoRegisterModule;

impl Module for AutoRegisterModule {
    fn providers() -> Vec<Provider> {
        auto_registered_providers().collect()
    }
}

/// Register a `Provider` that will be collected by [`auto_registered_providers`].
///
/// If you have:
///   - Enabled the `auto-register` feature (which is enabled by default).
///   - Define the component using the `#[Singleton]` or `#[Transient]` macro.
///   - `#[Singleton]` or `#[Transient]` does not set `auto_register = false`.
///
/// Then you don't need to use this macro to register the `Provider`.
///
/// But if you implement [`Component`](crate::Component) by hand, or use a factory,
/// and you want to use auto-registration, then you need to use this macro.
///
/// # Example
///
/// ```rust
/// use wirebox::{register_provider, singleton_factory, Container, Provider};
///
/// fn greeting() -> Provider {
///     singleton_factory("greeting", || "Hello")
/// }
///
/// register_provider!(greeting());
///
/// fn main() {
///     let mut cx = Container::auto_register().unwrap();
///     assert!(cx.resolve_with_name::<&'static str>("greeting").is_ok());
/// }
/// ```
#[macro_export]
macro_rules! register_provider {
    ($provider:expr) => {
        const _: () = {
            fn register() -> $crate::Provider {
                <$crate::Provider as ::core::convert::From<_>>::from($provider)
            }

            $crate::submit! {
                $crate::ProviderRegister {
                    register
                }
            }
        };
    };
}

/// Generate a function to enable auto-registration.
///
/// Providers submitted in another crate are only collected if that crate is
/// actually linked in. Depending on it in `Cargo.toml` is not enough, something
/// defined in it has to be used.
///
/// This macro generates a function called `enable`, with no parameters and no
/// return, just to be called by other crates to pull the providers in. The body
/// can call the `enable` functions of further crates, so that enabling one crate
/// enables its dependencies as well.
///
/// # Example
///
/// ```rust ignore
/// // lib1/src/lib.rs
/// use wirebox::{enable, Singleton};
///
/// enable! {}
///
/// #[Singleton]
/// pub struct Lib1;
///
/// // lib2/src/lib.rs
/// use wirebox::{enable, Singleton};
///
/// enable! {
///     lib1::enable();
/// }
///
/// #[Singleton]
/// pub struct Lib2;
///
/// // bin/src/main.rs
/// use wirebox::*;
///
/// fn main() {
///     lib2::enable();
///
///     let mut cx = Container::auto_register().unwrap();
///     assert!(cx.resolve::<lib1::Lib1>().is_ok());
/// }
/// ```
#[macro_export]
macro_rules! enable {
    ($($body:tt)*) => {
        /// Enable auto-registration.
        pub fn enable() {
            $($body)*
        }
    };
}
