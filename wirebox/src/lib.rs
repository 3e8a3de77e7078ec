#![doc = include_str!("./docs/lib.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg_attr(docsrs, doc(cfg(feature = "auto-register")))]
#[cfg(feature = "auto-register")]
mod auto_register;
mod component;
mod container;
mod definition;
mod dependency_chain;
mod error;
mod instance;
mod macros;
mod module;
mod provider;
mod registry;

#[cfg_attr(docsrs, doc(cfg(feature = "auto-register")))]
#[cfg(feature = "auto-register")]
pub use auto_register::*;
pub use component::*;
pub use container::*;
pub use definition::*;
pub use error::*;
pub use instance::*;
pub use module::*;
pub use provider::*;
pub(crate) use registry::*;
pub use wirebox_core::*;

macro_rules! export_attribute_macros {
    (
        $(
            #[$summary:meta]
            $name:ident;
        )*
    ) => {
        $(
            #[cfg_attr(docsrs, doc(cfg(feature = "wirebox-macro")))]
            #[cfg(feature = "wirebox-macro")]
            #[$summary]
            #[doc = ""]
            #[doc = include_str!("./docs/attribute_macro.md")]
            pub use wirebox_macro::$name;
        )*
    };
}

export_attribute_macros! {
    /// Define a singleton component.
    Singleton;
    /// Define a transient component.
    Transient;
}
