use std::{any::TypeId, rc::Rc};

use wirebox::{
    components, modules, providers, singleton_factory, transient, transient_factory, Container,
    Module, Provider, ResolveError, ResolveModule, ServiceId, Singleton, Transient,
};

#[test]
fn flatten_modules_in_preorder() {
    struct Leaf;
    impl Module for Leaf {
        fn providers() -> Vec<Provider> {
            providers![singleton_factory("leaf", || "leaf")]
        }
    }

    struct Middle;
    impl Module for Middle {
        fn submodules() -> Option<Vec<ResolveModule>> {
            Some(modules![Leaf])
        }

        fn providers() -> Vec<Provider> {
            providers![singleton_factory("middle", || "middle")]
        }
    }

    struct Sibling;
    impl Module for Sibling {
        fn providers() -> Vec<Provider> {
            providers![singleton_factory("sibling", || "sibling")]
        }
    }

    struct Root;
    impl Module for Root {
        fn submodules() -> Option<Vec<ResolveModule>> {
            Some(modules![Middle, Sibling])
        }

        fn providers() -> Vec<Provider> {
            providers![singleton_factory("root", || "root")]
        }
    }

    let cx = Container::create(modules![Root]).unwrap();

    assert_eq!(
        cx.loaded_modules(),
        &[
            std::any::type_name::<Root>(),
            std::any::type_name::<Middle>(),
            std::any::type_name::<Leaf>(),
            std::any::type_name::<Sibling>(),
        ]
    );

    let ids = cx
        .definitions()
        .map(|definition| definition.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec![
            ServiceId::new("root"),
            ServiceId::new("middle"),
            ServiceId::new("leaf"),
            ServiceId::new("sibling"),
        ]
    );

    // nothing asked for compilation
    assert_eq!(cx.singleton_count(), 0);
}

#[test]
fn components_and_providers() {
    #[Singleton]
    struct Config;

    #[Transient]
    struct Handler(Rc<Config>);

    struct MyModule;
    impl Module for MyModule {
        fn providers() -> Vec<Provider> {
            let mut providers = components![Config];
            providers.extend(providers![
                transient::<Handler>(),
                transient_factory("counter", || 0_u32),
            ]);
            providers
        }
    }

    let mut cx = Container::create(modules![MyModule]).unwrap();

    let a = cx.resolve::<Handler>().unwrap();
    let b = cx.resolve::<Handler>().unwrap();

    assert!(!Rc::ptr_eq(&a, &b));
    assert!(Rc::ptr_eq(&a.0, &b.0));
    assert!(cx.is_transient("counter"));
}

#[test]
fn module_asks_for_compilation() {
    #[Singleton]
    struct Eager;

    struct EagerModule;
    impl Module for EagerModule {
        fn compile() -> bool {
            true
        }

        fn providers() -> Vec<Provider> {
            components![Eager]
        }
    }

    struct Parent;
    impl Module for Parent {
        fn submodules() -> Option<Vec<ResolveModule>> {
            Some(modules![EagerModule])
        }

        fn providers() -> Vec<Provider> {
            providers![singleton_factory("parent", || ())]
        }
    }

    let cx = Container::create(modules![Parent]).unwrap();

    assert!(cx.contains_singleton(ServiceId::of::<Eager>()));
    assert!(cx.contains_singleton("parent"));
}

#[test]
fn create_returns_compile_error() {
    #[Singleton]
    #[allow(dead_code)]
    struct Broken(Rc<Missing>);

    struct Missing;

    struct BrokenModule;
    impl Module for BrokenModule {
        fn compile() -> bool {
            true
        }

        fn providers() -> Vec<Provider> {
            components![Broken]
        }
    }

    let error = Container::create(modules![BrokenModule]).err();

    assert_eq!(
        error,
        Some(ResolveError::ServiceNotRegistered(ServiceId::of::<Missing>()))
    );
}

#[test]
fn broken_module_without_compile_is_lazy() {
    #[Singleton]
    #[allow(dead_code)]
    struct Broken(Rc<Missing>);

    struct Missing;

    struct LazyModule;
    impl Module for LazyModule {
        fn providers() -> Vec<Provider> {
            components![Broken]
        }
    }

    let mut cx = Container::create(modules![LazyModule]).unwrap();
    assert!(cx.resolve::<Broken>().is_err());
}

#[test]
fn load_modules_into_existing_container() {
    struct First;
    impl Module for First {
        fn providers() -> Vec<Provider> {
            providers![singleton_factory("first", || 1_u8)]
        }
    }

    struct Second;
    impl Module for Second {
        fn compile() -> bool {
            true
        }

        fn providers() -> Vec<Provider> {
            providers![singleton_factory("second", || 2_u8)]
        }
    }

    let mut cx = Container::new();

    cx.load_modules(modules![First]).unwrap();
    assert!(cx.contains_provider("first"));
    assert!(!cx.contains_singleton("first"));

    cx.load_modules(modules![Second]).unwrap();
    assert!(cx.contains_singleton("first"));
    assert!(cx.contains_singleton("second"));

    assert_eq!(
        cx.loaded_modules(),
        &[std::any::type_name::<First>(), std::any::type_name::<Second>()]
    );

    cx.load_modules(modules![]).unwrap();
    assert_eq!(cx.loaded_modules().len(), 2);
}

#[test]
fn later_module_overrides_earlier() {
    struct Defaults;
    impl Module for Defaults {
        fn providers() -> Vec<Provider> {
            providers![singleton_factory("level", || "info")]
        }
    }

    struct Overrides;
    impl Module for Overrides {
        fn providers() -> Vec<Provider> {
            providers![singleton_factory("level", || "debug")]
        }
    }

    let mut cx = Container::create(modules![Defaults, Overrides]).unwrap();

    assert_eq!(cx.len(), 1);
    assert_eq!(*cx.resolve_with_name::<&str>("level").unwrap(), "debug");
}

#[test]
fn resolve_module_metadata() {
    struct Named;
    impl Module for Named {
        fn compile() -> bool {
            true
        }

        fn providers() -> Vec<Provider> {
            Vec::new()
        }
    }

    let module = ResolveModule::new::<Named>();

    assert_eq!(module.id(), TypeId::of::<Named>());
    assert_eq!(module.name(), std::any::type_name::<Named>());
    assert!(module.compile());
}
