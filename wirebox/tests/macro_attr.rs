use std::rc::Rc;

use wirebox::{
    Component, Container, DefaultProvider, Parameter, ProducerKind, ResolveError, Scope,
    ServiceId, Singleton, Transient,
};

#[test]
fn unit_struct() {
    #[Singleton(auto_register = false)]
    struct Unit;

    assert!(<Unit as Component>::parameters().is_empty());

    let mut cx = Container::new();
    cx.register::<Unit>(Scope::Singleton);
    assert!(cx.resolve::<Unit>().is_ok());
}

#[test]
fn named_fields_in_declaration_order() {
    #[Singleton(auto_register = false)]
    struct Database;

    #[Singleton(auto_register = false)]
    struct Cache;

    #[Transient(auto_register = false)]
    struct Repository {
        cache: Rc<Cache>,
        database: std::rc::Rc<Database>,
    }

    assert_eq!(
        <Repository as Component>::parameters(),
        vec![Parameter::service::<Cache>(), Parameter::service::<Database>()]
    );

    let mut cx = Container::new();
    cx.register::<Database>(Scope::Singleton)
        .register::<Cache>(Scope::Singleton)
        .register::<Repository>(Scope::Transient);

    let repository = cx.resolve::<Repository>().unwrap();
    assert!(Rc::ptr_eq(&repository.cache, &cx.resolve::<Cache>().unwrap()));
    assert!(Rc::ptr_eq(
        &repository.database,
        &cx.resolve::<Database>().unwrap()
    ));
}

#[test]
fn tuple_struct() {
    #[Singleton(auto_register = false)]
    struct Inner;

    #[Singleton(auto_register = false)]
    struct Outer(Rc<Inner>, ::std::rc::Rc<Inner>);

    let mut cx = Container::new();
    cx.register::<Inner>(Scope::Singleton)
        .register::<Outer>(Scope::Singleton);

    let outer = cx.resolve::<Outer>().unwrap();
    assert!(Rc::ptr_eq(&outer.0, &outer.1));
}

#[test]
fn field_with_name() {
    #[Singleton(auto_register = false)]
    struct Service {
        #[di(name = "primary")]
        primary: Rc<String>,
        #[di(name = "secondary")]
        secondary: Rc<String>,
    }

    assert_eq!(
        <Service as Component>::parameters(),
        vec![Parameter::named("primary"), Parameter::named("secondary")]
    );

    let mut cx = Container::new();
    cx.register_factory("primary", || String::from("one"), Scope::Singleton)
        .register_factory("secondary", || String::from("two"), Scope::Singleton)
        .register::<Service>(Scope::Singleton);

    let service = cx.resolve::<Service>().unwrap();
    assert_eq!(*service.primary, "one");
    assert_eq!(*service.secondary, "two");
}

#[test]
fn unresolvable_field() {
    #[Singleton(auto_register = false)]
    struct Dependency;

    #[Transient(auto_register = false)]
    #[allow(dead_code)]
    struct Service {
        dependency: Rc<Dependency>,
        retries: usize,
    }

    assert_eq!(
        <Service as Component>::parameters(),
        vec![
            Parameter::service::<Dependency>(),
            Parameter::Unresolvable { ty: "usize" },
        ]
    );

    let mut cx = Container::new();
    cx.register::<Dependency>(Scope::Singleton)
        .register::<Service>(Scope::Transient);

    assert_eq!(
        cx.resolve::<Service>().err(),
        Some(ResolveError::UnresolvableDependency {
            service: ServiceId::of::<Service>(),
            index: 1,
            ty: "usize",
        })
    );
    assert!(cx.contains_singleton(ServiceId::of::<Dependency>()));
}

#[test]
fn default_provider() {
    #[Singleton(auto_register = false)]
    struct A;

    #[Transient(name = "b", auto_register = false)]
    struct B;

    let a = <A as DefaultProvider>::provider();
    assert_eq!(a.id(), &ServiceId::of::<A>());
    assert_eq!(a.definition().scope, Scope::Singleton);
    assert_eq!(a.definition().kind, ProducerKind::Class);
    assert_eq!(a.parameters(), Some(Vec::new()));

    let b = <B as DefaultProvider>::provider();
    assert_eq!(b.id(), &ServiceId::new("b"));
    assert_eq!(b.definition().scope, Scope::Transient);
    assert_eq!(b.definition().ty, std::any::type_name::<B>());

    let mut cx = Container::new();
    cx.register_provider(b);
    assert!(cx.resolve_with_name::<B>("b").is_ok());
    assert!(cx.is_transient("b"));
}

#[test]
fn generic_struct_without_auto_register() {
    #[Transient(auto_register = false)]
    struct Wrapper<T: 'static> {
        inner: Rc<T>,
    }

    let mut cx = Container::new();
    cx.register_factory(ServiceId::of::<u64>(), || 3_u64, Scope::Singleton)
        .register::<Wrapper<u64>>(Scope::Transient);

    assert_eq!(*cx.resolve::<Wrapper<u64>>().unwrap().inner, 3);
}

use wirebox as wb;

mod custom_path {
    use crate::wb::{Container, Scope, Singleton};

    #[test]
    fn wirebox_path() {
        #[Singleton(wirebox_path = crate::wb, auto_register = false)]
        struct A;

        let mut cx = Container::new();
        cx.register::<A>(Scope::Singleton);
        assert!(cx.resolve::<A>().is_ok());
    }
}
