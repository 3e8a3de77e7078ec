mod components;

use std::rc::Rc;

use wirebox::{Container, ProducerKind, Scope, ServiceId};

use crate::components::*;

#[test]
fn replace_provider_before_resolution() {
    let mut cx = Container::new();
    cx.register_factory("port", || 80_u16, Scope::Singleton)
        .register_factory("port", || 8080_u16, Scope::Singleton);

    assert_eq!(cx.len(), 1);
    assert_eq!(*cx.resolve_with_name::<u16>("port").unwrap(), 8080);
}

#[test]
fn cached_singleton_survives_reregistration() {
    let mut cx = Container::new();
    cx.register_factory("port", || 80_u16, Scope::Singleton);

    let before = cx.get("port").unwrap();

    cx.register_factory("port", || 8080_u16, Scope::Singleton);

    let after = cx.get("port").unwrap();
    assert!(before.ptr_eq(&after));
    assert_eq!(after.downcast_ref::<u16>(), Some(&80));

    // the definition is replaced even though the cached instance is not
    assert_eq!(
        cx.get_definition("port").map(|definition| definition.kind),
        Some(ProducerKind::Factory)
    );
}

#[test]
fn transient_stays_transient() {
    reset_counters();

    let mut cx = Container::new();
    cx.register::<Logger>(Scope::Transient)
        .register::<Logger>(Scope::Singleton);

    assert!(cx.is_transient(ServiceId::of::<Logger>()));
    assert_eq!(
        cx.get_definition(ServiceId::of::<Logger>())
            .map(|definition| definition.scope),
        Some(Scope::Singleton)
    );

    let a = cx.resolve::<Logger>().unwrap();
    let b = cx.resolve::<Logger>().unwrap();

    assert!(!Rc::ptr_eq(&a, &b));
    assert_eq!(loggers_created(), 2);
}

#[test]
fn singleton_becomes_transient() {
    reset_counters();

    let mut cx = Container::new();
    cx.register::<Logger>(Scope::Singleton);

    let cached = cx.resolve::<Logger>().unwrap();

    cx.register::<Logger>(Scope::Transient);

    let fresh = cx.resolve::<Logger>().unwrap();
    assert!(!Rc::ptr_eq(&cached, &fresh));
    assert_eq!(loggers_created(), 2);
}

#[test]
fn replace_class_with_factory() {
    let mut cx = Container::new();
    cx.register::<Logger>(Scope::Singleton)
        .register_factory(
            ServiceId::of::<Logger>(),
            || {
                let logger = Logger::default();
                logger.log("from factory");
                logger
            },
            Scope::Singleton,
        );

    let logger = cx.resolve::<Logger>().unwrap();
    assert_eq!(logger.messages(), vec!["from factory"]);
}

#[test]
#[should_panic]
fn override_not_allowed() {
    let mut cx = Container::options()
        .allow_override(false)
        .create(Vec::new())
        .unwrap();

    assert!(!cx.allow_override());

    cx.register::<Logger>(Scope::Singleton)
        .register::<Logger>(Scope::Transient);
}

#[test]
fn distinct_ids_with_override_disabled() {
    let mut cx = Container::options()
        .allow_override(false)
        .create(Vec::new())
        .unwrap();

    cx.register::<Logger>(Scope::Singleton)
        .register_with_name::<Logger>("other", Scope::Singleton);

    assert_eq!(cx.len(), 2);
}
