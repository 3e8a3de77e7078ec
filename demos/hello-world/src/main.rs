use std::{cell::RefCell, rc::Rc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wirebox::{
    register_provider, singleton_factory, Container, ResolveError, ServiceId, Singleton, Transient,
};

// a plain value, so it is provided by a factory instead of the attribute macro
#[derive(Default)]
struct Logger {
    messages: RefCell<Vec<String>>,
}

impl Logger {
    fn log(&self, message: &str) {
        println!("[log] {}", message);
        self.messages.borrow_mut().push(message.to_owned());
    }
}

register_provider!(singleton_factory(ServiceId::of::<Logger>(), Logger::default));

#[Transient]
struct ServiceA {
    logger: Rc<Logger>,
}

impl ServiceA {
    fn dependency(&self) -> &Rc<Logger> {
        &self.logger
    }
}

#[Singleton]
struct ServiceB {
    logger: Rc<Logger>,
}

impl ServiceB {
    fn do_something(&self) {
        self.logger.log("ServiceB doing something");
    }
}

fn main() -> Result<(), ResolveError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wirebox=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut cx = Container::options().compile(true).auto_register()?;

    let b = cx.resolve::<ServiceB>()?;
    b.do_something();

    let a1 = cx.resolve::<ServiceA>()?;
    let a2 = cx.resolve::<ServiceA>()?;

    println!("ServiceA is transient: {}", !Rc::ptr_eq(&a1, &a2));
    println!(
        "Logger is shared: {}",
        Rc::ptr_eq(a1.dependency(), &b.logger)
    );
    println!("{} messages logged", b.logger.messages.borrow().len());

    if let Err(e) = cx.get("NonExistentService") {
        println!("{}", e);
    }

    Ok(())
}
