use std::{cell::RefCell, rc::Rc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wirebox::{Arguments, Component, Container, Parameter, ResolveError, Scope};

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

struct ServiceB {
    logger: Rc<Logger>,
}

impl ServiceB {
    fn do_something(&self) {
        self.logger.log("ServiceB doing something");
    }
}

impl Component for ServiceB {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::service::<Logger>()]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        let logger: Rc<Logger> = args.take()?;
        logger.log("ServiceB created");
        Ok(ServiceB { logger })
    }
}

struct Greeter {
    greeting: Rc<String>,
    logger: Rc<Logger>,
}

impl Component for Greeter {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::named("greeting"), Parameter::service::<Logger>()]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        Ok(Greeter {
            greeting: args.take()?,
            logger: args.take()?,
        })
    }
}

impl Greeter {
    fn greet(&self, name: &str) {
        self.logger.log(&format!("{}, {}!", self.greeting, name));
    }
}

struct Ping(Rc<Pong>);

struct Pong(Rc<Ping>);

impl Component for Ping {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::service::<Pong>()]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        Ok(Ping(args.take()?))
    }
}

impl Component for Pong {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::service::<Ping>()]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        Ok(Pong(args.take()?))
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

    let mut cx = Container::new();
    cx.register_factory(wirebox::ServiceId::of::<Logger>(), Logger::default, Scope::Singleton)
        .register::<ServiceB>(Scope::Singleton)
        .register::<Greeter>(Scope::Transient)
        .register_factory("greeting", || String::from("Hello"), Scope::Singleton);

    cx.compile()?;

    cx.resolve::<ServiceB>()?.do_something();
    cx.resolve::<Greeter>()?.greet("World");

    let logger = cx.resolve::<Logger>()?;
    println!("{} messages logged", logger.messages.borrow().len());

    cx.register::<Ping>(Scope::Singleton)
        .register::<Pong>(Scope::Singleton);

    if let Err(e) = cx.resolve::<Ping>() {
        println!("{}", e);
    }

    Ok(())
}
