#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use wirebox::{Arguments, Component, Parameter, ResolveError};

thread_local! {
    static LOGGERS: Cell<usize> = const { Cell::new(0) };
    static SERVICE_BS: Cell<usize> = const { Cell::new(0) };
}

/// Resets the construction counters, tests may share a thread.
pub(crate) fn reset_counters() {
    LOGGERS.with(|c| c.set(0));
    SERVICE_BS.with(|c| c.set(0));
}

pub(crate) fn loggers_created() -> usize {
    LOGGERS.with(Cell::get)
}

pub(crate) fn service_bs_created() -> usize {
    SERVICE_BS.with(Cell::get)
}

#[derive(Default)]
pub(crate) struct Logger {
    messages: RefCell<Vec<String>>,
}

impl Logger {
    pub(crate) fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Component for Logger {
    fn parameters() -> Vec<Parameter> {
        Vec::new()
    }

    fn construct(_: &mut Arguments) -> Result<Self, ResolveError> {
        LOGGERS.with(|c| c.set(c.get() + 1));
        Ok(Logger::default())
    }
}

pub(crate) struct ServiceA {
    logger: Rc<Logger>,
}

impl ServiceA {
    pub(crate) fn dependency(&self) -> &Rc<Logger> {
        &self.logger
    }
}

impl Component for ServiceA {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::service::<Logger>()]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        Ok(ServiceA {
            logger: args.take()?,
        })
    }
}

pub(crate) struct ServiceB {
    pub(crate) logger: Rc<Logger>,
}

impl ServiceB {
    pub(crate) fn do_something(&self) {
        self.logger.log("ServiceB doing something");
    }
}

impl Component for ServiceB {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::service::<Logger>()]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        SERVICE_BS.with(|c| c.set(c.get() + 1));

        let logger: Rc<Logger> = args.take()?;
        logger.log("ServiceB created");

        Ok(ServiceB { logger })
    }
}

/// Depends on [`CycleB`].
pub(crate) struct CycleA(pub(crate) Rc<CycleB>);

/// Depends on [`CycleA`].
pub(crate) struct CycleB(pub(crate) Rc<CycleA>);

impl Component for CycleA {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::service::<CycleB>()]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        Ok(CycleA(args.take()?))
    }
}

impl Component for CycleB {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::service::<CycleA>()]
    }

    fn construct(args: &mut Arguments) -> Result<Self, ResolveError> {
        Ok(CycleB(args.take()?))
    }
}

/// Takes a plain number, which the container cannot provide.
pub(crate) struct NeedsNumber {
    pub(crate) logger: Rc<Logger>,
    pub(crate) number: i32,
}

impl Component for NeedsNumber {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::service::<Logger>(), Parameter::unresolvable::<i32>()]
    }

    fn construct(_: &mut Arguments) -> Result<Self, ResolveError> {
        unreachable!("an unresolvable parameter is rejected before construction")
    }
}
