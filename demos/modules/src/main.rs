use std::rc::Rc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wirebox::{
    components, modules, providers, singleton_factory, Container, Module, Provider, ResolveError,
    ResolveModule, Singleton, Transient,
};

struct Config {
    url: String,
}

#[Singleton(auto_register = false)]
struct Database {
    config: Rc<Config>,
}

#[Transient(auto_register = false)]
struct UserRepository {
    database: Rc<Database>,
}

#[Transient(auto_register = false, name = "users")]
struct UserController {
    repository: Rc<UserRepository>,
}

struct StorageModule;

impl Module for StorageModule {
    fn providers() -> Vec<Provider> {
        let mut providers = providers![singleton_factory(
            wirebox::ServiceId::of::<Config>(),
            || Config {
                url: String::from("postgres://localhost/app"),
            }
        )];
        providers.extend(components![Database, UserRepository]);
        providers
    }
}

struct AppModule;

impl Module for AppModule {
    fn compile() -> bool {
        true
    }

    fn submodules() -> Option<Vec<ResolveModule>> {
        Some(modules![StorageModule])
    }

    fn providers() -> Vec<Provider> {
        components![UserController]
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

    let mut cx = Container::create(modules![AppModule])?;

    println!("loaded modules: {:?}", cx.loaded_modules());
    println!("cached singletons: {}", cx.singleton_count());

    for definition in cx.definitions() {
        println!(
            "{} ({:?}, {:?}) -> {}",
            definition.id, definition.scope, definition.kind, definition.ty
        );
    }

    let controller = cx.resolve_with_name::<UserController>("users")?;
    println!(
        "users are stored in {}",
        controller.repository.database.config.url
    );

    Ok(())
}
