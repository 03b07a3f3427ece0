mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use std::io;
use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use config::{AuthMode, Config, StoreBackend};
use db::{EmployeeStore, MemoryEmployeeStore, PgEmployeeStore};
use utils::auth::{Authenticator, StaticTokenAuthenticator};
use utils::jwt::JwtAuthenticator;

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| startup_error("Invalid configuration", err))?;

    // `issue-token <subject>` prints a signed token and exits.
    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(String::as_str) == Some("issue-token") {
        if config.auth_mode != AuthMode::Jwt {
            return Err(startup_error("Cannot issue tokens", "AUTH_MODE is not jwt"));
        }
        let subject = args.get(2).map(String::as_str).unwrap_or("admin");
        let token = JwtAuthenticator::new(&config.api_token)
            .issue(subject)
            .map_err(|err| startup_error("Token generation error", err))?;
        println!("{}", token);
        return Ok(());
    }

    let authenticator: Arc<dyn Authenticator> = match config.auth_mode {
        AuthMode::Static => Arc::new(StaticTokenAuthenticator::new(config.api_token.clone())),
        AuthMode::Jwt => Arc::new(JwtAuthenticator::new(&config.api_token)),
    };

    let store: Arc<dyn EmployeeStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config.database_url.as_deref().unwrap_or_default();
            let pool = db::create_pool(database_url, config.max_connections)
                .await
                .map_err(|err| startup_error("Failed to connect to the database", err))?;
            db::run_migrations(&pool)
                .await
                .map_err(|err| startup_error("Failed to run migrations", err))?;
            Arc::new(PgEmployeeStore::new(pool))
        }
        StoreBackend::Memory => {
            info!("Using in-memory employee store; records are lost on shutdown");
            Arc::new(MemoryEmployeeStore::new())
        }
    };

    let store = web::Data::from(store);
    let authenticator = web::Data::from(authenticator);

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(authenticator.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
