#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod config;

use actix_web::{App, HttpServer, middleware, web};
use clap::Parser as _;
use userbox_users::{api::bind_services, store::UserStore};

use crate::config::{Args, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    userbox_logging::init().map_err(std::io::Error::other)?;

    let args = Args::parse();
    let config = ServerConfig::from_env()
        .map_err(std::io::Error::other)?
        .with_args(&args);
    log::debug!("Starting with {config:?}");

    let store = web::Data::new(UserStore::new());

    let app = move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .service(bind_services(web::scope("/users")))
    };

    let mut http_server = HttpServer::new(app);

    if let Some(workers) = config.workers {
        log::debug!("Running with {workers} Actix workers");
        http_server = http_server.workers(workers);
    }

    actix_web::rt::spawn(async move {
        if actix_web::rt::signal::ctrl_c().await.is_ok() {
            log::debug!("Received ctrl-c");
        }
    });

    let http_server = http_server
        .bind((config.bind_addr.as_str(), config.port))?
        .run();

    log::info!(
        "Server listening on {}:{}...",
        config.bind_addr,
        config.port
    );

    http_server.await?;

    log::debug!("Server shut down");

    Ok(())
}
