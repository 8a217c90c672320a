#[macro_use]
extern crate log;

use std::io;

use actix_cors::Cors;
use actix_web::{
    http,
    middleware::{Condition, Logger},
    web, App, HttpServer,
};
use dotenv::dotenv;

mod config;
mod handlers;
mod routes;
mod tests;
mod validate;

use crate::config::Config;
use crate::routes::{not_found, routes};

fn startup_error(err: errors::Error) -> io::Error {
    error!("Could not start server - {}", err);
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(startup_error)?;
    let pool = db::pool_from_url(&config.database_url).map_err(startup_error)?;
    let pool = web::Data::new(pool);

    info!("Listening on {}", config.bind_address);
    let client_host = config.client_host.clone();

    HttpServer::new(move || {
        let cors = match &client_host {
            Some(host) => Cors::default()
                .allowed_origin(host)
                .allow_any_method()
                .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
                .max_age(3600),
            None => Cors::default(),
        };

        App::new()
            .wrap(Condition::new(client_host.is_some(), cors))
            .wrap(Logger::default())
            .app_data(pool.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
