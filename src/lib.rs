use std::net::SocketAddr;

use axum::{
    routing::{delete, get},
    Router,
};
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod errors;
mod functions;
mod handlers;
mod logger;
mod models;
mod utils;

pub async fn axum() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv().ok();

    let config = config::Config::from_env().unwrap();

    let pool = PgPoolOptions::new()
        .min_connections(config.pg.as_ref().unwrap().poolminsize)
        .max_connections(config.pg.as_ref().unwrap().poolmaxsize)
        .connect(config.database_url().as_ref())
        .await
        .expect("Failed to create pool database connection");

    let app = Router::new()
        .route("/invoices/:id/print", get(handlers::invoice::print))
        .route("/invoices/:id/share", get(handlers::invoice::share))
        .route("/invoices/:id", delete(handlers::invoice::remove))
        .route(
            "/invoices",
            get(handlers::invoice::get_all).post(handlers::invoice::create),
        )
        .route("/dashboard", get(handlers::invoice::dashboard))
        .route("/", get(handlers::home::hello_world))
        .layer(CorsLayer::permissive())
        .with_state(pool);

    let host = &config.server.as_ref().unwrap().host;
    let port = &config.server.as_ref().unwrap().port;
    let addr = format!("{}:{}", host, port).parse::<SocketAddr>().unwrap();

    tracing::debug!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
