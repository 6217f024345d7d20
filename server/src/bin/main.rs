use actix_web::{middleware::Logger, App, HttpServer};
use warband_server::{config::settings, http, metrics};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_addr = settings().server_addr.as_str();
    log::info!(
        "listening on {server_addr}, static files from {}",
        settings().static_dir.display()
    );

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .configure(http::routes::init_routes)
            .configure(http::routes::init_static)
    })
    .bind(server_addr)?
    .run()
    .await
}
