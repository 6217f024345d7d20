use crate::{config::settings, error::json_config, http};
use actix_files::Files;
use actix_web::web;

/// Mount every HTTP endpoint at the root.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(http::actions::init_routes)
        .configure(http::check::init_routes)
        .configure(http::health::init_routes);
}

/// Static files under `/`. Must be mounted last: it answers every path the
/// other services leave unmatched.
pub fn init_static(cfg: &mut web::ServiceConfig) {
    cfg.service(Files::new("/", &settings().static_dir).index_file("index.html"));
}
