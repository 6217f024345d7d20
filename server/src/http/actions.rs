//! Free-form action acknowledgements.

use actix_web::{web, HttpResponse, Responder};

use crate::{
    error::method_not_allowed,
    protocol::{ActionRequest, ActionResponse},
};

/// POST /action/{kind}
pub async fn receive_action(
    path: web::Path<String>,
    info: web::Json<ActionRequest>,
) -> impl Responder {
    let kind = path.into_inner();
    log::info!("received action {:?}, kind: {kind}", info.action);

    HttpResponse::Ok().json(ActionResponse::received(&info.action))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/action/{kind}")
            .route(web::post().to(receive_action))
            .default_service(web::route().to(method_not_allowed)),
    );
}
