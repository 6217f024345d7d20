//! Turn-decision endpoint polled by the game host.

use actix_web::{web, HttpResponse, Responder};

use crate::{
    error::method_not_allowed,
    game::{
        turn::{plan_turn, TurnPlan},
        types::GameState,
    },
};

/// POST /check
pub async fn check(state: web::Json<GameState>) -> impl Responder {
    log::info!("got server check for game {:?}", state.uuid);

    let TurnPlan { actions, counter } = plan_turn(state.into_inner());
    log::debug!("counter after turn: {counter:?}");

    HttpResponse::Ok().json(actions)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/check")
            .route(web::post().to(check))
            .default_service(web::route().to(method_not_allowed)),
    );
}
