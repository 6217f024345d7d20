//! End-to-end checks of the HTTP surface.

use actix_web::{dev::ServiceResponse, http::header, http::StatusCode, test, App};
use serde_json::json;
use warband_server::{
    game::types::{Action, ActionKind},
    http::routes::init_routes,
    protocol::ActionResponse,
};

fn content_type<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[actix_rt::test]
async fn action_endpoint_acknowledges() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    let req = test::TestRequest::post()
        .uri("/action/test")
        .set_json(json!({ "action": "end-turn" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(content_type(&resp), "application/json");

    let body: ActionResponse = test::read_body_json(resp).await;
    assert_eq!(body, ActionResponse::received("end-turn"));
    assert_eq!(body.message, "Action received: end-turn");
}

#[actix_rt::test]
async fn action_endpoint_rejects_other_methods() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    for req in [
        test::TestRequest::get().uri("/action/test-kind").to_request(),
        test::TestRequest::put().uri("/action/test-kind").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(content_type(&resp), "text/plain; charset=utf-8");
    }
}

#[actix_rt::test]
async fn malformed_bodies_are_bad_requests() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    for uri in ["/action/test", "/check"] {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_rt::test]
async fn action_accepts_body_without_content_type() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    let req = test::TestRequest::post()
        .uri("/action/plain")
        .set_payload(r#"{"action":"wait"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn check_plans_a_turn_from_host_payload() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    let payload = json!({
        "attackActionsAvailable": 1,
        "boardSize": { "h": 10, "w": 10 },
        "enemyUnits": [
            { "armor": 1, "attackStrength": 3, "attacks": 1, "health": 8, "id": "e1",
              "kind": "knight", "maxHealth": 8, "moves": 1, "side": "enemy",
              "x": 2, "y": 0, "range": 1 }
        ],
        "friendlyUnits": [
            { "armor": 0, "attackStrength": 2, "attacks": 1, "health": 5, "id": "a1",
              "kind": "archer", "maxHealth": 5, "moves": 1, "side": "friendly",
              "x": 0, "y": 0, "range": 4 },
            { "id": "g1", "kind": "golem", "side": "friendly", "x": 5, "y": 5 }
        ],
        "moveActionsAvailable": 1,
        "player1": "p1",
        "player2": "p2",
        "turnNumber": 3,
        "uuid": "game-1",
        "yourId": "p1"
    });
    let req = test::TestRequest::post()
        .uri("/check")
        .set_json(payload)
        .to_request();
    let actions: Vec<Action> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].unit, "a1");
    assert_eq!(actions[0].action, ActionKind::Attack);
    assert_eq!((actions[0].x, actions[0].y), (2, 0));
}

#[actix_rt::test]
async fn check_without_enemies_returns_empty_list() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    let req = test::TestRequest::post()
        .uri("/check")
        .set_json(json!({
            "attackActionsAvailable": 2,
            "moveActionsAvailable": 2,
            "enemyUnits": [],
            "friendlyUnits": [
                { "id": "b1", "kind": "barbarian", "side": "friendly", "x": 0, "y": 0, "attacks": 1 },
                { "id": "a1", "kind": "archer", "side": "friendly", "x": 1, "y": 1, "attacks": 1 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(content_type(&resp), "application/json");

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"[]");
}

#[actix_rt::test]
async fn check_rejects_get() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    let req = test::TestRequest::get().uri("/check").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_rt::test]
async fn check_survives_coordinates_at_the_grid_edge() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    let req = test::TestRequest::post()
        .uri("/check")
        .set_json(json!({
            "attackActionsAvailable": 1,
            "moveActionsAvailable": 1,
            "enemyUnits": [{ "id": "e1", "kind": "knight", "side": "enemy", "x": 1, "y": 0 }],
            "friendlyUnits": [
                { "id": "b1", "kind": "barbarian", "side": "friendly", "x": i32::MIN, "y": 0 }
            ]
        }))
        .to_request();
    let actions: Vec<Action> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action, ActionKind::Move);
    assert_eq!((actions[0].x, actions[0].y), (i32::MIN + 1, 0));
}

#[actix_rt::test]
async fn healthz_says_ok() {
    let app = test::init_service(App::new().configure(init_routes)).await;

    let req = test::TestRequest::get().uri("/healthz").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(&body[..], b"ok");
}
