//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use state_builders::{build_http_state, build_vehicle_store};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use fleet_backend::Trace;
#[cfg(debug_assertions)]
use fleet_backend::doc::ApiDoc;
use fleet_backend::inbound::http::health::{HealthState, live, ready};
use fleet_backend::inbound::http::state::HttpState;
use fleet_backend::inbound::http::vehicles::{create_vehicle, create_vehicle_json_config};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .app_data(create_vehicle_json_config())
        .service(create_vehicle);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let store = build_vehicle_store(&config);
    let http_state = build_http_state(store.clone());
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready(store);
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    fn fixture_app() -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let store = build_vehicle_store(&config);
        let health = web::Data::new(HealthState::new());
        health.mark_ready(store.clone());
        build_app(health, build_http_state(store))
    }

    #[actix_web::test]
    async fn fixture_backed_app_creates_vehicles_with_sequential_ids() {
        let app = actix_test::init_service(fixture_app()).await;
        let payload = json!({
            "shortcode": "abcd",
            "battery": 17,
            "latitude": 45,
            "longitude": 45,
        });

        let mut ids = Vec::new();
        for _ in 0..2 {
            let request = actix_test::TestRequest::post()
                .uri("/api/v1/vehicles")
                .set_json(&payload)
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.headers().contains_key("trace-id"));
            let body: Value = actix_test::read_body_json(response).await;
            ids.push(body.pointer("/vehicle/id").and_then(Value::as_i64));
        }

        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[actix_web::test]
    async fn readiness_endpoint_is_wired() {
        let app = actix_test::init_service(fixture_app()).await;

        let request = actix_test::TestRequest::get().uri("/health/ready").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
