use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{warn, Instrument};
use uuid::Uuid;

use crate::config::SystemConfig;
use crate::error::TranslateError;
use crate::handlers::handle_translation;
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResponse};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // Translation
        .route("/translation/", post(translate_text))
        .route("/translation", post(translate_text))
}

/// Full application: routes, tracing and CORS layers, shared state.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.system_config);

    Router::new()
        .merge(create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

pub fn cors_layer(system_config: &SystemConfig) -> CorsLayer {
    if system_config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = system_config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.translator.name()
    }))
}

async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, TranslateError> {
    let Json(request) = payload?;

    let span = tracing::info_span!("translation", request_id = %Uuid::new_v4());
    let response = handle_translation(state.translator.as_ref(), request)
        .instrument(span)
        .await?;

    Ok(Json(response))
}
