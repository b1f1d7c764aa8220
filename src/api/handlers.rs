//! Axum request handlers for the HTTP API.
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};
use crate::inpaint::client::InpaintClient;
use crate::inpaint::types::{ErrorBody, InpaintRequest, InpaintResponse};

pub async fn root() -> &'static str {
    "Inpaint API Proxy"
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Mounted for every method; the method gate lives in [`handle`].
///
/// A POST body the server refuses to buffer (over the router's body limit)
/// still gets a JSON `{error}` answer with the rejection's status.
pub async fn inpaint(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if method == Method::POST => {
            tracing::warn!("Rejected inpainting request body: {}", rejection.body_text());
            let error = ErrorBody { error: rejection.body_text() };
            return (rejection.status(), Json(error)).into_response();
        }
        Err(_) => Bytes::new(),
    };
    let (status, body) = handle(&method, &body, &state.inpaint_client).await;
    (status, Json(body)).into_response()
}

/// Whole request/response translation for one inpainting call.
///
/// Returns the status and JSON body to send back: `{output}` on 200,
/// `{error}` otherwise. At most one upstream request is made, and none when
/// the method or the required fields are wrong.
pub async fn handle(method: &Method, body: &[u8], client: &InpaintClient) -> (StatusCode, Value) {
    let request_id = Uuid::new_v4();
    let outcome = process(method, body, client)
        .instrument(tracing::info_span!("inpaint", %request_id))
        .await;
    match outcome {
        Ok(output) => {
            tracing::info!(%request_id, "Inpainting request completed");
            (StatusCode::OK, to_json(InpaintResponse { output }))
        }
        Err(e) => {
            match e {
                AppError::MethodNotAllowed | AppError::MissingFields => {
                    tracing::warn!(%request_id, %method, "Rejected inpainting request: {}", e);
                }
                _ => {
                    tracing::error!(%request_id, url = client.url(), "Inpainting error: {:?}", e);
                }
            }
            (e.status_code(), to_json(ErrorBody { error: e.message() }))
        }
    }
}

async fn process(method: &Method, body: &[u8], client: &InpaintClient) -> AppResult<String> {
    if *method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }
    let request = InpaintRequest::from_body(body)?;
    client.inpaint(&request).await
}

fn to_json<T: serde::Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
