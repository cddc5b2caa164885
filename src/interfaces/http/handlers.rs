use super::AppState;
use super::page::render_index;
use crate::application::engine::TransformRequest;
use crate::domain::point::Shape;
use crate::domain::transform::Operation;
use crate::error::{Result, TransformError};
use poem::http::StatusCode;
use poem::web::{Data, Html, Json};
use poem::{IntoResponse, Response, handler};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::warn;

type JsonTransformRequest = TransformRequest<Map<String, Value>>;

#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub shape: Shape,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[handler]
pub fn index(Data(state): Data<&Arc<AppState>>) -> Html<String> {
    Html(render_index(state.engine.reference_shape()))
}

/// `POST /api/transform`
///
/// Only an unrecognized `op` (any value other than the three tags, strings or
/// not) is answered with a 400 and a JSON error. Any other malformed body is a
/// plain 500, including `"shape": null` and results that overflow `f64`.
#[handler]
pub fn transform_shape(Data(state): Data<&Arc<AppState>>, body: Vec<u8>) -> Response {
    match run_transform(state, &body) {
        Ok(shape) => Json(TransformResponse { shape }).into_response(),
        Err(err) if err.is_client_error() => {
            warn!(error = ?err, "rejected transform request");
            Json(ErrorResponse {
                error: err.to_string(),
            })
            .with_status(StatusCode::BAD_REQUEST)
            .into_response()
        }
        Err(err) => {
            warn!(error = %err, "transform request failed");
            "Internal Server Error"
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
    }
}

fn run_transform(state: &AppState, body: &[u8]) -> Result<Shape> {
    let request = parse_request(body)?;
    state.engine.process(&request)
}

/// Checks the body in order: `op` and `params` present, `op` a known tag,
/// then `shape` and `params` well-formed.
fn parse_request(body: &[u8]) -> Result<JsonTransformRequest> {
    let Value::Object(mut fields) = serde_json::from_slice::<Value>(body)? else {
        return Err(TransformError::InvalidRequest(
            "body must be a JSON object".to_string(),
        ));
    };
    let op = fields
        .remove("op")
        .ok_or_else(|| TransformError::InvalidRequest("missing `op`".to_string()))?;
    let params = fields
        .remove("params")
        .ok_or_else(|| TransformError::InvalidRequest("missing `params`".to_string()))?;

    let operation = match &op {
        Value::String(tag) => tag.parse::<Operation>()?,
        other => return Err(TransformError::UnknownOperation(other.to_string())),
    };

    let shape = fields
        .get("shape")
        .map(Shape::deserialize)
        .transpose()?;

    let Value::Object(params) = params else {
        return Err(TransformError::InvalidRequest(
            "`params` must be an object".to_string(),
        ));
    };

    Ok(TransformRequest {
        shape,
        operation,
        params,
    })
}
