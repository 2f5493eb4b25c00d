use actix_web::{error::InternalError, error::JsonPayloadError, http::StatusCode, HttpRequest};

use crate::core::response;

/// Turn JSON extractor failures into the standard error envelope
///
/// Register with `web::JsonConfig::default().error_handler(json_error_handler)`.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(
        path = %req.path(),
        error = %err,
        "Rejected request body"
    );

    let status = match &err {
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };

    let message = match status {
        StatusCode::BAD_REQUEST => "error parsing request body".to_string(),
        _ => err.to_string(),
    };

    InternalError::from_response(err, response::error(status, message)).into()
}
