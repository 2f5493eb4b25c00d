//! JSON envelope shared by every endpoint.
//!
//! Successful responses are `{"message": ..., "data": ...}`; failures are
//! `{"status": <reason phrase>, "message": ...}`.

use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

/// Success envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

/// Error envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// 200 OK with the success envelope
pub fn ok<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::new(message, data))
}

/// 201 Created with the success envelope
pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Created().json(Envelope::new(message, data))
}

pub fn error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    let body = ErrorBody {
        status: status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string(),
        message: message.into(),
    };

    HttpResponse::build(status).json(body)
}
