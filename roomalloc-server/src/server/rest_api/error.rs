use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::http::header::RETRY_AFTER;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

mod allocation;
mod database;
mod room_creation;

/// Type-erased error response
///
/// NOTE: This type is inspired by RFC7807 (Problem Details for HTTP APIs) but spares on a lot of
/// the details to avoid complexity.
///
/// See: <https://www.rfc-editor.org/rfc/rfc7807.html>
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
	r#type: &'static str,
	status: u16,
	message: String,
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		let status_code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		if status_code == StatusCode::SERVICE_UNAVAILABLE {
			return (status_code, [(RETRY_AFTER, "1")], Json(self)).into_response();
		}

		(status_code, Json(self)).into_response()
	}
}

impl From<JsonRejection> for ApiErrorResponse {
	fn from(rejection: JsonRejection) -> Self {
		ApiErrorResponse {
			r#type: "invalid-request",
			status: StatusCode::BAD_REQUEST.as_u16(),
			message: rejection.body_text(),
		}
	}
}

impl From<QueryRejection> for ApiErrorResponse {
	fn from(rejection: QueryRejection) -> Self {
		ApiErrorResponse {
			r#type: "invalid-request",
			status: StatusCode::BAD_REQUEST.as_u16(),
			message: rejection.body_text(),
		}
	}
}
