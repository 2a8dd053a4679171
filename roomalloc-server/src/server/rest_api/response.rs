use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;

/// Response wrapper for HTTP Status Code 201 CREATED
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
	fn into_response(self) -> Response {
		(StatusCode::CREATED, self.0).into_response()
	}
}
