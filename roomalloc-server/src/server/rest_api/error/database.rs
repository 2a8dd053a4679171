use crate::database::error::DatabaseError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use tracing::error;

impl From<DatabaseError> for ApiErrorResponse {
	fn from(database_error: DatabaseError) -> Self {
		if database_error.is_transient() {
			error!(%database_error, "Room storage is unavailable");
			return ApiErrorResponse {
				r#type: "storage-unavailable",
				status: StatusCode::SERVICE_UNAVAILABLE.as_u16(),
				message: "Room storage is currently unavailable, please retry.".to_string(),
			};
		}

		error!(%database_error, "Room storage failed");
		ApiErrorResponse {
			r#type: "storage-error",
			status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
			message: "Room storage failed.".to_string(),
		}
	}
}
