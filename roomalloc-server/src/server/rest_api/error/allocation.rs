use crate::allocation::AllocationError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;

impl From<AllocationError> for ApiErrorResponse {
	fn from(error: AllocationError) -> Self {
		use AllocationError::*;
		match error {
			InvalidStudentCount(_) => ApiErrorResponse {
				r#type: "allocation-invalid-student-count",
				status: StatusCode::BAD_REQUEST.as_u16(),
				message: error.to_string(),
			},
		}
	}
}
