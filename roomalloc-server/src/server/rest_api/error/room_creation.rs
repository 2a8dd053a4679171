use crate::room::RoomCreationError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;

impl From<RoomCreationError> for ApiErrorResponse {
	fn from(error: RoomCreationError) -> Self {
		use RoomCreationError::*;
		match error {
			RoomNumberEmpty => ApiErrorResponse {
				r#type: "room-creation-room-number-empty",
				status: StatusCode::BAD_REQUEST.as_u16(),
				message: error.to_string(),
			},
			RoomNumberTooLong => ApiErrorResponse {
				r#type: "room-creation-room-number-too-long",
				status: StatusCode::BAD_REQUEST.as_u16(),
				message: error.to_string(),
			},
			CapacityTooSmall => ApiErrorResponse {
				r#type: "room-creation-capacity-too-small",
				status: StatusCode::BAD_REQUEST.as_u16(),
				message: error.to_string(),
			},
			CapacityTooLarge => ApiErrorResponse {
				r#type: "room-creation-capacity-too-large",
				status: StatusCode::BAD_REQUEST.as_u16(),
				message: error.to_string(),
			},
			AlreadyExists => ApiErrorResponse {
				r#type: "room-creation-already-exists",
				status: StatusCode::CONFLICT.as_u16(),
				message: error.to_string(),
			},
			Database(database_error) => database_error.into(),
		}
	}
}
