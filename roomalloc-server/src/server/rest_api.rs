use crate::allocation::{AllocationOutcome, AllocationRequest, SearchCriteria, allocate, search};
use crate::context::ApplicationContext;
use crate::database::{Database, Repository};
use crate::room::{NewRoom, register_room};
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::models::{AllocationQuery, AllocationResponse, RoomRequest, RoomResponse, SearchQuery};
use crate::server::rest_api::response::Created;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::info;

mod error;
mod models;
mod response;

pub fn rest_api() -> Router<ApplicationContext> {
	Router::new()
		.route("/rooms", get(list_rooms).post(add_room))
		.route("/rooms/search", get(search_rooms))
		.route("/rooms/allocate", get(allocate_room))
}

async fn list_rooms(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
) -> Result<Json<Vec<RoomResponse>>, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	let rooms = repository.room().list(&mut *connection).await?;

	Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

async fn add_room(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
	request: Result<Json<RoomRequest>, JsonRejection>,
) -> Result<Created<Json<RoomResponse>>, ApiErrorResponse> {
	let Json(RoomRequest {
		room_no,
		capacity,
		has_ac,
		has_attached_washroom,
	}) = request?;

	let room = NewRoom {
		room_no: &room_no,
		capacity,
		has_ac,
		has_attached_washroom,
	}
	.validate()?;

	let mut connection = database.connection().await?;
	let room = register_room(repository.room(), &mut *connection, room).await?;

	Ok(Created(Json(room.into())))
}

async fn search_rooms(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
	query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<RoomResponse>>, ApiErrorResponse> {
	let Query(SearchQuery {
		capacity,
		has_ac,
		has_attached_washroom,
	}) = query?;

	let mut connection = database.connection().await?;
	let rooms = repository.room().list(&mut *connection).await?;
	let found = search(
		&rooms,
		&SearchCriteria {
			capacity,
			has_ac,
			has_attached_washroom,
		},
	);

	Ok(Json(found.into_iter().cloned().map(RoomResponse::from).collect()))
}

async fn allocate_room(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
	query: Result<Query<AllocationQuery>, QueryRejection>,
) -> Result<Json<AllocationResponse>, ApiErrorResponse> {
	let Query(AllocationQuery {
		students,
		needs_ac,
		needs_washroom,
	}) = query?;
	let group = AllocationRequest {
		students,
		needs_ac,
		needs_washroom,
	}
	.validate()?;

	let mut connection = database.connection().await?;
	let rooms = repository.room().list(&mut *connection).await?;
	let outcome = allocate(&rooms, &group);

	match outcome {
		AllocationOutcome::Allocated(room) => {
			info!(students, needs_ac, needs_washroom, room_no = %room.room_no, "Allocated room");
		}
		AllocationOutcome::NoRoomAvailable => {
			info!(students, needs_ac, needs_washroom, "No room available");
		}
	}

	Ok(Json(outcome.into()))
}
