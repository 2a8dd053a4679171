use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::Room;
use crate::room::repository::RoomRepository;
use thiserror::Error;
use tracing::{info, warn};

pub mod model;
pub mod repository;

const MAX_ROOM_NUMBER_LENGTH: usize = 64;

/// A room as submitted for registration, before any validation.
#[derive(Clone, Copy, Debug)]
pub struct NewRoom<'a> {
	pub room_no: &'a str,
	pub capacity: i64,
	pub has_ac: bool,
	pub has_attached_washroom: bool,
}

impl NewRoom<'_> {
	/// Checks the candidate and produces the room as it will be stored, with a trimmed room number.
	pub fn validate(self) -> Result<Room, RoomCreationError> {
		let room_no = self.room_no.trim();
		if room_no.is_empty() {
			return Err(RoomCreationError::RoomNumberEmpty);
		}

		if room_no.len() > MAX_ROOM_NUMBER_LENGTH {
			return Err(RoomCreationError::RoomNumberTooLong);
		}

		if self.capacity < 1 {
			return Err(RoomCreationError::CapacityTooSmall);
		}
		let capacity = u32::try_from(self.capacity).map_err(|_| RoomCreationError::CapacityTooLarge)?;

		Ok(Room {
			room_no: room_no.to_owned(),
			capacity,
			has_ac: self.has_ac,
			has_attached_washroom: self.has_attached_washroom,
		})
	}
}

/// Stores an already validated room, reporting an existing room number as a conflict.
pub async fn register_room(
	repository: &dyn RoomRepository,
	connection: &mut dyn Connection,
	room: Room,
) -> Result<Room, RoomCreationError> {
	match repository.create(connection, &room).await {
		Ok(room) => {
			info!(
				room_no = %room.room_no,
				capacity = room.capacity,
				has_ac = room.has_ac,
				has_attached_washroom = room.has_attached_washroom,
				"Registered room"
			);
			Ok(room)
		}
		Err(DatabaseError::UniqueViolation(_)) => {
			warn!(room_no = %room.room_no, "Rejected duplicate room");
			Err(RoomCreationError::AlreadyExists)
		}
		Err(error) => Err(error.into()),
	}
}

#[derive(Error, Debug)]
pub enum RoomCreationError {
	#[error("Room number was empty or whitespace-only.")]
	RoomNumberEmpty,
	#[error("Room number is too long. (>64 bytes UTF-8)")]
	RoomNumberTooLong,
	#[error("Capacity must be 1 or greater.")]
	CapacityTooSmall,
	#[error("Capacity is too large.")]
	CapacityTooLarge,
	#[error("Room already added")]
	AlreadyExists,
	#[error("Failed to store room: {0}")]
	Database(#[from] DatabaseError),
}
