use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::Room;
use crate::room::repository::RoomRepository;
use async_trait::async_trait;
use sqlx::query_as;

#[async_trait]
impl RoomRepository for SqliteRepository {
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT room_no, capacity, has_ac, has_attached_washroom
			FROM room
			ORDER BY room_no ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn create(&self, connection: &mut dyn Connection, room: &Room) -> Result<Room, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"INSERT INTO room(room_no, capacity, has_ac, has_attached_washroom) VALUES (?1, ?2, ?3, ?4)
			RETURNING
				room_no,
				capacity,
				has_ac,
				has_attached_washroom",
		)
		.bind(room.room_no.as_str())
		.bind(room.capacity)
		.bind(room.has_ac)
		.bind(room.has_attached_washroom)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}
}
