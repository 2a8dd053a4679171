use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
	/// All rooms ordered by room number.
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<model::Room>, DatabaseError>;
	async fn create(&self, connection: &mut dyn Connection, room: &model::Room) -> Result<model::Room, DatabaseError>;
}

assert_obj_safe!(RoomRepository);
