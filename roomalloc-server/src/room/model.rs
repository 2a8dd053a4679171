use sqlx::FromRow;

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Room {
	pub room_no: String,
	pub capacity: u32,
	pub has_ac: bool,
	pub has_attached_washroom: bool,
}
