use crate::allocation::AllocationOutcome;
use crate::room::model::Room;
use serde::{Deserialize, Serialize};

/// Observable result of an allocation that found no room. Clients branch on this exact text.
pub const NO_ROOM_AVAILABLE: &str = "No room available";

/// Missing fields fall back to values that fail validation, so they are reported like invalid ones.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RoomRequest {
	#[serde(rename = "roomNo")]
	pub room_no: String,
	pub capacity: i64,
	#[serde(rename = "hasAC")]
	pub has_ac: bool,
	#[serde(rename = "hasAttachedWashroom")]
	pub has_attached_washroom: bool,
}

#[derive(Serialize)]
pub struct RoomResponse {
	#[serde(rename = "roomNo")]
	pub room_no: String,
	pub capacity: u32,
	#[serde(rename = "hasAC")]
	pub has_ac: bool,
	#[serde(rename = "hasAttachedWashroom")]
	pub has_attached_washroom: bool,
}

impl From<Room> for RoomResponse {
	fn from(room: Room) -> Self {
		let Room {
			room_no,
			capacity,
			has_ac,
			has_attached_washroom,
		} = room;
		Self {
			room_no,
			capacity,
			has_ac,
			has_attached_washroom,
		}
	}
}

#[derive(Deserialize)]
pub struct SearchQuery {
	pub capacity: i64,
	#[serde(rename = "hasAC")]
	pub has_ac: bool,
	#[serde(rename = "hasAttachedWashroom")]
	pub has_attached_washroom: bool,
}

#[derive(Deserialize)]
pub struct AllocationQuery {
	pub students: i64,
	#[serde(rename = "needsAC")]
	pub needs_ac: bool,
	#[serde(rename = "needsWashroom")]
	pub needs_washroom: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum AllocationResponse {
	Allocated(RoomResponse),
	NoRoomAvailable { message: &'static str },
}

impl From<AllocationOutcome<'_>> for AllocationResponse {
	fn from(outcome: AllocationOutcome<'_>) -> Self {
		match outcome {
			AllocationOutcome::Allocated(room) => Self::Allocated(room.clone().into()),
			AllocationOutcome::NoRoomAvailable => Self::NoRoomAvailable {
				message: NO_ROOM_AVAILABLE,
			},
		}
	}
}
