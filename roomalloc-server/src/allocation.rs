//! Matching of student groups to rooms.
//!
//! Both operations work on a snapshot of the room collection that the caller passes in and never
//! modify it. Whether an allocated room is subsequently considered occupied is up to the caller.

use crate::room::model::Room;
use std::cmp::Ordering;
use std::num::NonZeroU64;
use thiserror::Error;

/// An allocation request as received, before any validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationRequest {
	pub students: i64,
	pub needs_ac: bool,
	pub needs_washroom: bool,
}

impl AllocationRequest {
	pub fn validate(self) -> Result<StudentGroup, AllocationError> {
		let students = u64::try_from(self.students)
			.ok()
			.and_then(NonZeroU64::new)
			.ok_or(AllocationError::InvalidStudentCount(self.students))?;

		Ok(StudentGroup {
			students,
			needs_ac: self.needs_ac,
			needs_washroom: self.needs_washroom,
		})
	}
}

/// A validated request: at least one student, amenities as hard requirements when set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentGroup {
	students: NonZeroU64,
	needs_ac: bool,
	needs_washroom: bool,
}

impl StudentGroup {
	fn fits_into(&self, room: &Room) -> bool {
		u64::from(room.capacity) >= self.students.get()
			&& (!self.needs_ac || room.has_ac)
			&& (!self.needs_washroom || room.has_attached_washroom)
	}
}

#[derive(Debug, PartialEq, Eq)]
pub enum AllocationOutcome<'rooms> {
	Allocated(&'rooms Room),
	NoRoomAvailable,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AllocationError {
	#[error("Number of students must be 1 or greater, got {0}.")]
	InvalidStudentCount(i64),
}

/// Best fit: the eligible room with the smallest capacity, ties going to the lowest room number.
pub fn allocate<'rooms>(rooms: &'rooms [Room], group: &StudentGroup) -> AllocationOutcome<'rooms> {
	rooms
		.iter()
		.filter(|room| group.fits_into(room))
		.min_by(|left, right| by_capacity_then_room_number(left, right))
		.map_or(AllocationOutcome::NoRoomAvailable, AllocationOutcome::Allocated)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
	/// Minimum capacity.
	pub capacity: i64,
	pub has_ac: bool,
	pub has_attached_washroom: bool,
}

/// Rooms with at least the given capacity whose amenities match the criteria exactly,
/// smallest rooms first.
pub fn search<'rooms>(rooms: &'rooms [Room], criteria: &SearchCriteria) -> Vec<&'rooms Room> {
	let mut matches = rooms
		.iter()
		.filter(|room| {
			i64::from(room.capacity) >= criteria.capacity
				&& room.has_ac == criteria.has_ac
				&& room.has_attached_washroom == criteria.has_attached_washroom
		})
		.collect::<Vec<_>>();
	matches.sort_by(|left, right| by_capacity_then_room_number(left, right));
	matches
}

fn by_capacity_then_room_number(left: &Room, right: &Room) -> Ordering {
	left.capacity
		.cmp(&right.capacity)
		.then_with(|| left.room_no.cmp(&right.room_no))
}
