//! Storage of the room collection.
//!
//! Handlers only see the object safe traits below. A [`Database`] hands out a [`Connection`] per
//! request and the [`Repository`] runs the room queries on it, so callers can validate input before
//! a connection is ever requested.

use crate::database::error::DatabaseError;
use crate::room::repository::RoomRepository;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;
use std::any::{Any, type_name};

pub mod error;
pub mod sqlite;

#[async_trait]
pub trait Database: Send + Sync {
	/// Brings the room table up to the latest schema.
	async fn migrate(&mut self) -> Result<(), DatabaseError>;
	/// Fails with [`DatabaseError::Connection`] or [`DatabaseError::Timeout`] while the store is unreachable.
	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError>;
}

assert_obj_safe!(Database);

/// A connection checked out from a [`Database`], downcast by the repository of the same backend.
pub trait Connection: Any + Send + Sync {
	fn type_name(&self) -> &'static str {
		type_name::<Self>()
	}
}

assert_obj_safe!(Connection);

pub trait Repository: RoomRepository + Send + Sync + 'static {
	fn room(&self) -> &dyn RoomRepository;
}

assert_obj_safe!(Repository);
