use crate::commandline::Commandline;
use crate::error::RoomAllocError;
use clap::Parser;

mod allocation;
mod commandline;
mod configuration;
mod context;
mod database;
mod error;
mod room;
mod server;

#[tokio::main]
async fn main() -> Result<(), RoomAllocError> {
	let commandline = Commandline::parse();
	commandline.run().await
}
