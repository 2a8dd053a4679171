use crate::context::ApplicationContext;
use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let address = application_context.configuration.address;
	let shutdown_timeout = application_context.configuration.shutdown_timeout;

	let listener = TcpListener::bind(address).await?;
	info!(address = %listener.local_addr()?, "Listening for requests");

	let (stopping_sender, mut stopping_receiver) = watch::channel(false);
	let server = axum::serve(listener, create_router(application_context)).with_graceful_shutdown(async move {
		shutdown_signal().await;
		let _ = stopping_sender.send(true);
	});

	tokio::select! {
		result = server.into_future() => result,
		() = async {
			let _ = stopping_receiver.wait_for(|stopping| *stopping).await;
			tokio::time::sleep(shutdown_timeout).await;
		} => {
			warn!(?shutdown_timeout, "Open connections did not finish in time, shutting down anyway");
			Ok(())
		}
	}
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	let cors = CorsLayer::new()
		.allow_origin(Any)
		.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
		.allow_headers([CONTENT_TYPE])
		.max_age(Duration::from_secs(60 * 60));

	Router::new()
		.nest("/api", rest_api::rest_api())
		.layer(TraceLayer::new_for_http())
		.layer(cors)
		.with_state(application_context)
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(error) = ctrl_c().await {
			warn!(%error, "Failed to listen for Ctrl+C");
			std::future::pending::<()>().await;
		}
		info!("Received Ctrl+C, shutting down");
	};

	#[cfg(unix)]
	let terminate = async {
		use tokio::signal::unix::{SignalKind, signal};

		match signal(SignalKind::terminate()) {
			Ok(mut terminate) => {
				terminate.recv().await;
				info!("Received terminate signal, shutting down");
			}
			Err(error) => {
				warn!(%error, "Failed to listen for terminate signal");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		() = ctrl_c => {},
		() = terminate => {},
	}
}
