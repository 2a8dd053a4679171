use crate::server_tests::{start_test_server, start_test_server_without_store};
use crate::server_tests::test_client::TestClient;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Deserialize, Debug)]
struct ErrorBody {
	r#type: String,
	status: u16,
}

async fn add_room(client: &TestClient, room: Value) -> reqwest::Response {
	client
		.post("/api/rooms")
		.json(&room)
		.send()
		.await
		.expect("Request failed.")
}

async fn allocate(client: &TestClient, query: &str) -> reqwest::Response {
	client
		.get(&format!("/api/rooms/allocate?{query}"))
		.send()
		.await
		.expect("Request failed.")
}

async fn list_rooms(client: &TestClient) -> Value {
	let response = client.get("/api/rooms").send().await.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	response.json().await.expect("Failed to parse room list JSON")
}

#[tokio::test]
async fn should_list_no_rooms_initially() {
	let client = start_test_server().await;

	assert_eq!(json!([]), list_rooms(&client).await);
}

#[tokio::test]
async fn should_add_and_list_rooms() {
	let client = start_test_server().await;

	let response = add_room(
		&client,
		json!({"roomNo": " 101 ", "capacity": 2, "hasAC": true, "hasAttachedWashroom": false}),
	)
	.await;

	assert_eq!(StatusCode::CREATED, response.status());
	let created = response.json::<Value>().await.expect("Failed to parse room JSON");
	let expected = json!({"roomNo": "101", "capacity": 2, "hasAC": true, "hasAttachedWashroom": false});
	assert_eq!(expected, created);
	assert_eq!(json!([expected]), list_rooms(&client).await);
}

#[tokio::test]
async fn should_reject_duplicate_rooms_with_conflict() {
	let client = start_test_server().await;
	let room = json!({"roomNo": "101", "capacity": 3});

	let first = add_room(&client, room.clone()).await;
	let second = add_room(&client, room).await;

	assert_eq!(StatusCode::CREATED, first.status());
	assert_eq!(StatusCode::CONFLICT, second.status());
	let error = second.json::<ErrorBody>().await.expect("Failed to parse error JSON");
	assert_eq!("room-creation-already-exists", error.r#type);
	assert_eq!(409, error.status);

	let rooms = list_rooms(&client).await;
	assert_eq!(1, rooms.as_array().map_or(0, Vec::len));
}

#[tokio::test]
async fn should_reject_invalid_rooms() {
	let client = start_test_server().await;

	for (room, expected_type) in [
		(json!({"roomNo": "   ", "capacity": 2}), "room-creation-room-number-empty"),
		(json!({"roomNo": "101", "capacity": 0}), "room-creation-capacity-too-small"),
		(json!({"roomNo": "101"}), "room-creation-capacity-too-small"),
		(json!({"roomNo": "101", "capacity": "two"}), "invalid-request"),
	] {
		let response = add_room(&client, room.clone()).await;

		assert_eq!(StatusCode::BAD_REQUEST, response.status(), "Accepted {room}");
		let error = response.json::<ErrorBody>().await.expect("Failed to parse error JSON");
		assert_eq!(expected_type, error.r#type, "Wrong error for {room}");
	}

	assert_eq!(json!([]), list_rooms(&client).await);
}

#[tokio::test]
async fn should_allocate_best_fitting_room() {
	let client = start_test_server().await;
	add_room(
		&client,
		json!({"roomNo": "101", "capacity": 2, "hasAC": true, "hasAttachedWashroom": true}),
	)
	.await;
	add_room(
		&client,
		json!({"roomNo": "102", "capacity": 4, "hasAC": false, "hasAttachedWashroom": true}),
	)
	.await;

	let response = allocate(&client, "students=2&needsAC=false&needsWashroom=true").await;

	assert_eq!(StatusCode::OK, response.status());
	let allocated = response.json::<Value>().await.expect("Failed to parse allocation JSON");
	assert_eq!(
		json!({"roomNo": "101", "capacity": 2, "hasAC": true, "hasAttachedWashroom": true}),
		allocated
	);
}

#[tokio::test]
async fn should_answer_no_room_available_successfully() {
	let client = start_test_server().await;
	add_room(
		&client,
		json!({"roomNo": "101", "capacity": 2, "hasAC": false, "hasAttachedWashroom": false}),
	)
	.await;

	let response = allocate(&client, "students=1&needsAC=true&needsWashroom=false").await;

	assert_eq!(StatusCode::OK, response.status());
	let body = response.json::<Value>().await.expect("Failed to parse allocation JSON");
	assert_eq!(json!({"message": "No room available"}), body);
}

#[tokio::test]
async fn should_answer_no_room_available_without_rooms() {
	let client = start_test_server().await;

	let response = allocate(&client, "students=3&needsAC=false&needsWashroom=false").await;

	assert_eq!(StatusCode::OK, response.status());
	let body = response.json::<Value>().await.expect("Failed to parse allocation JSON");
	assert_eq!(json!({"message": "No room available"}), body);
}

#[tokio::test]
async fn should_reject_allocation_for_zero_students() {
	let client = start_test_server().await;
	add_room(&client, json!({"roomNo": "101", "capacity": 2})).await;

	let response = allocate(&client, "students=0&needsAC=false&needsWashroom=false").await;

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	let error = response.json::<ErrorBody>().await.expect("Failed to parse error JSON");
	assert_eq!("allocation-invalid-student-count", error.r#type);
}

#[tokio::test]
async fn should_reject_invalid_input_even_when_the_store_is_unreachable() {
	let client = start_test_server_without_store().await;

	let allocation = allocate(&client, "students=0&needsAC=false&needsWashroom=false").await;
	assert_eq!(StatusCode::BAD_REQUEST, allocation.status());
	let error = allocation.json::<ErrorBody>().await.expect("Failed to parse error JSON");
	assert_eq!("allocation-invalid-student-count", error.r#type);

	let creation = add_room(&client, json!({"roomNo": "  ", "capacity": 0})).await;
	assert_eq!(StatusCode::BAD_REQUEST, creation.status());
	let error = creation.json::<ErrorBody>().await.expect("Failed to parse error JSON");
	assert_eq!("room-creation-room-number-empty", error.r#type);
}

#[tokio::test]
async fn should_ask_to_retry_valid_requests_when_the_store_is_unreachable() {
	let client = start_test_server_without_store().await;

	for response in [
		allocate(&client, "students=2&needsAC=false&needsWashroom=false").await,
		add_room(&client, json!({"roomNo": "101", "capacity": 2})).await,
		client.get("/api/rooms").send().await.expect("Request failed."),
	] {
		assert_eq!(StatusCode::SERVICE_UNAVAILABLE, response.status());
		assert_eq!(
			Some("1"),
			response
				.headers()
				.get("retry-after")
				.and_then(|value| value.to_str().ok())
		);
		let error = response.json::<ErrorBody>().await.expect("Failed to parse error JSON");
		assert_eq!("storage-unavailable", error.r#type);
		assert_eq!(503, error.status);
	}
}

#[tokio::test]
async fn should_reject_malformed_allocation_queries() {
	let client = start_test_server().await;

	let response = allocate(&client, "students=many&needsAC=false&needsWashroom=false").await;

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	let error = response.json::<ErrorBody>().await.expect("Failed to parse error JSON");
	assert_eq!("invalid-request", error.r#type);
}

#[tokio::test]
async fn should_search_rooms_by_exact_amenities() {
	let client = start_test_server().await;
	for room in [
		json!({"roomNo": "103", "capacity": 3, "hasAC": true, "hasAttachedWashroom": false}),
		json!({"roomNo": "102", "capacity": 2, "hasAC": true, "hasAttachedWashroom": false}),
		json!({"roomNo": "101", "capacity": 2, "hasAC": true, "hasAttachedWashroom": true}),
		json!({"roomNo": "104", "capacity": 1, "hasAC": true, "hasAttachedWashroom": false}),
	] {
		add_room(&client, room).await;
	}

	let response = client
		.get("/api/rooms/search?capacity=2&hasAC=true&hasAttachedWashroom=false")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let room_numbers = response
		.json::<Vec<Value>>()
		.await
		.expect("Failed to parse search JSON")
		.into_iter()
		.map(|room| room["roomNo"].clone())
		.collect::<Vec<_>>();
	assert_eq!(vec![json!("102"), json!("103")], room_numbers);
}

#[tokio::test]
async fn should_allow_cross_origin_requests() {
	let client = start_test_server().await;

	let response = client
		.get("/api/rooms")
		.header("Origin", "http://localhost:3000")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	assert_eq!(
		Some("*"),
		response
			.headers()
			.get("access-control-allow-origin")
			.and_then(|value| value.to_str().ok())
	);
}
