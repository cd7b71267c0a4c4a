use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use skyroute_api::{app, AppState};
use skyroute_core::FlightSystem;
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(FlightSystem::new()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn add_flight(app: &Router, id: &str, source: &str, destination: &str, distance: u32, seats: u32) {
    let (status, _) = send(
        app,
        Method::POST,
        "/v1/flights",
        Some(json!({
            "flight_id": id,
            "source": source,
            "destination": destination,
            "distance": distance,
            "seats": seats,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_flight_admin_flow() {
    let app = test_app();
    add_flight(&app, "F1", "A", "B", 100, 2).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/flights",
        Some(json!({"flight_id": "F1", "source": "A", "destination": "C", "distance": 5, "seats": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("F1"));

    let (status, body) = send(&app, Method::POST, "/v1/flights/F1/cancel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], json!(false));

    let (status, _) = send(&app, Method::POST, "/v1/flights/F1/cancel", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    for (id, source, destination) in [("F,2", "A", "B"), ("F2", "A,X", "B"), ("F2", "A", "B,Y")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/v1/flights",
            Some(json!({"flight_id": id, "source": source, "destination": destination, "distance": 5, "seats": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, _) = send(&app, Method::POST, "/v1/flights/NOPE/schedule", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, flights) = send(&app, Method::GET, "/v1/flights", None).await;
    assert_eq!(flights.as_array().unwrap().len(), 1);
    assert_eq!(flights[0]["active"], json!(false));

    let (_, active) = send(&app, Method::GET, "/v1/flights/active", None).await;
    assert!(active.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_booking_flow() {
    let app = test_app();
    add_flight(&app, "F1", "A", "B", 100, 2).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/bookings/queue",
        Some(json!({"flight_id": "F1", "passenger_name": "Alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["queue"], json!(["F1"]));

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/bookings/process",
        Some(json!({"passenger_name": "Bob"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["flight_id"], json!("F1"));
    assert_eq!(body["booking"], json!({"id": 1, "passenger": "Bob"}));

    let (_, bookings) = send(&app, Method::GET, "/v1/flights/F1/bookings", None).await;
    assert_eq!(bookings, json!([{"id": 1, "passenger": "Bob"}]));

    let (_, flights) = send(&app, Method::GET, "/v1/flights", None).await;
    assert_eq!(flights[0]["seats"], json!(1));

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/bookings/process",
        Some(json!({"passenger_name": "Carol"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::DELETE, "/v1/flights/F1/bookings/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, "/v1/flights/F1/bookings/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, unknown) = send(&app, Method::GET, "/v1/flights/NOPE/bookings", None).await;
    assert_eq!(unknown, json!([]));
}

#[tokio::test]
async fn test_network_queries() {
    let app = test_app();
    add_flight(&app, "F1", "A", "B", 100, 2).await;
    add_flight(&app, "F2", "B", "C", 50, 1).await;
    add_flight(&app, "F3", "X", "Y", 7, 1).await;

    let (status, route) = send(&app, Method::GET, "/v1/network/path?from=A&to=C", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(route, json!({"distance": 150, "path": ["A", "B", "C"]}));

    let (status, _) = send(&app, Method::GET, "/v1/network/path?from=A&to=Q", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::GET, "/v1/network/path?from=A&to=X", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, dfs) = send(&app, Method::GET, "/v1/network/dfs?start=A", None).await;
    assert_eq!(dfs["order"], json!(["A", "B", "C"]));
    let (_, bfs) = send(&app, Method::GET, "/v1/network/bfs?start=C", None).await;
    assert_eq!(bfs["order"], json!(["C", "B", "A"]));

    let (_, prim) = send(&app, Method::GET, "/v1/network/prim?start=X", None).await;
    assert_eq!(prim["total_weight"], json!(7));
    assert_eq!(prim["edges"].as_array().unwrap().len(), 1);

    let (_, kruskal) = send(&app, Method::GET, "/v1/network/kruskal", None).await;
    assert_eq!(kruskal["total_weight"], json!(157));
    assert_eq!(kruskal["edges"].as_array().unwrap().len(), 3);

    let (_, adjacency) = send(&app, Method::GET, "/v1/network/airports/B", None).await;
    assert_eq!(
        adjacency["links"],
        json!([{"neighbor": "A", "distance": 100}, {"neighbor": "C", "distance": 50}])
    );
}

#[tokio::test]
async fn test_search_and_summary() {
    let app = test_app();
    add_flight(&app, "F101", "Pune", "Mumbai", 150, 5).await;
    add_flight(&app, "F102", "Delhi", "Mumbai", 1400, 3).await;

    let (_, found) = send(&app, Method::GET, "/v1/search?source=PUNE", None).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["id"], json!("F101"));

    let (_, all) = send(&app, Method::GET, "/v1/search", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, recent) = send(&app, Method::GET, "/v1/search/recent", None).await;
    assert_eq!(recent, json!(["pune"]));

    let (_, summary) = send(&app, Method::GET, "/v1/summary", None).await;
    assert_eq!(
        summary,
        json!({
            "total_flights": 2,
            "active_flights": 2,
            "confirmed_bookings": 0,
            "pending_requests": 0,
            "airports": 3,
        })
    );
}
