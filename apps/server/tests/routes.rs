use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::util::ServiceExt;

use toolrent_db::{Database, DbConfig};
use toolrent_server::{build_router, AppState};

async fn seeded() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    db.tools().seed_sample_tools().await.unwrap();
    (build_router(AppState::new(db.clone())), db)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: &Router, uri: &str, body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[tokio::test]
async fn index_lists_sample_tools() {
    let (app, _db) = seeded().await;
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Power Drill"));
    assert!(body.contains("Lawn Mower"));
    assert!(body.contains("Pressure Washer"));
    assert!(body.contains("€25.00"));
    assert!(body.contains("/rent/1"));
}

#[tokio::test]
async fn new_tool_form_renders() {
    let (app, _db) = seeded().await;
    let (status, body) = get(&app, "/tools/new").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"daily_rate\""));
}

#[tokio::test]
async fn create_tool_redirects_home() {
    let (app, db) = seeded().await;
    let response = post_form(
        &app,
        "/tools",
        "name=Tile+Saw&description=Wet+cutting&daily_rate=60.00",
    )
    .await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/");

    let tools = db.tools().list().await.unwrap();
    let saw = tools.iter().find(|t| t.name == "Tile Saw").unwrap();
    assert_eq!(saw.daily_rate_cents, 6000);
    assert!(saw.available);
    assert_eq!(saw.commission().cents(), 1000);
}

#[tokio::test]
async fn create_tool_rejects_bad_rate() {
    let (app, db) = seeded().await;

    let response = post_form(&app, "/tools", "name=Saw&description=&daily_rate=-5").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_form(&app, "/tools", "name=Saw&description=&daily_rate=cheap").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(db.tools().count().await.unwrap(), 3);
}

#[tokio::test]
async fn rent_form_previews_commission() {
    let (app, _db) = seeded().await;

    let (status, body) = get(&app, "/rent/2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Lawn Mower"));
    assert!(body.contains("€5.00"));

    let (status, body) = get(&app, "/rent/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Tool not found: 999"));
}

#[tokio::test]
async fn seeded_rental_scenario() {
    let (app, db) = seeded().await;

    let response = post_form(
        &app,
        "/rent/1",
        "renter_name=Ada&start_date=2024-05-01&end_date=2024-05-04",
    )
    .await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/");
    assert!(!db.tools().get(1).await.unwrap().available);

    let response = post_form(
        &app,
        "/rent/2",
        "renter_name=Grace&start_date=2024-05-10&end_date=2024-05-11",
    )
    .await;
    assert!(response.status().is_redirection());

    let (status, body) = get(&app, "/rentals").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ada"));
    assert!(body.contains("€77.00"));
    assert!(body.contains("€2.00"));
    assert!(body.contains("€50.00"));
    assert!(body.contains("€5.00"));

    let (_, body) = get(&app, "/").await;
    assert!(!body.contains("/rent/1\""));
    assert!(body.contains("/rent/3"));

    let (status, body) = get(&app, "/association").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2024-05"));
    assert!(body.contains("€7.00"));
}

#[tokio::test]
async fn inverted_period_is_rejected() {
    let (app, db) = seeded().await;

    let response = post_form(
        &app,
        "/rent/1",
        "renter_name=Ada&start_date=2024-05-04&end_date=2024-05-01",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.rentals().count().await.unwrap(), 0);
    assert!(db.tools().get(1).await.unwrap().available);
}

#[tokio::test]
async fn renting_missing_tool_is_404() {
    let (app, db) = seeded().await;

    let response = post_form(
        &app,
        "/rent/42",
        "renter_name=Ada&start_date=2024-05-01&end_date=2024-05-02",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(db.rentals().count().await.unwrap(), 0);
}

#[tokio::test]
async fn association_orders_newest_month_first() {
    let (app, _db) = seeded().await;

    for (tool, start, end) in [
        (1, "2024-01-03", "2024-01-05"),
        (2, "2024-03-01", "2024-03-02"),
        (3, "2024-02-14", "2024-02-15"),
    ] {
        let body = format!("renter_name=Lin&start_date={}&end_date={}", start, end);
        let response = post_form(&app, &format!("/rent/{}", tool), &body).await;
        assert!(response.status().is_redirection());
    }

    let (_, body) = get(&app, "/association").await;
    let march = body.find("2024-03").unwrap();
    let february = body.find("2024-02").unwrap();
    let january = body.find("2024-01").unwrap();
    assert!(march < february && february < january);
}

#[tokio::test]
async fn health_reports_database() {
    let (app, db) = seeded().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], true);

    db.close().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (app, _db) = seeded().await;
    let (status, _) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
