use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use product_records::{AppConfig, AppState, app, database::MemoryStore};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = AppConfig::from_lookup(|key| match key {
        "DB_URL" => Some("postgres://unused".to_string()),
        "CORS_ALLOWED_ORIGINS" => Some("http://localhost:4200".to_string()),
        _ => None,
    })
    .unwrap();

    app::router(AppState::new(MemoryStore::new()), &config).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn widget() -> Value {
    json!({
        "name": "Widget",
        "price": "9.99",
        "createdAt": "2023-07-05T20:41:10Z",
        "modifiedAt": "2023-07-05T21:00:00Z",
        "status": "Inactive",
    })
}

fn widget_details() -> Value {
    json!({
        "description": "A widget",
        "color": "blue",
        "material": "aluminium",
        "weight": "0.75",
        "quantityInStock": 40,
        "manufactureDate": "2023-06-01T00:00:00Z",
        "expiryDate": "2028-06-01T00:00:00Z",
        "size": "S",
        "manufacturer": "Acme",
        "countryOfOrigin": "DE",
    })
}

#[tokio::test]
async fn product_lifecycle() {
    let app = test_app();

    let (status, created) = send(&app, "POST", "/products", Some(widget())).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], json!("Widget"));
    assert_eq!(created["status"], json!("Inactive"));
    assert!(created.get("modifiedAt").is_some());

    let (status, body) = send(&app, "POST", "/products", Some(widget())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], json!("This product already exists"));

    let (status, fetched) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], json!(id));
    assert_eq!(fetched["name"], json!("Widget"));
    assert_eq!(fetched["price"], created["price"]);
    assert_eq!(fetched["createdAt"], created["createdAt"]);
    assert_eq!(fetched["status"], json!("Inactive"));
    assert!(fetched.get("modifiedAt").is_none());

    let (status, _) = send(&app, "DELETE", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_projections() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let mut gadget = widget();
    gadget["name"] = json!("Gadget");
    send(&app, "POST", "/products", Some(widget())).await;
    send(&app, "POST", "/products", Some(gadget)).await;

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|p| p.get("modifiedAt").is_none()));
}

#[tokio::test]
async fn update_replaces_every_field() {
    let app = test_app();
    let (_, created) = send(&app, "POST", "/products", Some(widget())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let replacement = json!({
        "name": "Widget v2",
        "price": "11.00",
        "createdAt": "2022-01-01T00:00:00Z",
        "modifiedAt": "2024-01-01T00:00:00Z",
        "status": "whatever",
    });
    let (status, body) = send(&app, "PUT", &format!("/products/{id}"), Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(id));

    let (_, fetched) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(fetched["name"], json!("Widget v2"));
    assert_eq!(fetched["status"], json!("Active"));
    assert_ne!(fetched["createdAt"], created["createdAt"]);

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, "PUT", &format!("/products/{missing}"), Some(widget())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_lifecycle() {
    let app = test_app();
    let (_, created) = send(&app, "POST", "/products", Some(widget())).await;
    let id = created["id"].as_str().unwrap().to_string();
    let details_uri = format!("/products/{id}/details");

    let (status, _) = send(&app, "GET", &details_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "POST", &details_uri, Some(widget_details())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(id));

    let (status, body) = send(&app, "POST", &details_uri, Some(widget_details())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("product already has product details"));

    let (status, detail) = send(&app, "GET", &details_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["id"], json!(id));
    assert_eq!(detail["quantityInStock"], json!(40));
    assert_eq!(detail["countryOfOrigin"], json!("DE"));

    let mut changed = widget_details();
    changed["quantityInStock"] = json!(0);
    changed["color"] = Value::Null;
    let (status, body) = send(&app, "PUT", &details_uri, Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(id));

    let (_, detail) = send(&app, "GET", &details_uri, None).await;
    assert_eq!(detail["quantityInStock"], json!(0));
    assert_eq!(detail["color"], Value::Null);

    let (status, _) = send(&app, "DELETE", &details_uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "DELETE", &details_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn detail_for_unknown_product_is_bad_request() {
    let app = test_app();
    let missing = uuid::Uuid::new_v4();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/products/{missing}/details"),
        Some(widget_details()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!(format!("product with id {missing} does not exist"))
    );

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/products/{missing}/details"),
        Some(widget_details()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoints() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = send(&app, "GET", "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ready"));
}
