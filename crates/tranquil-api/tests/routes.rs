use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use tranquil_api::router;
use tranquil_api::state::AppState;
use tranquil_auth::jwt::{Claims, TokenVerifier};
use tranquil_storage::MemoryStore;

const SECRET: &[u8] = b"route-test-secret-at-least-32-bytes-long";

fn app() -> Router {
    router(AppState::new(
        MemoryStore::new(),
        TokenVerifier::new(SECRET, None, None),
    ))
}

fn token_expiring_at(exp: u64) -> String {
    let claims = Claims {
        sub: "clinician-7".to_string(),
        exp,
        iat: None,
        email: None,
        role: Some("authenticated".to_string()),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

fn token() -> String {
    token_expiring_at(get_current_timestamp() + 3600)
}

fn responses(value: u8) -> Value {
    let map: serde_json::Map<String, Value> =
        (1..=21).map(|i| (i.to_string(), json!(value))).collect();
    Value::Object(map)
}

fn request(method: Method, uri: &str, body: Option<Value>, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn raw_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token()))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_is_public() {
    let (status, body) = send(&app(), request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn instruments_are_public() {
    let app = app();

    let (status, body) = send(&app, request(Method::GET, "/instruments", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "dass21");

    let (status, body) = send(&app, request(Method::GET, "/instruments/dass21", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domains"].as_array().unwrap().len(), 3);
    assert_eq!(body["response_options"].as_array().unwrap().len(), 4);
    assert_eq!(body["severity_tables"][0]["domain_id"], "depression");

    let (status, _) = send(&app, request(Method::GET, "/instruments/phq9", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scoring_requires_a_valid_token() {
    let app = app();
    let body = json!({ "responses": responses(0) });

    let (status, _) = send(&app, request(Method::POST, "/score", Some(body.clone()), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let expired = token_expiring_at(get_current_timestamp() - 3600);
    let (status, body) = send(
        &app,
        request(Method::POST, "/score", Some(body), Some(&expired)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "token expired");
}

#[tokio::test]
async fn score_returns_result_without_storing() {
    let app = app();
    let body = json!({
        "responses": responses(3),
        "assessed_at": "2024-03-01T09:30:00Z",
    });

    let (status, body) = send(
        &app,
        request(Method::POST, "/score", Some(body), Some(&token())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["grand_total"], 126);
    assert_eq!(body["depression"]["score"], 42);
    assert_eq!(body["depression"]["severity"], "extremely_severe");
    assert_eq!(body["assessed_at"], "2024-03-01T09:30:00Z");
}

#[tokio::test]
async fn score_rejects_incomplete_and_invalid_sets() {
    let app = app();

    let mut incomplete = responses(1);
    incomplete.as_object_mut().unwrap().remove("21");
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/score",
            Some(json!({ "responses": incomplete })),
            Some(&token()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("incomplete"));

    let mut invalid = responses(1);
    invalid["4"] = json!(4);
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/score",
            Some(json!({ "responses": invalid })),
            Some(&token()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("item 4"));
}

#[tokio::test]
async fn assessment_lifecycle() {
    let app = app();
    let token = token();
    let patient = Uuid::new_v4();
    let base = format!("/patients/{patient}/assessments");

    let (status, _) = send(
        &app,
        request(Method::GET, &format!("/patients/{patient}/summary"), None, Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, first) = send(
        &app,
        request(
            Method::POST,
            &base,
            Some(json!({
                "responses": responses(3),
                "assessed_at": "2024-01-01T00:00:00Z",
                "notes": "intake",
            })),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["patient_id"], patient.to_string());
    assert_eq!(first["recorded_by"], "clinician-7");
    assert_eq!(first["result"]["grand_total"], 126);

    let (status, second) = send(
        &app,
        request(
            Method::POST,
            &base,
            Some(json!({
                "responses": responses(0),
                "assessed_at": "2024-02-01T00:00:00Z",
            })),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = send(&app, request(Method::GET, &base, None, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], first["id"]);
    assert_eq!(listed[1]["id"], second["id"]);

    let first_id = first["id"].as_str().unwrap();
    let (status, fetched) = send(
        &app,
        request(Method::GET, &format!("{base}/{first_id}"), None, Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["notes"], "intake");

    let (status, summary) = send(
        &app,
        request(Method::GET, &format!("/patients/{patient}/summary"), None, Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["count"], 2);
    assert_eq!(summary["grand_total_change"], -126);
    assert_eq!(summary["trend"], "improving");
    assert_eq!(summary["stress"]["peak_severity"], "extremely_severe");

    let (status, _) = send(
        &app,
        request(Method::DELETE, &format!("{base}/{first_id}"), None, Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        request(Method::GET, &format!("{base}/{first_id}"), None, Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_submission_is_not_stored() {
    let app = app();
    let token = token();
    let patient = Uuid::new_v4();
    let base = format!("/patients/{patient}/assessments");

    let mut incomplete = responses(2);
    incomplete.as_object_mut().unwrap().remove("1");
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            &base,
            Some(json!({ "responses": incomplete })),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, listed) = send(&app, request(Method::GET, &base, None, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn negative_and_oversized_values_are_invalid_responses() {
    let app = app();

    for bad in [-1, 256] {
        let mut responses = responses(1);
        responses["5"] = json!(bad);
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/score",
                Some(json!({ "responses": responses })),
                Some(&token()),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"],
            format!("item 5: response value {bad} is outside 0-3")
        );
    }
}

#[tokio::test]
async fn repeated_item_is_rejected() {
    let app = app();
    let items: Vec<String> = (1..=21).map(|i| format!("\"{i}\": 3")).collect();
    let body = format!(r#"{{"responses": {{{}, "1": 0}}}}"#, items.join(", "));

    let (status, body) = send(&app, raw_request("/score", &body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "item 1 is answered more than once");
}

#[tokio::test]
async fn repeated_item_is_not_stored() {
    let app = app();
    let patient = Uuid::new_v4();
    let base = format!("/patients/{patient}/assessments");
    let items: Vec<String> = (1..=21).map(|i| format!("\"{i}\": 2")).collect();
    let body = format!(r#"{{"responses": {{{}, "7": 0}}}}"#, items.join(", "));

    let (status, _) = send(&app, raw_request(&base, &body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, listed) = send(&app, request(Method::GET, &base, None, Some(&token()))).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app();

    let (status, body) = send(&app, raw_request("/score", r#"{"responses": {"1": 0"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn wrongly_typed_body_is_unprocessable_json() {
    let app = app();

    let (status, body) = send(&app, raw_request("/score", r#"{"responses": {"1": "often"}}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn assessments_before_the_epoch_are_not_stored() {
    let app = app();
    let patient = Uuid::new_v4();
    let base = format!("/patients/{patient}/assessments");

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            &base,
            Some(json!({
                "responses": responses(1),
                "assessed_at": "1969-12-31T23:59:59Z",
            })),
            Some(&token()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("before 1970"));
}
