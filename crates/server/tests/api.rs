use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use models::enums::{AssignmentStatus, CompanyType, ServiceStatus};
use server::routes;
use server::state::AppState;
use service::relationship::repository::mock::MockRelationshipRepository;
use service::relationship::RelationshipService;
use service::service_catalog::repository::mock::MockServiceCatalogRepository;
use service::service_catalog::ServiceCatalog;
use service::session::{CurrentContext, RouteCatalog, SessionResolver, SessionTokens};

const SECRET: &str = "test-secret";

struct TestApp {
    app: Router,
    relationships: Arc<MockRelationshipRepository>,
    services: Arc<MockServiceCatalogRepository>,
}

async fn test_app() -> anyhow::Result<TestApp> {
    let relationships = Arc::new(MockRelationshipRepository::default());
    relationships.add_company("m1", "Acme Foods", CompanyType::Merchant).await;
    relationships.add_company("s1", "Fresh Farms", CompanyType::Supplier).await;
    relationships.add_company("b1", "Bridge Brokers", CompanyType::Broker).await;
    relationships.add_user("u1", "Dana", "dana@example.com").await;
    relationships.add_user("u2", "Eli", "eli@example.com").await;
    relationships.add_designation("d1", "Account Manager").await;

    let services = Arc::new(MockServiceCatalogRepository::default());
    services.add_company("m1").await;
    services.add_service("svc-pay", "Payments", ServiceStatus::Active).await;
    services.add_service("svc-inv", "Invoicing", ServiceStatus::Active).await;
    services.add_service("svc-old", "Archive", ServiceStatus::Inactive).await;

    // isolated catalog file per test
    let routes_file = std::env::temp_dir().join(format!("bizdesk-routes-{}.json", uuid::Uuid::new_v4()));
    let catalog = RouteCatalog::open(routes_file).await?;

    let state = AppState {
        relationships: RelationshipService::new(relationships.clone()),
        services: ServiceCatalog::new(services.clone()),
        sessions: SessionResolver::new(SessionTokens::new(SECRET), catalog),
    };
    let app = routes::build_router(state, CorsLayer::very_permissive());
    Ok(TestApp { app, relationships, services })
}

fn token(permissions: &[&str]) -> anyhow::Result<String> {
    let ctx = CurrentContext {
        company_id: Some("m1".into()),
        company_name: "Acme Foods".into(),
        relationship_name: Some("Fresh Farms".into()),
        designation_name: Some("Buyer".into()),
    };
    let perms = permissions.iter().map(|p| p.to_string()).collect();
    Ok(SessionTokens::new(SECRET).issue("u1", ctx, perms, chrono::Duration::minutes(10))?)
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = resp.into_body().collect().await?.to_bytes();
    Ok((status, bytes.to_vec()))
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder.header(header::CONTENT_TYPE, "application/json").body(Body::from(b.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    let (status, bytes) = send(app, req).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

async fn create_relationship(app: &Router, from: &str, to: &str, kind: &str) -> anyhow::Result<(StatusCode, Value)> {
    send_json(
        app,
        "POST",
        "/api/relationships",
        Some(json!({ "fromCompanyId": from, "toCompanyId": to, "relationshipType": kind })),
    )
    .await
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (status, body) = send_json(&t.app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn merchant_supplier_create_returns_201_active() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (status, body) = create_relationship(&t.app, "m1", "s1", "MERCHANT_SUPPLIER").await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["relationshipStatus"], "ACTIVE");
    assert_eq!(body["relationshipType"], "MERCHANT_SUPPLIER");
    assert_eq!(body["fromCompany"]["companyType"], "MERCHANT");
    assert_eq!(body["toCompany"]["companyName"], "Fresh Farms");
    assert!(body["companyRelationshipId"].is_string());
    Ok(())
}

#[tokio::test]
async fn pairing_violation_is_400_and_creates_nothing() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (status, body) = create_relationship(&t.app, "m1", "b1", "MERCHANT_SUPPLIER").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("must be a SUPPLIER"));
    assert_eq!(t.relationships.relationship_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn create_validation_order() -> anyhow::Result<()> {
    let t = test_app().await?;

    let (status, body) =
        send_json(&t.app, "POST", "/api/relationships", Some(json!({ "fromCompanyId": "m1" }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "fromCompanyId, toCompanyId, and relationshipType are required");

    // missing company is reported before an invalid type
    let (status, body) = create_relationship(&t.app, "m1", "ghost", "BOGUS").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "To company not found");

    let (status, body) = create_relationship(&t.app, "m1", "s1", "BOGUS").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid relationship type. Must be one of: MERCHANT_SUPPLIER, BROKER_SUPPLIER, PARTNER");
    Ok(())
}

#[tokio::test]
async fn duplicate_is_400_and_leaves_one_row() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (first, _) = create_relationship(&t.app, "b1", "s1", "BROKER_SUPPLIER").await?;
    assert_eq!(first, StatusCode::CREATED);
    let (second, body) = create_relationship(&t.app, "b1", "s1", "BROKER_SUPPLIER").await?;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Relationship already exists");
    assert_eq!(t.relationships.relationship_count().await, 1);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_400() -> anyhow::Result<()> {
    let t = test_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/api/relationships")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let (status, bytes) = send(&t.app, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn list_includes_companies_and_assignment_counts() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (_, created) = create_relationship(&t.app, "m1", "s1", "MERCHANT_SUPPLIER").await?;
    let id = created["companyRelationshipId"].as_str().unwrap_or_default().to_string();
    t.relationships.assign("u1", &id, Some("d1"), AssignmentStatus::Active).await;
    t.relationships.assign("u2", &id, None, AssignmentStatus::Inactive).await;

    let (status, body) = send_json(&t.app, "GET", "/api/relationships", None).await?;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["_count"]["userCompanyAssignments"], 2);
    assert_eq!(items[0]["fromCompany"]["companyName"], "Acme Foods");
    Ok(())
}

#[tokio::test]
async fn get_embeds_assignments_and_404s_when_missing() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (_, created) = create_relationship(&t.app, "m1", "s1", "MERCHANT_SUPPLIER").await?;
    let id = created["companyRelationshipId"].as_str().unwrap_or_default().to_string();
    t.relationships.assign("u1", &id, Some("d1"), AssignmentStatus::Active).await;

    let (status, body) = send_json(&t.app, "GET", &format!("/api/relationships/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    let assignment = &body["userCompanyAssignments"][0];
    assert_eq!(assignment["user"]["email"], "dana@example.com");
    assert_eq!(assignment["designation"]["designationName"], "Account Manager");

    let (status, body) = send_json(&t.app, "GET", "/api/relationships/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Relationship not found");
    Ok(())
}

#[tokio::test]
async fn put_with_invalid_status_leaves_row_unchanged() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (_, created) = create_relationship(&t.app, "m1", "s1", "MERCHANT_SUPPLIER").await?;
    let uri = format!("/api/relationships/{}", created["companyRelationshipId"].as_str().unwrap_or_default());

    let (status, _) = send_json(&t.app, "PUT", &uri, Some(json!({ "relationshipStatus": "ARCHIVED" }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, body) = send_json(&t.app, "GET", &uri, None).await?;
    assert_eq!(body["relationshipStatus"], "ACTIVE");

    let (status, body) = send_json(&t.app, "PUT", &uri, Some(json!({ "relationshipStatus": "PENDING" }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["relationshipStatus"], "PENDING");
    assert_eq!(body["toCompany"]["companyId"], "s1");
    Ok(())
}

#[tokio::test]
async fn put_on_missing_relationship_is_404_even_with_bad_status() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (status, body) =
        send_json(&t.app, "PUT", "/api/relationships/nope", Some(json!({ "relationshipStatus": "GONE" }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Relationship not found");
    Ok(())
}

#[tokio::test]
async fn delete_deactivates_active_assignments() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (_, created) = create_relationship(&t.app, "m1", "s1", "MERCHANT_SUPPLIER").await?;
    let id = created["companyRelationshipId"].as_str().unwrap_or_default().to_string();
    t.relationships.assign("u1", &id, None, AssignmentStatus::Active).await;
    t.relationships.assign("u2", &id, Some("d1"), AssignmentStatus::Active).await;

    let (status, body) = send_json(&t.app, "DELETE", &format!("/api/relationships/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deactivatedAssignments"], 2);
    assert_eq!(body["relationship"]["relationshipStatus"], "INACTIVE");
    assert!(body["message"].is_string());
    assert!(t.relationships.assignment_statuses(&id).await.iter().all(|s| *s == AssignmentStatus::Inactive));

    let (status, _) = send_json(&t.app, "DELETE", "/api/relationships/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn services_listing_merges_company_flags() -> anyhow::Result<()> {
    let t = test_app().await?;

    let (status, body) = send_json(&t.app, "GET", "/api/services", None).await?;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body.as_array().cloned().unwrap_or_default().iter().map(|s| s["serviceName"].clone()).collect();
    assert_eq!(names, vec![json!("Invoicing"), json!("Payments")]);
    assert!(body[0].get("isEnabled").is_none());

    let (_, body) = send_json(&t.app, "GET", "/api/services?companyId=m1", None).await?;
    assert!(body.as_array().cloned().unwrap_or_default().iter().all(|s| s["isEnabled"] == json!(false)));
    Ok(())
}

#[tokio::test]
async fn services_post_upserts_in_place() -> anyhow::Result<()> {
    let t = test_app().await?;
    let (status, first) = send_json(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({ "companyId": "m1", "serviceId": "svc-pay", "isEnabled": true })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["service"]["serviceName"], "Payments");

    let (_, second) = send_json(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({ "companyId": "m1", "serviceId": "svc-pay", "isEnabled": false })),
    )
    .await?;
    assert_eq!(second["companyServiceId"], first["companyServiceId"]);
    assert_eq!(second["isEnabled"], false);
    assert_eq!(t.services.override_count().await, 1);

    let (status, body) = send_json(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({ "companyId": "m1", "serviceId": "svc-pay", "isEnabled": "yes" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "companyId, serviceId, and isEnabled (boolean) are required");

    let (status, body) = send_json(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({ "companyId": "m1", "serviceId": "svc-none", "isEnabled": true })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Service not found");
    Ok(())
}

#[tokio::test]
async fn session_endpoint_requires_a_valid_token() -> anyhow::Result<()> {
    let t = test_app().await?;

    let (status, _) = send_json(&t.app, "GET", "/api/session", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = Request::builder().uri("/api/session").header(header::AUTHORIZATION, "Bearer nope").body(Body::empty())?;
    assert_eq!(send(&t.app, req).await?.0, StatusCode::UNAUTHORIZED);

    let req = Request::builder().uri("/api/session").header(header::AUTHORIZATION, "Basic abc").body(Body::empty())?;
    assert_eq!(send(&t.app, req).await?.0, StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .uri("/api/session")
        .header(header::AUTHORIZATION, format!("Bearer {}", token(&["deals:view"])?))
        .body(Body::empty())?;
    let (status, bytes) = send(&t.app, req).await?;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["currentContext"]["companyName"], "Acme Foods");
    let route_ids: Vec<_> = body["accessibleRoutes"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .map(|r| r["routeId"].clone())
        .collect();
    assert_eq!(route_ids, vec![json!("dashboard"), json!("deals"), json!("deal-detail")]);
    Ok(())
}

#[tokio::test]
async fn session_cookie_is_accepted() -> anyhow::Result<()> {
    let t = test_app().await?;
    let req = Request::builder()
        .uri("/api/session")
        .header(header::COOKIE, format!("theme=dark; auth_token={}", token(&[])?))
        .body(Body::empty())?;
    assert_eq!(send(&t.app, req).await?.0, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn deals_page_gates_buttons_by_permission() -> anyhow::Result<()> {
    let t = test_app().await?;

    let req = Request::builder()
        .uri("/deals")
        .header(header::AUTHORIZATION, format!("Bearer {}", token(&["deals:view", "deals:edit"])?))
        .body(Body::empty())?;
    let (status, bytes) = send(&t.app, req).await?;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(bytes)?;
    assert!(html.contains("Annual produce contract"));
    assert!(html.contains(r#"data-action="edit""#));
    assert!(!html.contains("New deal"));
    assert!(!html.contains(r#"data-action="delete""#));
    // sidebar: deals active, settings hidden without permission
    assert!(html.contains(r#"<a href="/deals" class="active""#));
    assert!(!html.contains("/settings"));
    assert!(html.contains("Fresh Farms"));

    let (status, _) = send_json(&t.app, "GET", "/deals", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn root_redirects_to_deals() -> anyhow::Result<()> {
    let t = test_app().await?;
    let resp = t.app.clone().oneshot(Request::builder().uri("/").body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()), Some("/deals"));
    Ok(())
}

#[tokio::test]
async fn metrics_and_openapi_are_served() -> anyhow::Result<()> {
    let t = test_app().await?;
    send_json(&t.app, "GET", "/api/services", None).await?;

    let (status, bytes) = send(&t.app, Request::builder().uri("/metrics").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(bytes)?;
    assert!(text.contains("bizdesk_http_requests_total"));
    assert!(text.contains(r#"route="/api/services""#));

    let (status, doc) = send_json(&t.app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/relationships").is_some());
    assert!(doc["paths"].get("/api/relationships/{id}").is_some());
    Ok(())
}
