//! End-to-end tests through the full router with an in-memory session store.

use std::path::PathBuf;

use atlas::server::{model::app::AppState, router};
use atlas_test_utils::{fixtures::country::country_json, prelude::*};
use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Request, StatusCode,
    },
    response::Response,
    Router,
};
use mockito::Matcher;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::body_json;

fn app(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();

    router::app(state, PathBuf::from("tests/static"))
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }

    let body = match body {
        Some(body) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(request.body(body).unwrap()).await.unwrap()
}

/// The `name=value` pair of the session cookie set by a response
fn session_cookie(response: &Response) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("response sets a session cookie")
        .to_str()
        .unwrap();

    header.split(';').next().unwrap().to_string()
}

fn ada() -> Value {
    json!({"name": "Ada", "email": "ada@example.com", "password": "correct horse"})
}

async fn register_ada(app: &Router) -> String {
    let response = send(app, "POST", "/api/v1/auth/register", None, Some(ada())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    session_cookie(&response)
}

mod favorites {
    use super::*;

    /// Expect 401 for favorites without a session
    #[tokio::test]
    async fn unauthorized_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let app = app(&test);

        let response = send(&app, "GET", "/api/v1/favorites", None, None).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["kind"], "Unauthorized");

        Ok(())
    }

    /// Expect a posted favorite in the next listing
    #[tokio::test]
    async fn add_then_list() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let app = app(&test);
        let cookie = register_ada(&app).await;

        let added = send(&app, "POST", "/api/v1/favorites/FRA", Some(&cookie), None).await;
        assert_eq!(added.status(), StatusCode::OK);

        let listed = send(&app, "GET", "/api/v1/favorites", Some(&cookie), None).await;
        assert_eq!(listed.status(), StatusCode::OK);
        assert_eq!(body_json(listed).await, json!({"favorites": ["FRA"]}));

        Ok(())
    }

    /// Expect a deleted favorite to be gone
    #[tokio::test]
    async fn add_then_remove() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let app = app(&test);
        let cookie = register_ada(&app).await;

        send(&app, "POST", "/api/v1/favorites/FRA", Some(&cookie), None).await;
        let removed = send(&app, "DELETE", "/api/v1/favorites/fra", Some(&cookie), None).await;
        assert_eq!(removed.status(), StatusCode::NO_CONTENT);

        let listed = send(&app, "GET", "/api/v1/favorites", Some(&cookie), None).await;
        assert_eq!(body_json(listed).await, json!({"favorites": []}));

        Ok(())
    }
}

mod countries {
    use super::*;

    /// Expect 404 NotFound for a code the upstream doesn't know
    #[tokio::test]
    async fn not_found_for_unknown_code() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_upstream_error("/alpha/ZZZ", 404, 1)
            .build()
            .await?;
        let app = app(&test);

        let response = send(&app, "GET", "/api/v1/countries/ZZZ", None, None).await;

        test.assert_mocks();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["kind"], "NotFound");

        Ok(())
    }

    /// Expect 400 for a malformed code without an upstream request
    #[tokio::test]
    async fn rejects_malformed_code() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| server.mock("GET", Matcher::Any).expect(0).create())
            .build()
            .await?;
        let app = app(&test);

        let response = send(&app, "GET", "/api/v1/countries/12", None, None).await;

        test.assert_mocks();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["kind"], "ValidationError");

        Ok(())
    }

    /// Expect a JSON ValidationError for a query string that doesn't deserialize
    #[tokio::test]
    async fn rejects_duplicate_query_parameter() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| server.mock("GET", Matcher::Any).expect(0).create())
            .build()
            .await?;
        let app = app(&test);

        let response = send(
            &app,
            "GET",
            "/api/v1/countries?region=Asia&region=Europe",
            None,
            None,
        )
        .await;

        test.assert_mocks();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[CONTENT_TYPE].to_str().unwrap(),
            "application/json"
        );
        assert_eq!(body_json(response).await["kind"], "ValidationError");

        Ok(())
    }

    /// Expect 502 when the upstream answers with something other than JSON
    #[tokio::test]
    async fn bad_gateway_on_garbage() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/alpha/FRA")
                    .with_status(200)
                    .with_body("<html>maintenance</html>")
                    .create()
            })
            .build()
            .await?;
        let app = app(&test);

        let response = send(&app, "GET", "/api/v1/countries/FRA", None, None).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["kind"], "UpstreamUnavailable");

        Ok(())
    }

    /// Expect the query string to select the region route and display language
    #[tokio::test]
    async fn lists_region_in_language() -> Result<(), TestError> {
        let mut germany = country_json("DEU", "Germany");
        germany["translations"] = json!({"deu": {"common": "Deutschland"}});
        let test = TestBuilder::new()
            .with_region_endpoint("Europe", vec![germany], 1)
            .build()
            .await?;
        let app = app(&test);

        let response = send(
            &app,
            "GET",
            "/api/v1/countries?region=Europe&lang=de",
            None,
            None,
        )
        .await;

        test.assert_mocks();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await[0]["name"]["display"], "Deutschland");

        Ok(())
    }
}

mod auth {
    use super::*;

    /// Expect register, logout and login to move the session between users and no user
    #[tokio::test]
    async fn register_logout_login_round_trip() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let app = app(&test);

        let cookie = register_ada(&app).await;
        let me = send(&app, "GET", "/api/v1/auth/user", Some(&cookie), None).await;
        assert_eq!(body_json(me).await["email"], "ada@example.com");

        let logged_out = send(&app, "POST", "/api/v1/auth/logout", Some(&cookie), None).await;
        assert_eq!(logged_out.status(), StatusCode::OK);
        let me = send(&app, "GET", "/api/v1/auth/user", Some(&cookie), None).await;
        assert_eq!(me.status(), StatusCode::UNAUTHORIZED);

        let login = json!({"email": "ADA@example.com", "password": "correct horse"});
        let logged_in = send(&app, "POST", "/api/v1/auth/login", None, Some(login)).await;
        assert_eq!(logged_in.status(), StatusCode::OK);
        let cookie = session_cookie(&logged_in);
        let me = send(&app, "GET", "/api/v1/auth/user", Some(&cookie), None).await;
        assert_eq!(me.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 409 Conflict when registering an email twice
    #[tokio::test]
    async fn conflict_for_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let app = app(&test);
        register_ada(&app).await;

        let response = send(&app, "POST", "/api/v1/auth/register", None, Some(ada())).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["kind"], "Conflict");

        Ok(())
    }

    /// Expect 400 ValidationError for a body that isn't the expected JSON
    #[tokio::test]
    async fn rejects_malformed_body() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let app = app(&test);

        let response = send(
            &app,
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({"email": "ada@example.com"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["kind"], "ValidationError");

        Ok(())
    }
}

mod fallback {
    use super::*;

    /// Expect a JSON 404 for unknown API paths
    #[tokio::test]
    async fn not_found_for_unknown_api_route() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let app = app(&test);

        let response = send(&app, "GET", "/api/v1/nothing-here", None, None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["kind"], "NotFound");

        Ok(())
    }

    /// Expect the SPA shell for client-side routes
    #[tokio::test]
    async fn serves_index_for_client_routes() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let app = app(&test);

        let response = send(&app, "GET", "/countries-list", None, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains(r#"<div id="root">"#));

        Ok(())
    }

    /// Expect the generated OpenAPI document to describe the favorites routes
    #[tokio::test]
    async fn serves_openapi_document() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let app = app(&test);

        let response = send(&app, "GET", "/api/docs/openapi.json", None, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let document = body_json(response).await;
        assert!(document["paths"]["/api/v1/favorites/{code}"]["post"].is_object());
        assert!(document["paths"]["/api/v1/countries"]["get"].is_object());

        Ok(())
    }
}
