//! Friends Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use platform::password::CredentialHasher;

use crate::application::{FriendsConfig, FriendsFacade};
use crate::domain::repository::FriendCollection;
use crate::error::FriendResult;
use crate::presentation::handlers::{self, FriendsAppState};

/// Create the Friends router with the Argon2id hasher from `config`
///
/// Fails only if the configured hash cost is rejected by argon2.
pub fn friends_router<C>(collection: C, config: FriendsConfig) -> FriendResult<Router>
where
    C: FriendCollection + Send + Sync + 'static,
{
    let hasher = config.hasher()?;
    Ok(friends_router_generic(collection, hasher, config))
}

/// Create a generic Friends router for any collection and hasher
pub fn friends_router_generic<C, H>(collection: C, hasher: H, config: FriendsConfig) -> Router
where
    C: FriendCollection + Send + Sync + 'static,
    H: CredentialHasher,
{
    let state = FriendsAppState {
        facade: FriendsFacade::new(Arc::new(collection), Arc::new(hasher), Arc::new(config)),
    };

    Router::new()
        .route(
            "/",
            get(handlers::get_all_friends::<C, H>).post(handlers::add_friend::<C, H>),
        )
        .route("/verify", post(handlers::verify_friend::<C, H>))
        .route(
            "/{email}",
            get(handlers::get_friend::<C, H>)
                .put(handlers::edit_friend::<C, H>)
                .delete(handlers::delete_friend::<C, H>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryFriendCollection;

    fn app() -> Router {
        friends_router(InMemoryFriendCollection::new(), FriendsConfig::testing()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    fn jane() -> Value {
        json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "password": "secret1"
        })
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let app = app();

        let (status, body) = send(&app, json_request("POST", "/", jane())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, empty_request("GET", "/jane@x.com")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);
        assert_eq!(body["firstName"], "Jane");
        assert_eq!(body["email"], "jane@x.com");
        assert_eq!(body["role"], "user");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_validation_error_is_problem_json() {
        let app = app();

        let mut payload = jane();
        payload["firstName"] = json!("J");
        let (status, body) = send(&app, json_request("POST", "/", payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            r#""firstName" length must be at least 2 characters long"#
        );

        let (status, body) = send(&app, json_request("POST", "/", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], r#""firstName" is required"#);
    }

    #[tokio::test]
    async fn test_wrong_typed_fields_are_validation_errors() {
        let app = app();

        let mut payload = jane();
        payload["firstName"] = Value::Null;
        let (status, body) = send(&app, json_request("POST", "/", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], r#""firstName" is required"#);

        let mut payload = jane();
        payload["password"] = json!(123);
        let (status, body) = send(&app, json_request("POST", "/", payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], r#""password" must be a string"#);

        let (status, body) = send(&app, json_request("PUT", "/jane@x.com", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Bad Request");

        let (_, body) = send(&app, empty_request("GET", "/")).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_body_is_problem_json() {
        let app = app();

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflict() {
        let app = app();
        send(&app, json_request("POST", "/", jane())).await;

        let (status, _) = send(&app, json_request("POST", "/", jane())).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_list_has_no_passwords() {
        let app = app();
        send(&app, json_request("POST", "/", jane())).await;

        let (status, body) = send(&app, empty_request("GET", "/")).await;
        assert_eq!(status, StatusCode::OK);

        let friends = body.as_array().unwrap();
        assert_eq!(friends.len(), 1);
        assert!(friends[0].get("password").is_none());
    }

    #[tokio::test]
    async fn test_edit_and_delete() {
        let app = app();
        send(&app, json_request("POST", "/", jane())).await;

        let mut payload = jane();
        payload["email"] = json!("janet@y.com");
        let (status, body) = send(&app, json_request("PUT", "/jane@x.com", payload.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["modifiedCount"], 1);

        let (_, body) = send(&app, json_request("PUT", "/jane@x.com", payload)).await;
        assert_eq!(body["modifiedCount"], 0);

        let (status, body) = send(&app, empty_request("DELETE", "/janet@y.com")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], true);

        let (_, body) = send(&app, empty_request("DELETE", "/janet@y.com")).await;
        assert_eq!(body["deleted"], false);

        let (status, _) = send(&app, empty_request("GET", "/janet@y.com")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_verify() {
        let app = app();
        send(&app, json_request("POST", "/", jane())).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/verify",
                json!({ "email": "jane@x.com", "password": "secret1" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "jane@x.com");
        assert!(body.get("password").is_none());

        let (wrong_status, wrong_body) = send(
            &app,
            json_request(
                "POST",
                "/verify",
                json!({ "email": "jane@x.com", "password": "secret2" }),
            ),
        )
        .await;
        let (unknown_status, unknown_body) = send(
            &app,
            json_request(
                "POST",
                "/verify",
                json!({ "email": "nobody@x.com", "password": "secret1" }),
            ),
        )
        .await;

        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_body, unknown_body);
    }
}
