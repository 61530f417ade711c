#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movies_core::genre::Genre;
use movies_core::movie::Movie;
use movies_store::MovieStore;
use serde_json::Value;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::middleware::origin::OriginPolicy;
use movies_api::router::build_app_router;
use movies_api::state::AppState;

/// Origin on the test allow-list.
pub const ALLOWED_ORIGIN: &str = "https://movies.com";

/// Build a test `ServerConfig` with a single allowed CORS origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![ALLOWED_ORIGIN.to_string()],
    }
}

/// A small fixed collection with known ids.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: "heat".to_string(),
            title: "Heat".to_string(),
            year: 1995,
            director: "Michael Mann".to_string(),
            duration: 170,
            rate: 8.3,
            poster: "https://example.com/heat.jpg".to_string(),
            genre: vec![Genre::Action, Genre::Crime, Genre::Drama],
        },
        Movie {
            id: "amelie".to_string(),
            title: "Amelie".to_string(),
            year: 2001,
            director: "Jean-Pierre Jeunet".to_string(),
            duration: 122,
            rate: 8.3,
            poster: "https://example.com/amelie.jpg".to_string(),
            genre: vec![Genre::Comedy],
        },
        Movie {
            id: "alien".to_string(),
            title: "Alien".to_string(),
            year: 1979,
            director: "Ridley Scott".to_string(),
            duration: 117,
            rate: 8.5,
            poster: "https://example.com/alien.jpg".to_string(),
            genre: vec![Genre::Horror, Genre::SciFi],
        },
    ]
}

/// Build the full application router (same middleware stack as production)
/// over a store holding [`seed_movies`].
pub fn build_test_app() -> Router {
    build_test_app_with(seed_movies())
}

pub fn build_test_app_with(movies: Vec<Movie>) -> Router {
    let config = test_config();
    let origins = OriginPolicy::from_config(&config).unwrap();
    let state = AppState {
        movies: Arc::new(MovieStore::new(movies)),
    };
    build_app_router(state, &origins)
}

/// Send a request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
