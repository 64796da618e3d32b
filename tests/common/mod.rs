//! Fake TMDB and OMDb servers for the provider tests
//!
//! Each server binds 127.0.0.1:0 and serves canned responses that mirror the
//! real APIs' shapes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use cinegram::services::{HttpSession, LookupService, OmdbClient, TmdbClient};

pub const TMDB_KEY: &str = "tmdb-test-key";
pub const OMDB_KEY: &str = "omdb-test-key";

/// Serve `router` on an ephemeral port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake server");
    });
    format!("http://{}", addr)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status_code": 7, "status_message": "Invalid API key"})),
    )
        .into_response()
}

fn godfather_hits() -> Value {
    json!({
        "page": 1,
        "results": [
            {
                "id": 1,
                "media_type": "movie",
                "title": "El padrino: Parte II",
                "original_title": "The Godfather Part II",
                "release_date": "1974-12-20",
                "poster_path": "/part2.jpg"
            },
            {
                "id": 1001,
                "media_type": "person",
                "name": "Francis Ford Coppola"
            },
            {
                "id": 238,
                "media_type": "movie",
                "title": "El padrino",
                "original_title": "The Godfather",
                "release_date": "1972-03-14",
                "poster_path": "/godfather.jpg"
            }
        ]
    })
}

fn breaking_bad_hits() -> Value {
    json!({
        "results": [
            {
                "id": 1396,
                "media_type": "tv",
                "name": "Breaking Bad",
                "original_name": "Breaking Bad",
                "first_air_date": "2008-01-20",
                "poster_path": ""
            }
        ]
    })
}

fn godfather_details() -> Value {
    json!({
        "id": 238,
        "title": "El padrino",
        "original_title": "The Godfather",
        "release_date": "1972-03-14",
        "runtime": 175,
        "status": "Released",
        "genres": [{"id": 18, "name": "Drama"}, {"id": 80, "name": "Crimen"}],
        "overview": "La historia de la familia Corleone.",
        "vote_average": 8.7,
        "vote_count": 21000,
        "credits": {
            "cast": [
                {"name": "Marlon Brando", "character": "Don Vito Corleone"},
                {"name": "Al Pacino", "character": "Michael Corleone"}
            ],
            "crew": [
                {"name": "Francis Ford Coppola", "job": "Director"},
                {"name": "Mario Puzo", "job": "Screenplay"}
            ]
        },
        "videos": {"results": []},
        "external_ids": {"imdb_id": "tt0068646"}
    })
}

fn breaking_bad_details() -> Value {
    json!({
        "id": 1396,
        "name": "Breaking Bad",
        "original_name": "Breaking Bad",
        "first_air_date": "2008-01-20",
        "episode_run_time": [45, 47],
        "number_of_seasons": 5,
        "number_of_episodes": 62,
        "genres": null,
        "overview": "",
        "vote_average": 8.9,
        "vote_count": 14000,
        "created_by": [{"name": "Vince Gilligan"}],
        "credits": {
            "cast": [{"name": "Bryan Cranston", "character": "Walter White"}],
            "crew": []
        },
        "external_ids": {"imdb_id": "tt0903747"}
    })
}

async fn tmdb_search(
    Path(scope): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("api_key").map(String::as_str) != Some(TMDB_KEY) {
        return unauthorized();
    }

    let query = params.get("query").map(|q| q.to_lowercase()).unwrap_or_default();
    let body = match (scope.as_str(), query.as_str()) {
        ("multi", "boom") => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ("multi", "garbage") => return (StatusCode::OK, "<html>not json</html>").into_response(),
        ("multi" | "movie", q) if q.contains("padr") => godfather_hits(),
        ("multi" | "tv", q) if q.contains("breaking") => breaking_bad_hits(),
        _ => json!({"page": 1, "results": []}),
    };
    Json(body).into_response()
}

async fn tmdb_movie(Path(id): Path<u64>, Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("api_key").map(String::as_str) != Some(TMDB_KEY) {
        return unauthorized();
    }
    match id {
        238 => Json(godfather_details()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn tmdb_tv(Path(id): Path<u64>, Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("api_key").map(String::as_str) != Some(TMDB_KEY) {
        return unauthorized();
    }
    match id {
        1396 => Json(breaking_bad_details()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn omdb_lookup(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("apikey").map(String::as_str) != Some(OMDB_KEY) {
        return Json(json!({"Response": "False", "Error": "Invalid API key!"}));
    }

    match params.get("t").map(String::as_str) {
        Some("The Godfather") => Json(json!({
            "Title": "The Godfather",
            "Year": "1972",
            "Type": params.get("type").cloned().unwrap_or_else(|| "movie".into()),
            "imdbRating": "9.2",
            "Plot": "The aging patriarch of an organized crime dynasty...",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "9.2/10"},
                {"Source": "Rotten Tomatoes", "Value": "97%"},
                {"Source": "Metacritic", "Value": "100/100"}
            ],
            "Response": "True"
        })),
        _ => Json(json!({"Response": "False", "Error": "Movie not found!"})),
    }
}

/// Start a fake TMDB API and return its base URL
pub async fn fake_tmdb() -> String {
    let router = Router::new()
        .route("/search/{scope}", get(tmdb_search))
        .route("/movie/{id}", get(tmdb_movie))
        .route("/tv/{id}", get(tmdb_tv));
    serve(router).await
}

/// Start a fake OMDb API and return its base URL
pub async fn fake_omdb() -> String {
    serve(Router::new().route("/", get(omdb_lookup))).await
}

pub fn tmdb_client(session: Arc<HttpSession>, base_url: &str) -> TmdbClient {
    TmdbClient::new(session, TMDB_KEY.to_string()).with_base_url(base_url)
}

pub fn omdb_client(session: Arc<HttpSession>, base_url: &str) -> OmdbClient {
    OmdbClient::new(session, OMDB_KEY.to_string()).with_base_url(base_url)
}

/// Lookup service wired to both fakes over one session
pub async fn lookup_service() -> (LookupService, Arc<HttpSession>) {
    let session = HttpSession::new("test");
    let tmdb = tmdb_client(session.clone(), &fake_tmdb().await);
    let omdb = omdb_client(session.clone(), &fake_omdb().await);
    (LookupService::new(Arc::new(tmdb), Arc::new(omdb)), session)
}
