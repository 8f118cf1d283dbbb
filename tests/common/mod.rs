#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use github_star_button::github::GitHubClient;
use github_star_button::models::AnimationConfig;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Canned reply for one repository on the mock API
#[derive(Debug, Clone)]
pub enum MockReply {
    Stars(u64),
    DelayedStars(Duration, u64),
    Status(StatusCode),
    RateLimited,
    Body(&'static str),
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, MockReply>>,
    hits: Arc<AtomicUsize>,
}

/// Local stand-in for `api.github.com`
pub struct MockGitHub {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl MockGitHub {
    pub async fn start(replies: Vec<(&str, MockReply)>) -> anyhow::Result<Self> {
        let replies = replies
            .into_iter()
            .map(|(name, reply)| (name.to_string(), reply))
            .collect::<HashMap<_, _>>();
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            replies: Arc::new(replies),
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/repos/:owner/:repo", get(repository))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            hits,
            task,
        })
    }

    pub fn client(&self) -> Arc<GitHubClient> {
        Arc::new(GitHubClient::with_base_url(&self.base_url).expect("Failed to create client"))
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockGitHub {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn repository(
    State(state): State<MockState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let full_name = format!("{}/{}", owner, repo);

    let stars = |count: u64| {
        Json(json!({
            "full_name": full_name,
            "html_url": format!("https://github.com/{}", full_name),
            "stargazers_count": count,
        }))
        .into_response()
    };

    match state.replies.get(&full_name).cloned() {
        Some(MockReply::Stars(count)) => stars(count),
        Some(MockReply::DelayedStars(delay, count)) => {
            tokio::time::sleep(delay).await;
            stars(count)
        }
        Some(MockReply::Status(status)) => {
            (status, Json(json!({ "message": "mock failure" }))).into_response()
        }
        Some(MockReply::RateLimited) => {
            let mut headers = HeaderMap::new();
            headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("0"));
            (
                StatusCode::FORBIDDEN,
                headers,
                Json(json!({ "message": "API rate limit exceeded" })),
            )
                .into_response()
        }
        Some(MockReply::Body(body)) => (StatusCode::OK, body).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" }))).into_response(),
    }
}

/// Short animation so tests settle quickly
pub fn fast_animation() -> AnimationConfig {
    AnimationConfig::new(Duration::from_millis(120), 12)
}
