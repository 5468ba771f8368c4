//! Route handlers and their wire types.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::state::AppState;
use crate::error::Error;
use crate::llm::Message;
use crate::post::{ChatReply, ChatRequest, Platform, PostRequest};

/// Request body for POST /generate-post.
#[derive(Debug, Deserialize)]
pub struct GeneratePostBody {
    pub topic: String,
    pub tone: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratePostResponse {
    pub post: String,
}

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub previous_posts: Vec<String>,
    #[serde(default)]
    pub use_account_tone: bool,
    #[serde(default)]
    pub platform: Platform,
}

impl From<ChatBody> for ChatRequest {
    fn from(body: ChatBody) -> Self {
        Self {
            history: body.messages,
            prior_content: body.previous_posts,
            use_tone_profile: body.use_account_tone,
            platform: body.platform,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub suggested_content: Option<String>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            message: reply.message,
            suggested_content: reply.suggested_content,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Generation(_) | Error::Chat(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// GET / - Liveness probe.
pub async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "message": format!("{} is running", state.service_name) }))
}

/// POST /generate-post - One-shot post for a topic and tone.
pub async fn generate_post(
    State(state): State<AppState>,
    Json(body): Json<GeneratePostBody>,
) -> Result<Json<GeneratePostResponse>, Error> {
    let post = state
        .assistant
        .generate_post(PostRequest {
            topic: body.topic,
            tone: body.tone,
        })
        .await?;
    Ok(Json(GeneratePostResponse { post }))
}

/// POST /chat - One conversational turn with a suggested post.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ChatResponse>, Error> {
    let reply = state.assistant.chat(body.into()).await?;
    Ok(Json(reply.into()))
}
