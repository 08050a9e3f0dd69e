use serde::{Deserialize, Serialize};

use crate::infrastructure::http::ApiClient;

use super::offline_reply;

const CHATBOT_PATH: &str = "/chatbot/";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// The backend answers `{response}`; older deployments used `{message}`.
#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub struct ChatService {
    client: ApiClient,
}

impl ChatService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ask the chatbot. Any failure, transport or backend, drops down to the
    /// offline responder, so this always produces a reply.
    pub async fn send(&self, message: &str) -> String {
        let request = ChatRequest { message };
        match self
            .client
            .post_json::<ChatReply, _>(CHATBOT_PATH, &request)
            .await
        {
            Ok(reply) => reply
                .response
                .or(reply.message)
                .unwrap_or_else(|| offline_reply(message).to_string()),
            Err(error) => {
                tracing::warn!(%error, "chatbot endpoint unavailable, using offline responder");
                offline_reply(message).to_string()
            }
        }
    }
}
