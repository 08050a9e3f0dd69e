use serde_json::Value;

use crate::error::ClientResult;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::session::{Session, USER_KEY};

use super::{LoginRequest, LoginResponse, SignupRequest};

const LOGIN_PATH: &str = "/auth/login/";
const REGISTER_PATH: &str = "/auth/register/";

pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticate against the backend and store the resulting session.
    /// Nothing is stored on failure.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let tokens: LoginResponse = self.client.post_json_public(LOGIN_PATH, &request).await?;

        let session = Session {
            access_token: tokens.access,
            refresh_token: tokens.refresh,
            user: tokens.user,
        };
        session.save(self.client.store().as_ref());
        tracing::info!(username, "logged in");
        Ok(session)
    }

    /// Create an account, then chain straight into login; registration does
    /// not return tokens.
    pub async fn signup(&self, payload: SignupRequest) -> ClientResult<Session> {
        let _created: Value = self.client.post_json_public(REGISTER_PATH, &payload).await?;
        tracing::info!(username = %payload.username, "account created");
        self.login(&payload.username, &payload.password).await
    }

    pub async fn refresh(&self) -> bool {
        self.client.refresh().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.is_authenticated().await
    }

    /// Forget the session. Purely local; the backend keeps no session state
    /// the client could revoke.
    pub fn logout(&self) {
        self.client.store().clear();
        tracing::info!("logged out, session cleared");
    }

    /// The profile blob stored at login, if any.
    pub fn current_user(&self) -> Option<Value> {
        self.client
            .store()
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }
}
