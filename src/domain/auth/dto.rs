use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials for POST /auth/login/
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned by a successful login
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: Option<Value>,
}

/// Payload for POST /auth/register/
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}
