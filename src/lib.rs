//! Client SDK for the Career Advisor platform.
//!
//! Wraps the platform's HTTP API with session handling: the stored bearer
//! token is attached to every request, and an unauthorized response triggers
//! a single token refresh followed by a single retry.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ClientError, ClientResult};
pub use infrastructure::http::{ApiClient, RequestOptions};
pub use infrastructure::session::{
    FileSessionStore, MemorySessionStore, Session, SessionStore,
};
