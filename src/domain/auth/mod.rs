pub mod claims;
pub mod dto;
pub mod service;

pub use claims::TokenClaims;
pub use dto::{LoginRequest, LoginResponse, SignupRequest};
pub use service::AuthService;
