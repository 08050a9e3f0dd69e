pub mod auth;
pub mod chat;
pub mod recommendation;
pub mod skill;
