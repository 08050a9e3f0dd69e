pub mod fallback;
pub mod service;

pub use fallback::offline_reply;
pub use service::ChatService;
