//! Query Handlers

mod voice_handlers;

pub use voice_handlers::{ListVoicesHandler, ListVoicesResponse};
