//! HTTP Handlers

mod block;
mod export;
mod ping;
mod voice;

pub use block::*;
pub use export::*;
pub use ping::*;
pub use voice::*;
