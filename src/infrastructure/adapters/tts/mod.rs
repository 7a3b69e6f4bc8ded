//! TTS Adapter - 语音合成客户端实现

mod fake_tts_client;
mod http_tts_client;

pub use fake_tts_client::FakeTtsClient;
pub use http_tts_client::{HttpTtsClient, HttpTtsClientConfig};
