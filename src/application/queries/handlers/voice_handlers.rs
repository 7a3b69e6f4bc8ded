//! Voice Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::ListVoices;
use crate::domain::voice::VoiceId;

/// 语音目录响应
#[derive(Debug, Clone)]
pub struct ListVoicesResponse {
    pub voices: Vec<VoiceId>,
}

/// ListVoices Handler
///
/// 目录来自配置——外部服务定义的枚举集，不是封闭集合。
pub struct ListVoicesHandler {
    catalog: Vec<VoiceId>,
}

impl ListVoicesHandler {
    pub fn new(catalog: Vec<VoiceId>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<ListVoicesResponse, ApplicationError> {
        Ok(ListVoicesResponse {
            voices: self.catalog.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_voices_returns_catalog() {
        let catalog = vec![
            VoiceId::new("pt-BR-AntonioNeural").unwrap(),
            VoiceId::new("pt-PT-RaquelNeural").unwrap(),
        ];
        let handler = ListVoicesHandler::new(catalog.clone());
        let response = handler.handle(ListVoices).await.unwrap();
        assert_eq!(response.voices, catalog);
    }
}
