//! ダッシュボード設定
//!
//! 送信先Webhook・フォームフィールド名・受付MIMEを保持する。
//! ページ起動時に一度だけ読み込み、永続化はしない。

use serde::Deserialize;
use crate::error::{Error, Result};

/// 既定の送信先Webhook
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://shreyahubcredo.app.n8n.cloud/webhook/009f42dc-b706-4eb7-988d-c59cc8ca4e3f";

/// 画像を載せるmultipartフィールド名
pub const DEFAULT_FILE_FIELD: &str = "file";

/// ファイル選択で受け付けるMIME
pub const DEFAULT_ACCEPT: &str = "image/*";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub webhook_url: String,
    pub file_field: String,
    pub accept: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            file_field: DEFAULT_FILE_FIELD.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
        }
    }
}

impl DashboardConfig {
    /// JSONから読み込み（省略された項目は既定値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.webhook_url.trim();
        if url.is_empty() {
            return Err(Error::Config("webhookUrl is empty".into()));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "webhookUrl must be an http(s) URL: {}",
                url
            )));
        }
        if self.file_field.trim().is_empty() {
            return Err(Error::Config("fileField is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
        assert_eq!(config.file_field, "file");
        assert_eq!(config.accept, "image/*");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let config =
            DashboardConfig::from_json(r#"{"webhookUrl": "http://localhost:5678/webhook/test"}"#)
                .unwrap();
        assert_eq!(config.webhook_url, "http://localhost:5678/webhook/test");
        assert_eq!(config.file_field, "file");
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_from_json_rejects_non_http_url() {
        let result = DashboardConfig::from_json(r#"{"webhookUrl": "ftp://example.com/hook"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_rejects_empty_field() {
        let result = DashboardConfig::from_json(r#"{"fileField": "  "}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_invalid_json() {
        let result = DashboardConfig::from_json("{webhookUrl:");
        match result {
            Err(Error::Config(msg)) => assert!(msg.starts_with("invalid JSON")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
