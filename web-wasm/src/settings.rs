//! ページ設定の読み込み
//!
//! `<meta name="dashboard-config" content="{...}">` があれば既定値を上書きする。
//! 不正な内容はログに残して既定値で続行する。

use image_dashboard_common::{DashboardConfig, Logger};

const CONFIG_META_SELECTOR: &str = "meta[name=\"dashboard-config\"]";

/// meta タグの内容から設定を決定
pub fn resolve_config(content: Option<&str>, logger: &impl Logger) -> DashboardConfig {
    let Some(json) = content.map(str::trim).filter(|s| !s.is_empty()) else {
        return DashboardConfig::default();
    };

    match DashboardConfig::from_json(json) {
        Ok(config) => {
            logger.debug(&format!("webhook endpoint: {}", config.webhook_url));
            config
        }
        Err(e) => {
            logger.error(&format!("{}; falling back to defaults", e));
            DashboardConfig::default()
        }
    }
}

/// 現在のドキュメントから設定を読み込む
pub fn load_page_config(logger: &impl Logger) -> DashboardConfig {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(CONFIG_META_SELECTOR).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    resolve_config(content.as_deref(), logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLogger {
        errors: RefCell<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn debug(&self, _message: &str) {}
    }

    #[test]
    fn test_resolve_without_meta() {
        let logger = RecordingLogger::default();
        assert_eq!(resolve_config(None, &logger), DashboardConfig::default());
        assert_eq!(resolve_config(Some("   "), &logger), DashboardConfig::default());
        assert!(logger.errors.borrow().is_empty());
    }

    #[test]
    fn test_resolve_override() {
        let logger = RecordingLogger::default();
        let config = resolve_config(
            Some(r#"{"webhookUrl": "https://example.com/webhook/abc", "fileField": "image"}"#),
            &logger,
        );
        assert_eq!(config.webhook_url, "https://example.com/webhook/abc");
        assert_eq!(config.file_field, "image");
        assert_eq!(config.accept, "image/*");
    }

    #[test]
    fn test_resolve_invalid_falls_back() {
        let logger = RecordingLogger::default();
        let config = resolve_config(Some(r#"{"webhookUrl": "javascript:alert(1)"}"#), &logger);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(logger.errors.borrow().len(), 1);
        assert!(logger.errors.borrow()[0].contains("falling back"));
    }
}
