//! Webhookレスポンスの型定義
//!
//! - AnalysisResult: 解析結果（処理済み画像・抽出テキスト・検出エラー）
//! - ErrorRecord: 検出された誤り1件

use serde::Deserialize;

/// Webhookの解析結果
///
/// `image` / `text` / `errors` はすべて必須。欠けている場合はデコード失敗として扱う。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// 処理済み画像（Base64）
    pub image: String,

    /// 抽出テキスト
    pub text: String,

    /// 検出エラー（順序を保持、空もあり得る）
    pub errors: Vec<ErrorRecord>,
}

/// 検出された誤り
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorRecord {
    pub found_text: String,
    pub error_type: String,
    #[serde(default)]
    pub suggested_correction: Option<String>,
}

impl ErrorRecord {
    /// 修正候補（空文字列は「なし」とみなす）
    pub fn suggestion(&self) -> Option<&str> {
        self.suggested_correction
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}
