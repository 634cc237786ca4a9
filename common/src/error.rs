//! エラー型定義

use thiserror::Error;

/// 送信前に検出される入力エラー（ネットワーク呼び出しは行わない）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no image selected")]
    NoFileSelected,

    #[error("not an image: {media_type:?}")]
    NotAnImage { media_type: String },

    #[error("an upload is already in progress")]
    SubmitInFlight,
}

/// Webhookとの通信で発生するエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("webhook responded with HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("response body is not a valid analysis result: {0}")]
    Decode(String),
}

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// ユーザー向けアラート文言
    ///
    /// アップロード失敗はすべて同じ文言にまとめ、詳細はログ側に残す。
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(ValidationError::NoFileSelected) => {
                "Please select an image first!".to_string()
            }
            Error::Validation(ValidationError::NotAnImage { .. }) => {
                "Please choose an image file.".to_string()
            }
            Error::Validation(ValidationError::SubmitInFlight) => {
                "An image is already being processed.".to_string()
            }
            Error::Upload(_) => "Upload failed. Check console for details.".to_string(),
            Error::Config(msg) => format!("Configuration error: {}", msg),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
