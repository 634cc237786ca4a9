//! アップロード制御
//!
//! 1回の送信 = multipart POST 1回。状態遷移は
//! `Idle/Succeeded/Failed → Loading → Succeeded | Failed` のみで、再試行はしない。
//!
//! `Loading` への遷移はリクエスト発行前に行い、終端遷移は送信ごとに必ず1回だけ行う。
//! 送信中のFutureが途中でdropされた場合も `Failed` に戻す。

use std::cell::RefCell;

use crate::config::DashboardConfig;
use crate::error::{Result, UploadError, ValidationError};
use crate::logger::Logger;
use crate::selection::ImageFile;
use crate::types::AnalysisResult;

/// アップロード状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    Loading,
    Succeeded(AnalysisResult),
    Failed,
}

impl UploadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UploadState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            UploadState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Loading => "loading",
            UploadState::Succeeded(_) => "succeeded",
            UploadState::Failed => "failed",
        }
    }
}

/// 状態の保持先（ブラウザではシグナル）
pub trait StateStore {
    fn is_loading(&self) -> bool;
    fn set_state(&self, state: UploadState);
}

impl StateStore for RefCell<UploadState> {
    fn is_loading(&self) -> bool {
        self.borrow().is_loading()
    }

    fn set_state(&self, state: UploadState) {
        *self.borrow_mut() = state;
    }
}

/// Webhookの生レスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// multipart送信の抽象
///
/// 実装はリクエストを1回だけ発行し、ステータスと本文をそのまま返す。
/// 接続失敗など応答が得られない場合のみ `UploadError::Network` を返す。
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File: ImageFile;

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &Self::File,
    ) -> std::result::Result<RawResponse, UploadError>;
}

/// レスポンスを解析結果に変換
pub fn decode_response(raw: RawResponse) -> std::result::Result<AnalysisResult, UploadError> {
    if !raw.is_success() {
        return Err(UploadError::Status {
            status: raw.status,
            status_text: raw.status_text,
        });
    }

    serde_json::from_str(&raw.body).map_err(|e| UploadError::Decode(e.to_string()))
}

/// 送信中ガード
///
/// 生成時に `Loading` を設定し、`settle` されないままdropされたら `Failed` に戻す。
struct InFlight<'a, S: StateStore + ?Sized, L: Logger> {
    store: &'a S,
    logger: &'a L,
    settled: bool,
}

impl<'a, S: StateStore + ?Sized, L: Logger> InFlight<'a, S, L> {
    fn begin(store: &'a S, logger: &'a L) -> Self {
        store.set_state(UploadState::Loading);
        Self { store, logger, settled: false }
    }

    fn settle(mut self, state: UploadState) {
        self.settled = true;
        self.store.set_state(state);
    }
}

impl<S: StateStore + ?Sized, L: Logger> Drop for InFlight<'_, S, L> {
    fn drop(&mut self) {
        if !self.settled {
            self.logger.warn("upload abandoned before the webhook answered");
            self.store.set_state(UploadState::Failed);
        }
    }
}

pub struct UploadController<T, L> {
    transport: T,
    config: DashboardConfig,
    logger: L,
}

impl<T: Transport, L: Logger> UploadController<T, L> {
    pub fn new(transport: T, config: DashboardConfig, logger: L) -> Self {
        Self { transport, config, logger }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 選択中の画像をWebhookへ送信する
    ///
    /// 未選択・送信中の場合はネットワーク呼び出しを行わずに `ValidationError` を返し、
    /// 状態も変更しない。
    pub async fn submit<S: StateStore + ?Sized>(
        &self,
        store: &S,
        image: Option<&T::File>,
    ) -> Result<AnalysisResult> {
        let Some(file) = image else {
            self.logger.warn("submit ignored: no image selected");
            return Err(ValidationError::NoFileSelected.into());
        };

        if store.is_loading() {
            self.logger.warn("submit ignored: an upload is already in progress");
            return Err(ValidationError::SubmitInFlight.into());
        }

        let flight = InFlight::begin(store, &self.logger);
        self.logger.info(&format!(
            "uploading {} ({}) to {}",
            file.file_name(),
            file.media_type(),
            self.config.webhook_url
        ));

        match self.round_trip(file).await {
            Ok(result) => {
                self.logger.info(&format!(
                    "analysis received: {} chars of text, {} error(s)",
                    result.text.chars().count(),
                    result.errors.len()
                ));
                flight.settle(UploadState::Succeeded(result.clone()));
                Ok(result)
            }
            Err(e) => {
                self.logger.error(&format!("upload failed: {}", e));
                flight.settle(UploadState::Failed);
                Err(e.into())
            }
        }
    }

    async fn round_trip(&self, file: &T::File) -> std::result::Result<AnalysisResult, UploadError> {
        let raw = self
            .transport
            .post_multipart(&self.config.webhook_url, &self.config.file_field, file)
            .await?;

        self.logger.debug(&format!(
            "webhook responded {} {} ({} bytes)",
            raw.status,
            raw.status_text,
            raw.body.len()
        ));

        decode_response(raw)
    }
}
