//! Image Analysis Dashboard Common Library
//!
//! 画像選択・Webhook送信・結果表示のうち、ブラウザAPIに依存しない部分

pub mod types;
pub mod error;
pub mod config;
pub mod logger;
pub mod selection;
pub mod upload;
pub mod render;

pub use types::{AnalysisResult, ErrorRecord};
pub use error::{Error, Result, UploadError, ValidationError};
pub use config::DashboardConfig;
pub use logger::{Logger, NoopLogger};
pub use selection::{ImageFile, SelectedImage, SelectionSurface, is_image_media_type};
pub use upload::{RawResponse, StateStore, Transport, UploadController, UploadState, decode_response};
pub use render::{ErrorRow, Findings, ProcessedImage, ResultView, render};
