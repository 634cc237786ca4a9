//! 解析結果の表示モデル
//!
//! AnalysisResult → ResultView の純粋な変換。副作用なし。

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use image::ImageFormat;

use crate::types::{AnalysisResult, ErrorRecord};

/// 修正候補がない場合のプレースホルダ
pub const SUGGESTION_PLACEHOLDER: &str = "-";

/// エラー0件時のメッセージ
pub const NO_ERRORS_MESSAGE: &str = "No errors detected 🎉";

/// エラーテーブルの見出し
pub const ERROR_TABLE_HEADERS: [&str; 3] = ["Error Text", "Type", "Suggestion"];

/// 判別できない場合のMIME
const FALLBACK_MEDIA_TYPE: &str = "image/png";

/// パディングの有無を問わないデコーダ（ブラウザの data URL と同じ扱い）
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessedImage {
    /// 表示可能な data URL
    Embedded { media_type: &'static str, data_url: String },
    /// Base64として解釈できない
    Undecodable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRow {
    pub found_text: String,
    pub error_type: String,
    pub suggestion: String,
}

impl From<&ErrorRecord> for ErrorRow {
    fn from(record: &ErrorRecord) -> Self {
        Self {
            found_text: record.found_text.clone(),
            error_type: record.error_type.clone(),
            suggestion: record
                .suggestion()
                .unwrap_or(SUGGESTION_PLACEHOLDER)
                .to_string(),
        }
    }
}

impl ErrorRow {
    pub fn cells(&self) -> [&str; 3] {
        [&self.found_text, &self.error_type, &self.suggestion]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Findings {
    NoErrors,
    Table(Vec<ErrorRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub image: ProcessedImage,
    pub text: String,
    pub findings: Findings,
}

pub fn render(result: &AnalysisResult) -> ResultView {
    ResultView {
        image: processed_image(&result.image),
        text: result.text.clone(),
        findings: findings(&result.errors),
    }
}

pub fn findings(errors: &[ErrorRecord]) -> Findings {
    if errors.is_empty() {
        Findings::NoErrors
    } else {
        Findings::Table(errors.iter().map(ErrorRow::from).collect())
    }
}

/// Base64画像を data URL に変換
///
/// 先頭バイトから形式を判別し、判別できなければ PNG とみなす。
/// 余分な空白・改行は除去してから解釈する。空の場合は表示できない扱い。
pub fn processed_image(encoded: &str) -> ProcessedImage {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return ProcessedImage::Undecodable;
    }

    let bytes = match LENIENT.decode(compact.as_bytes()) {
        Ok(bytes) => bytes,
        Err(_) => return ProcessedImage::Undecodable,
    };

    let media_type = sniff_media_type(&bytes);
    ProcessedImage::Embedded {
        media_type,
        data_url: format!("data:{};base64,{}", media_type, compact),
    }
}

fn sniff_media_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Bmp) => "image/bmp",
        Ok(ImageFormat::Tiff) => "image/tiff",
        Ok(ImageFormat::Ico) => "image/x-icon",
        Ok(ImageFormat::Avif) => "image/avif",
        _ => FALLBACK_MEDIA_TYPE,
    }
}
