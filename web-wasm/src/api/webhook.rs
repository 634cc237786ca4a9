//! 解析Webhook連携
//!
//! 画像を multipart/form-data で1回だけPOSTし、ステータスと本文をそのまま返す。
//! Content-Type はブラウザが boundary 付きで設定するので指定しない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use image_dashboard_common::{RawResponse, Transport, UploadError};

use crate::preview::BrowserImage;

/// fetch API による送信
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    type File = BrowserImage;

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &BrowserImage,
    ) -> Result<RawResponse, UploadError> {
        send_form(url, field, file.as_file())
            .await
            .map_err(|e| UploadError::Network(describe_js_error(&e)))
    }
}

/// 画像1枚を載せたフォームを作成
pub fn build_form(field: &str, file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(field, file, &file.name())?;
    Ok(form)
}

async fn send_form(url: &str, field: &str, file: &File) -> Result<RawResponse, JsValue> {
    let form = build_form(field, file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;

    Ok(RawResponse {
        status: resp.status(),
        status_text: resp.status_text(),
        body: body.as_string().unwrap_or_default(),
    })
}

/// JS例外をログ向けの文字列に変換
fn describe_js_error(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(name: &str) -> File {
        let bytes = js_sys::Uint8Array::from(&b"\x89PNG\r\n\x1a\n"[..]);
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::FilePropertyBag::new();
        options.set_type("image/png");
        File::new_with_u8_array_sequence_and_options(&JsValue::from(parts), name, &options)
            .expect("File作成失敗")
    }

    #[wasm_bindgen_test]
    fn wasm_build_form_binds_file_field() {
        let form = build_form("file", &make_file("scan.png")).expect("FormData作成失敗");

        let entry: File = form.get("file").dyn_into().expect("Fileではない");
        assert_eq!(entry.name(), "scan.png");
        assert_eq!(entry.size(), 8.0);
        assert!(form.get("image").is_null());
    }

    #[wasm_bindgen_test]
    fn wasm_describe_string_error() {
        assert_eq!(describe_js_error(&JsValue::from_str("Failed to fetch")), "Failed to fetch");
    }
}
