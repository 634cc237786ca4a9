//! 選択ファイルとプレビューURL
//!
//! プレビューは object URL。`ObjectUrl` はdrop時に revoke されるので、
//! 選択を置き換えると古いURLは解放される。

use gloo::file::{Blob, ObjectUrl};
use image_dashboard_common::ImageFile;
use web_sys::File;

/// ファイル入力から得たブラウザのファイル
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserImage(File);

impl BrowserImage {
    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl From<File> for BrowserImage {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl ImageFile for BrowserImage {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }
}

/// プレビュー用 object URL を作成
pub fn object_url(image: &BrowserImage) -> ObjectUrl {
    let blob: web_sys::Blob = image.0.clone().into();
    ObjectUrl::from(Blob::from(blob))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use image_dashboard_common::SelectionSurface;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(name: &str, media_type: &str) -> File {
        let bytes = js_sys::Uint8Array::from(&[0x89u8, b'P', b'N', b'G'][..]);
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::FilePropertyBag::new();
        options.set_type(media_type);
        File::new_with_u8_array_sequence_and_options(&JsValue::from(parts), name, &options)
            .expect("File作成失敗")
    }

    #[wasm_bindgen_test]
    fn wasm_object_url_is_blob_url() {
        let image = BrowserImage::from(make_file("a.png", "image/png"));
        let url = object_url(&image);
        assert!(url.starts_with("blob:"));
        assert_eq!(image.media_type(), "image/png");
    }

    #[wasm_bindgen_test]
    fn wasm_reselect_replaces_object_url() {
        let mut surface = SelectionSurface::new();
        surface
            .select(BrowserImage::from(make_file("a.png", "image/png")), object_url)
            .expect("選択失敗");
        let first = surface.preview().map(|url| String::from(&**url));

        surface
            .select(BrowserImage::from(make_file("b.png", "image/png")), object_url)
            .expect("選択失敗");
        let second = surface.preview().map(|url| String::from(&**url));

        assert!(first.is_some());
        assert_ne!(first, second);
        assert_eq!(surface.file().map(|f| f.file_name()), Some("b.png".to_string()));
    }
}
