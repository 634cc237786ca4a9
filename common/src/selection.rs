//! 画像選択
//!
//! 選択中のファイルとそのプレビュー参照を1件だけ保持する。
//! 新しいファイルを選ぶと古いプレビューは破棄される（追記はしない）。

use crate::error::{Result, ValidationError};

/// 選択対象ファイルが提供すべき情報
pub trait ImageFile {
    fn file_name(&self) -> String;

    /// 宣言されたMIMEタイプ（例: "image/png"）
    fn media_type(&self) -> String;
}

/// 宣言MIMEが画像かどうか
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}

/// 選択済み画像（ファイル + プレビュー）
#[derive(Debug)]
pub struct SelectedImage<F, P> {
    file: F,
    preview: P,
}

impl<F, P> SelectedImage<F, P> {
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }
}

#[derive(Debug)]
pub struct SelectionSurface<F, P> {
    current: Option<SelectedImage<F, P>>,
}

impl<F, P> Default for SelectionSurface<F, P> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<F: ImageFile, P> SelectionSurface<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択し、プレビューを作り直す
    ///
    /// 画像以外は拒否し、現在の選択はそのまま残す。
    /// 置き換えた古いプレビューはここでdropされる。
    pub fn select(
        &mut self,
        file: F,
        make_preview: impl FnOnce(&F) -> P,
    ) -> Result<&SelectedImage<F, P>> {
        let media_type = file.media_type();
        if !is_image_media_type(&media_type) {
            return Err(ValidationError::NotAnImage { media_type }.into());
        }

        let preview = make_preview(&file);
        let selected = self.current.insert(SelectedImage { file, preview });
        Ok(&*selected)
    }

    pub fn file(&self) -> Option<&F> {
        self.current.as_ref().map(|s| &s.file)
    }

    pub fn preview(&self) -> Option<&P> {
        self.current.as_ref().map(|s| &s.preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;
    use std::rc::Rc;

    struct TestFile {
        name: &'static str,
        media_type: &'static str,
    }

    impl ImageFile for TestFile {
        fn file_name(&self) -> String {
            self.name.to_string()
        }
        fn media_type(&self) -> String {
            self.media_type.to_string()
        }
    }

    /// dropされた回数を数えるプレビュー
    struct CountingPreview {
        src: String,
        released: Rc<Cell<usize>>,
    }

    impl Drop for CountingPreview {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn png(name: &'static str) -> TestFile {
        TestFile { name, media_type: "image/png" }
    }

    #[test]
    fn test_media_type_check() {
        assert!(is_image_media_type("image/png"));
        assert!(is_image_media_type("IMAGE/JPEG"));
        assert!(is_image_media_type("image/svg+xml"));
        assert!(!is_image_media_type("application/pdf"));
        assert!(!is_image_media_type(""));
    }

    #[test]
    fn test_select_sets_preview() {
        let mut surface: SelectionSurface<TestFile, String> = SelectionSurface::new();
        assert!(surface.file().is_none());

        let selected = surface
            .select(png("a.png"), |f| format!("blob:{}", f.file_name()))
            .unwrap();
        assert_eq!(selected.preview(), "blob:a.png");
        assert_eq!(selected.file().name, "a.png");
        assert_eq!(surface.file().map(|f| f.name), Some("a.png"));
    }

    #[test]
    fn test_second_select_replaces_preview() {
        let released = Rc::new(Cell::new(0));
        let mut surface = SelectionSurface::new();

        let make = |name: &str, released: &Rc<Cell<usize>>| CountingPreview {
            src: format!("blob:{}", name),
            released: released.clone(),
        };

        surface.select(png("first.png"), |_| make("first", &released)).unwrap();
        assert_eq!(released.get(), 0);

        surface.select(png("second.png"), |_| make("second", &released)).unwrap();

        // 古いプレビューは破棄され、保持しているのは新しい1件のみ
        assert_eq!(released.get(), 1);
        assert_eq!(surface.preview().map(|p| p.src.as_str()), Some("blob:second"));
        assert_eq!(surface.file().map(|f| f.name), Some("second.png"));
    }

    #[test]
    fn test_non_image_rejected_keeps_current() {
        let mut surface: SelectionSurface<TestFile, String> = SelectionSurface::new();
        surface.select(png("keep.png"), |_| "blob:keep".to_string()).unwrap();

        let mut preview_built = false;
        let result = surface.select(
            TestFile { name: "doc.pdf", media_type: "application/pdf" },
            |_| {
                preview_built = true;
                "blob:doc".to_string()
            },
        );

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::NotAnImage { .. }))
        ));
        assert!(!preview_built);
        assert_eq!(surface.preview().map(String::as_str), Some("blob:keep"));
    }
}
