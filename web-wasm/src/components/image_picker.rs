//! 画像選択コンポーネント

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn ImagePicker<F>(
    accept: String,
    preview_src: Signal<Option<String>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        // キャンセル時は現在の選択を維持
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
    };

    view! {
        <div class="image-picker">
            <input type="file" accept=accept on:change=on_change />
            {move || preview_src.get().map(|src| view! {
                <img class="preview" src=src alt="preview" />
            })}
        </div>
    }
}
