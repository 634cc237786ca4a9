//! メインアプリケーションコンポーネント

use std::rc::Rc;

use gloo::file::ObjectUrl;
use leptos::prelude::*;
use image_dashboard_common::{
    render, ImageFile, Logger, SelectionSurface, StateStore, UploadController, UploadState,
};

use crate::api::webhook::FetchTransport;
use crate::components::{
    header::Header,
    image_picker::ImagePicker,
    result_panel::ResultPanel,
    upload_button::UploadButton,
};
use crate::console_logger::ConsoleLogger;
use crate::preview::{self, BrowserImage};
use crate::settings;

/// シグナルをアップロード状態の保持先として使う
#[derive(Clone, Copy)]
struct SignalStore {
    state: ReadSignal<UploadState>,
    set_state: WriteSignal<UploadState>,
}

impl StateStore for SignalStore {
    fn is_loading(&self) -> bool {
        self.state.with_untracked(UploadState::is_loading)
    }

    fn set_state(&self, state: UploadState) {
        self.set_state.set(state);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller = UploadController::new(
        FetchTransport,
        settings::load_page_config(&ConsoleLogger),
        ConsoleLogger,
    );
    let accept = controller.config().accept.clone();
    let controller = StoredValue::new_local(Rc::new(controller));

    // アプリケーション状態
    let (selection, set_selection) =
        signal_local(SelectionSurface::<BrowserImage, ObjectUrl>::new());
    let (upload_state, set_upload_state) = signal(UploadState::Idle);

    let preview_src = Signal::derive(move || {
        selection.with(|s| s.preview().map(|url| String::from(&**url)))
    });
    let is_loading = Signal::derive(move || upload_state.with(UploadState::is_loading));

    // ファイル選択ハンドラ
    let on_file_selected = move |file: web_sys::File| {
        let image = BrowserImage::from(file);
        let mut outcome = Ok(String::new());
        set_selection.update(|s| {
            outcome = s.select(image, preview::object_url).map(|selected| {
                format!("selected {} -> {}", selected.file().file_name(), &**selected.preview())
            });
        });

        match outcome {
            Ok(message) => ConsoleLogger.debug(&message),
            Err(e) => {
                ConsoleLogger.warn(&format!("selection rejected: {}", e));
                gloo::dialogs::alert(&e.user_message());
            }
        }
    };

    // 送信ハンドラ
    let on_submit = move |_| {
        let file = selection.with_untracked(|s| s.file().cloned());
        let controller = controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let store = SignalStore { state: upload_state, set_state: set_upload_state };
            if let Err(e) = controller.submit(&store, file.as_ref()).await {
                gloo::dialogs::alert(&e.user_message());
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <ImagePicker
                accept=accept
                preview_src=preview_src
                on_file_selected=on_file_selected
            />

            <UploadButton is_loading=is_loading on_submit=on_submit />

            {move || {
                upload_state
                    .with(|s| s.result().map(render))
                    .map(|result| view! { <ResultPanel result=result /> })
            }}
        </div>
    }
}
