//! 送信ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn UploadButton<F>(
    is_loading: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="btn btn-primary"
            disabled=move || is_loading.get()
            on:click={
                let on_submit = on_submit.clone();
                move |_| on_submit(())
            }
        >
            {move || if is_loading.get() { "Processing..." } else { "Send to n8n" }}
        </button>
    }
}
