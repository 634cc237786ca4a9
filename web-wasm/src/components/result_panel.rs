//! 解析結果表示コンポーネント

use leptos::prelude::*;
use image_dashboard_common::render::{ERROR_TABLE_HEADERS, NO_ERRORS_MESSAGE};
use image_dashboard_common::{Findings, ProcessedImage, ResultView};

#[component]
pub fn ResultPanel(result: ResultView) -> impl IntoView {
    let ResultView { image, text, findings } = result;

    let processed = match image {
        ProcessedImage::Embedded { data_url, .. } => view! {
            <img class="processed-image" src=data_url alt="Processed" />
        }
        .into_any(),
        ProcessedImage::Undecodable => view! {
            <p class="text-muted">"The processed image could not be decoded."</p>
        }
        .into_any(),
    };

    view! {
        <div class="result-panel">
            <p class="result-label">"Processed Image:"</p>
            {processed}

            <div class="result-section">
                <h3>"Extracted Text:"</h3>
                <pre class="extracted-text">{text}</pre>
            </div>

            <div class="result-section">
                <h3>"Detected Errors:"</h3>
                <ErrorTable findings=findings />
            </div>
        </div>
    }
}

#[component]
fn ErrorTable(findings: Findings) -> impl IntoView {
    match findings {
        Findings::NoErrors => view! {
            <p class="text-muted">{NO_ERRORS_MESSAGE}</p>
        }
        .into_any(),
        Findings::Table(rows) => view! {
            <table class="error-table">
                <thead>
                    <tr>
                        {ERROR_TABLE_HEADERS
                            .iter()
                            .map(|header| view! { <th>{*header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td>{row.found_text}</td>
                                <td>{row.error_type}</td>
                                <td>{row.suggestion}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}
