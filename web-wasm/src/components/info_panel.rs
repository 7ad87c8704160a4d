//! 情報パネル（凡例・件数・エラー）

use crate::app::AppState;
use leptos::prelude::*;
use park_map_common::presenter::LEGEND;

#[component]
pub fn InfoPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let summary = move || state.selection.with(|s| s.summary());
    let photo_count = move || summary().map(|s| s.photo_count.to_string()).unwrap_or_default();
    let place_count = move || summary().map(|s| s.place_count.to_string()).unwrap_or_default();
    let skipped = move || summary().map(|s| s.skipped_count).unwrap_or(0);
    let error = move || state.selection.with(|s| s.last_error().map(|e| e.to_string()));

    view! {
        <div class="overlay-info">
            {LEGEND.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}

            <p>"Photo count for selected park on server: " {photo_count}</p>
            <p>"Total places: " {place_count}</p>

            <Show when=move || { skipped() > 0 }>
                <p class="text-muted">{move || format!("Skipped (no image): {}", skipped())}</p>
            </Show>

            <Show when=move || error().is_some()>
                <p class="error">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
