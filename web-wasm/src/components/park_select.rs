//! 公園選択コンポーネント

use crate::app::AppState;
use leptos::prelude::*;
use park_map_common::RenderMode;

#[component]
pub fn ParkSelect() -> impl IntoView {
    let state = expect_context::<AppState>();

    let codes = move || state.selection.with(|s| s.park_codes().to_vec());
    let selected = move || {
        state
            .selection
            .with(|s| s.selected().unwrap_or_default().to_string())
    };
    let clustered = move || state.presenter.with(|p| p.mode() == RenderMode::Clusters);

    view! {
        <div class="overlay">
            <select
                prop:value=selected
                on:change=move |ev| state.select(&event_target_value(&ev))
            >
                <For
                    each=codes
                    key=|code| code.clone()
                    children=move |code: String| {
                        view! { <option value=code.clone()>{code.clone()}</option> }
                    }
                />
            </select>

            <label class="mode-toggle">
                <input
                    type="checkbox"
                    prop:checked=clustered
                    on:change=move |ev| {
                        let mode = if event_target_checked(&ev) {
                            RenderMode::Clusters
                        } else {
                            RenderMode::Pins
                        };
                        state.set_mode(mode);
                    }
                />
                "Clusters"
            </label>
        </div>
    }
}
