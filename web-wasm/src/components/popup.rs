//! フィーチャーのポップアップ
//!
//! 表示は地図側（mapboxgl.Popup）に任せ、ここではプレゼンターの状態と同期するだけ。

use crate::app::AppState;
use crate::map_bridge;
use leptos::prelude::*;

#[component]
pub fn MapPopup() -> impl IntoView {
    let state = expect_context::<AppState>();

    // パン・ホバーでプレゼンターが変わっても、ポップアップが同じなら作り直さない
    let popup = Memo::new(move |_| state.presenter.with(|p| p.popup().cloned()));

    map_bridge::on_popup_close(move || {
        state.presenter.update(|p| p.close_popup());
    });

    Effect::new(move |_| match popup.get() {
        Some(info) => map_bridge::show_popup(&info),
        None => map_bridge::close_popup(),
    });
}
