//! 地図コンテナ
//!
//! 要素がマウントされたら一度だけ地図を初期化し、イベントをプレゼンターへつなぐ。

use crate::app::AppState;
use crate::map_bridge;
use leptos::html::Div;
use leptos::prelude::*;

const MAP_CONTAINER_ID: &str = "map";

#[component]
pub fn MapView() -> impl IntoView {
    let state = expect_context::<AppState>();
    let container = NodeRef::<Div>::new();
    let initialized = StoredValue::new(false);

    Effect::new(move |_| {
        if container.get().is_none() || initialized.get_value() {
            return;
        }
        initialized.set_value(true);

        let viewport = state.presenter.with_untracked(|p| p.viewport());
        if let Err(e) = map_bridge::init_map(MAP_CONTAINER_ID, viewport) {
            log::error!("{}", e);
            return;
        }

        map_bridge::on_feature_click(move |features| {
            state.presenter.update(|p| {
                p.on_click(&features);
            });
        });

        map_bridge::on_move(move |viewport| {
            state.presenter.update(|p| p.on_move(viewport));
        });

        map_bridge::on_hover(move |inside| {
            state.presenter.update(|p| {
                if inside {
                    p.on_mouse_enter()
                } else {
                    p.on_mouse_leave()
                }
            });
            map_bridge::set_cursor(state.presenter.with_untracked(|p| p.cursor().as_css()));
        });
    });

    view! {
        <div
            id=MAP_CONTAINER_ID
            node_ref=container
            class="map"
            style="width: 100vw; height: 100vh;"
        />
    }
}
