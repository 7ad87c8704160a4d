//! メインアプリケーションコンポーネント

use crate::api::data;
use crate::components::{
    info_panel::InfoPanel,
    map_view::MapView,
    park_select::ParkSelect,
    popup::MapPopup,
};
use crate::map_bridge;
use leptos::prelude::*;
use leptos::task::spawn_local;
use park_map_common::{Effect, Endpoints, MapPresenter, ParkOutcome, RenderMode, SelectionState};

/// アプリケーションの状態
///
/// シグナルの束なのでCopyで各コンポーネントへ配れる。
#[derive(Clone, Copy)]
pub struct AppState {
    pub selection: RwSignal<SelectionState>,
    pub presenter: RwSignal<MapPresenter>,
    endpoints: StoredValue<Endpoints>,
}

impl AppState {
    pub fn new(endpoints: Endpoints, mode: RenderMode) -> Self {
        Self {
            selection: RwSignal::new(SelectionState::default()),
            presenter: RwSignal::new(MapPresenter::new(mode)),
            endpoints: StoredValue::new(endpoints),
        }
    }

    /// 起動時のIndex取得
    pub fn start(self) {
        if let Some(effect) = self.selection.try_update(|s| s.start()).flatten() {
            self.dispatch(effect);
        }
    }

    /// セレクトボックスの変更
    pub fn select(self, code: &str) {
        match self.selection.try_update(|s| s.select(code)) {
            Some(Ok(effect)) => self.dispatch(effect),
            Some(Err(e)) => log::warn!("{}", e),
            None => {}
        }
    }

    pub fn set_mode(self, mode: RenderMode) {
        self.presenter.update(|p| p.set_mode(mode));
        self.selection
            .with_untracked(|s| map_bridge::render_features(s.features(), mode));
    }

    /// 状態遷移が返した取得処理を実行する
    ///
    /// 取得は投げっぱなしで、応答の採否は世代番号で [`SelectionState`] が決める。
    fn dispatch(self, effect: Effect) {
        let endpoints = self.endpoints.get_value();

        match effect {
            Effect::FetchIndex => spawn_local(async move {
                match data::fetch_index(&endpoints).await {
                    Ok(index) => match self.selection.try_update(|s| s.on_index_loaded(&index)) {
                        Some(Ok(next)) => self.dispatch(next),
                        Some(Err(e)) => log::error!("{}", e),
                        None => {}
                    },
                    Err(e) => self.selection.update(|s| s.on_index_failed(e)),
                }
            }),
            Effect::FetchPark { code, generation } => spawn_local(async move {
                match data::fetch_park(&endpoints, &code).await {
                    Ok(park) => {
                        let outcome = self
                            .selection
                            .try_update(|s| s.on_park_loaded(generation, park));
                        if outcome == Some(ParkOutcome::Applied) {
                            self.show_park();
                        }
                    }
                    Err(e) => {
                        self.selection.update(|s| {
                            s.on_park_failed(generation, e);
                        });
                    }
                }
            }),
        }
    }

    /// 読み込んだ公園を地図へ反映
    fn show_park(self) {
        let viewport = self.selection.with_untracked(|s| s.viewport());
        self.presenter.update(|p| {
            p.set_viewport(viewport);
            p.close_popup();
        });

        let mode = self.presenter.with_untracked(|p| p.mode());
        self.selection
            .with_untracked(|s| map_bridge::render_features(s.features(), mode));
        map_bridge::set_viewport(viewport);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(Endpoints::default(), RenderMode::Clusters);
    provide_context(state);
    state.start();

    view! {
        <ParkSelect />
        <InfoPanel />
        <MapView />
        <MapPopup />
    }
}
