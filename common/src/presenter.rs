//! 地図表示の状態（ビューポート・ポップアップ・カーソル）
//!
//! 描画そのものは地図ライブラリ側に任せ、ここではイベントから表示状態を決めるだけ。

use crate::feature::{FeatureCollection, FeatureProperties, FeatureType};
use crate::types::{Coordinate, Park};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 公園読み込み後のズーム
pub const PARK_ZOOM: f64 = 9.0;

/// 地図の表示範囲
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    /// 公園未選択時の初期表示（北米中央付近）
    fn default() -> Self {
        Self {
            longitude: -100.0,
            latitude: 40.0,
            zoom: 12.0,
        }
    }
}

impl Viewport {
    /// bboxの最初の隅を中心にする
    pub fn for_park(park: &Park) -> Option<Self> {
        park.header.anchor().map(|corner| Self {
            longitude: corner.long,
            latitude: corner.lat,
            zoom: PARK_ZOOM,
        })
    }
}

/// マーカーの描画方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// フィーチャーごとのピン
    Pins,
    /// GeoJSONソース＋円レイヤー（クラスタ表示）
    #[default]
    Clusters,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Pins => "pins",
            RenderMode::Clusters => "clusters",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pins" | "markers" => Ok(RenderMode::Pins),
            "clusters" | "layers" => Ok(RenderMode::Clusters),
            _ => Err(format!("Unknown render mode: {}", s)),
        }
    }
}

/// マウスカーソル
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Auto,
    Pointer,
}

impl Cursor {
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Auto => "auto",
            Cursor::Pointer => "pointer",
        }
    }
}

/// ポップアップの表示内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupInfo {
    pub id: String,
    pub title: String,
    /// "w:{w}px\t\t\th:{h}px"
    pub subtitle: String,
    pub url: String,
    pub feature_type: FeatureType,
    pub location: Coordinate,
}

impl From<&FeatureProperties> for PopupInfo {
    fn from(props: &FeatureProperties) -> Self {
        Self {
            id: props.id.clone(),
            title: props.title.clone(),
            subtitle: format!("w:{}px\t\t\th:{}px", props.w, props.h),
            url: props.url.clone(),
            feature_type: props.feature_type,
            location: props.location(),
        }
    }
}

impl PopupInfo {
    /// "[photo]" のような種別ラベル
    pub fn type_label(&self) -> String {
        format!("[{}]", self.feature_type.as_str())
    }
}

/// 情報パネルに出す件数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParkSummary {
    pub code: String,
    pub name: String,
    /// サーバー上の写真枚数（スキップ分を含む）
    pub photo_count: usize,
    pub place_count: usize,
    pub feature_count: usize,
    pub skipped_count: usize,
}

impl ParkSummary {
    pub fn new(park: &Park, features: &FeatureCollection, skipped_count: usize) -> Self {
        Self {
            code: park.header.code.clone(),
            name: park.header.name.clone(),
            photo_count: park.photos.len(),
            place_count: park.places.len(),
            feature_count: features.len(),
            skipped_count,
        }
    }
}

/// 凡例
pub const LEGEND: [&str; 2] = ["Red markers are places", "Blue ones are photos"];

/// 地図表示の状態コンテナ
#[derive(Debug, Clone, Default)]
pub struct MapPresenter {
    viewport: Viewport,
    popup: Option<PopupInfo>,
    cursor: Cursor,
    mode: RenderMode,
}

impl MapPresenter {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn popup(&self) -> Option<&PopupInfo> {
        self.popup.as_ref()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    /// 公園読み込み時にビューポートを差し替える
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// ユーザーのパン・ズーム
    pub fn on_move(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// クリックされたフィーチャーのうち先頭をポップアップ表示する
    ///
    /// 既存のポップアップは必ず閉じる。フィーチャーが無ければ閉じたまま。
    pub fn on_click(&mut self, features: &[FeatureProperties]) -> Option<&PopupInfo> {
        self.popup = features.first().map(PopupInfo::from);
        self.popup.as_ref()
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    pub fn on_mouse_enter(&mut self) {
        self.cursor = Cursor::Pointer;
    }

    pub fn on_mouse_leave(&mut self) {
        self.cursor = Cursor::Auto;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParkHeader;

    fn props(id: &str, title: &str) -> FeatureProperties {
        FeatureProperties {
            id: id.to_string(),
            w: 640,
            h: 480,
            url: format!("https://img/{}.jpg", id),
            feature_type: FeatureType::Photo,
            title: title.to_string(),
            mag: 2.3,
            lat: 44.4,
            long: -110.5,
        }
    }

    #[test]
    fn test_default_viewport() {
        let presenter = MapPresenter::default();
        assert_eq!(presenter.viewport(), Viewport { longitude: -100.0, latitude: 40.0, zoom: 12.0 });
        assert_eq!(presenter.mode(), RenderMode::Clusters);
    }

    #[test]
    fn test_viewport_from_first_bbox_corner() {
        let park = Park {
            header: ParkHeader {
                bbox: vec![Coordinate::new(44.1, -111.1), Coordinate::new(45.1, -109.8)],
                ..Default::default()
            },
            ..Default::default()
        };
        let viewport = Viewport::for_park(&park).unwrap();
        assert_eq!(viewport, Viewport { longitude: -111.1, latitude: 44.1, zoom: PARK_ZOOM });
        assert!(Viewport::for_park(&Park::default()).is_none());
    }

    #[test]
    fn test_click_opens_single_popup_for_first_feature() {
        let mut presenter = MapPresenter::default();
        let popup = presenter
            .on_click(&[props("a", "Old Faithful"), props("b", "Other")])
            .cloned()
            .unwrap();
        assert_eq!(popup.id, "a");
        assert_eq!(popup.subtitle, "w:640px\t\t\th:480px");
        assert_eq!(popup.type_label(), "[photo]");
        assert_eq!(popup.location, Coordinate::new(44.4, -110.5));

        presenter.on_click(&[props("b", "Other")]);
        assert_eq!(presenter.popup().unwrap().id, "b");
    }

    #[test]
    fn test_click_on_empty_area_closes_popup() {
        let mut presenter = MapPresenter::default();
        presenter.on_click(&[props("a", "A")]);
        assert!(presenter.on_click(&[]).is_none());
        assert!(presenter.popup().is_none());
    }

    #[test]
    fn test_cursor_follows_hover() {
        let mut presenter = MapPresenter::default();
        presenter.on_mouse_enter();
        assert_eq!(presenter.cursor().as_css(), "pointer");
        presenter.on_mouse_leave();
        assert_eq!(presenter.cursor(), Cursor::Auto);
    }

    #[test]
    fn test_render_mode_from_str() {
        assert_eq!("pins".parse::<RenderMode>(), Ok(RenderMode::Pins));
        assert_eq!("Clusters".parse::<RenderMode>(), Ok(RenderMode::Clusters));
        assert!("heatmap".parse::<RenderMode>().is_err());
    }
}
