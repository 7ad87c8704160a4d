//! 地図ライブラリ（mapbox-gl）に渡すソース設定とレイヤー定義

use crate::feature::FeatureType;
use crate::presenter::RenderMode;
use serde::Serialize;
use serde_json::{json, Value};

/// GeoJSONソースのid
pub const SOURCE_ID: &str = "photos";
/// クリック対象になる非クラスタ点レイヤーのid
pub const UNCLUSTERED_LAYER_ID: &str = "unclustered-point";
pub const CLUSTER_LAYER_ID: &str = "clusters";
pub const CLUSTER_COUNT_LAYER_ID: &str = "cluster-count";

/// 既定の地図スタイル
pub const MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9";

pub const PLACE_COLOR: &str = "#ff0000";
pub const PHOTO_COLOR: &str = "#0000ff";

/// GeoJSONソースのオプション
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceOptions {
    pub id: &'static str,
    pub cluster: bool,
    pub cluster_max_zoom: u32,
    pub cluster_radius: u32,
}

impl SourceOptions {
    pub fn for_mode(mode: RenderMode) -> Self {
        Self {
            id: SOURCE_ID,
            cluster: mode == RenderMode::Clusters,
            cluster_max_zoom: 14,
            cluster_radius: 50,
        }
    }
}

/// 種別ごとに色と半径を変える点レイヤー
pub fn unclustered_point_layer() -> Value {
    json!({
        "id": UNCLUSTERED_LAYER_ID,
        "type": "circle",
        "source": SOURCE_ID,
        "filter": ["!", ["has", "point_count"]],
        "paint": {
            "circle-radius": ["match", ["get", "type"], "place", 10, "photo", 6, 6],
            "circle-color": ["match", ["get", "type"], "place", PLACE_COLOR, "photo", PHOTO_COLOR, PHOTO_COLOR]
        }
    })
}

pub fn cluster_layer() -> Value {
    json!({
        "id": CLUSTER_LAYER_ID,
        "type": "circle",
        "source": SOURCE_ID,
        "filter": ["has", "point_count"],
        "paint": {
            "circle-color": ["step", ["get", "point_count"], "#51bbd6", 100, "#f1f075", 750, "#f28cb1"],
            "circle-radius": ["step", ["get", "point_count"], 20, 100, 30, 750, 40]
        }
    })
}

pub fn cluster_count_layer() -> Value {
    json!({
        "id": CLUSTER_COUNT_LAYER_ID,
        "type": "symbol",
        "source": SOURCE_ID,
        "filter": ["has", "point_count"],
        "layout": {
            "text-field": "{point_count_abbreviated}",
            "text-font": ["DIN Offc Pro Medium", "Arial Unicode MS Bold"],
            "text-size": 12
        }
    })
}

/// 描画方式に応じたレイヤー一覧（描画順）
///
/// ピン表示ではDOMマーカーを使うのでレイヤーは無い。
pub fn layers_for_mode(mode: RenderMode) -> Vec<Value> {
    match mode {
        RenderMode::Pins => Vec::new(),
        RenderMode::Clusters => vec![cluster_layer(), cluster_count_layer(), unclustered_point_layer()],
    }
}

/// クリックを受け付けるレイヤーid
pub fn interactive_layer_ids(mode: RenderMode) -> Vec<&'static str> {
    match mode {
        RenderMode::Pins => Vec::new(),
        RenderMode::Clusters => vec![UNCLUSTERED_LAYER_ID],
    }
}

/// ピン表示時のマーカー色
pub fn pin_color(feature_type: FeatureType) -> &'static str {
    match feature_type {
        FeatureType::Photo => PHOTO_COLOR,
        _ => PLACE_COLOR,
    }
}
