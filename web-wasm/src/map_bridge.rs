//! mapbox-gl ブリッジ
//!
//! 地図の描画は `js/map-bridge.js` に任せ、Rust側からはJSON文字列だけを渡す。
//! 地図からのイベント（クリック・移動・ホバー）はコールバックで受け取る。

use park_map_common::layers::{self, SourceOptions};
use park_map_common::{FeatureCollection, FeatureProperties, PopupInfo, RenderMode, Viewport};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================
// JavaScript関数のextern宣言
// ============================================

#[wasm_bindgen(module = "/js/map-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = "initMap", catch)]
    fn init_map_js(container_id: &str, style_url: &str, viewport_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = "setViewport")]
    fn set_viewport_js(viewport_json: &str);

    /// クラスタ表示: GeoJSONソースとレイヤーを差し替え
    #[wasm_bindgen(js_name = "setLayers")]
    fn set_layers_js(features_json: &str, source_json: &str, layers_json: &str, interactive_json: &str);

    /// ピン表示: DOMマーカーを差し替え
    #[wasm_bindgen(js_name = "setPins")]
    fn set_pins_js(pins_json: &str);

    /// フィーチャー位置に固定したポップアップ
    #[wasm_bindgen(js_name = "showPopup")]
    fn show_popup_js(popup_json: &str);

    #[wasm_bindgen(js_name = "closePopup")]
    fn close_popup_js();

    /// ポップアップの×ボタン
    #[wasm_bindgen(js_name = "onPopupClose")]
    fn on_popup_close_js(callback: &Closure<dyn Fn()>);

    #[wasm_bindgen(js_name = "setCursor")]
    fn set_cursor_js(cursor: &str);

    #[wasm_bindgen(js_name = "onFeatureClick")]
    fn on_feature_click_js(callback: &Closure<dyn Fn(String)>);

    #[wasm_bindgen(js_name = "onMove")]
    fn on_move_js(callback: &Closure<dyn Fn(String)>);

    #[wasm_bindgen(js_name = "onHover")]
    fn on_hover_js(callback: &Closure<dyn Fn(bool)>);
}

/// ピン1本分
#[derive(Debug, Clone, Serialize)]
pub struct Pin<'a> {
    pub coordinates: [f64; 2],
    pub color: &'static str,
    pub properties: &'a FeatureProperties,
}

pub fn pins(collection: &FeatureCollection) -> Vec<Pin<'_>> {
    collection
        .features
        .iter()
        .map(|f| Pin {
            coordinates: f.geometry.coordinates,
            color: layers::pin_color(f.properties.feature_type),
            properties: &f.properties,
        })
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("serialize failed: {}", e);
        "null".to_string()
    })
}

pub fn init_map(container_id: &str, viewport: Viewport) -> Result<(), String> {
    init_map_js(container_id, layers::MAP_STYLE, &to_json(&viewport))
        .map_err(|e| format!("地図の初期化に失敗: {:?}", e))
}

pub fn set_viewport(viewport: Viewport) {
    set_viewport_js(&to_json(&viewport));
}

/// 描画方式に応じてフィーチャーを地図へ渡す
pub fn render_features(collection: &FeatureCollection, mode: RenderMode) {
    match mode {
        RenderMode::Pins => {
            set_layers_js("null", "null", "[]", "[]");
            set_pins_js(&to_json(&pins(collection)));
        }
        RenderMode::Clusters => {
            set_pins_js("[]");
            set_layers_js(
                &to_json(collection),
                &to_json(&SourceOptions::for_mode(mode)),
                &to_json(&layers::layers_for_mode(mode)),
                &to_json(&layers::interactive_layer_ids(mode)),
            );
        }
    }
}

/// ポップアップ1枚分の表示内容
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupView<'a> {
    pub long: f64,
    pub lat: f64,
    pub title: &'a str,
    pub type_label: String,
    pub subtitle: &'a str,
    pub url: &'a str,
}

impl<'a> From<&'a PopupInfo> for PopupView<'a> {
    fn from(info: &'a PopupInfo) -> Self {
        Self {
            long: info.location.long,
            lat: info.location.lat,
            title: &info.title,
            type_label: info.type_label(),
            subtitle: &info.subtitle,
            url: &info.url,
        }
    }
}

pub fn show_popup(info: &PopupInfo) {
    show_popup_js(&to_json(&PopupView::from(info)));
}

pub fn close_popup() {
    close_popup_js();
}

pub fn on_popup_close<F>(handler: F)
where
    F: Fn() + 'static,
{
    let closure = Closure::<dyn Fn()>::new(handler);
    on_popup_close_js(&closure);
    closure.forget();
}

pub fn set_cursor(css: &str) {
    set_cursor_js(css);
}

/// クリックされたフィーチャーのプロパティ配列（JSON）を受け取る
pub fn on_feature_click<F>(handler: F)
where
    F: Fn(Vec<FeatureProperties>) + 'static,
{
    let closure = Closure::<dyn Fn(String)>::new(move |json: String| {
        handler(parse_clicked(&json));
    });
    on_feature_click_js(&closure);
    closure.forget();
}

pub fn on_move<F>(handler: F)
where
    F: Fn(Viewport) + 'static,
{
    let closure = Closure::<dyn Fn(String)>::new(move |json: String| {
        match serde_json::from_str::<Viewport>(&json) {
            Ok(viewport) => handler(viewport),
            Err(e) => log::warn!("invalid viewport from map: {}", e),
        }
    });
    on_move_js(&closure);
    closure.forget();
}

pub fn on_hover<F>(handler: F)
where
    F: Fn(bool) + 'static,
{
    let closure = Closure::<dyn Fn(bool)>::new(handler);
    on_hover_js(&closure);
    closure.forget();
}

/// 読めないフィーチャーは捨てる
pub fn parse_clicked(json: &str) -> Vec<FeatureProperties> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(json) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("invalid click payload: {}", e);
            return Vec::new();
        }
    };

    values
        .into_iter()
        .filter_map(|value| match FeatureProperties::from_json(value) {
            Ok(props) => Some(props),
            Err(e) => {
                log::warn!("ignoring clicked feature: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_map_common::{build_features, Coordinate, FeatureType, Image, Park, Photo};

    #[test]
    fn test_parse_clicked_skips_invalid() {
        let json = r#"[
            {"id": "ph1", "w": 10, "h": 20, "url": "u", "type": "photo", "title": "T", "mag": 2.3, "lat": 1.0, "long": 2.0},
            {"id": "broken"}
        ]"#;
        let props = parse_clicked(json);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].id, "ph1");
        assert!(parse_clicked("not json").is_empty());
    }

    #[test]
    fn test_pins_carry_color_and_coordinates() {
        let park = Park {
            photos: vec![Photo {
                id: "ph1".into(),
                location: Coordinate::new(38.7, -109.5),
                images: vec![Image::default()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let collection = build_features(&park).into_collection();
        let pins = pins(&collection);
        assert_eq!(pins[0].coordinates, [-109.5, 38.7]);
        assert_eq!(pins[0].color, layers::PHOTO_COLOR);
    }

    #[test]
    fn test_popup_view_is_anchored_at_feature() {
        let info = PopupInfo {
            id: "ph1".into(),
            title: "Delicate Arch".into(),
            subtitle: "w:640px\t\t\th:480px".into(),
            url: "https://img/ph1.jpg".into(),
            feature_type: FeatureType::Photo,
            location: Coordinate::new(38.74, -109.5),
        };
        let json = serde_json::to_value(PopupView::from(&info)).unwrap();
        assert_eq!(json["long"], -109.5);
        assert_eq!(json["lat"], 38.74);
        assert_eq!(json["typeLabel"], "[photo]");
        assert_eq!(json["subtitle"], "w:640px\t\t\th:480px");
    }
}
