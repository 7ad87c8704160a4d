//! バケットからIndex/ParkのJSONを取得（fetch API）

use park_map_common::{DataLoadError, Endpoints, Index, Park};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// JsValueのエラーを文字列化
fn describe(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "unknown error".to_string())
}

async fn fetch_json_inner<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(describe)?;

    let window = web_sys::window().ok_or("window is not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(describe)?;
    let resp: Response = resp_value.dyn_into().map_err(describe)?;

    if !resp.ok() {
        return Err(format!("HTTP {} {}", resp.status(), resp.status_text()));
    }

    let json = JsFuture::from(resp.json().map_err(describe)?)
        .await
        .map_err(describe)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// GETしてJSONをデコード。失敗はエンドポイント付きで返す
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, DataLoadError> {
    log::debug!("GET {}", url);
    fetch_json_inner(url)
        .await
        .map_err(|cause| DataLoadError::new(url, cause))
}

pub async fn fetch_index(endpoints: &Endpoints) -> Result<Index, DataLoadError> {
    fetch_json(&endpoints.index_url()).await
}

pub async fn fetch_park(endpoints: &Endpoints, code: &str) -> Result<Park, DataLoadError> {
    let url = endpoints
        .park_url(code)
        .map_err(|e| DataLoadError::new(code, e))?;
    fetch_json(&url).await
}
