//! Index/Parkの取得元
//!
//! 本番はHTTP（[`HttpSource`]）。テストでは任意の実装を差し込める。

mod http;

pub use http::HttpSource;

use park_map_common::{DataLoadError, Index, Park};

/// 公園データの取得元
#[allow(async_fn_in_trait)]
pub trait ParkSource {
    /// 取得元の表示名（ログ用）
    fn describe(&self) -> String;

    async fn fetch_index(&self) -> Result<Index, DataLoadError>;

    async fn fetch_park(&self, code: &str) -> Result<Park, DataLoadError>;
}
