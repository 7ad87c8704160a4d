//! データバケットのURL

use crate::error::Result;
use crate::types::ParkCode;

/// 既定のデータバケット
pub const DEFAULT_BASE_URL: &str = "https://nps-photos-app-data.s3.amazonaws.com";

/// Index/ParkのURLを組み立てる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn index_url(&self) -> String {
        format!("{}/index.json", self.base_url)
    }

    /// コードは検証・大文字化してから埋め込む
    pub fn park_url(&self, code: &str) -> Result<String> {
        let code = ParkCode::parse(code)?;
        Ok(format!("{}/parks/{}.json", self.base_url, code))
    }
}
