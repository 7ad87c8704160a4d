use super::ParkSource;
use crate::error::Result;
use park_map_common::{DataLoadError, Endpoints, Index, Park};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// S3バケット等の静的JSONをHTTPで取得する
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpSource {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("park-map/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoints })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, DataLoadError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataLoadError::new(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataLoadError::new(url, format!("HTTP {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DataLoadError::new(url, e))
    }
}

impl ParkSource for HttpSource {
    fn describe(&self) -> String {
        self.endpoints.base_url().to_string()
    }

    async fn fetch_index(&self) -> std::result::Result<Index, DataLoadError> {
        self.get_json(&self.endpoints.index_url()).await
    }

    async fn fetch_park(&self, code: &str) -> std::result::Result<Park, DataLoadError> {
        let url = self
            .endpoints
            .park_url(code)
            .map_err(|e| DataLoadError::new(code, e))?;
        self.get_json(&url).await
    }
}
