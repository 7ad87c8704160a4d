use crate::error::{ParkMapError, Result};
use park_map_common::{Endpoints, RenderMode, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "PARK_MAP_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// 起動時に選ぶ公園（Indexに無ければ先頭）
    pub default_park: Option<String>,
    pub render_mode: RenderMode,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            default_park: None,
            render_mode: RenderMode::Clusters,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ParkMapError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("park-map").join("config.json"))
    }

    /// 実際に使うベースURL（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        if let Some(url) = cli_override {
            return url.to_string();
        }
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.base_url.clone(),
        }
    }

    pub fn endpoints(&self, cli_override: Option<&str>) -> Endpoints {
        Endpoints::new(self.resolve_base_url(cli_override))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ParkMapError::Config(format!("URLはhttp(s)で指定してください: {}", url)));
        }
        self.base_url = url;
        Ok(())
    }

    pub fn set_default_park(&mut self, code: &str) -> Result<()> {
        let code = park_map_common::ParkCode::parse(code)?;
        self.default_park = Some(code.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.render_mode, RenderMode::Clusters);
        assert!(config.default_park.is_none());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_default_park("arch").unwrap();
        config.render_mode = RenderMode::Pins;
        config.save_to(&path).expect("設定保存失敗");

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_park.as_deref(), Some("ARCH"));
        assert_eq!(loaded.render_mode, RenderMode::Pins);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config::default();
        assert_eq!(
            config.resolve_base_url(Some("http://localhost:9000")),
            "http://localhost:9000"
        );
    }

    #[test]
    fn test_set_base_url_validation() {
        let mut config = Config::default();
        assert!(matches!(config.set_base_url("ftp://x".into()), Err(ParkMapError::Config(_))));
        config.set_base_url("http://localhost:9000".into()).unwrap();
        assert_eq!(config.endpoints(Some("http://a")).index_url(), "http://a/index.json");
    }
}
