//! エラーケーステスト

use park_map::config::Config;
use park_map::error::ParkMapError;
use park_map_common::{DataLoadError, Error};
use tempfile::tempdir;

/// 壊れた設定ファイル
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ParkMapError::JsonParse(_)));
}

/// 不正な公園コードを既定に設定
#[test]
fn test_config_invalid_default_park() {
    let mut config = Config::default();
    let err = config.set_default_park("YELLOW").unwrap_err();
    assert!(matches!(err, ParkMapError::Park(Error::InvalidParkCode(_))));
}

/// ParkMapErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ParkMapError::Config("テスト設定エラー".to_string()),
        ParkMapError::DataLoad(DataLoadError::new("index.json", "HTTP 404 Not Found")),
        ParkMapError::Park(Error::UnknownPark("ZION".to_string())),
        ParkMapError::CliExecution("入力エラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 取得エラーにエンドポイントが含まれる
#[test]
fn test_data_load_error_mentions_endpoint() {
    let err: ParkMapError = DataLoadError::new("https://bucket/parks/ARCH.json", "HTTP 500").into();
    let display = format!("{}", err);
    assert!(display.starts_with("データ取得エラー"));
    assert!(display.contains("parks/ARCH.json"));
    assert!(display.contains("HTTP 500"));
}
