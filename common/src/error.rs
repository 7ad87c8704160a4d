//! エラー型定義

use std::fmt;
use thiserror::Error;

/// 画像が欠けていたレコードの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Photo,
    Place,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Photo => write!(f, "photo"),
            RecordKind::Place => write!(f, "place"),
        }
    }
}

/// 写真（またはPlaceのカバー写真）の画像リストが空
///
/// ビルダーはこのフィーチャーだけをスキップし、残りの変換は続行する。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} {id} has no image")]
pub struct MissingImageError {
    pub kind: RecordKind,
    pub id: String,
}

/// Index/Parkの取得失敗
///
/// 表示中のデータは直前の正常状態のまま維持される。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to load {endpoint}: {cause}")]
pub struct DataLoadError {
    pub endpoint: String,
    pub cause: String,
}

impl DataLoadError {
    pub fn new(endpoint: impl Into<String>, cause: impl fmt::Display) -> Self {
        Self {
            endpoint: endpoint.into(),
            cause: cause.to_string(),
        }
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    MissingImage(#[from] MissingImageError),

    #[error("Unknown park code: {0}")]
    UnknownPark(String),

    #[error("Invalid park code: {0:?} (expected 4 letters)")]
    InvalidParkCode(String),

    #[error("Park index is empty")]
    EmptyIndex,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_image() {
        let error: Error = MissingImageError {
            kind: RecordKind::Photo,
            id: "ph1".to_string(),
        }
        .into();
        assert_eq!(format!("{}", error), "photo ph1 has no image");
    }

    #[test]
    fn test_error_display_data_load() {
        let error = Error::DataLoad(DataLoadError::new(
            "https://example.com/index.json",
            "connection refused",
        ));
        let display = format!("{}", error);
        assert!(display.contains("index.json"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_invalid_code() {
        let error = Error::InvalidParkCode("ab".to_string());
        assert_eq!(
            format!("{}", error),
            "Invalid park code: \"ab\" (expected 4 letters)"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownPark("YELL".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownPark"));
        assert!(debug.contains("YELL"));
    }
}
