use park_map_common::{DataLoadError, Error as CommonError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkMapError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データ取得エラー: {0}")]
    DataLoad(#[from] DataLoadError),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("公園データエラー: {0}")]
    Park(#[from] CommonError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),
}

pub type Result<T> = std::result::Result<T, ParkMapError>;
