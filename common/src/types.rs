//! 公園データの型定義
//!
//! バケットから取得するJSONの形:
//! - Index: 全公園のヘッダー一覧（起動時に1回だけ取得）
//! - Park: 1公園分の場所(Place)と写真(Photo)
//!
//! 座標は常に (lat, long) で保持し、地図ライブラリへ渡すときだけ
//! [`Coordinate::to_lon_lat`] で軸順を入れ替える。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 緯度経度（度）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

impl Coordinate {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// GeoJSON/地図ライブラリ用の [long, lat]
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.long, self.lat]
    }
}

/// 写真の1解像度分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub w: u32,
    pub h: u32,
    pub url: String,
}

impl Image {
    /// カバー写真のないPlaceに使うプレースホルダー
    pub fn placeholder() -> Self {
        Self {
            w: 0,
            h: 0,
            url: String::new(),
        }
    }
}

/// 位置情報付きの写真
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Photo {
    pub id: String,
    /// 紐付くPlaceのid（同じ公園内のみ）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub location: Coordinate,
    /// 解像度違いの画像。ビルダーは常に先頭を使う
    pub images: Vec<Image>,
}

impl Photo {
    pub fn first_image(&self) -> Option<&Image> {
        self.images.first()
    }
}

/// Placeの種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    #[default]
    Place,
    Campground,
    #[serde(rename = "visitorcenter")]
    VisitorCenter,
}

impl PlaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Place => "place",
            PlaceType::Campground => "campground",
            PlaceType::VisitorCenter => "visitorcenter",
        }
    }
}

/// 公園内の名前付き地点（ビジターセンター、キャンプ場など）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub description: String,
    pub location: Coordinate,
    pub cover: Vec<Photo>,
}

/// 公園コード（英字4文字、大文字）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParkCode(String);

impl ParkCode {
    /// 英字4文字を検証し、大文字に正規化する
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidParkCode(code.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Indexに並ぶ公園のヘッダー
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParkHeader {
    /// 大文字4文字（例: "YELL"）
    pub code: String,
    /// 2隅の座標
    pub bbox: Vec<Coordinate>,
    pub details_url: String,
    pub name: String,
    pub designation: String,
    /// 州コード（例: "AK"）
    pub states: Vec<String>,
    pub cover: Photo,
    pub description: String,
}

impl ParkHeader {
    /// ビューポート計算に使う最初のbbox隅
    pub fn anchor(&self) -> Option<Coordinate> {
        self.bbox.first().copied()
    }
}

/// 1公園分の全データ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Park {
    #[serde(flatten)]
    pub header: ParkHeader,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Park {
    pub fn code(&self) -> &str {
        &self.header.code
    }
}

/// 全公園のカタログ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Index {
    pub parks: Vec<ParkHeader>,
}

impl Index {
    /// Index順の公園コード
    pub fn codes(&self) -> Vec<String> {
        self.parks.iter().map(|park| park.code.clone()).collect()
    }
}
