//! Park → GeoJSON FeatureCollection 変換
//!
//! 写真1枚につき1フィーチャー、Place1件につき1フィーチャーを生成する。
//! 出力順は「写真（元の順）→ Place（元の順）」。

use crate::error::{MissingImageError, RecordKind};
use crate::types::{Coordinate, Image, Park, Photo, Place, PlaceType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// placeIdが無い／解決できない写真のタイトル
pub const NO_PLACE_TITLE: &str = "No place for this photo";

/// カバー写真の無いPlaceのタイトル末尾
pub const NO_PHOTO_SUFFIX: &str = " (No associated photo)";

/// 全フィーチャー共通のmag値
pub const FEATURE_MAG: f64 = 2.3;

/// フィーチャーの種別（レイヤーの色・半径の切り替えに使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    Photo,
    Place,
    Campground,
    #[serde(rename = "visitorcenter")]
    VisitorCenter,
}

impl FeatureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Photo => "photo",
            FeatureType::Place => "place",
            FeatureType::Campground => "campground",
            FeatureType::VisitorCenter => "visitorcenter",
        }
    }
}

impl From<PlaceType> for FeatureType {
    fn from(place_type: PlaceType) -> Self {
        match place_type {
            PlaceType::Place => FeatureType::Place,
            PlaceType::Campground => FeatureType::Campground,
            PlaceType::VisitorCenter => FeatureType::VisitorCenter,
        }
    }
}

/// 地図ライブラリに渡すプロパティ
///
/// クリックイベントでそのまま返ってくるので、ポップアップもこの形から組み立てる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub id: String,
    pub w: u32,
    pub h: u32,
    pub url: String,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub title: String,
    pub mag: f64,
    pub lat: f64,
    pub long: f64,
}

impl FeatureProperties {
    /// クリックイベント等から受け取ったJSONを復元
    pub fn from_json(value: serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.lat, self.long)
    }
}

/// GeoJSON Point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct Point {
    /// [long, lat]
    pub coordinates: [f64; 2],
}

/// GeoJSON Feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Point,
}

impl Feature {
    fn new(
        id: &str,
        image: &Image,
        feature_type: FeatureType,
        title: String,
        location: Coordinate,
    ) -> Self {
        Self {
            properties: FeatureProperties {
                id: id.to_string(),
                w: image.w,
                h: image.h,
                url: image.url.clone(),
                feature_type,
                title,
                mag: FEATURE_MAG,
                lat: location.lat,
                long: location.long,
            },
            geometry: Point {
                coordinates: location.to_lon_lat(),
            },
        }
    }
}

/// GeoJSON FeatureCollection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn count_of(&self, feature_type: FeatureType) -> usize {
        self.features
            .iter()
            .filter(|f| f.properties.feature_type == feature_type)
            .count()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 変換結果（スキップしたフィーチャーのエラー付き）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureBuild {
    pub collection: FeatureCollection,
    pub skipped: Vec<MissingImageError>,
}

impl FeatureBuild {
    pub fn into_collection(self) -> FeatureCollection {
        self.collection
    }
}

/// 写真フィーチャーを生成
///
/// `place_names` は Place.id → Place.name。名前が空の場合もフォールバックタイトルになる。
pub fn photo_feature(
    photo: &Photo,
    place_names: &HashMap<&str, &str>,
) -> Result<Feature, MissingImageError> {
    let image = photo.first_image().ok_or_else(|| MissingImageError {
        kind: RecordKind::Photo,
        id: photo.id.clone(),
    })?;

    let title = photo
        .place_id
        .as_deref()
        .and_then(|id| place_names.get(id).copied())
        .filter(|name| !name.is_empty())
        .unwrap_or(NO_PLACE_TITLE)
        .to_string();

    Ok(Feature::new(
        &photo.id,
        image,
        FeatureType::Photo,
        title,
        photo.location,
    ))
}

/// Placeフィーチャーを生成
///
/// カバー写真が無ければプレースホルダー画像とタイトル注記で代用する。
/// カバー写真はあるが画像リストが空の場合は `MissingImageError`。
pub fn place_feature(place: &Place) -> Result<Feature, MissingImageError> {
    let (image, title) = match place.cover.first() {
        Some(cover) => {
            let image = cover.first_image().ok_or_else(|| MissingImageError {
                kind: RecordKind::Place,
                id: place.id.clone(),
            })?;
            (image.clone(), place.name.clone())
        }
        None => (
            Image::placeholder(),
            format!("{}{}", place.name, NO_PHOTO_SUFFIX),
        ),
    };

    Ok(Feature::new(
        &place.id,
        &image,
        place.place_type.into(),
        title,
        place.location,
    ))
}

/// Park全体をFeatureCollectionへ変換
pub fn build_features(park: &Park) -> FeatureBuild {
    let place_names: HashMap<&str, &str> = park
        .places
        .iter()
        .map(|place| (place.id.as_str(), place.name.as_str()))
        .collect();

    let mut build = FeatureBuild::default();
    build.collection.features.reserve(park.photos.len() + park.places.len());

    let photos = park.photos.iter().map(|photo| photo_feature(photo, &place_names));
    let places = park.places.iter().map(place_feature);

    for result in photos.chain(places) {
        match result {
            Ok(feature) => build.collection.features.push(feature),
            Err(e) => {
                log::warn!("{}: skipping feature: {}", park.code(), e);
                build.skipped.push(e);
            }
        }
    }

    build
}
