//! Park Map Common Library
//!
//! CLIとWeb(WASM)で共有される型と変換ロジック

pub mod types;
pub mod error;
pub mod feature;
pub mod selection;
pub mod presenter;
pub mod layers;
pub mod endpoint;

pub use types::{Coordinate, Image, Index, Park, ParkCode, ParkHeader, Photo, Place, PlaceType};
pub use error::{DataLoadError, Error, MissingImageError, RecordKind, Result};
pub use feature::{build_features, Feature, FeatureBuild, FeatureCollection, FeatureProperties, FeatureType};
pub use selection::{Effect, ParkOutcome, Phase, ReloadPolicy, SelectionState};
pub use presenter::{Cursor, MapPresenter, ParkSummary, PopupInfo, RenderMode, Viewport};
pub use endpoint::{Endpoints, DEFAULT_BASE_URL};
