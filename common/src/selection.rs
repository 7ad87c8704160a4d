//! 公園選択の状態遷移
//!
//! ```text
//! Uninitialized --on_index_loaded--> IndexLoaded --on_park_loaded--> ParkLoaded
//!                                                  ParkLoaded --select/on_park_loaded--> ParkLoaded
//! ```
//!
//! 遷移は副作用を持たず、発行すべき取得処理を [`Effect`] として返す。
//! 実際の取得はCLI(reqwest)/Web(fetch)側が行い、結果を `on_*` で戻す。

use crate::error::{DataLoadError, Error, MissingImageError, Result};
use crate::feature::{build_features, FeatureCollection};
use crate::presenter::{ParkSummary, Viewport};
use crate::types::{Index, Park, ParkCode};

/// 状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Uninitialized,
    IndexLoaded,
    ParkLoaded,
}

/// 呼び出し側が実行すべき取得処理
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchIndex,
    /// `generation` は応答を戻すときにそのまま渡す
    FetchPark { code: String, generation: u64 },
}

/// 複数のPark取得が重なったときの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReloadPolicy {
    /// 最後に要求した選択の応答だけを反映し、古い世代は捨てる
    #[default]
    LatestRequest,
    /// 到着順で後勝ち（要求順ではない）
    LastArrival,
}

/// Park応答の反映結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkOutcome {
    Applied,
    Discarded { generation: u64, current: u64 },
}

/// 公園選択の状態コンテナ
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    phase: Phase,
    policy: ReloadPolicy,
    default_code: Option<String>,
    require_default: bool,
    index_requested: bool,
    park_codes: Vec<String>,
    selected: Option<String>,
    generation: u64,
    park: Option<Park>,
    features: FeatureCollection,
    skipped: Vec<MissingImageError>,
    viewport: Viewport,
    last_error: Option<DataLoadError>,
}

impl SelectionState {
    pub fn new(policy: ReloadPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Index読み込み時に優先して選ぶ公園コード
    ///
    /// Indexに存在しなければ先頭の公園を選ぶ。
    pub fn with_default_code(mut self, code: Option<&str>) -> Self {
        self.default_code = code.and_then(|c| ParkCode::parse(c).ok()).map(|c| c.to_string());
        self
    }

    /// 指定の公園だけを開く
    ///
    /// Indexに無いコードなら、Park取得を要求せず `on_index_loaded` が
    /// [`Error::UnknownPark`] を返す。
    pub fn with_required_code(mut self, code: &str) -> Result<Self> {
        self.default_code = Some(ParkCode::parse(code)?.to_string());
        self.require_default = true;
        Ok(self)
    }

    /// 起動時のIndex取得。2回目以降は何もしない
    pub fn start(&mut self) -> Option<Effect> {
        if self.index_requested {
            return None;
        }
        self.index_requested = true;
        Some(Effect::FetchIndex)
    }

    /// Index取得完了。既定の公園を選択してPark取得を要求する
    pub fn on_index_loaded(&mut self, index: &Index) -> Result<Effect> {
        let codes = index.codes();
        if codes.is_empty() {
            return Err(Error::EmptyIndex);
        }

        self.park_codes = codes;
        self.phase = Phase::IndexLoaded;
        self.last_error = None;

        let initial = match self.default_code.as_ref() {
            Some(code) if self.park_codes.contains(code) => code.clone(),
            Some(code) if self.require_default => return Err(Error::UnknownPark(code.clone())),
            _ => self.park_codes[0].clone(),
        };

        log::debug!(
            "index loaded: {} parks, initial selection {}",
            self.park_codes.len(),
            initial
        );
        Ok(self.request(initial))
    }

    pub fn on_index_failed(&mut self, error: DataLoadError) {
        log::error!("{}", error);
        self.last_error = Some(error);
    }

    /// 公園の選択変更。Park取得の唯一の契機
    pub fn select(&mut self, code: &str) -> Result<Effect> {
        let code = ParkCode::parse(code)?;
        if !self.park_codes.iter().any(|c| c == code.as_str()) {
            return Err(Error::UnknownPark(code.to_string()));
        }
        Ok(self.request(code.to_string()))
    }

    fn request(&mut self, code: String) -> Effect {
        self.generation += 1;
        self.selected = Some(code.clone());
        Effect::FetchPark {
            code,
            generation: self.generation,
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.policy == ReloadPolicy::LatestRequest && generation != self.generation
    }

    /// Park取得完了。公園・フィーチャー・ビューポートをまとめて差し替える
    pub fn on_park_loaded(&mut self, generation: u64, park: Park) -> ParkOutcome {
        if self.is_stale(generation) {
            log::debug!(
                "discarding {} (generation {}, current {})",
                park.code(),
                generation,
                self.generation
            );
            return ParkOutcome::Discarded {
                generation,
                current: self.generation,
            };
        }

        let build = build_features(&park);
        if let Some(viewport) = Viewport::for_park(&park) {
            self.viewport = viewport;
        }
        self.features = build.collection;
        self.skipped = build.skipped;
        self.park = Some(park);
        self.phase = Phase::ParkLoaded;
        self.last_error = None;
        ParkOutcome::Applied
    }

    /// Park取得失敗。表示中のデータは変えない
    pub fn on_park_failed(&mut self, generation: u64, error: DataLoadError) -> ParkOutcome {
        if self.is_stale(generation) {
            return ParkOutcome::Discarded {
                generation,
                current: self.generation,
            };
        }
        log::error!("{}", error);
        self.last_error = Some(error);
        ParkOutcome::Applied
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn park_codes(&self) -> &[String] {
        &self.park_codes
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn park(&self) -> Option<&Park> {
        self.park.as_ref()
    }

    pub fn features(&self) -> &FeatureCollection {
        &self.features
    }

    pub fn skipped(&self) -> &[MissingImageError] {
        &self.skipped
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn last_error(&self) -> Option<&DataLoadError> {
        self.last_error.as_ref()
    }

    pub fn summary(&self) -> Option<ParkSummary> {
        self.park
            .as_ref()
            .map(|park| ParkSummary::new(park, &self.features, self.skipped.len()))
    }
}
