//! 選択状態と取得元をつなぐドライバ
//!
//! [`SelectionState`] が返す [`Effect`] を順に実行し、結果を状態へ戻す。
//! CLIでは取得を1件ずつ待つので、世代の競合は起きない。

use crate::error::Result;
use crate::source::ParkSource;
use park_map_common::{Effect, Index, ParkOutcome, SelectionState};

pub struct Session<S> {
    source: S,
    state: SelectionState,
    index: Option<Index>,
}

impl<S: ParkSource> Session<S> {
    pub fn new(source: S, state: SelectionState) -> Self {
        Self {
            source,
            state,
            index: None,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn index(&self) -> Option<&Index> {
        self.index.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Indexを取得し、既定の公園を読み込む
    pub async fn start(&mut self) -> Result<()> {
        if let Some(effect) = self.state.start() {
            self.run(effect).await?;
        }
        Ok(())
    }

    /// 公園を選択して読み込む
    pub async fn select(&mut self, code: &str) -> Result<ParkOutcome> {
        let effect = self.state.select(code)?;
        self.run(effect).await
    }

    async fn run(&mut self, effect: Effect) -> Result<ParkOutcome> {
        let mut next = Some(effect);
        let mut outcome = ParkOutcome::Applied;

        while let Some(effect) = next.take() {
            match effect {
                Effect::FetchIndex => {
                    log::info!("loading index from {}", self.source.describe());
                    match self.source.fetch_index().await {
                        Ok(index) => {
                            let effect = self.state.on_index_loaded(&index);
                            self.index = Some(index);
                            next = Some(effect?);
                        }
                        Err(e) => {
                            self.state.on_index_failed(e.clone());
                            return Err(e.into());
                        }
                    }
                }
                Effect::FetchPark { code, generation } => {
                    log::info!("loading park {} (generation {})", code, generation);
                    match self.source.fetch_park(&code).await {
                        Ok(park) => {
                            outcome = self.state.on_park_loaded(generation, park);
                        }
                        Err(e) => {
                            self.state.on_park_failed(generation, e.clone());
                            return Err(e.into());
                        }
                    }
                }
            }
        }

        Ok(outcome)
    }
}
