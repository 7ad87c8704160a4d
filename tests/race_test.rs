//! 取得が重なったときの反映順
//!
//! 先に選んだ公園の応答が遅れて届くケースを再現する。
//! 時計は止めてあるので、到着順は遅延の長さだけで決まる。

mod common;

use common::fixture_park;
use park_map_common::{Effect, Index, ParkHeader, ParkOutcome, ReloadPolicy, SelectionState};
use std::time::Duration;
use tokio::sync::mpsc;

fn index() -> Index {
    Index {
        parks: ["ARCH", "YELL"]
            .iter()
            .map(|code| ParkHeader {
                code: code.to_string(),
                ..Default::default()
            })
            .collect(),
    }
}

fn fetch_of(effect: Effect) -> (String, u64) {
    match effect {
        Effect::FetchPark { code, generation } => (code, generation),
        Effect::FetchIndex => panic!("expected FetchPark"),
    }
}

/// ARCH（遅い）→ YELL（速い）の順に選び、到着順に状態へ戻す
async fn run_overlapping(policy: ReloadPolicy) -> (SelectionState, Vec<ParkOutcome>) {
    let mut state = SelectionState::new(policy);
    let first = fetch_of(state.on_index_loaded(&index()).unwrap());
    let second = fetch_of(state.select("YELL").unwrap());

    let (tx, mut rx) = mpsc::unbounded_channel();
    for ((code, token), delay) in [(first, 80u64), (second, 5u64)] {
        let tx = tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            let _ = tx.send((token, fixture_park(&code)));
        });
    }
    drop(tx);

    let mut outcomes = Vec::new();
    while let Some((token, park)) = rx.recv().await {
        outcomes.push(state.on_park_loaded(token, park));
    }
    (state, outcomes)
}

/// 既定: 古い世代の応答は捨てられ、最後に選んだ公園が残る
#[tokio::test(start_paused = true)]
async fn test_latest_request_wins() {
    let (state, outcomes) = run_overlapping(ReloadPolicy::LatestRequest).await;

    assert_eq!(outcomes[0], ParkOutcome::Applied);
    assert_eq!(outcomes[1], ParkOutcome::Discarded { generation: 1, current: 2 });
    assert_eq!(state.park().unwrap().code(), "YELL");
    assert_eq!(state.selected(), Some("YELL"));
}

/// 到着順の後勝ち: 遅れて届いたARCHが表示され、選択中のYELLとずれる
#[tokio::test(start_paused = true)]
async fn test_last_arrival_wins_known_race() {
    let (state, outcomes) = run_overlapping(ReloadPolicy::LastArrival).await;

    assert_eq!(outcomes, vec![ParkOutcome::Applied, ParkOutcome::Applied]);
    assert_eq!(state.park().unwrap().code(), "ARCH");
    assert_eq!(state.selected(), Some("YELL"));
    assert_eq!(state.viewport().latitude, 38.68);
}
