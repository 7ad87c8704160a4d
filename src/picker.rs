//! 対話式の公園選択
//!
//! Webのセレクトボックスと同じく、選択変更だけがPark読み込みの契機になる。

use crate::error::{ParkMapError, Result};
use crate::session::Session;
use crate::source::ParkSource;
use dialoguer::Select;
use park_map_common::{Index, ParkSummary, SelectionState, Viewport};

/// 選択肢のラベル（"YELL  Yellowstone (WY, MT, ID)"）
pub fn park_labels(index: &Index) -> Vec<String> {
    index
        .parks
        .iter()
        .map(|park| {
            if park.states.is_empty() {
                format!("{}  {}", park.code, park.name)
            } else {
                format!("{}  {} ({})", park.code, park.name, park.states.join(", "))
            }
        })
        .collect()
}

/// 読み込み済み公園の概要
pub fn format_summary(summary: &ParkSummary, viewport: Viewport) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", summary.code, summary.name),
        format!("  Photo count for selected park on server: {}", summary.photo_count),
        format!("  Total places: {}", summary.place_count),
        format!("  フィーチャー数: {}", summary.feature_count),
        format!(
            "  中心: {:.4}, {:.4} (zoom {})",
            viewport.latitude, viewport.longitude, viewport.zoom
        ),
    ];
    if summary.skipped_count > 0 {
        lines.push(format!("  ⚠ 画像なしでスキップ: {}件", summary.skipped_count));
    }
    lines
}

pub fn print_state(state: &SelectionState) {
    if let Some(summary) = state.summary() {
        for line in format_summary(&summary, state.viewport()) {
            println!("{}", line);
        }
    }
    if let Some(e) = state.last_error() {
        println!("  ⚠ {}", e);
    }
}

/// 公園を選び続ける。Esc/qで終了
pub async fn run_picker<S: ParkSource>(session: &mut Session<S>) -> Result<()> {
    session.start().await?;
    print_state(session.state());

    let Some(index) = session.index().cloned() else {
        return Ok(());
    };
    let labels = park_labels(&index);

    loop {
        let current = session
            .state()
            .selected()
            .and_then(|code| index.parks.iter().position(|p| p.code == code))
            .unwrap_or(0);

        let choice = Select::new()
            .with_prompt("公園を選択 (Esc/qで終了)")
            .items(&labels)
            .default(current)
            .interact_opt()
            .map_err(|e| ParkMapError::CliExecution(e.to_string()))?;

        let Some(choice) = choice else {
            break;
        };

        let code = index.parks[choice].code.clone();
        if let Err(e) = session.select(&code).await {
            // 直前に表示していた公園はそのまま残る
            println!("✗ {}", e);
        }
        println!();
        print_state(session.state());
    }

    Ok(())
}
