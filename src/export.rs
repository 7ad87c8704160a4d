//! GeoJSONファイル出力

use crate::error::Result;
use crate::source::ParkSource;
use indicatif::{ProgressBar, ProgressStyle};
use park_map_common::{build_features, FeatureCollection, Index};
use std::path::{Path, PathBuf};

const EXTENSION: &str = "geojson";

/// 出力先がディレクトリ（または拡張子なし）なら `{code}.geojson` を付ける
pub fn output_path_for(output: &Path, code: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", code, EXTENSION))
    } else {
        output.to_path_buf()
    }
}

pub fn write_features(collection: &FeatureCollection, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = if pretty {
        collection.to_json_pretty()?
    } else {
        collection.to_json()?
    };
    std::fs::write(path, json)?;
    Ok(())
}

/// 一括出力の結果
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    /// (公園コード, エラー内容)
    pub failed: Vec<(String, String)>,
    pub skipped_features: usize,
}

/// Indexの全公園を1ファイルずつ出力する
///
/// 取得に失敗した公園は記録して次へ進む。
pub async fn export_all<S: ParkSource>(
    source: &S,
    index: &Index,
    output_dir: &Path,
    pretty: bool,
    show_progress: bool,
) -> Result<ExportReport> {
    std::fs::create_dir_all(output_dir)?;

    let pb = if show_progress {
        let pb = ProgressBar::new(index.parks.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut report = ExportReport::default();

    for header in &index.parks {
        pb.set_message(header.code.clone());

        match source.fetch_park(&header.code).await {
            Ok(park) => {
                let build = build_features(&park);
                report.skipped_features += build.skipped.len();
                let path = output_dir.join(format!("{}.{}", header.code, EXTENSION));
                write_features(&build.collection, &path, pretty)?;
                report.written.push(path);
            }
            Err(e) => {
                log::warn!("{}", e);
                report.failed.push((header.code.clone(), e.to_string()));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_for_dir() {
        let dir = tempdir().expect("Failed to create temp dir");
        assert_eq!(output_path_for(dir.path(), "YELL"), dir.path().join("YELL.geojson"));
    }

    #[test]
    fn test_output_path_for_file() {
        let path = Path::new("out/arches.json");
        assert_eq!(output_path_for(path, "ARCH"), path.to_path_buf());
    }

    #[test]
    fn test_write_features_creates_parent() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("a").join("b.geojson");
        write_features(&FeatureCollection::default(), &path, false).expect("書き込み失敗");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"{"type":"FeatureCollection","features":[]}"#);
    }
}
