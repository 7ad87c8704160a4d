use clap::{Parser, Subcommand};
use park_map_common::RenderMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "park-map")]
#[command(about = "国立公園の場所・写真データを取得してGeoJSONに変換するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データバケットのURL（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// マーカー描画方式 (pins/clusters)
    #[arg(long, global = true)]
    pub mode: Option<RenderMode>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 公園一覧を表示
    Parks,

    /// 公園を読み込んで概要を表示
    Show {
        /// 公園コード（例: YELL）
        #[arg(required = true)]
        code: String,
    },

    /// 公園のフィーチャーをGeoJSONで出力
    Features {
        /// 公園コード
        #[arg(required = true)]
        code: String,

        /// 出力ファイル/ディレクトリ（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 整形して出力
        #[arg(long)]
        pretty: bool,
    },

    /// 全公園のGeoJSONを一括出力
    ExportAll {
        /// 出力ディレクトリ
        #[arg(required = true)]
        output: PathBuf,

        /// 整形して出力
        #[arg(long)]
        pretty: bool,
    },

    /// 地図ライブラリ用のソース設定とレイヤー定義を出力
    Style,

    /// 対話的に公園を選択
    Select,

    /// 設定を表示/編集
    Config {
        /// データバケットのURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 起動時の公園コードを設定
        #[arg(long)]
        set_default_park: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
