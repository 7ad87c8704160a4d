use clap::Parser;
use park_map::{cli, config, error, export, picker, session, source};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use park_map_common::{layers, SelectionState};
use session::Session;
use source::{HttpSource, ParkSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let mut config = Config::load()?;
    let mode = cli.mode.unwrap_or(config.render_mode);

    let endpoints = config.endpoints(cli.base_url.as_deref());
    let new_session = |state: SelectionState| -> Result<Session<HttpSource>> {
        let source = HttpSource::new(endpoints.clone(), config.timeout())?;
        Ok(Session::new(source, state))
    };

    match cli.command {
        Commands::Parks => {
            let source = HttpSource::new(endpoints.clone(), config.timeout())?;
            let index = source.fetch_index().await?;

            println!("🏞  {}件の公園 ({})\n", index.parks.len(), source.describe());
            for park in &index.parks {
                println!(
                    "{}  {} [{}] {}",
                    park.code,
                    park.name,
                    park.designation,
                    park.states.join(",")
                );
            }
        }

        Commands::Show { code } => {
            let state = SelectionState::default().with_required_code(&code)?;
            let session = open_park(new_session(state)?).await?;
            picker::print_state(session.state());

            for skipped in session.state().skipped() {
                println!("  - {}", skipped);
            }
        }

        Commands::Features { code, output, pretty } => {
            let state = SelectionState::default().with_required_code(&code)?;
            let session = open_park(new_session(state)?).await?;

            let state = session.state();
            let collection = state.features();

            match output {
                Some(output) => {
                    let path = export::output_path_for(&output, state.selected().unwrap_or(&code));
                    export::write_features(collection, &path, pretty)?;
                    println!("✔ {}件のフィーチャーを出力: {}", collection.len(), path.display());
                    if !state.skipped().is_empty() {
                        println!("⚠ 画像なしでスキップ: {}件", state.skipped().len());
                    }
                }
                None => {
                    let json = if pretty {
                        collection.to_json_pretty()?
                    } else {
                        collection.to_json()?
                    };
                    println!("{}", json);
                }
            }
        }

        Commands::ExportAll { output, pretty } => {
            println!("📦 park-map - 一括出力\n");

            let source = HttpSource::new(endpoints.clone(), config.timeout())?;
            println!("[1/2] 公園一覧を取得中...");
            let index = source.fetch_index().await?;
            println!("✔ {}件の公園\n", index.parks.len());

            println!("[2/2] GeoJSONを出力中...");
            let report = export::export_all(&source, &index, &output, pretty, !cli.verbose).await?;
            println!("✔ {}件を出力: {}", report.written.len(), output.display());

            if report.skipped_features > 0 {
                println!("⚠ 画像なしでスキップしたフィーチャー: {}件", report.skipped_features);
            }
            for (code, e) in &report.failed {
                println!("✗ {}: {}", code, e);
            }

            println!("\n✅ 完了");
        }

        Commands::Style => {
            let style = serde_json::json!({
                "mapStyle": layers::MAP_STYLE,
                "mode": mode,
                "source": layers::SourceOptions::for_mode(mode),
                "layers": layers::layers_for_mode(mode),
                "interactiveLayerIds": layers::interactive_layer_ids(mode),
            });
            println!("{}", serde_json::to_string_pretty(&style)?);
        }

        Commands::Select => {
            let state = SelectionState::default().with_default_code(config.default_park.as_deref());
            let mut session = new_session(state)?;
            picker::run_picker(&mut session).await?;
        }

        Commands::Config { set_base_url, set_default_park, show } => {
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
            }

            if let Some(code) = set_default_park {
                config.set_default_park(&code)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  ベースURL: {}", config.resolve_base_url(cli.base_url.as_deref()));
                println!("  既定の公園: {}", config.default_park.as_deref().unwrap_or("(Indexの先頭)"));
                println!("  描画方式: {}", config.render_mode);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

/// Indexを取得し、指定の公園を読み込む
///
/// Indexに無いコードならPark取得の前に `UnknownPark` で止まる。
async fn open_park(mut session: Session<HttpSource>) -> Result<Session<HttpSource>> {
    session.start().await?;
    Ok(session)
}
