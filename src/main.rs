use clap::Parser;
use admission_calc::{cli, client, config, error, form, render};
use admission_calc_common::{submit, FormInput, UiState};
use cli::{Cli, Commands};
use client::HttpClient;
use config::Config;
use error::Result;
use indicatif::ProgressBar;
use render::OutputFormat;
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load()?;

    match cli.command {
        Commands::Calculate { score, group, sector, top_n, format } => {
            let input = form::form_from_args(&config, score, group, sector, top_n);
            calculate_and_print(&config, cli.base_url.as_deref(), cli.verbose, &input, format).await
        }

        Commands::Form { format } => {
            println!("🎓 admission-calc - 合格確率計算\n");
            let input = form::prompt_form(&config)?;
            println!();
            calculate_and_print(&config, cli.base_url.as_deref(), cli.verbose, &input, format).await
        }

        Commands::Config { set_base_url, set_top_n, set_sector, show } => {
            let changed = set_base_url.is_some() || set_top_n.is_some() || set_sector.is_some();

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ サーバーURLを設定しました");
            }
            if let Some(n) = set_top_n {
                config.set_default_top_n(n)?;
                println!("✔ topN の既定値を設定しました");
            }
            if let Some(sector) = set_sector {
                config.default_sector = sector;
                println!("✔ セクターの既定値を設定しました");
            }
            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  サーバーURL: {}", config.base_url);
                println!("  topN 既定値: {}", config.default_top_n);
                println!("  セクター既定値: {}", config.default_sector);
                println!(
                    "  タイムアウト: {}",
                    config.timeout_seconds.map(|s| format!("{}秒", s)).unwrap_or_else(|| "なし".into())
                );
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

/// 1回分の送信と表示。最終状態が Error なら終了コード1
async fn calculate_and_print(
    config: &Config,
    cli_base_url: Option<&str>,
    verbose: bool,
    input: &FormInput,
    format: OutputFormat,
) -> Result<ExitCode> {
    let base_url = config.resolve_base_url(cli_base_url)?;
    let client = HttpClient::new(&base_url, config.timeout(), verbose)?;

    if verbose {
        eprintln!("  サーバー: {}", client.url());
    }

    let spinner = ProgressBar::new_spinner();
    let state = submit(&client, input, || {
        spinner.set_message(render::LOADING_TEXT);
        spinner.enable_steady_tick(Duration::from_millis(100));
    })
    .await;
    spinner.finish_and_clear();

    if verbose {
        eprintln!("  状態: {}", state.as_str());
    }

    let output = render::render(&state, format);
    match (&state, format) {
        (UiState::Error(_), OutputFormat::Table) => {
            eprintln!("{}", output);
            Ok(ExitCode::FAILURE)
        }
        (UiState::Error(_), OutputFormat::Json) => {
            println!("{}", output);
            Ok(ExitCode::FAILURE)
        }
        _ => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
    }
}
