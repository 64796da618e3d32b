//! Cinegram entry point
//!
//! Runs the Telegram bot by default; `--lookup "<title>"` resolves one title
//! and prints every view to stdout instead.

use std::sync::Arc;

use anyhow::Result;

use cinegram::app::{AppState, current_year};
use cinegram::app_mode::RunMode;
use cinegram::bot;
use cinegram::cli::CliOptions;
use cinegram::config::Config;
use cinegram::media::ViewKind;
use cinegram::media::views::to_plain_text;
use cinegram::services::LookupError;
use cinegram::services::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Missing credentials abort here, before anything else starts
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    init_tracing(config.log_json);
    tracing::info!("Starting Cinegram");

    let cli = CliOptions::from_args();
    let run_mode = cli.run_mode_override.unwrap_or(config.run_mode);
    tracing::info!(run_mode = ?run_mode, "Configuration loaded");

    let state = Arc::new(AppState::new(config));

    let result = match run_mode {
        RunMode::Bot => {
            bot::run(state.clone()).await;
            Ok(())
        }
        RunMode::Lookup => run_lookup(&state, cli.lookup_query.as_deref()).await,
    };

    state.shutdown();
    tracing::info!("Cinegram stopped");
    result
}

/// Resolve one title and print all four views as plain text
async fn run_lookup(state: &AppState, query: Option<&str>) -> Result<()> {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        anyhow::bail!("lookup mode needs a title: --lookup \"<title>\"");
    };

    let best = match state.lookup.find_best_match(query).await {
        Ok(best) => best,
        Err(LookupError::NoMatch { .. }) => {
            println!("No se encontraron resultados para \"{}\"", query);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} [{} {}]\n", best.display_title, best.kind, best.id);

    let year = current_year();
    for view in ViewKind::ALL {
        let rendered = state.lookup.render_view(view, best.id, best.kind, year).await?;
        println!("{}\n", to_plain_text(&rendered));
    }

    Ok(())
}
