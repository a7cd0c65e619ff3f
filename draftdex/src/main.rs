use draftdex::cli::{self, Args};
use draftdex::config::DexConfig;
use draftdex::module::handler::CompareHandler;
use draftdex::module::pokeapi::PokeApiClient;
use draftdex::module::renderer::TableRenderer;

use anyhow::Result;
use clap::Parser;
use draftdex_common::Side;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = DexConfig::load_or_default(&args.config)?;

    // Initialize logging
    let _logging_guard = draftdex::logging::init_logging(
        &config.log_dir,
        "draftdex",
        &config.log_level,
        &config.console_log_level,
    )?;
    tracing::info!("draftdex starting, API at {}", config.api_base_url);

    let color = args.use_color(config.color);
    let mine = cli::team_or_prompt(args.mine.as_deref(), Side::Mine, color)?;
    let opponent = cli::team_or_prompt(args.opponent.as_deref(), Side::Opponent, color)?;

    let client = PokeApiClient::new(config)?;
    let handler = CompareHandler::new(client, TableRenderer::new(color));
    let report = handler.run(&mine, &opponent).await;

    for message in &report.messages {
        println!("{}", message);
    }
    println!("{}", report.output);

    Ok(())
}
