use dice_duel::{routes, AppConfig, AppState, DuelService, RoundEngine, RoundLog};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dice_duel=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dice Duel server");

    let config = AppConfig::from_env().inspect_err(|err| error!(%err, "Invalid configuration"))?;
    info!(?config, "Loaded configuration");

    let store = config.open_store()?;
    let duel = DuelService::new(RoundEngine::new(config.roller()), RoundLog::new(store));

    // Reconstruct once at startup so corrupt entries show up in the logs early
    let (rounds, stats) = duel.history()?;
    info!(
        rounds = rounds.len(),
        player1_wins = stats.player1_wins,
        player2_wins = stats.player2_wins,
        draws = stats.draws,
        "Restored round log"
    );

    let app = routes()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(Arc::new(duel)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
