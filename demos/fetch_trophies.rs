//! # Fetch Trophies Example
//!
//! Authenticates a player against the live platform and lists the game's
//! trophies, marking the ones the player already holds.
//!
//! ## Running
//!
//! ```sh
//! GAMEJOLT_GAME_ID=12345 \
//! GAMEJOLT_PRIVATE_KEY=... \
//! GAMEJOLT_USERNAME=alice \
//! GAMEJOLT_USER_TOKEN=... \
//!     cargo run --example fetch_trophies
//!
//! # Award a trophy as well:
//! GAMEJOLT_AWARD_TROPHY=7 cargo run --example fetch_trophies
//! ```

use gamejolt_client::{Credentials, GameJoltClient, HttpTransport, TrophyFilter};

/// Read a required environment variable.
fn env(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    std::env::var(name).map_err(|_| format!("{name} must be set").into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Logging ─────────────────────────────────────────────────────
    // Initialize tracing. Set `RUST_LOG=debug` to see each request's
    // endpoint and parameter names.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // ── Configuration ───────────────────────────────────────────────
    let game_id: u64 = env("GAMEJOLT_GAME_ID")?.parse()?;
    let credentials = Credentials::new(game_id, env("GAMEJOLT_PRIVATE_KEY")?)?
        .with_user(env("GAMEJOLT_USERNAME")?, env("GAMEJOLT_USER_TOKEN")?);

    let client = GameJoltClient::new(HttpTransport::new()?, credentials);

    // ── Authenticate ────────────────────────────────────────────────
    if !client.authenticate_user().await {
        return Err("authentication failed; check username and game token".into());
    }
    let user = client.get_user_info().await?;
    tracing::info!("Logged in as {} (id {})", user.username, user.id);

    // ── Optionally award a trophy ───────────────────────────────────
    if let Ok(id) = std::env::var("GAMEJOLT_AWARD_TROPHY") {
        let id: u64 = id.parse()?;
        if client.mark_trophy_achieved(id).await {
            tracing::info!("Trophy {id} awarded");
        } else {
            tracing::warn!("Trophy {id} was not awarded");
        }
    }

    // ── List trophies ───────────────────────────────────────────────
    let trophies = client.get_trophies(TrophyFilter::all()).await?;
    for trophy in &trophies {
        let mark = if trophy.achieved { "x" } else { " " };
        println!(
            "[{mark}] {:>6}  {:<30} {}",
            trophy.id,
            trophy.title,
            trophy.difficulty.as_deref().unwrap_or("-")
        );
    }
    let achieved = trophies.iter().filter(|t| t.achieved).count();
    tracing::info!("{achieved}/{} trophies achieved", trophies.len());
    Ok(())
}
