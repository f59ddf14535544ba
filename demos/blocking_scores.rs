//! # Blocking Scores Example
//!
//! Uses the synchronous facade to list score tables, submit a guest score
//! and print the top of the primary table. No async runtime is needed in
//! the caller.
//!
//! ## Running
//!
//! ```sh
//! GAMEJOLT_GAME_ID=12345 GAMEJOLT_PRIVATE_KEY=... \
//!     cargo run --example blocking_scores --features blocking
//! ```

use gamejolt_client::blocking::GameJoltClient;
use gamejolt_client::{Credentials, HttpTransport, ScoreMode, ScoreQuery, ScoreSubmission};

fn env(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    std::env::var(name).map_err(|_| format!("{name} must be set").into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let game_id: u64 = env("GAMEJOLT_GAME_ID")?.parse()?;
    let credentials = Credentials::new(game_id, env("GAMEJOLT_PRIVATE_KEY")?)?;
    let client = GameJoltClient::new(HttpTransport::new()?, credentials)?;

    let tables = client.get_score_tables()?;
    for table in &tables {
        let primary = if table.primary { " (primary)" } else { "" };
        println!("table {:>6}  {}{primary}", table.id, table.name);
    }

    let guest = std::env::var("GAMEJOLT_GUEST").unwrap_or_else(|_| "DemoGuest".to_string());
    let reply = client.submit_score(
        ScoreSubmission::new("10 points", 10).with_extra_data("demo"),
        ScoreMode::guest(guest),
    )?;
    tracing::info!(message = ?reply.message(), "guest score stored");

    for (rank, entry) in client
        .get_scores(ScoreQuery::new().with_limit(10))?
        .into_iter()
        .enumerate()
    {
        let who = entry
            .guest_name
            .or(entry.user)
            .unwrap_or_else(|| "?".to_string());
        println!("{:>3}. {:<20} {}", rank + 1, who, entry.score);
    }
    Ok(())
}
