//! Seeds the demo account used for manual testing.
//!
//! Usage: `cargo run --bin seed_user` (reads the same env as the server).

use geolookup::auth::password::hash_password;
use geolookup::auth::repo_types::User;
use geolookup::state::AppState;

const SEED_EMAIL: &str = "test@jlabs.com";
const SEED_PASSWORD: &str = "password123";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let state = AppState::init().await?;
    sqlx::migrate!("./migrations").run(&state.db).await?;

    let hash = hash_password(SEED_PASSWORD)?;
    let user = User::upsert(&state.db, SEED_EMAIL, &hash).await?;

    tracing::info!(user_id = %user.id, email = %user.email, "user seeded");
    println!("Seeded login: {SEED_EMAIL} / {SEED_PASSWORD}");
    Ok(())
}
