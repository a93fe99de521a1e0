use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_db=debug,reel_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = reel_db::create_pool(&database_url, 2)
        .await
        .context("Failed to connect to database")?;

    reel_db::run_migrations(&pool)
        .await
        .context("Failed to create schema")?;

    let summary = reel_db::seed::seed_demo_data(&pool)
        .await
        .context("Failed to seed database")?;

    tracing::info!(
        directors = summary.directors,
        movies = summary.movies,
        reviews = summary.reviews,
        "Database seeded successfully"
    );
    Ok(())
}
