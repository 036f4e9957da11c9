use cynical_circle::{Database, load_config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    tracing::info!("Loaded configuration:\n{}", config);

    let db = Database::connect(&config.database).await?;

    let outcome = run(&db).await;
    db.close().await;

    outcome.map_err(Into::into)
}

async fn run(db: &Database) -> cynical_circle::Result<()> {
    db.ping().await?;

    let stats = db.get_system_stats().await?;
    tracing::info!(
        users = stats.total_users,
        active_users = stats.active_users,
        posts = stats.total_posts,
        comments = stats.total_comments,
        reactions = stats.total_reactions,
        "System stats"
    );

    let status = db.status();
    tracing::info!(size = status.size, idle = status.idle, max = status.max_connections, "Pool status");

    Ok(())
}
