use sqlx::Postgres;

use crate::{DbConn, error::Result, models::stats::SystemStats};

pub async fn get_system_stats(conn: &mut DbConn) -> Result<SystemStats> {
    let stats = sqlx::query_as::<Postgres, SystemStats>(
        r#"
        SELECT total_users, active_users, total_posts, total_comments, total_reactions
        FROM get_system_stats()
        "#,
    )
    .fetch_one(conn)
    .await?;

    Ok(stats)
}
