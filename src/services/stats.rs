use crate::{Database, error::Result, models::stats::SystemStats, queries::stats};

impl Database {
    pub async fn get_system_stats(&self) -> Result<SystemStats> {
        let mut conn = self.acquire().await?;
        stats::get_system_stats(&mut conn).await
    }
}
