use serde::{Deserialize, Serialize};

/// Row returned by the `get_system_stats()` routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SystemStats {
    pub total_users: i64,
    pub active_users: i64,
    pub total_posts: i64,
    pub total_comments: i64,
    pub total_reactions: i64,
}
