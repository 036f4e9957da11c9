use uuid::Uuid;

use crate::{
    Database, DbConn,
    error::Result,
    models::posts::{NewPost, Post, ReactionType},
    queries::posts,
};

impl Database {
    /// All posts with their reactions, newest first.
    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        let mut conn = self.acquire().await?;
        posts::list_posts(&mut conn).await
    }

    pub async fn get_post_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        let mut conn = self.acquire().await?;
        posts::get_post_by_id(&mut conn, post_id).await
    }

    /// Inserts a post and reads it back through `posts_with_reactions`, so the
    /// result has the same shape as [`Database::get_post_by_id`].
    ///
    /// The two statements are not wrapped in a transaction. If the post is deleted
    /// in between, this fails with `sqlx::Error::RowNotFound`.
    pub async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        let mut conn = self.acquire().await?;
        let post_id = posts::insert_post(&mut conn, &new_post).await?;

        let post = reread_post(&mut conn, post_id).await?;
        tracing::debug!(%post_id, owner_id = %post.owner_id, "Created post");
        Ok(post)
    }

    /// Returns `true` only when exactly one row was removed.
    pub async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        let mut conn = self.acquire().await?;
        let rows_affected = posts::delete_post(&mut conn, post_id).await?;

        tracing::debug!(%post_id, rows_affected, "Deleted post");
        Ok(rows_affected == 1)
    }

    pub async fn post_exists(&self, post_id: Uuid) -> Result<bool> {
        let mut conn = self.acquire().await?;
        posts::post_exists(&mut conn, post_id).await
    }

    /// Sets `user_id`'s reaction on a post (one per user, replaced on repeat) and
    /// returns the post with refreshed reactions.
    pub async fn add_reaction(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        reaction_type: ReactionType,
    ) -> Result<Post> {
        let mut conn = self.acquire().await?;
        let reaction_id = posts::upsert_reaction(&mut conn, post_id, user_id, reaction_type).await?;

        tracing::debug!(%post_id, %user_id, %reaction_id, %reaction_type, "Recorded reaction");
        reread_post(&mut conn, post_id).await
    }
}

async fn reread_post(conn: &mut DbConn, post_id: Uuid) -> Result<Post> {
    match posts::get_post_by_id(conn, post_id).await? {
        Some(post) => Ok(post),
        None => {
            tracing::warn!(%post_id, "Post disappeared before it could be re-read");
            Err(sqlx::Error::RowNotFound.into())
        }
    }
}
