use uuid::Uuid;

use crate::{
    Database,
    error::Result,
    models::comments::{Comment, NewComment, PostComment},
    queries::comments,
};

impl Database {
    /// Comments on a post with their authors' usernames, oldest first.
    pub async fn get_comments_by_post_id(&self, post_id: Uuid) -> Result<Vec<PostComment>> {
        let mut conn = self.acquire().await?;
        comments::list_comments_by_post(&mut conn, post_id).await
    }

    pub async fn create_comment(&self, new_comment: NewComment) -> Result<Comment> {
        let mut conn = self.acquire().await?;
        let comment = comments::create_comment(&mut conn, &new_comment).await?;

        tracing::debug!(comment_id = %comment.id, post_id = %comment.post_id, "Created comment");
        Ok(comment)
    }
}
