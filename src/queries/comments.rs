use sqlx::Postgres;
use uuid::Uuid;

use crate::{
    DbConn,
    error::Result,
    models::comments::{Comment, NewComment, PostComment},
};

pub async fn create_comment(conn: &mut DbConn, new_comment: &NewComment) -> Result<Comment> {
    let comment = sqlx::query_as::<Postgres, Comment>(
        r#"
        INSERT INTO comments (post_id, owner_id, content)
        VALUES ($1, $2, $3)
        RETURNING id, content, post_id, owner_id, created_at, updated_at
        "#,
    )
    .bind(new_comment.post_id)
    .bind(new_comment.owner_id)
    .bind(&new_comment.content)
    .fetch_one(conn)
    .await?;

    Ok(comment)
}

/// Lists a post's comments in the order they were written.
pub async fn list_comments_by_post(conn: &mut DbConn, post_id: Uuid) -> Result<Vec<PostComment>> {
    let comments = sqlx::query_as::<Postgres, PostComment>(
        r#"
        SELECT c.id, c.content, c.post_id, c.owner_id, c.created_at, c.updated_at,
               u.username AS owner_username
        FROM comments c
        JOIN users u ON c.owner_id = u.id
        WHERE c.post_id = $1
        ORDER BY c.created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(conn)
    .await?;

    Ok(comments)
}
