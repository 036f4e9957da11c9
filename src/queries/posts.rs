use sqlx::Postgres;
use uuid::Uuid;

use crate::{
    DbConn,
    error::Result,
    models::posts::{NewPost, Post, ReactionType},
};

/// Inserts a post and returns its new ID. The full record lives in the view,
/// so callers re-read it with `get_post_by_id`.
pub async fn insert_post(conn: &mut DbConn, new_post: &NewPost) -> Result<Uuid> {
    let id = sqlx::query_scalar::<Postgres, Uuid>(
        r#"
        INSERT INTO posts (title, content, owner_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&new_post.title)
    .bind(&new_post.content)
    .bind(new_post.owner_id)
    .fetch_one(conn)
    .await?;

    Ok(id)
}

pub async fn get_post_by_id(conn: &mut DbConn, id: Uuid) -> Result<Option<Post>> {
    let post = sqlx::query_as::<Postgres, Post>(
        r#"
        SELECT id, title, content, owner_id, created_at, updated_at, reactions
        FROM posts_with_reactions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(post)
}

/// Lists all posts with their reactions, newest first.
pub async fn list_posts(conn: &mut DbConn) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<Postgres, Post>(
        r#"
        SELECT id, title, content, owner_id, created_at, updated_at, reactions
        FROM posts_with_reactions
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(posts)
}

pub async fn delete_post(conn: &mut DbConn, id: Uuid) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(conn)
    .await?
    .rows_affected();

    Ok(rows_affected)
}

pub async fn post_exists(conn: &mut DbConn, id: Uuid) -> Result<bool> {
    let exists = sqlx::query_scalar::<Postgres, bool>(
        "SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)",
    )
    .bind(id)
    .fetch_one(conn)
    .await?;

    Ok(exists)
}

/// Records `user_id`'s reaction to a post, replacing any earlier one.
/// Returns the reaction row's ID.
pub async fn upsert_reaction(
    conn: &mut DbConn,
    post_id: Uuid,
    user_id: Uuid,
    reaction_type: ReactionType,
) -> Result<Uuid> {
    let id = sqlx::query_scalar::<Postgres, Uuid>(
        "SELECT add_or_update_reaction($1, $2, $3::reaction_type)",
    )
    .bind(post_id)
    .bind(user_id)
    .bind(reaction_type)
    .fetch_one(conn)
    .await?;

    Ok(id)
}
