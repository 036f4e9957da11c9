use sqlx::Postgres;
use uuid::Uuid;

use crate::{
    DbConn,
    error::Result,
    models::users::{NewUser, User, UserStatus},
};

/// Creates a new user in the database.
pub async fn create_user(conn: &mut DbConn, new_user: &NewUser) -> Result<User> {
    let user = sqlx::query_as::<Postgres, User>(
        r#"
        INSERT INTO users (username, email, password_hash, status)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, email, is_active, status, created_at, updated_at
        "#,
    )
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(new_user.status)
    .fetch_one(conn)
    .await?;

    Ok(user)
}

/// Gets a single user by their ID. The user may not exist.
pub async fn get_user_by_id(conn: &mut DbConn, id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<Postgres, User>(
        r#"
        SELECT id, username, email, is_active, status, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(user)
}

/// Gets a single user by their email address. The user may not exist.
pub async fn get_user_by_email(conn: &mut DbConn, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<Postgres, User>(
        r#"
        SELECT id, username, email, is_active, status, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(conn)
    .await?;

    Ok(user)
}

/// Lists all users, newest first.
pub async fn list_users(conn: &mut DbConn) -> Result<Vec<User>> {
    let users = sqlx::query_as::<Postgres, User>(
        r#"
        SELECT id, username, email, is_active, status, created_at, updated_at
        FROM users
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(users)
}

/// Sets (or clears, with `None`) a user's status. Returns `None` if the user does not exist.
pub async fn update_user_status(
    conn: &mut DbConn,
    id: Uuid,
    status: Option<UserStatus>,
) -> Result<Option<User>> {
    let user = sqlx::query_as::<Postgres, User>(
        r#"
        UPDATE users
        SET status = $2, updated_at = now()
        WHERE id = $1
        RETURNING id, username, email, is_active, status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(conn)
    .await?;

    Ok(user)
}

/// Deletes a user by their ID.
pub async fn delete_user(conn: &mut DbConn, id: Uuid) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(conn)
    .await?
    .rows_affected();

    Ok(rows_affected)
}

pub async fn user_exists(conn: &mut DbConn, id: Uuid) -> Result<bool> {
    let exists = sqlx::query_scalar::<Postgres, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)",
    )
    .bind(id)
    .fetch_one(conn)
    .await?;

    Ok(exists)
}
