use uuid::Uuid;

use crate::{
    Database,
    error::Result,
    models::users::{NewUser, User, UserStatus},
    queries::users,
};

impl Database {
    /// All users, newest first.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let mut conn = self.acquire().await?;
        users::list_users(&mut conn).await
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let mut conn = self.acquire().await?;
        users::get_user_by_id(&mut conn, user_id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = self.acquire().await?;
        users::get_user_by_email(&mut conn, email).await
    }

    /// Inserts a user. Duplicate usernames or emails surface as a unique violation
    /// (see [`Error::is_unique_violation`](crate::Error::is_unique_violation)).
    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let mut conn = self.acquire().await?;
        let user = users::create_user(&mut conn, &new_user).await?;

        tracing::debug!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    /// Replaces the user's status. `None` clears it; it is stored as NULL.
    pub async fn update_user_status(
        &self,
        user_id: Uuid,
        status: Option<UserStatus>,
    ) -> Result<Option<User>> {
        let mut conn = self.acquire().await?;
        users::update_user_status(&mut conn, user_id, status).await
    }

    /// Returns `true` only when exactly one row was removed.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<bool> {
        let mut conn = self.acquire().await?;
        let rows_affected = users::delete_user(&mut conn, user_id).await?;

        tracing::debug!(%user_id, rows_affected, "Deleted user");
        Ok(rows_affected == 1)
    }

    pub async fn user_exists(&self, user_id: Uuid) -> Result<bool> {
        let mut conn = self.acquire().await?;
        users::user_exists(&mut conn, user_id).await
    }
}
