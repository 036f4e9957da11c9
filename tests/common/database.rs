use cynical_circle::{
    Config, Database,
    models::{
        posts::{NewPost, Post},
        users::{NewUser, User},
    },
};
use tokio::sync::OnceCell;

static SCHEMA: OnceCell<()> = OnceCell::const_new();

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");

/// Applies the test schema once per test binary.
async fn ensure_schema(db: &Database) {
    SCHEMA
        .get_or_init(|| async {
            sqlx::raw_sql(SCHEMA_SQL)
                .execute(db.pool())
                .await
                .expect("Failed to apply test schema");
        })
        .await;
}

/// Test database wrapper for better test isolation
pub struct TestDb {
    pub db: Database,
    test_prefix: String,
}

impl TestDb {
    /// Creates a new test database instance with isolated data namespace.
    ///
    /// # Arguments
    /// * `test_name` - The name of the test function (MUST match the test function name for consistency)
    ///
    /// Every user created through this instance gets an email starting with
    /// `"{test_name}."`. Rows left over from an earlier run are removed up front;
    /// posts, comments and reactions go with their owners through cascading deletes.
    pub async fn new(test_name: &str) -> Self {
        Self::with_max_connections(test_name, 4).await
    }

    #[allow(dead_code)] // Only the pool tests shrink the pool
    pub async fn with_max_connections(test_name: &str, max_connections: u32) -> Self {
        let mut config = Config::load().expect("Failed to load config");
        config.database.min_connections = 1;
        config.database.max_connections = max_connections;

        let db = Database::connect(&config.database)
            .await
            .expect("Failed to connect to database");
        ensure_schema(&db).await;

        let test_prefix = test_name.to_string();
        Self::cleanup_prefix(&db, &test_prefix).await;

        Self { db, test_prefix }
    }

    /// Get the test prefix for this test instance
    pub fn test_prefix(&self) -> &str {
        &self.test_prefix
    }

    async fn cleanup_prefix(db: &Database, prefix: &str) {
        sqlx::query("DELETE FROM users WHERE email LIKE $1")
            .bind(format!("{}.%", prefix))
            .execute(db.pool())
            .await
            .expect("Failed to cleanup test data");
    }

    /// Builds a user namespaced to this test with a unique username and email.
    pub fn new_user(&self) -> NewUser {
        let tag = nanoid::nanoid!(10);
        NewUser {
            username: format!("{}_{}", self.test_prefix, tag),
            email: format!("{}.{}@example.com", self.test_prefix, tag),
            password_hash: "test_hash_12345".to_string(),
            status: None,
        }
    }

    pub async fn create_user(&self) -> User {
        self.db
            .create_user(self.new_user())
            .await
            .expect("Failed to create test user")
    }

    #[allow(dead_code)]
    pub async fn create_post(&self, owner: &User, title: &str) -> Post {
        self.db
            .create_post(NewPost {
                title: title.to_string(),
                content: format!("{} body", title),
                owner_id: owner.id,
            })
            .await
            .expect("Failed to create test post")
    }

    /// Count users belonging to this test.
    #[allow(dead_code)]
    pub async fn count_test_users(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email LIKE $1")
            .bind(format!("{}.%", self.test_prefix))
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count test users")
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        // Best effort; the next run of the same test cleans up anything left behind
        let pool = self.db.pool().clone();
        let prefix = self.test_prefix.clone();
        tokio::spawn(async move {
            let _ = sqlx::query("DELETE FROM users WHERE email LIKE $1")
                .bind(format!("{}.%", prefix))
                .execute(&pool)
                .await;
        });
    }
}
