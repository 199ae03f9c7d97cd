//! Idempotent storage bootstrap.
//!
//! Runs before the server accepts connections: ensures the database and
//! schema exist and seeds baseline data. Safe to invoke on every process
//! start; any failure is fatal to startup so the server never serves
//! traffic against an uninitialized store.

use auth::PasswordHasher;
use sqlx::migrate::MigrateDatabase;
use sqlx::Connection;
use sqlx::PgConnection;
use sqlx::Postgres;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Database error during bootstrap: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Seed password hashing failed: {0}")]
    SeedHashing(#[from] auth::PasswordError),
}

struct SeedAccount {
    username: &'static str,
    email: &'static str,
    password: &'static str,
}

struct SeedPost {
    title: &'static str,
    content: &'static str,
    /// Seed author referenced by email, resolved to an id at insert time
    author_email: &'static str,
}

const SEED_ACCOUNTS: &[SeedAccount] = &[
    SeedAccount {
        username: "alice",
        email: "alice@example.com",
        password: "alice-password",
    },
    SeedAccount {
        username: "bob",
        email: "bob@example.com",
        password: "bob-password",
    },
];

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        title: "Welcome",
        content: "First post on a freshly bootstrapped instance.",
        author_email: "alice@example.com",
    },
    SeedPost {
        title: "Hello again",
        content: "Seeded content so the list endpoint has something to show.",
        author_email: "alice@example.com",
    },
    SeedPost {
        title: "Obligatory second author",
        content: "Bob was here.",
        author_email: "bob@example.com",
    },
];

/// Ensure the logical database exists, then ensure schema and seed data.
///
/// Uses its own short-lived connection, released on both success and
/// failure paths. Not safe to run concurrently from two processes against
/// the same uninitialized database.
pub async fn run(database_url: &str) -> Result<(), BootstrapError> {
    ensure_database(database_url).await?;

    let mut conn = PgConnection::connect(database_url).await?;
    let result = initialize(&mut conn).await;
    // Release the handle whether or not initialization succeeded
    let _ = conn.close().await;
    result
}

/// Create the logical database if it does not exist yet.
pub async fn ensure_database(database_url: &str) -> Result<(), BootstrapError> {
    if !Postgres::database_exists(database_url).await? {
        tracing::info!("Database does not exist, creating");
        Postgres::create_database(database_url).await?;
    }
    Ok(())
}

async fn initialize(conn: &mut PgConnection) -> Result<(), BootstrapError> {
    ensure_schema(conn).await?;
    seed_accounts(conn).await?;
    seed_posts(conn).await?;
    Ok(())
}

async fn ensure_schema(conn: &mut PgConnection) -> Result<(), BootstrapError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id BIGSERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author_id BIGINT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    tracing::info!("Schema ensured");
    Ok(())
}

/// Seed accounts only when the table is empty. Passwords go through the
/// credential hasher; plaintext never reaches storage.
async fn seed_accounts(conn: &mut PgConnection) -> Result<(), BootstrapError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(&mut *conn)
        .await?;

    if count > 0 {
        tracing::debug!(accounts = count, "Accounts present, skipping seed");
        return Ok(());
    }

    let hasher = PasswordHasher::new();
    for seed in SEED_ACCOUNTS {
        let password_hash = hasher.hash(seed.password)?;
        sqlx::query(
            r#"
            INSERT INTO accounts (username, email, password_hash)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(seed.username)
        .bind(seed.email)
        .bind(&password_hash)
        .execute(&mut *conn)
        .await?;
    }

    tracing::info!(accounts = SEED_ACCOUNTS.len(), "Seeded accounts");
    Ok(())
}

/// Seed posts only when the table is empty, independently of the account
/// gate: an empty posts table is re-seeded even against pre-existing
/// accounts. Authors are resolved by email so a partially cleaned store
/// can never produce a dangling reference; a missing author skips the
/// post with a warning.
async fn seed_posts(conn: &mut PgConnection) -> Result<(), BootstrapError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(&mut *conn)
        .await?;

    if count > 0 {
        tracing::debug!(posts = count, "Posts present, skipping seed");
        return Ok(());
    }

    let mut seeded = 0usize;
    for seed in SEED_POSTS {
        let author_id: Option<i64> = sqlx::query_scalar("SELECT id FROM accounts WHERE email = $1")
            .bind(seed.author_email)
            .fetch_optional(&mut *conn)
            .await?;

        let Some(author_id) = author_id else {
            tracing::warn!(
                author_email = seed.author_email,
                title = seed.title,
                "Seed author missing, skipping post"
            );
            continue;
        };

        sqlx::query(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(seed.title)
        .bind(seed.content)
        .bind(author_id)
        .execute(&mut *conn)
        .await?;
        seeded += 1;
    }

    tracing::info!(posts = seeded, "Seeded posts");
    Ok(())
}

/// Number of accounts inserted on a fresh store. Exposed for tests
/// asserting bootstrap idempotence.
pub fn seed_account_count() -> usize {
    SEED_ACCOUNTS.len()
}

/// Number of posts inserted on a fresh store with all seed authors present.
pub fn seed_post_count() -> usize {
    SEED_POSTS.len()
}
