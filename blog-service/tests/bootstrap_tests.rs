mod common;

use blog_service::bootstrap;
use common::TestApp;
use common::TestDb;

async fn account_count(db: &TestDb) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(&db.pool)
        .await
        .expect("Failed to count accounts")
}

async fn post_count(db: &TestDb) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(&db.pool)
        .await
        .expect("Failed to count posts")
}

#[tokio::test]
async fn test_fresh_bootstrap_seeds_accounts_and_posts() {
    let db = TestDb::new().await;

    assert_eq!(
        account_count(&db).await,
        bootstrap::seed_account_count() as i64
    );
    assert_eq!(post_count(&db).await, bootstrap::seed_post_count() as i64);
}

#[tokio::test]
async fn test_bootstrap_is_idempotent() {
    let db = TestDb::new().await;

    db.rerun_bootstrap().await;
    db.rerun_bootstrap().await;

    assert_eq!(
        account_count(&db).await,
        bootstrap::seed_account_count() as i64
    );
    assert_eq!(post_count(&db).await, bootstrap::seed_post_count() as i64);
}

#[tokio::test]
async fn test_bootstrap_reseeds_only_the_emptied_table() {
    let db = TestDb::new().await;

    sqlx::query("DELETE FROM posts")
        .execute(&db.pool)
        .await
        .expect("Failed to clear posts");

    db.rerun_bootstrap().await;

    // Accounts were non-empty and stay untouched; posts come back
    assert_eq!(
        account_count(&db).await,
        bootstrap::seed_account_count() as i64
    );
    assert_eq!(post_count(&db).await, bootstrap::seed_post_count() as i64);
}

#[tokio::test]
async fn test_seed_passwords_are_hashed_and_verifiable() {
    let db = TestDb::new().await;

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM accounts WHERE email = $1")
        .bind("alice@example.com")
        .fetch_one(&db.pool)
        .await
        .expect("Seed account missing");

    assert_ne!(stored, "alice-password");
    assert!(auth::PasswordHasher::new().verify("alice-password", &stored));
}

#[tokio::test]
async fn test_deleting_account_cascades_to_posts() {
    let app = TestApp::spawn().await;

    let (id, token) = app
        .register_and_login("writer", "writer@example.com", "pass_word!")
        .await;
    app.post_authenticated("/posts", &token)
        .json(&serde_json::json!({"title": "t", "content": "c"}))
        .send()
        .await
        .expect("Failed to create post");

    let before = post_count(&app.db).await;

    // Cascade is enforced by the schema, not application logic
    sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(&app.db.pool)
        .await
        .expect("Failed to delete account");

    assert_eq!(post_count(&app.db).await, before - 1);
}
