mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_posts_is_public_and_newest_first() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_and_login("writer", "writer@example.com", "pass_word!")
        .await;
    app.post_authenticated("/posts", &token)
        .json(&json!({"title": "latest", "content": "most recent post"}))
        .send()
        .await
        .expect("Failed to create post");

    let response = app.get("/posts").send().await.expect("Failed to execute");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let posts = body["data"].as_array().expect("data is not an array");

    // Seeded posts plus the one just written, newest first
    assert_eq!(posts.len(), blog_service::bootstrap::seed_post_count() + 1);
    assert_eq!(posts[0]["title"], "latest");

    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = posts
        .iter()
        .map(|p| {
            p["created_at"]
                .as_str()
                .unwrap()
                .parse()
                .expect("created_at is not a timestamp")
        })
        .collect();
    assert!(timestamps.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_get_post_success_and_missing() {
    let app = TestApp::spawn().await;

    let (id, token) = app
        .register_and_login("writer", "writer@example.com", "pass_word!")
        .await;

    let response = app
        .post_authenticated("/posts", &token)
        .json(&json!({"title": "t", "content": "c"}))
        .send()
        .await
        .expect("Failed to create post");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.unwrap();
    let post_id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .get(&format!("/posts/{}", post_id))
        .send()
        .await
        .expect("Failed to execute");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["title"], "t");
    assert_eq!(body["data"]["content"], "c");
    assert_eq!(body["data"]["author_id"].as_i64().unwrap(), id);

    let response = app
        .get("/posts/999999")
        .send()
        .await
        .expect("Failed to execute");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_post_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/posts")
        .json(&json!({"title": "t", "content": "c"}))
        .send()
        .await
        .expect("Failed to execute");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_post_by_owner() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_and_login("writer", "writer@example.com", "pass_word!")
        .await;

    let response = app
        .post_authenticated("/posts", &token)
        .json(&json!({"title": "before", "content": "old"}))
        .send()
        .await
        .expect("Failed to create post");
    let body: serde_json::Value = response.json().await.unwrap();
    let post_id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .put_authenticated(&format!("/posts/{}", post_id), &token)
        .json(&json!({"title": "after", "content": "new"}))
        .send()
        .await
        .expect("Failed to update post");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = app
        .get(&format!("/posts/{}", post_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["title"], "after");
    assert_eq!(body["data"]["content"], "new");
}

#[tokio::test]
async fn test_update_post_by_non_owner_looks_like_missing() {
    let app = TestApp::spawn().await;

    let (_, owner_token) = app
        .register_and_login("owner", "owner@example.com", "pass_word!")
        .await;
    let (_, intruder_token) = app
        .register_and_login("intruder", "intruder@example.com", "pass_word!")
        .await;

    let response = app
        .post_authenticated("/posts", &owner_token)
        .json(&json!({"title": "mine", "content": "hands off"}))
        .send()
        .await
        .expect("Failed to create post");
    let body: serde_json::Value = response.json().await.unwrap();
    let post_id = body["data"]["id"].as_i64().unwrap();

    let not_owned = app
        .put_authenticated(&format!("/posts/{}", post_id), &intruder_token)
        .json(&json!({"title": "stolen", "content": "rewritten"}))
        .send()
        .await
        .expect("Failed to execute");
    let missing = app
        .put_authenticated("/posts/999999", &intruder_token)
        .json(&json!({"title": "x", "content": "y"}))
        .send()
        .await
        .expect("Failed to execute");

    // Ownership mismatch is indistinguishable from a missing post
    assert_eq!(not_owned.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    // And nothing changed
    let body: serde_json::Value = app
        .get(&format!("/posts/{}", post_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["title"], "mine");
}

#[tokio::test]
async fn test_update_post_unauthenticated() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .put(format!("{}/posts/1", app.address))
        .json(&json!({"title": "x", "content": "y"}))
        .send()
        .await
        .expect("Failed to execute");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_post_ownership() {
    let app = TestApp::spawn().await;

    let (_, owner_token) = app
        .register_and_login("owner", "owner@example.com", "pass_word!")
        .await;
    let (_, intruder_token) = app
        .register_and_login("intruder", "intruder@example.com", "pass_word!")
        .await;

    let response = app
        .post_authenticated("/posts", &owner_token)
        .json(&json!({"title": "ephemeral", "content": "soon gone"}))
        .send()
        .await
        .expect("Failed to create post");
    let body: serde_json::Value = response.json().await.unwrap();
    let post_id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .delete_authenticated(&format!("/posts/{}", post_id), &intruder_token)
        .send()
        .await
        .expect("Failed to execute");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .delete_authenticated(&format!("/posts/{}", post_id), &owner_token)
        .send()
        .await
        .expect("Failed to execute");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get(&format!("/posts/{}", post_id))
        .send()
        .await
        .expect("Failed to execute");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// The end-to-end scenario: register, login, profile, create, then a
// different account's update attempt bounces with 404.
#[tokio::test]
async fn test_full_scenario() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/accounts/register")
        .json(&json!({"username": "a_user", "email": "a@x.com", "password": "p1"}))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.unwrap();
    let account_id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .post("/accounts/login")
        .json(&json!({"email": "a@x.com", "password": "p1"}))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .get_authenticated("/accounts/profile", &token)
        .send()
        .await
        .expect("Failed to fetch profile");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["id"].as_i64().unwrap(), account_id);
    assert_eq!(body["data"]["username"], "a_user");
    assert_eq!(body["data"]["email"], "a@x.com");

    let response = app
        .post_authenticated("/posts", &token)
        .json(&json!({"title": "t", "content": "c"}))
        .send()
        .await
        .expect("Failed to create post");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.unwrap();
    let post_id = body["data"]["id"].as_i64().unwrap();

    let (_, other_token) = app
        .register_and_login("b_user", "b@x.com", "p2")
        .await;
    let response = app
        .put_authenticated(&format!("/posts/{}", post_id), &other_token)
        .json(&json!({"title": "t2", "content": "c2"}))
        .send()
        .await
        .expect("Failed to execute");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
