//! Integration tests for the forum post store.

use std::sync::Arc;
use swiss_forum::db::MemoryStore;
use swiss_forum::forum::{ForumError, ForumManager};

#[tokio::test]
async fn test_added_post_is_most_recent() {
    let forum = ForumManager::new(Arc::new(MemoryStore::new()));
    forum.add_post("an older thought").await.unwrap();
    let id = forum.add_post("hello").await.unwrap();

    let posts = forum.all_posts().await.unwrap();
    assert_eq!(posts[0].id, id);
    assert_eq!(posts[0].content, "hello");
    assert!(posts[0].time >= posts[1].time);
}

#[tokio::test]
async fn test_empty_forum_lists_nothing() {
    let forum = ForumManager::new(Arc::new(MemoryStore::new()));
    assert!(forum.all_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_large_content_is_stored_verbatim() {
    let forum = ForumManager::new(Arc::new(MemoryStore::new()));
    let content = "<script>alert('x')</script>\n".repeat(2_000);
    forum.add_post(&content).await.unwrap();

    assert_eq!(forum.all_posts().await.unwrap()[0].content, content);
}

#[tokio::test]
async fn test_forum_and_tournament_share_a_store() {
    let store = Arc::new(MemoryStore::new());
    let forum = ForumManager::new(store.clone());
    let tournament = swiss_forum::TournamentManager::new(store);

    tournament.register_player("Poster").await.unwrap();
    forum.add_post("gg").await.unwrap();

    assert_eq!(tournament.count_players().await.unwrap(), 1);
    assert_eq!(forum.all_posts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unavailable_store_is_not_an_empty_forum() {
    let store = Arc::new(MemoryStore::new());
    let forum = ForumManager::new(store.clone());
    store.set_offline(true);

    let err = forum.add_post("lost").await.unwrap_err();
    let ForumError::Store(inner) = &err;
    assert!(inner.is_unavailable());
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn test_pg_round_trip() {
    use swiss_forum::db::{Database, DatabaseConfig};

    let db = Database::new(&DatabaseConfig::from_env())
        .await
        .expect("Failed to connect to test database");
    db.migrate().await.expect("Failed to apply schema");
    let forum = ForumManager::with_pool(db.pool().clone());

    let id = forum.add_post("hello").await.unwrap();
    let posts = forum.all_posts().await.unwrap();
    assert_eq!(posts[0].id, id);
    assert_eq!(posts[0].content, "hello");
}
